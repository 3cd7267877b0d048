//! Screen state machine with shared debounce.
//!
//! Button edges arrive as [`ButtonEdge`] events from whatever detects them
//! (GPIO tasks on the device, a script in the simulator). The
//! [`NavigationCell`] applies them: it debounces, then looks up the
//! transition for the current screen.
//!
//! # Transitions
//!
//! | From             | Input    | To       |
//! |------------------|----------|----------|
//! | `Menu`           | A        | `Status` |
//! | `Menu`           | B        | `Values` |
//! | `Status`/`Values`| Joystick | `Menu`   |
//!
//! Every other pair is ignored.
//!
//! # Debounce
//!
//! One window is shared by all inputs. An edge is accepted only if at least
//! [`DEBOUNCE_MS`] passed since the previous *accepted* edge, whichever
//! button that was. An accepted edge restarts the window even when it
//! causes no transition.

use core::sync::atomic::{AtomicU8, AtomicU32, Ordering};

use crate::config::DEBOUNCE_MS;

// =============================================================================
// Screens and Inputs
// =============================================================================

/// Display views.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Screen {
    /// Start screen listing the other two.
    #[default]
    Menu,
    /// Light level, color name and alert summary.
    Status,
    /// Normalized RGB values.
    Values,
}

impl Screen {
    /// Next screen for `input`, or `None` if this screen ignores it.
    #[inline]
    pub const fn transition(
        self,
        input: Input,
    ) -> Option<Self> {
        match (self, input) {
            (Self::Menu, Input::A) => Some(Self::Status),
            (Self::Menu, Input::B) => Some(Self::Values),
            (Self::Status | Self::Values, Input::Joystick) => Some(Self::Menu),
            _ => None,
        }
    }

    /// Header line for the console mirror of this screen.
    pub const fn console_banner(self) -> &'static str {
        match self {
            Self::Menu => "--- TELA MENU ---",
            Self::Status => "--- TELA STATUS ---",
            Self::Values => "--- TELA VALORES ---",
        }
    }

    /// Dashed line closing the console mirror, as long as the banner.
    pub const fn console_footer(self) -> &'static str {
        match self {
            Self::Menu => "-----------------",
            Self::Status => "-------------------",
            Self::Values => "--------------------",
        }
    }

    const fn to_u8(self) -> u8 {
        match self {
            Self::Menu => 0,
            Self::Status => 1,
            Self::Values => 2,
        }
    }

    const fn from_u8(value: u8) -> Self {
        match value {
            1 => Self::Status,
            2 => Self::Values,
            _ => Self::Menu,
        }
    }
}

/// Physical input lines.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Input {
    A,
    B,
    Joystick,
}

/// A falling edge on one input, stamped with monotonic milliseconds.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonEdge {
    pub input: Input,
    pub at_ms: u32,
}

impl ButtonEdge {
    #[inline]
    pub const fn new(
        input: Input,
        at_ms: u32,
    ) -> Self {
        Self { input, at_ms }
    }
}

/// What happened to an edge.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EdgeOutcome {
    /// Inside the debounce window; dropped.
    Bounced,
    /// Accepted, but the current screen has no transition for it.
    Ignored,
    /// Accepted and moved to this screen.
    Moved(Screen),
}

/// Has the debounce window since `last_accepted_ms` closed at `now_ms`?
///
/// Wrapping subtraction keeps this correct across the 49-day rollover of a
/// 32-bit millisecond clock.
#[inline]
pub const fn debounce_elapsed(
    last_accepted_ms: u32,
    now_ms: u32,
) -> bool {
    now_ms.wrapping_sub(last_accepted_ms) >= DEBOUNCE_MS
}

// =============================================================================
// Shared Cell
// =============================================================================

/// The screen and debounce timestamp shared between the edge consumer and
/// the sampling loop.
///
/// This is the only state shared across execution contexts. Each field is a
/// single word, read and written atomically; they are never updated
/// together, so no wider critical section is needed. A reader may see a
/// screen one edge stale, which costs at most one frame.
///
/// There must be one writer ([`on_edge`](Self::on_edge)); any number of
/// contexts may call [`screen`](Self::screen).
pub struct NavigationCell {
    screen: AtomicU8,
    last_edge_ms: AtomicU32,
}

impl NavigationCell {
    /// Starts on [`Screen::Menu`] with the debounce clock at zero, so edges
    /// in the first [`DEBOUNCE_MS`] after boot are dropped.
    pub const fn new() -> Self {
        Self {
            screen: AtomicU8::new(Screen::Menu.to_u8()),
            last_edge_ms: AtomicU32::new(0),
        }
    }

    /// Current screen.
    #[inline]
    pub fn screen(&self) -> Screen { Screen::from_u8(self.screen.load(Ordering::Relaxed)) }

    /// Timestamp of the last accepted edge.
    #[inline]
    pub fn last_edge_ms(&self) -> u32 { self.last_edge_ms.load(Ordering::Relaxed) }

    /// Debounce and apply one edge.
    pub fn on_edge(
        &self,
        edge: ButtonEdge,
    ) -> EdgeOutcome {
        if !debounce_elapsed(self.last_edge_ms(), edge.at_ms) {
            return EdgeOutcome::Bounced;
        }
        self.last_edge_ms.store(edge.at_ms, Ordering::Relaxed);

        match self.screen().transition(edge.input) {
            Some(next) => {
                self.screen.store(next.to_u8(), Ordering::Relaxed);
                EdgeOutcome::Moved(next)
            }
            None => EdgeOutcome::Ignored,
        }
    }
}

impl Default for NavigationCell {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================
