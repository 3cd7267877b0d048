//! Alert condition and buzzer blink phase.
//!
//! The alert fires when the room is too dark or when a strong red is in
//! front of the color sensor. While active, the buzzer sounds for the first
//! [`BLINK_ON_MS`] of every [`BLINK_PERIOD_MS`] window.
//!
//! The blink phase is a pure function of the clock. Nothing remembers when
//! the alert started, so the pattern is always aligned to
//! `now_ms % BLINK_PERIOD_MS` rather than to the moment of activation.

use crate::classify::ColorLabel;
use crate::config::{BLINK_ON_MS, BLINK_PERIOD_MS};
use crate::thresholds::{LOW_LIGHT_LUX, RED_ALERT_INTENSITY, STATUS_LOW_LIGHT_LUX};

/// Alert flag plus the buzzer's on/off sub-state for this cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AlertState {
    pub active: bool,
    /// `true` while the buzzer should sound. Never set when inactive.
    pub blink_phase: bool,
}

impl AlertState {
    /// Evaluate the alert for one cycle.
    ///
    /// `r` is the normalized red intensity, before any classifier correction.
    pub fn evaluate(
        lux: u16,
        label: ColorLabel,
        r: u8,
        now_ms: u32,
    ) -> Self {
        let active = lux < LOW_LIGHT_LUX || (label == ColorLabel::Red && r > RED_ALERT_INTENSITY);
        Self {
            active,
            blink_phase: active && blink_window_open(now_ms),
        }
    }

    /// Tertiary state reported on the status screen.
    pub const fn system_state(
        &self,
        lux: u16,
    ) -> SystemState {
        if self.active && lux < STATUS_LOW_LIGHT_LUX {
            SystemState::LowLight
        } else if self.active {
            SystemState::ColorAlert
        } else {
            SystemState::Normal
        }
    }
}

/// Is `now_ms` inside the sounding part of its blink window?
#[inline]
pub const fn blink_window_open(now_ms: u32) -> bool { now_ms % BLINK_PERIOD_MS < BLINK_ON_MS }

/// Summary of the alert shown on the status screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SystemState {
    /// Alert active and the room is dim.
    LowLight,
    /// Alert active with enough light: the red trigger fired.
    ColorAlert,
    Normal,
}

impl SystemState {
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::LowLight => "Luz Baixa",
            Self::ColorAlert => "Alerta Cor",
            Self::Normal => "Normal",
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_low_light_triggers_alone() {
        let state = AlertState::evaluate(10, ColorLabel::Green, 0, 0);
        assert!(state.active);
    }

    #[test]
    fn test_strong_red_triggers_alone() {
        let state = AlertState::evaluate(200, ColorLabel::Red, 150, 500);
        assert!(state.active);
    }

    #[test]
    fn test_no_trigger() {
        let state = AlertState::evaluate(200, ColorLabel::Green, 150, 0);
        assert!(!state.active);
        assert!(!state.blink_phase);
    }

    #[test]
    fn test_weak_red_does_not_trigger() {
        assert!(!AlertState::evaluate(200, ColorLabel::Red, 100, 0).active);
        assert!(AlertState::evaluate(200, ColorLabel::Red, 101, 0).active);
    }

    #[test]
    fn test_light_boundary() {
        assert!(AlertState::evaluate(24, ColorLabel::Undefined, 0, 0).active);
        assert!(!AlertState::evaluate(25, ColorLabel::Undefined, 0, 0).active);
    }

    #[test]
    fn test_blink_phase() {
        assert!(!AlertState::evaluate(0, ColorLabel::Dark, 0, 1999).blink_phase);
        assert!(AlertState::evaluate(0, ColorLabel::Dark, 0, 2050).blink_phase);
        assert!(AlertState::evaluate(0, ColorLabel::Dark, 0, 0).blink_phase);
        assert!(AlertState::evaluate(0, ColorLabel::Dark, 0, 199).blink_phase);
        assert!(!AlertState::evaluate(0, ColorLabel::Dark, 0, 200).blink_phase);
    }

    #[test]
    fn test_inactive_never_blinks() {
        assert!(!AlertState::evaluate(500, ColorLabel::White, 255, 2050).blink_phase);
    }

    #[test]
    fn test_system_state() {
        let dim = AlertState::evaluate(10, ColorLabel::Dark, 0, 0);
        assert_eq!(dim.system_state(10), SystemState::LowLight);

        let red = AlertState::evaluate(300, ColorLabel::Red, 200, 0);
        assert_eq!(red.system_state(300), SystemState::ColorAlert);

        // Red alert in a dim (but not dark) room still reads as low light
        let red_dim = AlertState::evaluate(40, ColorLabel::Red, 200, 0);
        assert_eq!(red_dim.system_state(40), SystemState::LowLight);

        let quiet = AlertState::evaluate(40, ColorLabel::Green, 0, 0);
        assert_eq!(quiet.system_state(40), SystemState::Normal);
    }

    #[test]
    fn test_system_state_names() {
        assert_eq!(SystemState::LowLight.display_name(), "Luz Baixa");
        assert_eq!(SystemState::ColorAlert.display_name(), "Alerta Cor");
        assert_eq!(SystemState::Normal.display_name(), "Normal");
    }

    proptest! {
        #[test]
        fn prop_blink_is_periodic(now in 0u32..u32::MAX - BLINK_PERIOD_MS) {
            prop_assert_eq!(blink_window_open(now), blink_window_open(now + BLINK_PERIOD_MS));
        }

        #[test]
        fn prop_blink_implies_active(lux: u16, r: u8, now: u32) {
            let state = AlertState::evaluate(lux, ColorLabel::Red, r, now);
            prop_assert!(!state.blink_phase || state.active);
        }
    }
}
