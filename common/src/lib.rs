//! Decision engine for the lumicolor monitoring node.
//!
//! This crate contains the platform-agnostic logic shared between the desktop
//! simulator and the Pico 2 firmware:
//!
//! - [`sample`]: Raw sensor samples and channel normalization
//! - [`classify`]: Ranked-rule color classification
//! - [`alert`]: Alert condition and buzzer blink phase
//! - [`brightness`]: Light-scaled output color for the LED matrix
//! - [`engine`]: One sampling cycle, end to end
//! - [`navigation`]: Screen state machine with shared debounce
//! - [`render`]: Text lines for the active screen
//! - [`layout`] / [`draw`]: Placing those lines on the 128x64 OLED
//! - [`event_log`]: Small ring buffer of recent events
//! - [`config`] / [`thresholds`]: Compile-time tuning constants
//!
//! # no_std Compatibility
//!
//! The crate is `no_std` outside of tests and avoids any dependency on a
//! clock: every time-dependent operation takes `now_ms` from the caller.

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]

pub mod alert;
pub mod brightness;
pub mod classify;
pub mod config;
pub mod draw;
pub mod engine;
pub mod event_log;
pub mod layout;
pub mod navigation;
pub mod render;
pub mod sample;
pub mod thresholds;

// Re-export commonly used items
pub use alert::{AlertState, SystemState};
pub use brightness::OutputColor;
pub use classify::ColorLabel;
pub use engine::{Decision, evaluate_cycle};
pub use navigation::{ButtonEdge, Input, NavigationCell, Screen};
pub use sample::{NormalizedColor, RawSample};
