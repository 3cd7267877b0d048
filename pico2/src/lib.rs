//! Lumicolor firmware library - host-testable parts of the Pico 2 node.
//!
//! The decision engine lives in `lumicolor-common`. This crate adds what sits
//! between it and the board: sensor register protocols, the OLED wrapper,
//! buzzer PWM maths, the LED matrix frame and the demo waveform.
//! The binary (`main.rs`) wires these to embassy peripherals and tasks.
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test -p lumicolor-pico2 --lib --target x86_64-unknown-linux-gnu  # Linux/macOS
//! cargo test -p lumicolor-pico2 --lib --target x86_64-pc-windows-msvc    # Windows
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the standard
//! test framework while the actual firmware runs as `no_std`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]

pub mod config;
pub mod demo;
pub mod display;
pub mod drivers;
pub mod error;
pub mod sensors;

#[cfg(test)]
mod testing;

pub use error::{DisplayError, Error, SensorError};
pub use sensors::{Readout, Sensors};
