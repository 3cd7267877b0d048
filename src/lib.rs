//! Desktop simulator for the lumicolor monitoring node.
//!
//! Runs the shared decision engine against synthetic sensor scenes and a
//! scripted button session, drawing the OLED into an off-screen
//! `SimulatorDisplay` so a run is fully deterministic and needs no window.
//!
//! - [`scenes`]: Synthetic light and color waveforms
//! - [`script`]: Timed button edges, including contact bounce
//! - [`simulation`]: One sampling cycle per step, as on the device
//! - [`ascii`]: Text dump of the monochrome display

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod ascii;
pub mod scenes;
pub mod script;
pub mod simulation;

pub use scenes::{Scene, SceneTrack};
pub use script::Script;
pub use simulation::{Frame, Simulation};
