//! Centralized decision thresholds.
//!
//! The classifier values were tuned empirically against the GY-33 color
//! sensor, so they must be reproduced exactly. Grouped constants carry
//! `const` assertions that fail compilation if their ordering is broken.
//!
//! # Usage
//!
//! ```ignore
//! use lumicolor_common::thresholds::{LOW_LIGHT_LUX, RED_ALERT_INTENSITY};
//! ```

// =============================================================================
// Classifier: Intensity Levels
// =============================================================================

/// Minimum dominant-channel intensity for a hue to count, and the ceiling
/// below which all three channels make a sample `Dark`.
pub const INTENSITY_LOW: u8 = 20;

/// Secondary-channel level separating `Pink` (above) from `Red` (at or below).
pub const PINK_SECONDARY_MIN: u8 = 40;

/// Level all three channels must exceed for `White`.
pub const INTENSITY_HIGH: u8 = 200;

const _: () = assert!(INTENSITY_LOW < PINK_SECONDARY_MIN);
const _: () = assert!(PINK_SECONDARY_MIN < INTENSITY_HIGH);

// =============================================================================
// Classifier: Correction Factors
// =============================================================================

/// Gain applied to the strongest channel before rule evaluation.
pub const MAX_CHANNEL_GAIN: f64 = 1.1;

/// Gain applied to the weakest channel before rule evaluation.
pub const MIN_CHANNEL_GAIN: f64 = 0.9;

// =============================================================================
// Classifier: Ratio Multipliers
// =============================================================================

/// Dominance ratio for `Pink` (looser than `Red`).
pub const PINK_RATIO: f64 = 1.5;

/// Dominance ratio for the primaries `Red`, `Green`, `Blue`.
pub const PRIMARY_RATIO: f64 = 1.8;

/// Ratio both paired channels must hold over the third for the
/// secondaries `Yellow`, `Cyan`, `Magenta`.
pub const SECONDARY_RATIO: f64 = 2.0;

/// Maximum difference between the two paired channels of a secondary.
pub const SECONDARY_TIE_BAND: i16 = 50;

const _: () = assert!(PINK_RATIO < PRIMARY_RATIO);
const _: () = assert!(PRIMARY_RATIO < SECONDARY_RATIO);

// =============================================================================
// Alert Evaluation
// =============================================================================

/// Light level below which the alert fires regardless of color.
pub const LOW_LIGHT_LUX: u16 = 25;

/// Normalized red intensity above which a `Red` sample fires the alert.
pub const RED_ALERT_INTENSITY: u8 = 100;

/// Light level below which an active alert is reported as "Luz Baixa".
pub const STATUS_LOW_LIGHT_LUX: u16 = 50;

const _: () = assert!(LOW_LIGHT_LUX < STATUS_LOW_LIGHT_LUX);

// =============================================================================
// Matrix Brightness
// =============================================================================

/// Light level at (and above) which the matrix runs at full brightness.
pub const FULL_BRIGHTNESS_LUX: f32 = 1000.0;

/// Light level below which the matrix is forced dark.
pub const DARK_CUTOFF_LUX: u16 = 5;

const _: () = assert!((DARK_CUTOFF_LUX as f32) < FULL_BRIGHTNESS_LUX);

// =============================================================================
// Unit Tests
// =============================================================================
