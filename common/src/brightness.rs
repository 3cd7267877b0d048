//! Light-scaled output color for the LED matrix.
//!
//! The matrix mirrors the sampled color, dimmed in proportion to ambient
//! light: full brightness from [`FULL_BRIGHTNESS_LUX`] up, fully dark below
//! [`DARK_CUTOFF_LUX`]. Every cell receives the same color.

use crate::sample::NormalizedColor;
use crate::thresholds::{DARK_CUTOFF_LUX, FULL_BRIGHTNESS_LUX};

/// Color written uniformly to every matrix cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OutputColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl OutputColor {
    pub const OFF: Self = Self { r: 0, g: 0, b: 0 };

    #[inline]
    pub const fn new(
        r: u8,
        g: u8,
        b: u8,
    ) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub const fn is_off(&self) -> bool { self.r == 0 && self.g == 0 && self.b == 0 }
}

/// Brightness factor in `[0.0, 1.0]` for a light level.
pub fn brightness_factor(lux: u16) -> f32 {
    if lux < DARK_CUTOFF_LUX {
        return 0.0;
    }
    (f32::from(lux) / FULL_BRIGHTNESS_LUX).clamp(0.0, 1.0)
}

/// Scale `color` by the brightness for `lux`, truncating each channel.
pub fn map(
    lux: u16,
    color: NormalizedColor,
) -> OutputColor {
    let factor = brightness_factor(lux);
    let scale = |channel: u8| (f32::from(channel) * factor) as u8;
    OutputColor::new(scale(color.r), scale(color.g), scale(color.b))
}

// =============================================================================
// Unit Tests
// =============================================================================
