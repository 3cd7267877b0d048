//! Raw sensor samples and channel normalization.
//!
//! A [`RawSample`] is captured once per cycle from the light and color
//! sensors and never modified afterwards. [`NormalizedColor`] is derived
//! from its red, green and blue channels; the clear channel is carried
//! along but nothing downstream reads it.

use crate::config::RAW_CHANNEL_MAX;

/// One capture from both sensors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawSample {
    /// Ambient light in lux.
    pub light: u16,
    /// Red channel, raw sensor units.
    pub red: u16,
    /// Green channel, raw sensor units.
    pub green: u16,
    /// Blue channel, raw sensor units.
    pub blue: u16,
    /// Unfiltered (clear) channel, raw sensor units.
    pub clear: u16,
}

impl RawSample {
    /// A zeroed sample, substituted when the sensors cannot be read.
    pub const ZERO: Self = Self {
        light: 0,
        red: 0,
        green: 0,
        blue: 0,
        clear: 0,
    };

    /// Normalize the red, green and blue channels.
    #[inline]
    pub fn normalized(&self) -> NormalizedColor { NormalizedColor::new(normalize(self.red), normalize(self.green), normalize(self.blue)) }
}

/// Color intensity on the canonical 0-255 scale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NormalizedColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl NormalizedColor {
    #[inline]
    pub const fn new(
        r: u8,
        g: u8,
        b: u8,
    ) -> Self {
        Self { r, g, b }
    }
}

/// Scale a raw channel reading onto 0-255.
///
/// The sensor's effective range is already 0..=[`RAW_CHANNEL_MAX`], so this
/// is the identity inside that range. Anything above saturates at 255.
#[inline]
pub fn normalize(raw: u16) -> u8 {
    let scaled = u32::from(raw) * 255 / u32::from(RAW_CHANNEL_MAX);
    scaled.min(255) as u8
}

// =============================================================================
// Unit Tests
// =============================================================================
