//! Color classification by ranked rule table.
//!
//! Classification runs in three steps:
//!
//! 1. **Rank** the channels into max / mid / min. Ties go to the channel
//!    that comes first in R, G, B order.
//! 2. **Correct** the sample: the max channel is scaled by
//!    [`MAX_CHANNEL_GAIN`], the min channel by [`MIN_CHANNEL_GAIN`], and both
//!    are clamped back into 0-255.
//! 3. **Match** the corrected sample against [`RULES`] in order. The first
//!    rule that matches names the color; if none does the label is
//!    [`ColorLabel::Undefined`].
//!
//! # Rule Priority
//!
//! | # | Label   | Predicate (on corrected values) |
//! |---|---------|---------------------------------|
//! | 1 | Pink    | R > 1.5G, R > 1.5B, R > 20, (G > 40 or B > 40) |
//! | 2 | Red     | R > 1.8G, R > 1.8B, R > 20, G <= 40, B <= 40 |
//! | 3 | Green   | G > 1.8R, G > 1.8B, G > 20 |
//! | 4 | Blue    | B > 1.8R, B > 1.8G, B > 20 |
//! | 5 | Yellow  | R > 2B, G > 2B, \|R - G\| < 50, R > 20 |
//! | 6 | Cyan    | G > 2R, B > 2R, \|G - B\| < 50, G > 20 |
//! | 7 | Magenta | R > 2G, B > 2G, \|R - B\| < 50, R > 20 |
//! | 8 | White   | R, G, B > 200 |
//! | 9 | Dark    | R, G, B < 20 |
//!
//! Hue rules come before the neutral ones so that a saturated color is
//! never reported as White or Dark. Pink precedes Red because it is the
//! looser test on the same dominant channel.
//!
//! Ratio products are computed in `f64`, and corrected channels are
//! narrowed through `f32` before truncation. This keeps the boundaries
//! bit-for-bit where the tuning put them.

use crate::sample::NormalizedColor;
use crate::thresholds::{
    INTENSITY_HIGH,
    INTENSITY_LOW,
    MAX_CHANNEL_GAIN,
    MIN_CHANNEL_GAIN,
    PINK_RATIO,
    PINK_SECONDARY_MIN,
    PRIMARY_RATIO,
    SECONDARY_RATIO,
    SECONDARY_TIE_BAND,
};

// =============================================================================
// Labels
// =============================================================================

/// Discrete color names the classifier can produce.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ColorLabel {
    Red,
    Green,
    Blue,
    Yellow,
    Cyan,
    Magenta,
    Pink,
    White,
    Dark,
    #[default]
    Undefined,
}

impl ColorLabel {
    /// Name shown on the OLED (the device UI is in Portuguese).
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Red => "Vermelho",
            Self::Green => "Verde",
            Self::Blue => "Azul",
            Self::Yellow => "Amarelo",
            Self::Cyan => "Ciano",
            Self::Magenta => "Magenta",
            Self::Pink => "Rosa",
            Self::White => "Branco",
            Self::Dark => "Escuro",
            Self::Undefined => "Indefinido",
        }
    }
}

// =============================================================================
// Channel Ranking
// =============================================================================

/// One of the three color channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    Red,
    Green,
    Blue,
}

/// Channels ordered by intensity, strongest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Ranking {
    pub max: Channel,
    pub mid: Channel,
    pub min: Channel,
}

/// Rank the channels of `color`, breaking ties in R, G, B order.
pub fn rank(color: NormalizedColor) -> Ranking {
    let mut order = [(Channel::Red, color.r), (Channel::Green, color.g), (Channel::Blue, color.b)];

    // Stable insertion sort, descending: an entry only moves ahead of a
    // strictly weaker one, so equal channels keep R, G, B order.
    for i in 1..order.len() {
        let mut j = i;
        while j > 0 && order[j].1 > order[j - 1].1 {
            order.swap(j, j - 1);
            j -= 1;
        }
    }

    Ranking {
        max: order[0].0,
        mid: order[1].0,
        min: order[2].0,
    }
}

// =============================================================================
// Correction
// =============================================================================

/// Scale one channel and bring it back into 0-255 (truncating).
#[inline]
fn scale_channel(
    value: u8,
    gain: f64,
) -> u8 {
    let scaled = (f64::from(value) * gain) as f32;
    scaled.clamp(0.0, 255.0) as u8
}

/// Apply the asymmetric max/min correction to `color`.
pub fn correct(color: NormalizedColor) -> NormalizedColor {
    let ranking = rank(color);
    let mut corrected = color;
    set_channel(&mut corrected, ranking.max, scale_channel(get_channel(color, ranking.max), MAX_CHANNEL_GAIN));
    set_channel(&mut corrected, ranking.min, scale_channel(get_channel(color, ranking.min), MIN_CHANNEL_GAIN));
    corrected
}

#[inline]
const fn get_channel(
    color: NormalizedColor,
    channel: Channel,
) -> u8 {
    match channel {
        Channel::Red => color.r,
        Channel::Green => color.g,
        Channel::Blue => color.b,
    }
}

#[inline]
fn set_channel(
    color: &mut NormalizedColor,
    channel: Channel,
    value: u8,
) {
    match channel {
        Channel::Red => color.r = value,
        Channel::Green => color.g = value,
        Channel::Blue => color.b = value,
    }
}

// =============================================================================
// Rule Table
// =============================================================================

/// A named predicate over a corrected sample.
pub struct Rule {
    pub label: ColorLabel,
    pub matches: fn(NormalizedColor) -> bool,
}

/// `a > b * ratio`, evaluated in double precision.
#[inline]
fn exceeds(
    a: u8,
    b: u8,
    ratio: f64,
) -> bool {
    f64::from(a) > f64::from(b) * ratio
}

/// Paired channels of a secondary color are close enough together.
#[inline]
fn within_tie_band(
    a: u8,
    b: u8,
) -> bool {
    (i16::from(a) - i16::from(b)).abs() < SECONDARY_TIE_BAND
}

fn is_pink(c: NormalizedColor) -> bool {
    exceeds(c.r, c.g, PINK_RATIO)
        && exceeds(c.r, c.b, PINK_RATIO)
        && c.r > INTENSITY_LOW
        && (c.g > PINK_SECONDARY_MIN || c.b > PINK_SECONDARY_MIN)
}

fn is_red(c: NormalizedColor) -> bool {
    exceeds(c.r, c.g, PRIMARY_RATIO)
        && exceeds(c.r, c.b, PRIMARY_RATIO)
        && c.r > INTENSITY_LOW
        && c.g <= PINK_SECONDARY_MIN
        && c.b <= PINK_SECONDARY_MIN
}

fn is_green(c: NormalizedColor) -> bool { exceeds(c.g, c.r, PRIMARY_RATIO) && exceeds(c.g, c.b, PRIMARY_RATIO) && c.g > INTENSITY_LOW }

fn is_blue(c: NormalizedColor) -> bool { exceeds(c.b, c.r, PRIMARY_RATIO) && exceeds(c.b, c.g, PRIMARY_RATIO) && c.b > INTENSITY_LOW }

fn is_yellow(c: NormalizedColor) -> bool {
    exceeds(c.r, c.b, SECONDARY_RATIO) && exceeds(c.g, c.b, SECONDARY_RATIO) && within_tie_band(c.r, c.g) && c.r > INTENSITY_LOW
}

fn is_cyan(c: NormalizedColor) -> bool {
    exceeds(c.g, c.r, SECONDARY_RATIO) && exceeds(c.b, c.r, SECONDARY_RATIO) && within_tie_band(c.g, c.b) && c.g > INTENSITY_LOW
}

fn is_magenta(c: NormalizedColor) -> bool {
    exceeds(c.r, c.g, SECONDARY_RATIO) && exceeds(c.b, c.g, SECONDARY_RATIO) && within_tie_band(c.r, c.b) && c.r > INTENSITY_LOW
}

fn is_white(c: NormalizedColor) -> bool { c.r > INTENSITY_HIGH && c.g > INTENSITY_HIGH && c.b > INTENSITY_HIGH }

fn is_dark(c: NormalizedColor) -> bool { c.r < INTENSITY_LOW && c.g < INTENSITY_LOW && c.b < INTENSITY_LOW }

/// Classification rules in priority order. First match wins.
pub const RULES: [Rule; 9] = [
    Rule {
        label: ColorLabel::Pink,
        matches: is_pink,
    },
    Rule {
        label: ColorLabel::Red,
        matches: is_red,
    },
    Rule {
        label: ColorLabel::Green,
        matches: is_green,
    },
    Rule {
        label: ColorLabel::Blue,
        matches: is_blue,
    },
    Rule {
        label: ColorLabel::Yellow,
        matches: is_yellow,
    },
    Rule {
        label: ColorLabel::Cyan,
        matches: is_cyan,
    },
    Rule {
        label: ColorLabel::Magenta,
        matches: is_magenta,
    },
    Rule {
        label: ColorLabel::White,
        matches: is_white,
    },
    Rule {
        label: ColorLabel::Dark,
        matches: is_dark,
    },
];

/// Label an already-corrected sample.
pub fn match_rules(corrected: NormalizedColor) -> ColorLabel {
    RULES
        .iter()
        .find(|rule| (rule.matches)(corrected))
        .map_or(ColorLabel::Undefined, |rule| rule.label)
}

/// Classify a normalized color sample.
#[inline]
pub fn classify(color: NormalizedColor) -> ColorLabel { match_rules(correct(color)) }

// =============================================================================
// Unit Tests
// =============================================================================
