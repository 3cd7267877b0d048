//! PWM settings for the passive buzzer.
//!
//! The slice counts `BUZZER_PERIOD_COUNTS` ticks per tone period, so the
//! clock divider sets the pitch and the compare level sets the duty.

use crate::config::{BUZZER_ON_LEVEL, BUZZER_PERIOD_COUNTS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuzzerTiming {
    /// Integer clock divider (1..=255).
    pub divider: u8,
    /// Counter wrap value.
    pub top: u16,
    /// Compare level while sounding.
    pub on_level: u16,
}

impl BuzzerTiming {
    /// Divider and wrap for `tone_hz` from a `clk_sys_hz` system clock.
    pub const fn for_tone(
        clk_sys_hz: u32,
        tone_hz: u32,
    ) -> Self {
        let mut ticks_per_second = tone_hz.saturating_mul(BUZZER_PERIOD_COUNTS as u32);
        if ticks_per_second == 0 {
            ticks_per_second = 1;
        }
        let mut divider = clk_sys_hz / ticks_per_second;
        if divider < 1 {
            divider = 1;
        } else if divider > 255 {
            divider = 255;
        }

        Self {
            divider: divider as u8,
            top: BUZZER_PERIOD_COUNTS - 1,
            on_level: BUZZER_ON_LEVEL,
        }
    }

    /// Compare level for the buzzer state.
    #[inline]
    pub const fn level(
        &self,
        on: bool,
    ) -> u16 {
        if on { self.on_level } else { 0 }
    }

    /// Tone actually produced.
    pub const fn tone_hz(
        &self,
        clk_sys_hz: u32,
    ) -> u32 {
        clk_sys_hz / (self.divider as u32 * (self.top as u32 + 1))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
