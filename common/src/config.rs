//! Timing, geometry and sensor-range configuration.
//!
//! All values are compile-time constants. Every timing value is in
//! milliseconds of a monotonic clock (never wall-clock time).

// =============================================================================
// Sampling Loop
// =============================================================================

/// Interval between sampling cycles (~10 Hz).
pub const SAMPLE_PERIOD_MS: u64 = 100;

/// Settle delay after power-up before peripherals are brought up.
pub const STARTUP_DELAY_MS: u64 = 2000;

// =============================================================================
// Button Debounce
// =============================================================================

/// Minimum spacing between two accepted button edges.
/// Shared by all inputs: an edge on any button restarts the window.
pub const DEBOUNCE_MS: u32 = 250;

// =============================================================================
// Buzzer Blink Pattern
// =============================================================================

/// Length of one blink window while an alert is active.
pub const BLINK_PERIOD_MS: u32 = 2000;

/// Portion at the start of each window during which the buzzer sounds.
pub const BLINK_ON_MS: u32 = 200;

const _: () = assert!(BLINK_ON_MS < BLINK_PERIOD_MS);
const _: () = assert!(BLINK_PERIOD_MS > 0);

// =============================================================================
// Sensor Range
// =============================================================================

/// Raw color-sensor value treated as full scale.
/// Readings above this saturate instead of extending the range.
pub const RAW_CHANNEL_MAX: u16 = 255;

// =============================================================================
// Output Devices
// =============================================================================

/// OLED width in pixels (SSD1306).
pub const SCREEN_WIDTH: u32 = 128;

/// OLED height in pixels.
pub const SCREEN_HEIGHT: u32 = 64;

/// LED matrix side length (5x5 WS2812).
pub const MATRIX_SIDE: usize = 5;

/// Number of cells in the LED matrix.
pub const MATRIX_PIXELS: usize = MATRIX_SIDE * MATRIX_SIDE;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
#[allow(clippy::assertions_on_constants)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_rate_is_ten_hertz() {
        assert_eq!(1000 / SAMPLE_PERIOD_MS, 10);
    }

    #[test]
    fn test_debounce_shorter_than_blink_window() {
        assert!(DEBOUNCE_MS < BLINK_PERIOD_MS);
    }

    #[test]
    fn test_matrix_size() {
        assert_eq!(MATRIX_PIXELS, 25);
    }
}
