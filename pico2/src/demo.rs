//! Synthetic sensor waveform for running without sensors attached.
//!
//! Light swings from near darkness to a bright room, and the three color
//! channels rotate around the hue circle at a different rate, so the node
//! walks through most labels and both alert conditions on its own.

use lumicolor_common::RawSample;
use micromath::F32;

/// Sample at `elapsed_ms` since boot.
pub fn sample_at(elapsed_ms: u32) -> RawSample {
    let t = elapsed_ms as f32 / 1000.0;

    let light = wave(t, 400.0, 390.0, 0.15, 0.0);
    let red = wave(t, 130.0, 125.0, 0.4, 0.0);
    let green = wave(t, 130.0, 125.0, 0.4, 2.1);
    let blue = wave(t, 130.0, 125.0, 0.4, 4.2);

    let (red, green, blue) = (to_reading(red), to_reading(green), to_reading(blue));
    RawSample {
        light: to_reading(light),
        red,
        green,
        blue,
        clear: red.saturating_add(green).saturating_add(blue),
    }
}

fn wave(
    t: f32,
    centre: f32,
    amplitude: f32,
    freq: f32,
    phase: f32,
) -> f32 {
    centre + amplitude * F32(t * freq + phase).sin().0
}

fn to_reading(value: f32) -> u16 { (value.max(0.0) + 0.5) as u16 }

// =============================================================================
// Unit Tests
// =============================================================================
