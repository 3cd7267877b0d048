//! Synthetic sensor scenes.
//!
//! Each [`Scene`] is a card held in front of the sensors (or a room
//! condition) for a while. Light and color wobble slowly around the scene's
//! centre values so the pipeline sees realistic, non-constant input. The
//! default track walks through every color label and both alert triggers.

use lumicolor_common::RawSample;

/// Relative lux swing around a scene's centre.
const LUX_RIPPLE: f32 = 0.1;

/// Absolute swing on each color channel, in raw units.
const CHANNEL_RIPPLE: f32 = 2.0;

/// One stretch of constant conditions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scene {
    pub name: &'static str,
    pub duration_ms: u32,
    /// Centre light level in lux.
    pub lux: f32,
    /// Centre raw red, green, blue.
    pub rgb: [f32; 3],
}

impl Scene {
    pub const fn new(
        name: &'static str,
        duration_ms: u32,
        lux: f32,
        rgb: [f32; 3],
    ) -> Self {
        Self {
            name,
            duration_ms,
            lux,
            rgb,
        }
    }
}

/// Every label plus a low-light and a red-card alert.
pub const DEFAULT_SCENES: [Scene; 10] = [
    Scene::new("cartao vermelho", 3000, 600.0, [210.0, 15.0, 12.0]),
    Scene::new("cartao verde", 3000, 450.0, [12.0, 190.0, 20.0]),
    Scene::new("cartao azul", 3000, 450.0, [20.0, 30.0, 200.0]),
    Scene::new("cartao amarelo", 3000, 500.0, [200.0, 180.0, 20.0]),
    Scene::new("cartao ciano", 3000, 500.0, [20.0, 180.0, 200.0]),
    Scene::new("cartao magenta", 3000, 500.0, [200.0, 20.0, 180.0]),
    Scene::new("cartao rosa", 3000, 500.0, [200.0, 60.0, 30.0]),
    Scene::new("cartao branco", 3000, 900.0, [240.0, 240.0, 240.0]),
    Scene::new("sala escura", 3000, 10.0, [4.0, 4.0, 4.0]),
    Scene::new("penumbra", 3000, 40.0, [120.0, 100.0, 90.0]),
];

/// Scenes played back to back, looping.
#[derive(Clone, Debug)]
pub struct SceneTrack {
    scenes: Vec<Scene>,
    total_ms: u32,
}

impl SceneTrack {
    /// Returns `None` if the track would have zero length.
    #[cfg(test)]
    pub(crate) fn new(scenes: Vec<Scene>) -> Option<Self> {
        let total_ms = scenes.iter().map(|scene| scene.duration_ms).sum();
        if total_ms == 0 {
            return None;
        }
        Some(Self { scenes, total_ms })
    }

    /// Scene playing at `now_ms`.
    pub fn scene_at(
        &self,
        now_ms: u32,
    ) -> &Scene {
        let mut offset = now_ms % self.total_ms;
        for scene in &self.scenes {
            if offset < scene.duration_ms {
                return scene;
            }
            offset -= scene.duration_ms;
        }
        // Unreachable while total_ms is the sum of durations
        &self.scenes[self.scenes.len() - 1]
    }

    /// What the sensors would report at `now_ms`.
    pub fn sample_at(
        &self,
        now_ms: u32,
    ) -> RawSample {
        let scene = self.scene_at(now_ms);
        let t = now_ms as f32 / 1000.0;

        let lux = fake_signal(t, scene.lux, scene.lux * LUX_RIPPLE, 0.8);
        let red = fake_signal(t, scene.rgb[0], CHANNEL_RIPPLE, 1.3);
        let green = fake_signal(t, scene.rgb[1], CHANNEL_RIPPLE, 1.7);
        let blue = fake_signal(t, scene.rgb[2], CHANNEL_RIPPLE, 2.1);

        let (red, green, blue) = (to_reading(red), to_reading(green), to_reading(blue));
        RawSample {
            light: to_reading(lux),
            red,
            green,
            blue,
            clear: red.saturating_add(green).saturating_add(blue),
        }
    }
}

impl Default for SceneTrack {
    fn default() -> Self {
        Self {
            scenes: DEFAULT_SCENES.to_vec(),
            total_ms: DEFAULT_SCENES.iter().map(|scene| scene.duration_ms).sum(),
        }
    }
}

/// `centre` plus a sine of the given amplitude and angular frequency.
fn fake_signal(
    t: f32,
    centre: f32,
    amplitude: f32,
    freq: f32,
) -> f32 {
    (t * freq).sin().mul_add(amplitude, centre)
}

fn to_reading(value: f32) -> u16 { value.round().clamp(0.0, f32::from(u16::MAX)) as u16 }

// =============================================================================
// Unit Tests
// =============================================================================
