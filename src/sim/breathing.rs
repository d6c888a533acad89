//! Noise-driven breathing scale
//!
//! Each wheel samples one smooth 1D noise curve, offset by its own phase and
//! advanced at the speed of its breathing group.

use noise::{NoiseFn, Perlin};
use serde::{Deserialize, Serialize};

use crate::settings::Settings;

/// Selects a (speed, amplitude) pair from the breathing tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BreathingGroup {
    #[default]
    Slow,
    Medium,
    Fast,
}

impl BreathingGroup {
    /// Group for a table index; out-of-range indices wrap
    pub fn from_index(index: usize) -> Self {
        match index % 3 {
            0 => BreathingGroup::Slow,
            1 => BreathingGroup::Medium,
            _ => BreathingGroup::Fast,
        }
    }

    pub fn index(self) -> usize {
        match self {
            BreathingGroup::Slow => 0,
            BreathingGroup::Medium => 1,
            BreathingGroup::Fast => 2,
        }
    }

    /// Noise advance per frame
    pub fn speed(self, settings: &Settings) -> f64 {
        settings.breath_speeds[self.index()]
    }

    /// Scale swing
    pub fn amplitude(self, settings: &Settings) -> f32 {
        settings.breath_amplitudes[self.index()]
    }
}

/// Smooth band-limited noise in [0, 1], continuous in its input
pub trait NoiseSource {
    fn sample(&self, t: f64) -> f64;
}

/// Second coordinate of the 2D Perlin slice. Off the integer lattice, where
/// Perlin noise collapses to zero.
const NOISE_ROW: f64 = 0.37;

/// Perlin noise remapped from [-1, 1] to [0, 1]
#[derive(Debug, Clone)]
pub struct PerlinNoise {
    perlin: Perlin,
}

impl PerlinNoise {
    pub fn new(seed: u32) -> Self {
        Self {
            perlin: Perlin::new(seed),
        }
    }
}

impl Default for PerlinNoise {
    fn default() -> Self {
        Self::new(0)
    }
}

impl NoiseSource for PerlinNoise {
    fn sample(&self, t: f64) -> f64 {
        let n = self.perlin.get([t, NOISE_ROW]);
        (n * 0.5 + 0.5).clamp(0.0, 1.0)
    }
}

/// Scale multiplier for a wheel at the given frame
///
/// `base + noise(frame * speed + offset) * amplitude`
pub fn breathing_scale<N: NoiseSource + ?Sized>(
    frame_count: u64,
    noise_offset: f64,
    group: BreathingGroup,
    noise: &N,
    settings: &Settings,
) -> f32 {
    let t = frame_count as f64 * group.speed(settings) + noise_offset;
    let n = noise.sample(t) as f32;
    settings.breath_base + n * group.amplitude(settings)
}
