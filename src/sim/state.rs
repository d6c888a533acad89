//! Sketch state and core simulation types
//!
//! The whole wheel collection is owned by [`SketchState`] and rebuilt in one
//! batch; individual wheels are never added or removed.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::breathing::{BreathingGroup, NoiseSource};
use super::layout::generate_layout;
use super::reveal::RevealFrame;
use crate::consts::*;
use crate::palette::{Color, Palette};
use crate::settings::Settings;

/// Rotation sense for spin and reveal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// +1
    Forward,
    /// -1
    Backward,
}

impl Direction {
    pub fn sign(self) -> f32 {
        match self {
            Direction::Forward => 1.0,
            Direction::Backward => -1.0,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

/// A point floating inside a wheel, relative to the wheel center
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub color: Color,
}

/// One decorated, animated disc
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wheel {
    /// Canvas position of the center
    pub position: Vec2,
    /// Diameter
    pub size: f32,
    pub palette: Palette,
    /// Current rotation (degrees)
    pub spin_angle: f32,
    spin_direction: Direction,
    reveal_direction: Direction,
    /// Reveal progress in [0, 1)
    pub reveal_phase: f32,
    /// Desynchronizes breathing noise across wheels
    pub noise_offset: f64,
    pub breathing_group: BreathingGroup,
    pub particles: Vec<Particle>,
    /// Radius the particles bounce within
    pub max_particle_radius: f32,
    /// Seed for decoration choices, reapplied every frame
    pub decor_seed: u64,
}

impl Wheel {
    /// Create a wheel with no particles and zeroed animation state.
    /// The reveal direction is always opposite to the spin direction.
    pub fn new(position: Vec2, size: f32, palette: Palette, spin_direction: Direction) -> Self {
        Self {
            position,
            size,
            palette,
            spin_angle: 0.0,
            spin_direction,
            reveal_direction: spin_direction.opposite(),
            reveal_phase: 0.0,
            noise_offset: 0.0,
            breathing_group: BreathingGroup::Slow,
            particles: Vec::new(),
            max_particle_radius: size * PARTICLE_RADIUS_FACTOR,
            decor_seed: 0,
        }
    }

    pub fn spin_direction(&self) -> Direction {
        self.spin_direction
    }

    pub fn reveal_direction(&self) -> Direction {
        self.reveal_direction
    }

    /// Reveal state for the current frame
    pub fn reveal(&self) -> RevealFrame {
        RevealFrame::new(self.reveal_phase, self.reveal_direction)
    }

    /// Scale multiplier for the given frame
    pub fn breathing_scale<N: NoiseSource + ?Sized>(
        &self,
        frame_count: u64,
        noise: &N,
        settings: &Settings,
    ) -> f32 {
        super::breathing::breathing_scale(
            frame_count,
            self.noise_offset,
            self.breathing_group,
            noise,
            settings,
        )
    }
}

/// Complete sketch state, owned by the frame driver
#[derive(Debug, Clone)]
pub struct SketchState {
    pub settings: Settings,
    /// Seed the RNG was created with (logged, not persisted)
    pub seed: u64,
    /// Frames stepped since start (not reset on rebuild)
    pub frame_count: u64,
    pub width: f32,
    pub height: f32,
    pub wheels: Vec<Wheel>,
    rng: Pcg32,
}

impl SketchState {
    /// Create a state and build the initial layout
    pub fn new(settings: Settings, seed: u64, width: f32, height: f32) -> Self {
        let mut state = Self {
            settings: settings.validated(),
            seed,
            frame_count: 0,
            width,
            height,
            wheels: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        };
        state.rebuild();
        state
    }

    /// Discard every wheel and generate a new layout
    pub fn rebuild(&mut self) {
        self.wheels = generate_layout(&self.settings, self.width, self.height, &mut self.rng);
        log::info!(
            "Layout rebuilt: {}/{} wheels on {}x{} canvas",
            self.wheels.len(),
            self.settings.circle_count,
            self.width,
            self.height
        );
    }

    /// Adopt a new canvas size and rebuild
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.rebuild();
    }

    /// Total floating particles across all wheels
    pub fn particle_count(&self) -> usize {
        self.wheels.iter().map(|w| w.particles.len()).sum()
    }
}
