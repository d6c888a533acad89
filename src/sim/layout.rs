//! Wheel layout generation
//!
//! Rejection sampling with a bounded retry budget: each candidate wheel gets
//! a random size, then positions are redrawn until it clears every wheel
//! already placed. Candidates that never fit are dropped.

use glam::Vec2;
use rand::Rng;
use rand::seq::IndexedRandom;

use super::breathing::BreathingGroup;
use super::state::{Direction, Particle, Wheel};
use crate::consts::*;
use crate::palette::{PALETTES, Palette};
use crate::polar_to_cartesian;
use crate::settings::Settings;

/// Uniform sample in [lo, hi); tolerates lo >= hi
#[inline]
pub(crate) fn uniform<R: Rng + ?Sized>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    lo + (hi - lo) * rng.random::<f32>()
}

/// A placed disc, kept only while the layout is being built
#[derive(Debug, Clone, Copy)]
struct Placed {
    center: Vec2,
    size: f32,
}

/// Whether a candidate keeps its distance from every placed disc
fn clears_all(center: Vec2, size: f32, placed: &[Placed], overlap_factor: f32) -> bool {
    placed.iter().all(|p| {
        let min_dist = (size * 0.5 + p.size * 0.5) * overlap_factor;
        center.distance(p.center) >= min_dist
    })
}

/// Try to find a position for a wheel of the given size
fn find_position<R: Rng + ?Sized>(
    settings: &Settings,
    size: f32,
    width: f32,
    height: f32,
    placed: &[Placed],
    rng: &mut R,
) -> Option<Vec2> {
    let margin = size * settings.edge_margin_factor;

    for _ in 0..settings.max_placement_tries {
        let candidate = Vec2::new(
            uniform(rng, margin, width - margin),
            uniform(rng, margin, height - margin),
        );
        if clears_all(candidate, size, placed, settings.overlap_factor) {
            return Some(candidate);
        }
    }

    None
}

/// Spawn floating particles spread over the wheel interior
pub fn spawn_particles<R: Rng + ?Sized>(
    settings: &Settings,
    size: f32,
    palette: &Palette,
    rng: &mut R,
) -> Vec<Particle> {
    let max_radius = size * PARTICLE_RADIUS_FACTOR;
    let min_radius = size * PARTICLE_SPAWN_MIN_FACTOR;

    (0..settings.particle_count)
        .map(|_| {
            let angle = uniform(rng, 0.0, 360.0);
            let r = uniform(rng, min_radius, max_radius * PARTICLE_SPAWN_MAX_FACTOR);
            let speed = uniform(rng, settings.particle_min_speed, settings.particle_max_speed);
            let heading = uniform(rng, 0.0, 360.0);
            let color = *palette.choose(rng).unwrap_or(&palette[0]);

            Particle {
                pos: polar_to_cartesian(r, angle),
                vel: polar_to_cartesian(speed, heading),
                color,
            }
        })
        .collect()
}

/// Fully initialize a wheel at an accepted position
pub fn spawn_wheel<R: Rng + ?Sized>(
    settings: &Settings,
    position: Vec2,
    size: f32,
    rng: &mut R,
) -> Wheel {
    let palette = *PALETTES.choose(rng).unwrap_or(&PALETTES[0]);
    let particles = spawn_particles(settings, size, &palette, rng);
    let spin_direction = if rng.random_bool(0.5) {
        Direction::Forward
    } else {
        Direction::Backward
    };

    let mut wheel = Wheel::new(position, size, palette, spin_direction);
    wheel.particles = particles;
    wheel.spin_angle = uniform(rng, 0.0, 360.0);
    wheel.noise_offset = rng.random::<f64>() * NOISE_OFFSET_RANGE;
    wheel.breathing_group = BreathingGroup::from_index(rng.random_range(0..3));
    wheel.decor_seed = rng.random();
    wheel
}

/// Build a new wheel collection for a canvas of the given size
///
/// Fewer than `settings.circle_count` wheels come back when the canvas is too
/// crowded for the retry budget.
pub fn generate_layout<R: Rng + ?Sized>(
    settings: &Settings,
    width: f32,
    height: f32,
    rng: &mut R,
) -> Vec<Wheel> {
    let mut placed: Vec<Placed> = Vec::with_capacity(settings.circle_count);
    let mut wheels = Vec::with_capacity(settings.circle_count);

    for i in 0..settings.circle_count {
        let size = uniform(rng, settings.min_size, settings.max_size);

        let Some(center) = find_position(settings, size, width, height, &placed, rng) else {
            log::debug!(
                "Wheel {} (size {:.1}) dropped after {} tries",
                i,
                size,
                settings.max_placement_tries
            );
            continue;
        };

        wheels.push(spawn_wheel(settings, center, size, rng));
        placed.push(Placed { center, size });
    }

    wheels
}
