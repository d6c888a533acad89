//! Wheel Garden - a generative animation of decorated, breathing wheels
//!
//! Core modules:
//! - `sim`: Layout generation and per-frame animation stepping
//! - `renderer`: Drawing surface abstraction and the wheel painter
//! - `platform`: Browser host bindings
//! - `palette`: Colors and the fixed palette set
//! - `settings`: Tunable configuration

pub mod palette;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use palette::{Color, PALETTES};
pub use settings::Settings;

use glam::Vec2;

/// Sketch configuration constants
pub mod consts {
    /// Target frame rate of the host driver
    pub const TARGET_FPS: u32 = 60;

    /// Number of wheels requested per layout
    pub const CIRCLE_COUNT: usize = 15;
    /// Wheel diameter range
    pub const MIN_WHEEL_SIZE: f32 = 180.0;
    pub const MAX_WHEEL_SIZE: f32 = 320.0;
    /// Distance kept from the canvas edge, as a fraction of wheel size
    pub const EDGE_MARGIN_FACTOR: f32 = 0.7;
    /// Minimum center distance as a fraction of the summed radii
    pub const OVERLAP_FACTOR: f32 = 0.9;
    /// Position redraws before a candidate wheel is dropped
    pub const MAX_PLACEMENT_TRIES: u32 = 200;

    /// Floating particles per wheel
    pub const PARTICLE_COUNT: usize = 26;
    /// Particle boundary radius as a fraction of wheel size
    pub const PARTICLE_RADIUS_FACTOR: f32 = 0.45;
    /// Innermost spawn radius as a fraction of wheel size
    pub const PARTICLE_SPAWN_MIN_FACTOR: f32 = 0.12;
    /// Outermost spawn radius as a fraction of the boundary radius
    pub const PARTICLE_SPAWN_MAX_FACTOR: f32 = 0.9;
    /// Particle speed range (pixels per tick)
    pub const PARTICLE_MIN_SPEED: f32 = 0.12;
    pub const PARTICLE_MAX_SPEED: f32 = 0.35;

    /// Spin speed (degrees per tick)
    pub const SPIN_SPEED: f32 = 0.08;
    /// Reveal phase increment per tick (~250 tick cycle)
    pub const REVEAL_INCREMENT: f32 = 0.004;

    /// Breathing scale baseline
    pub const BREATH_BASE: f32 = 0.78;
    /// Noise speed per breathing group
    pub const BREATH_SPEEDS: [f64; 3] = [0.0035, 0.0045, 0.0055];
    /// Scale amplitude per breathing group
    pub const BREATH_AMPLITUDES: [f32; 3] = [0.26, 0.32, 0.38];
    /// Range of the per-wheel noise phase offset
    pub const NOISE_OFFSET_RANGE: f64 = 1000.0;

    /// Decoration counts
    pub const RING_COUNT: usize = 6;
    pub const INSIDE_DOT_COUNT: usize = 16;
    pub const SPOKE_COUNT: usize = 8;

    /// Canvas background
    pub const BACKGROUND_HEX: &str = "#1e2c3a";
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(angle: f32) -> f32 {
    let a = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if a >= 360.0 { 0.0 } else { a }
}

/// Convert polar (r, degrees) to cartesian (x, y)
///
/// Angles follow the standard math convention: 0° on +x, increasing toward +y.
/// On a y-down canvas this reads as clockwise.
#[inline]
pub fn polar_to_cartesian(r: f32, degrees: f32) -> Vec2 {
    let theta = degrees.to_radians();
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Convert cartesian (x, y) to polar (r, degrees in [0, 360))
#[inline]
pub fn cartesian_to_polar(pos: Vec2) -> (f32, f32) {
    (pos.length(), normalize_degrees(pos.y.atan2(pos.x).to_degrees()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_degrees() {
        assert!((normalize_degrees(370.0) - 10.0).abs() < 1e-4);
        assert!((normalize_degrees(-90.0) - 270.0).abs() < 1e-4);
        assert_eq!(normalize_degrees(0.0), 0.0);
        let tiny = normalize_degrees(-1e-9);
        assert!((0.0..360.0).contains(&tiny));
    }

    #[test]
    fn test_polar_roundtrip_quadrants() {
        let p = polar_to_cartesian(10.0, 90.0);
        assert!(p.x.abs() < 1e-4);
        assert!((p.y - 10.0).abs() < 1e-4);

        let (r, deg) = cartesian_to_polar(Vec2::new(0.0, -5.0));
        assert!((r - 5.0).abs() < 1e-4);
        assert!((deg - 270.0).abs() < 1e-3);
    }
}
