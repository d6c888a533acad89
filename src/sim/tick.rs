//! Per-frame animation step
//!
//! Advances spin, reveal phase and particle motion by exactly one tick.
//! Breathing and reveal visibility are pure functions of the stepped state
//! and are evaluated at render time.

use super::collision::integrate_contained;
use super::state::{SketchState, Wheel};
use crate::normalize_degrees;
use crate::settings::Settings;

/// Advance the reveal phase, wrapping into [0, 1)
#[inline]
pub fn advance_phase(phase: f32, increment: f32) -> f32 {
    let next = (phase + increment).rem_euclid(1.0);
    // rem_euclid can land on exactly 1.0 through rounding
    if next >= 1.0 { 0.0 } else { next }
}

/// Advance one wheel by one tick. Returns the number of particle bounces.
pub fn step_wheel(wheel: &mut Wheel, settings: &Settings) -> usize {
    wheel.spin_angle =
        normalize_degrees(wheel.spin_angle + wheel.spin_direction().sign() * settings.spin_speed);
    wheel.reveal_phase = advance_phase(wheel.reveal_phase, settings.reveal_increment);

    let boundary = wheel.max_particle_radius;
    wheel
        .particles
        .iter_mut()
        .map(|p| integrate_contained(&mut p.pos, &mut p.vel, boundary))
        .filter(|&bounced| bounced)
        .count()
}

/// Advance the whole sketch by one frame
pub fn step(state: &mut SketchState) {
    state.frame_count += 1;

    let settings = &state.settings;
    let bounces: usize = state
        .wheels
        .iter_mut()
        .map(|wheel| step_wheel(wheel, settings))
        .sum();

    if bounces > 0 {
        log::trace!("Frame {}: {} particle bounces", state.frame_count, bounces);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::PALETTES;
    use crate::sim::state::{Direction, Particle};
    use glam::Vec2;

    fn test_wheel(direction: Direction) -> Wheel {
        let mut wheel = Wheel::new(Vec2::new(400.0, 300.0), 200.0, PALETTES[1], direction);
        wheel.spin_angle = 10.0;
        wheel
    }

    #[test]
    fn test_spin_follows_direction() {
        let settings = Settings::default();
        let mut fwd = test_wheel(Direction::Forward);
        let mut back = test_wheel(Direction::Backward);
        step_wheel(&mut fwd, &settings);
        step_wheel(&mut back, &settings);
        assert!((fwd.spin_angle - 10.08).abs() < 1e-4);
        assert!((back.spin_angle - 9.92).abs() < 1e-4);
    }

    #[test]
    fn test_spin_wraps() {
        let settings = Settings::default();
        let mut wheel = test_wheel(Direction::Backward);
        wheel.spin_angle = 0.0;
        step_wheel(&mut wheel, &settings);
        assert!((wheel.spin_angle - 359.92).abs() < 1e-3);
    }

    #[test]
    fn test_reveal_phase_cycles() {
        let settings = Settings::default();
        let mut wheel = test_wheel(Direction::Forward);

        step_wheel(&mut wheel, &settings);
        assert!((wheel.reveal_phase - 0.004).abs() < 1e-6);

        let mut wrapped = false;
        for _ in 0..300 {
            let before = wheel.reveal_phase;
            step_wheel(&mut wheel, &settings);
            assert!((0.0..1.0).contains(&wheel.reveal_phase));
            if wheel.reveal_phase < before {
                wrapped = true;
                assert!(wheel.reveal_phase < settings.reveal_increment);
            }
        }
        assert!(wrapped);
    }

    #[test]
    fn test_advance_phase_never_reaches_one() {
        assert!((advance_phase(0.998, 0.004) - 0.002).abs() < 1e-5);
        assert!(advance_phase(1.0 - f32::EPSILON, 0.0) < 1.0);
        assert!(advance_phase(0.9999999, 0.0000001) < 1.0);
    }

    #[test]
    fn test_reveal_direction_never_changes() {
        let settings = Settings::default();
        let mut wheel = test_wheel(Direction::Forward);
        for _ in 0..1000 {
            step_wheel(&mut wheel, &settings);
            assert_eq!(wheel.reveal_direction(), Direction::Backward);
            assert_eq!(wheel.spin_direction(), Direction::Forward);
        }
    }

    #[test]
    fn test_particle_bounce_scenario() {
        let settings = Settings::default();
        let mut wheel = test_wheel(Direction::Forward);
        wheel.max_particle_radius = 10.0;
        wheel.particles.push(Particle {
            pos: Vec2::new(10.0, 0.0),
            vel: Vec2::new(1.0, 0.0),
            color: wheel.palette[0],
        });

        let bounces = step_wheel(&mut wheel, &settings);
        assert_eq!(bounces, 1);
        let p = &wheel.particles[0];
        assert!((p.vel - Vec2::new(-1.0, 0.0)).length() < 1e-6);
        assert!((p.pos - Vec2::new(10.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_step_advances_frame_and_keeps_particles_inside() {
        let mut state = SketchState::new(Settings::default(), 99, 1920.0, 1080.0);
        for _ in 0..2000 {
            step(&mut state);
        }
        assert_eq!(state.frame_count, 2000);
        for wheel in &state.wheels {
            for p in &wheel.particles {
                assert!(p.pos.length() <= wheel.max_particle_radius + 1e-3);
            }
        }
    }

    #[test]
    fn test_step_preserves_particle_speed() {
        let mut state = SketchState::new(Settings::default(), 5, 1920.0, 1080.0);
        let speeds: Vec<f32> = state
            .wheels
            .iter()
            .flat_map(|w| w.particles.iter().map(|p| p.vel.length()))
            .collect();
        for _ in 0..1500 {
            step(&mut state);
        }
        let after: Vec<f32> = state
            .wheels
            .iter()
            .flat_map(|w| w.particles.iter().map(|p| p.vel.length()))
            .collect();
        for (a, b) in speeds.iter().zip(&after) {
            assert!((a - b).abs() < 1e-3);
        }
    }
}
