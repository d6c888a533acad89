//! Simulation module
//!
//! Layout generation and per-frame stepping. No rendering or platform
//! dependencies:
//! - All randomness comes through an injected `Rng`
//! - All noise comes through a `NoiseSource`
//! - State is owned by `SketchState`, never global

pub mod breathing;
pub mod collision;
pub mod layout;
pub mod reveal;
pub mod state;
pub mod tick;

pub use breathing::{BreathingGroup, NoiseSource, PerlinNoise, breathing_scale};
pub use collision::{CollisionResult, boundary_collision, integrate_contained, reflect_velocity};
pub use layout::{generate_layout, spawn_particles, spawn_wheel};
pub use reveal::{RevealFrame, inner_dot_count, is_revealed, ring_limit};
pub use state::{Direction, Particle, SketchState, Wheel};
pub use tick::{advance_phase, step, step_wheel};
