//! Particle containment inside a wheel
//!
//! Particles bounce off the inside of a circle centered on the wheel origin.
//! Reflection is elastic: speed is preserved exactly, only direction changes.

use glam::Vec2;

/// Result of a boundary check
#[derive(Debug, Clone)]
pub struct CollisionResult {
    /// Whether the point left the boundary
    pub hit: bool,
    /// Closest point on the boundary (if hit)
    pub point: Vec2,
    /// Outward unit normal at the contact
    pub normal: Vec2,
    /// How far outside the boundary the point is
    pub penetration: f32,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            point: Vec2::ZERO,
            normal: Vec2::ZERO,
            penetration: 0.0,
        }
    }
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Check a point against a circular boundary of the given radius
///
/// A point exactly at the center has no defined normal and never hits.
pub fn boundary_collision(pos: Vec2, boundary_radius: f32) -> CollisionResult {
    let dist = pos.length();

    if dist > boundary_radius && dist > 0.0 {
        let normal = pos / dist;
        return CollisionResult {
            hit: true,
            point: normal * boundary_radius,
            normal,
            penetration: dist - boundary_radius,
        };
    }

    CollisionResult::miss()
}

/// Integrate one tick of straight-line motion, bouncing off the boundary.
/// Returns true if a reflection happened.
pub fn integrate_contained(pos: &mut Vec2, vel: &mut Vec2, boundary_radius: f32) -> bool {
    *pos += *vel;

    let result = boundary_collision(*pos, boundary_radius);
    if result.hit {
        *vel = reflect_velocity(*vel, result.normal);
        *pos = result.point;
    }
    result.hit
}
