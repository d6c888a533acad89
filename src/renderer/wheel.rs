//! Wheel painter
//!
//! Paints one wheel in its local frame: translate to the center, apply the
//! breathing scale, then rotate by the spin angle. Ring and dot decorations
//! are filtered through the wheel's reveal state.

use glam::Vec2;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::canvas::Canvas;
use crate::consts::*;
use crate::palette::{Color, Palette, colors};
use crate::polar_to_cartesian;
use crate::sim::layout::uniform;
use crate::sim::{NoiseSource, RevealFrame, SketchState, Wheel};

/// Orbital ring radius as a fraction of wheel size
const ORBIT_RADIUS_FACTOR: f32 = 0.65;
/// Inner dot ring radius as a fraction of wheel size
const INSIDE_DOT_RADIUS_FACTOR: f32 = 0.38;
const SPOKE_LENGTH_FACTOR: f32 = 0.43;
const SATELLITE_CHANCE: f32 = 0.15;

/// Small dot hanging off a connecting dot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Satellite {
    /// Signed offset along the doubled angle
    pub offset: f32,
    pub color: Color,
}

/// One dot of the connecting orbit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectingDot {
    pub diameter: f32,
    pub color: Color,
    pub satellite: Option<Satellite>,
}

/// Per-wheel decoration choices
///
/// Regenerated from the wheel's seed every frame, so the same wheel always
/// gets the same decorations.
#[derive(Debug, Clone, PartialEq)]
pub struct Decor {
    pub inside_dot_colors: [Color; INSIDE_DOT_COUNT],
    /// Three-layer dots on the orbital ring (8..=10)
    pub outer_dot_count: usize,
    /// Connecting dots, `outer_dot_count * (6..=8)` of them
    pub connecting: Vec<ConnectingDot>,
}

impl Decor {
    pub fn generate(seed: u64, palette: &Palette, size: f32) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let pick = |rng: &mut Pcg32| *palette.choose(rng).unwrap_or(&palette[0]);

        let mut inside_dot_colors = [palette[0]; INSIDE_DOT_COUNT];
        for color in inside_dot_colors.iter_mut() {
            *color = pick(&mut rng);
        }

        let outer_dot_count = rng.random_range(8..=10);
        let dots_per_segment = rng.random_range(6..=8);
        let connecting = (0..outer_dot_count * dots_per_segment)
            .map(|_| {
                let diameter = uniform(&mut rng, size * 0.015, size * 0.04);
                let color = pick(&mut rng);
                let satellite = (rng.random::<f32>() < SATELLITE_CHANCE).then(|| Satellite {
                    offset: uniform(&mut rng, -size * 0.02, size * 0.02),
                    color: pick(&mut rng),
                });
                ConnectingDot {
                    diameter,
                    color,
                    satellite,
                }
            })
            .collect();

        Self {
            inside_dot_colors,
            outer_dot_count,
            connecting,
        }
    }

    pub fn for_wheel(wheel: &Wheel) -> Self {
        Self::generate(wheel.decor_seed, &wheel.palette, wheel.size)
    }
}

/// Diameters of the concentric rings, innermost first
pub fn ring_diameters(size: f32) -> Vec<f32> {
    (0..)
        .map(|i| size * (0.55 + 0.07 * i as f32))
        .take_while(|&d| d < size * 0.92)
        .collect()
}

/// Paint every wheel of the sketch onto a cleared canvas
pub fn render_frame<C, N>(canvas: &mut C, state: &SketchState, noise: &N)
where
    C: Canvas + ?Sized,
    N: NoiseSource + ?Sized,
{
    canvas.background(state.settings.background_color());
    for wheel in &state.wheels {
        let scale = wheel.breathing_scale(state.frame_count, noise, &state.settings);
        draw_wheel(canvas, wheel, scale);
    }
}

/// Paint one wheel at its position with the given breathing scale
pub fn draw_wheel<C: Canvas + ?Sized>(canvas: &mut C, wheel: &Wheel, scale: f32) {
    canvas.push();
    canvas.translate(wheel.position);
    canvas.scale(scale);
    canvas.rotate(wheel.spin_angle);
    draw_wheel_at_origin(canvas, wheel, &Decor::for_wheel(wheel));
    canvas.pop();
}

/// Paint one wheel centered on the current origin
pub fn draw_wheel_at_origin<C: Canvas + ?Sized>(canvas: &mut C, wheel: &Wheel, decor: &Decor) {
    let size = wheel.size;
    let palette = &wheel.palette;
    let reveal = wheel.reveal();

    // Glow and main disc
    canvas.no_stroke();
    canvas.fill(colors::GLOW);
    canvas.ellipse(Vec2::ZERO, size * 1.18);
    canvas.fill(palette[0]);
    canvas.ellipse(Vec2::ZERO, size);

    for p in &wheel.particles {
        canvas.fill(p.color);
        canvas.ellipse(p.pos, size * 0.04);
    }

    draw_rings(canvas, size, palette, &reveal);
    draw_inside_dots(canvas, size, decor, &reveal);
    draw_orbital_ring(canvas, size, decor, &reveal);

    // Spokes
    canvas.stroke(colors::SPOKE);
    canvas.stroke_weight(2.0);
    let spoke_step = 360.0 / SPOKE_COUNT as f32;
    for i in 0..SPOKE_COUNT {
        let end = polar_to_cartesian(size * SPOKE_LENGTH_FACTOR, i as f32 * spoke_step);
        canvas.line(Vec2::ZERO, end);
    }

    // Hub
    canvas.fill(colors::HUB);
    canvas.stroke(Color::WHITE);
    canvas.stroke_weight(2.0);
    canvas.ellipse(Vec2::ZERO, size * 0.15);
    canvas.no_stroke();
    canvas.fill(palette[2]);
    canvas.ellipse(Vec2::ZERO, size * 0.07);
}

fn draw_rings<C: Canvas + ?Sized>(canvas: &mut C, size: f32, palette: &Palette, reveal: &RevealFrame) {
    canvas.stroke(palette[1]);
    canvas.stroke_weight(2.0);
    canvas.no_fill();

    let diameters = ring_diameters(size);
    let count = diameters.len();
    for (i, d) in diameters.into_iter().enumerate() {
        if reveal.ring_visible(i, count) {
            canvas.ellipse(Vec2::ZERO, d);
        }
    }
}

fn draw_inside_dots<C: Canvas + ?Sized>(canvas: &mut C, size: f32, decor: &Decor, reveal: &RevealFrame) {
    canvas.stroke(Color::WHITE);
    canvas.stroke_weight(1.4);

    let step = 360.0 / INSIDE_DOT_COUNT as f32;
    for (i, color) in decor.inside_dot_colors.iter().enumerate() {
        if !reveal.inner_dot_visible(i, INSIDE_DOT_COUNT) {
            continue;
        }
        canvas.fill(*color);
        let center = polar_to_cartesian(size * INSIDE_DOT_RADIUS_FACTOR, i as f32 * step);
        canvas.ellipse(center, size * 0.09);
    }
}

fn draw_orbital_ring<C: Canvas + ?Sized>(canvas: &mut C, size: f32, decor: &Decor, reveal: &RevealFrame) {
    let orbit = size * ORBIT_RADIUS_FACTOR;

    // Connecting dots first, so the concentric dots sit on top
    canvas.no_stroke();
    let total = decor.connecting.len();
    for (i, dot) in decor.connecting.iter().enumerate() {
        if !reveal.orbital_visible(i, total) {
            continue;
        }
        let angle = i as f32 * 360.0 / total as f32;
        let center = polar_to_cartesian(orbit, angle);
        canvas.fill(dot.color);
        canvas.ellipse(center, dot.diameter);

        if let Some(sat) = dot.satellite {
            canvas.fill(sat.color);
            canvas.ellipse(
                center + polar_to_cartesian(sat.offset, angle * 2.0),
                dot.diameter * 0.6,
            );
        }
    }

    for i in 0..decor.outer_dot_count {
        if !reveal.orbital_visible(i, decor.outer_dot_count) {
            continue;
        }
        let angle = i as f32 * 360.0 / decor.outer_dot_count as f32;
        draw_concentric_dot(canvas, polar_to_cartesian(orbit, angle), size * 0.08);
    }
}

/// Orange, black and white layered dot
fn draw_concentric_dot<C: Canvas + ?Sized>(canvas: &mut C, center: Vec2, base: f32) {
    canvas.push();
    canvas.translate(center);
    canvas.no_stroke();
    canvas.fill(colors::CONCENTRIC_OUTER);
    canvas.ellipse(Vec2::ZERO, base);
    canvas.fill(colors::CONCENTRIC_MIDDLE);
    canvas.ellipse(Vec2::ZERO, base * 0.7);
    canvas.fill(colors::CONCENTRIC_CENTER);
    canvas.ellipse(Vec2::ZERO, base * 0.4);
    canvas.pop();
}
