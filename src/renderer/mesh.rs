//! Tessellating canvas
//!
//! Turns canvas calls into a triangle list in pixel space, exported as raw
//! vertex bytes. Fills become triangle fans, strokes become thin
//! ring or quad bands.

use glam::{Affine2, Vec2};
use std::f32::consts::TAU;

use super::canvas::{Canvas, Paint};
use super::vertex::Vertex;
use crate::palette::Color;

/// Segment count bounds for circles
const MIN_SEGMENTS: u32 = 12;
const MAX_SEGMENTS: u32 = 64;

/// Segments needed for a smooth circle of the given on-screen radius
fn segments_for(radius_px: f32) -> u32 {
    ((radius_px.max(0.0).sqrt() * 4.0) as u32).clamp(MIN_SEGMENTS, MAX_SEGMENTS)
}

/// Point on a circle in local space
#[inline]
fn on_circle(center: Vec2, radius: f32, i: u32, segments: u32) -> Vec2 {
    let theta = (i as f32 / segments as f32) * TAU;
    center + Vec2::new(radius * theta.cos(), radius * theta.sin())
}

/// Canvas that records triangles instead of drawing
#[derive(Debug, Clone)]
pub struct MeshCanvas {
    size: Vec2,
    transform: Affine2,
    paint: Paint,
    stack: Vec<(Affine2, Paint)>,
    clear_color: Color,
    vertices: Vec<Vertex>,
}

impl MeshCanvas {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            transform: Affine2::IDENTITY,
            paint: Paint::default(),
            stack: Vec::new(),
            clear_color: Color::BLACK,
            vertices: Vec::new(),
        }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    /// Current uniform scale of the transform
    fn current_scale(&self) -> f32 {
        self.transform.matrix2.x_axis.length()
    }

    fn push_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: [f32; 4]) {
        for p in [a, b, c] {
            let p = self.transform.transform_point2(p);
            self.vertices.push(Vertex::new(p.x, p.y, color));
        }
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: [f32; 4]) {
        let segments = segments_for(radius * self.current_scale());
        for i in 0..segments {
            let p1 = on_circle(center, radius, i, segments);
            let p2 = on_circle(center, radius, i + 1, segments);
            self.push_triangle(center, p1, p2, color);
        }
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, weight: f32, color: [f32; 4]) {
        let inner = (radius - weight * 0.5).max(0.0);
        let outer = radius + weight * 0.5;
        let segments = segments_for(outer * self.current_scale());

        for i in 0..segments {
            let inner1 = on_circle(center, inner, i, segments);
            let outer1 = on_circle(center, outer, i, segments);
            let inner2 = on_circle(center, inner, i + 1, segments);
            let outer2 = on_circle(center, outer, i + 1, segments);

            // Two triangles per segment
            self.push_triangle(inner1, outer1, inner2, color);
            self.push_triangle(inner2, outer1, outer2, color);
        }
    }
}

impl Canvas for MeshCanvas {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn background(&mut self, color: Color) {
        self.clear_color = color;
        self.vertices.clear();
    }

    fn push(&mut self) {
        self.stack.push((self.transform, self.paint));
    }

    fn pop(&mut self) {
        if let Some((transform, paint)) = self.stack.pop() {
            self.transform = transform;
            self.paint = paint;
        } else {
            log::warn!("MeshCanvas::pop with empty stack");
        }
    }

    fn translate(&mut self, offset: Vec2) {
        self.transform = self.transform * Affine2::from_translation(offset);
    }

    fn rotate(&mut self, degrees: f32) {
        self.transform = self.transform * Affine2::from_angle(degrees.to_radians());
    }

    fn scale(&mut self, factor: f32) {
        self.transform = self.transform * Affine2::from_scale(Vec2::splat(factor));
    }

    fn paint(&self) -> &Paint {
        &self.paint
    }

    fn paint_mut(&mut self) -> &mut Paint {
        &mut self.paint
    }

    fn ellipse(&mut self, center: Vec2, diameter: f32) {
        let radius = diameter * 0.5;
        let paint = self.paint;

        if let Some(fill) = paint.fill {
            self.fill_circle(center, radius, fill.to_f32());
        }
        if let Some(stroke) = paint.stroke {
            if paint.stroke_weight > 0.0 {
                self.stroke_circle(center, radius, paint.stroke_weight, stroke.to_f32());
            }
        }
    }

    fn line(&mut self, from: Vec2, to: Vec2) {
        let paint = self.paint;
        let Some(stroke) = paint.stroke else {
            return;
        };
        let dir = (to - from).normalize_or_zero();
        if dir == Vec2::ZERO || paint.stroke_weight <= 0.0 {
            return;
        }

        let perp = Vec2::new(-dir.y, dir.x) * (paint.stroke_weight * 0.5);
        let color = stroke.to_f32();
        self.push_triangle(from + perp, from - perp, to + perp, color);
        self.push_triangle(to + perp, from - perp, to - perp, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_canvas() -> MeshCanvas {
        let mut canvas = MeshCanvas::new(800.0, 600.0);
        canvas.no_stroke();
        canvas.fill(Color::WHITE);
        canvas
    }

    #[test]
    fn test_filled_ellipse_is_fan() {
        let mut canvas = filled_canvas();
        canvas.ellipse(Vec2::new(100.0, 100.0), 50.0);
        let segments = segments_for(25.0);
        assert_eq!(canvas.vertices().len(), (segments * 3) as usize);
        for v in canvas.vertices() {
            let p = Vec2::from(v.position);
            assert!(p.distance(Vec2::new(100.0, 100.0)) <= 25.0 + 1e-3);
        }
    }

    #[test]
    fn test_invisible_paint_emits_nothing() {
        let mut canvas = MeshCanvas::new(800.0, 600.0);
        canvas.no_fill();
        canvas.no_stroke();
        canvas.ellipse(Vec2::ZERO, 40.0);
        canvas.line(Vec2::ZERO, Vec2::new(10.0, 0.0));
        assert!(canvas.vertices().is_empty());
    }

    #[test]
    fn test_stroked_ellipse_is_band() {
        let mut canvas = MeshCanvas::new(800.0, 600.0);
        canvas.no_fill();
        canvas.stroke(Color::WHITE);
        canvas.stroke_weight(2.0);
        canvas.ellipse(Vec2::ZERO, 100.0);
        for v in canvas.vertices() {
            let r = Vec2::from(v.position).length();
            assert!(r >= 49.0 - 1e-3 && r <= 51.0 + 1e-3);
        }
    }

    #[test]
    fn test_transform_stack() {
        let mut canvas = filled_canvas();
        canvas.push();
        canvas.translate(Vec2::new(200.0, 100.0));
        canvas.scale(2.0);
        canvas.rotate(90.0);
        canvas.ellipse(Vec2::new(10.0, 0.0), 4.0);
        canvas.pop();

        // Local (10, 0) rotated 90° and doubled lands at (200, 120)
        let first = Vec2::from(canvas.vertices()[0].position);
        assert!(first.distance(Vec2::new(200.0, 120.0)) < 1e-3);

        let before = canvas.vertices().len();
        canvas.ellipse(Vec2::ZERO, 4.0);
        let first_after = Vec2::from(canvas.vertices()[before].position);
        assert!(first_after.length() < 1e-3);
    }

    #[test]
    fn test_pop_restores_paint() {
        let mut canvas = filled_canvas();
        canvas.push();
        canvas.fill(Color::BLACK);
        canvas.pop();
        assert_eq!(canvas.paint().fill, Some(Color::WHITE));
    }

    #[test]
    fn test_line_quad() {
        let mut canvas = MeshCanvas::new(800.0, 600.0);
        canvas.stroke(Color::WHITE);
        canvas.stroke_weight(2.0);
        canvas.line(Vec2::ZERO, Vec2::new(10.0, 0.0));
        assert_eq!(canvas.vertices().len(), 6);
        for v in canvas.vertices() {
            assert!(v.position[1].abs() <= 1.0 + 1e-6);
        }
    }

    #[test]
    fn test_background_clears() {
        let mut canvas = filled_canvas();
        canvas.ellipse(Vec2::ZERO, 10.0);
        canvas.background(Color::hex(0x1E2C3A));
        assert!(canvas.vertices().is_empty());
        assert_eq!(canvas.clear_color(), Color::hex(0x1E2C3A));
    }
}
