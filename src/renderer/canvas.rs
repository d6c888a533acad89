//! Immediate-mode drawing surface
//!
//! Mirrors a sketchbook-style API: a current fill/stroke state, a
//! transform stack, and ellipse/line primitives. Angles are in degrees.

use glam::Vec2;

use crate::palette::Color;

/// Current paint state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub stroke_weight: f32,
}

impl Default for Paint {
    fn default() -> Self {
        Self {
            fill: Some(Color::WHITE),
            stroke: Some(Color::BLACK),
            stroke_weight: 1.0,
        }
    }
}

/// A drawing surface provided by the host
///
/// Implementors supply the transform stack and the two primitives; the
/// paint setters are shared.
pub trait Canvas {
    /// Surface size in pixels
    fn size(&self) -> Vec2;

    /// Clear the whole surface, ignoring the current transform
    fn background(&mut self, color: Color);

    /// Save the transform and paint state
    fn push(&mut self);
    /// Restore the last saved transform and paint state
    fn pop(&mut self);
    fn translate(&mut self, offset: Vec2);
    fn rotate(&mut self, degrees: f32);
    fn scale(&mut self, factor: f32);

    fn paint(&self) -> &Paint;
    fn paint_mut(&mut self) -> &mut Paint;

    /// Ellipse with equal axes, filled and/or stroked per the current paint
    fn ellipse(&mut self, center: Vec2, diameter: f32);
    /// Straight segment, stroked per the current paint
    fn line(&mut self, from: Vec2, to: Vec2);

    fn fill(&mut self, color: Color) {
        self.paint_mut().fill = Some(color);
    }

    fn no_fill(&mut self) {
        self.paint_mut().fill = None;
    }

    fn stroke(&mut self, color: Color) {
        self.paint_mut().stroke = Some(color);
    }

    fn no_stroke(&mut self) {
        self.paint_mut().stroke = None;
    }

    fn stroke_weight(&mut self, weight: f32) {
        self.paint_mut().stroke_weight = weight;
    }
}
