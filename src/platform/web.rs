//! Browser 2D canvas backend

use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::palette::Color;
use crate::renderer::{Canvas, Paint};

/// `Canvas` over a `<canvas>` element's 2D context
pub struct WebCanvas {
    element: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    paint: Paint,
    stack: Vec<Paint>,
}

impl WebCanvas {
    pub fn new(element: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = element
            .get_context("2d")?
            .ok_or("2d context unavailable")?
            .dyn_into::<CanvasRenderingContext2d>()?;

        Ok(Self {
            element,
            ctx,
            paint: Paint::default(),
            stack: Vec::new(),
        })
    }

    /// Resize the backing store; clears the canvas
    pub fn resize(&mut self, width: u32, height: u32) {
        self.element.set_width(width);
        self.element.set_height(height);
    }

    fn apply_stroke(&self) -> bool {
        match self.paint.stroke {
            Some(color) if self.paint.stroke_weight > 0.0 => {
                self.ctx.set_stroke_style_str(&color.to_css());
                self.ctx.set_line_width(self.paint.stroke_weight as f64);
                true
            }
            _ => false,
        }
    }
}

impl Canvas for WebCanvas {
    fn size(&self) -> Vec2 {
        Vec2::new(self.element.width() as f32, self.element.height() as f32)
    }

    fn background(&mut self, color: Color) {
        let size = self.size();
        self.ctx.save();
        let _ = self.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(0.0, 0.0, size.x as f64, size.y as f64);
        self.ctx.restore();
    }

    fn push(&mut self) {
        self.stack.push(self.paint);
        self.ctx.save();
    }

    fn pop(&mut self) {
        if let Some(paint) = self.stack.pop() {
            self.paint = paint;
        }
        self.ctx.restore();
    }

    fn translate(&mut self, offset: Vec2) {
        let _ = self.ctx.translate(offset.x as f64, offset.y as f64);
    }

    fn rotate(&mut self, degrees: f32) {
        let _ = self.ctx.rotate(degrees.to_radians() as f64);
    }

    fn scale(&mut self, factor: f32) {
        let _ = self.ctx.scale(factor as f64, factor as f64);
    }

    fn paint(&self) -> &Paint {
        &self.paint
    }

    fn paint_mut(&mut self) -> &mut Paint {
        &mut self.paint
    }

    fn ellipse(&mut self, center: Vec2, diameter: f32) {
        self.ctx.begin_path();
        let radius = (diameter * 0.5).max(0.0) as f64;
        if self
            .ctx
            .arc(center.x as f64, center.y as f64, radius, 0.0, TAU)
            .is_err()
        {
            return;
        }

        if let Some(fill) = self.paint.fill {
            self.ctx.set_fill_style_str(&fill.to_css());
            self.ctx.fill();
        }
        if self.apply_stroke() {
            self.ctx.stroke();
        }
    }

    fn line(&mut self, from: Vec2, to: Vec2) {
        if !self.apply_stroke() {
            return;
        }
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }
}
