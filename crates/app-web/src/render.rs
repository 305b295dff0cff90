//! Canvas2D implementation of the core drawing surface.

use std::f64::consts::PI;

use anyhow::anyhow;
use app_core::{Surface, TextAlign};
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Grab the 2D context of `canvas`.
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow!("{e:?}"))?
            .ok_or_else(|| anyhow!("canvas has no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|_| anyhow!("unexpected 2d context type"))?;
        Ok(Self { canvas, ctx })
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }

    fn stroke_upper_arc(&mut self, center: Vec2, radius: f32, color: &str, line_width: f32) {
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(line_width as f64);
        self.ctx.begin_path();
        // Sweeping π → 0 clockwise traces the half above the baseline.
        let _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, PI, 0.0);
        self.ctx.stroke();
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: &str, line_width: f32) {
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(line_width as f64);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.begin_path();
        let _ = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            2.0 * PI,
        );
        self.ctx.fill();
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx
            .fill_rect(origin.x as f64, origin.y as f64, size.x as f64, size.y as f64);
    }

    fn stroke_rect(&mut self, origin: Vec2, size: Vec2, color: &str, line_width: f32) {
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(line_width as f64);
        self.ctx
            .stroke_rect(origin.x as f64, origin.y as f64, size.x as f64, size.y as f64);
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, font: &str, color: &str, align: TextAlign) {
        self.ctx.set_font(font);
        self.ctx.set_fill_style_str(color);
        self.ctx.set_text_align(match align {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
        });
        self.ctx.set_text_baseline("middle");
        let _ = self.ctx.fill_text(text, pos.x as f64, pos.y as f64);
    }
}
