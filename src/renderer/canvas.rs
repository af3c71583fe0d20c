//! Canvas 2D drawing surface
//!
//! Thin forwarding wrapper over `CanvasRenderingContext2d`. The simulation's
//! f32 coordinates are widened to f64 at this boundary.

use web_sys::CanvasRenderingContext2d;

use super::Surface;

/// A [`Surface`] backed by an HTML canvas 2d context.
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Surface for CanvasSurface {
    fn set_fill(&mut self, color: &str) {
        self.ctx.set_fill_style_str(color);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.ctx.clear_rect(x as f64, y as f64, w as f64, h as f64);
    }
}
