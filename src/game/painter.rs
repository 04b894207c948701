//! Render surface seam.
//!
//! Subsystems draw through `Painter` instead of holding the 2D context, so
//! the draw orchestration is testable off-browser and no subsystem can
//! retain the surface across frames.

use web_sys::CanvasRenderingContext2d;

/// The handful of 2D primitives the runtime actually uses. Styles are CSS
/// color strings, matching what the canvas context takes verbatim.
pub trait Painter {
    /// Clears the full visible surface to the backdrop color.
    fn clear(&mut self, width: f64, height: f64);
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, style: &str);
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, style: &str);
    fn fill_text(&mut self, text: &str, x: f64, y: f64, style: &str);
}

const BACKDROP: &str = "#070811";

/// Painter over a live `CanvasRenderingContext2d`.
pub struct CanvasPainter {
    ctx: CanvasRenderingContext2d,
}

impl CanvasPainter {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Painter for CanvasPainter {
    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.set_fill_style_str(BACKDROP);
        self.ctx.fill_rect(0.0, 0.0, width, height);
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, style: &str) {
        self.ctx.set_fill_style_str(style);
        self.ctx.fill_rect(x, y, w, h);
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, style: &str) {
        self.ctx.set_fill_style_str(style);
        self.ctx.begin_path();
        self.ctx
            .arc(x, y, radius.max(0.0), 0.0, std::f64::consts::TAU)
            .ok();
        self.ctx.fill();
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, style: &str) {
        self.ctx.set_fill_style_str(style);
        self.ctx.fill_text(text, x, y).ok();
    }
}
