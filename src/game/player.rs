//! Player ship.

use super::painter::Painter;
use super::rng::{RandomSource, SeededRng};
use super::subsystem::{FrameContext, Subsystem};

/// Sways near the bottom of the surface with a flickering thruster plume.
pub struct Player {
    phase: f64,
    flicker: f64,
    rng: SeededRng,
}

impl Player {
    pub fn new(seed: u64) -> Self {
        Self {
            phase: 0.0,
            flicker: 1.0,
            rng: SeededRng::fork(seed, 3),
        }
    }

    fn position(&self, ctx: &FrameContext) -> (f64, f64) {
        let x = ctx.width * 0.5 + self.phase.sin() * ctx.width * 0.08;
        let y = ctx.height * 0.82;
        (x, y)
    }
}

impl Subsystem for Player {
    fn update(&mut self, dt: f64, _ctx: &FrameContext) {
        self.phase += dt * 0.9;
        self.flicker = self.rng.next_range(0.6, 1.0);
    }

    fn draw(&self, p: &mut dyn Painter, ctx: &FrameContext) {
        let (x, y) = self.position(ctx);
        // Thruster plume below the hull, drawn first so the hull overlaps it.
        p.fill_circle(x, y + 16.0, 7.0 * self.flicker, "rgba(120,190,255,0.7)");
        p.fill_rect(x - 12.0, y - 6.0, 24.0, 14.0, "#d8e4ff");
        p.fill_rect(x - 4.0, y - 16.0, 8.0, 12.0, "#d8e4ff");
        p.fill_circle(x, y - 2.0, 4.0, "#2b3c66");
    }
}
