//! Player fire: tracer shots climbing from the bottom of the surface.

use super::painter::Painter;
use super::rng::{RandomSource, SeededRng};
use super::subsystem::{FrameContext, Subsystem};

struct Shot {
    x: f64,
    y: f64,
    speed: f64,
}

pub struct Bullets {
    shots: Vec<Shot>,
    cadence: f64,
    next_in: f64,
    rng: SeededRng,
}

impl Bullets {
    pub fn new(seed: u64) -> Self {
        Self {
            shots: Vec::new(),
            cadence: 0.18,
            next_in: 0.0,
            rng: SeededRng::fork(seed, 5),
        }
    }
}

impl Subsystem for Bullets {
    fn update(&mut self, dt: f64, _ctx: &FrameContext) {
        self.next_in -= dt;
        if self.next_in <= 0.0 {
            self.shots.push(Shot {
                x: 0.5 + self.rng.next_range(-0.09, 0.09),
                y: 0.80,
                speed: 0.9,
            });
            self.next_in = self.cadence;
        }
        for s in &mut self.shots {
            s.y -= s.speed * dt;
        }
        self.shots.retain(|s| s.y > -0.05);
    }

    fn draw(&self, p: &mut dyn Painter, ctx: &FrameContext) {
        for s in &self.shots {
            let x = s.x * ctx.width;
            let y = s.y * ctx.height;
            p.fill_rect(x - 1.5, y, 3.0, 10.0, "rgba(140,220,255,0.5)");
            p.fill_circle(x, y, 2.5, "#e8f6ff");
        }
    }
}
