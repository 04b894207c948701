//! Transient effects: explosion bursts and engine sparks. Drawn last so
//! they sit above every actor.

use super::painter::Painter;
use super::rng::{RandomSource, SeededRng};
use super::subsystem::{FrameContext, Subsystem};

struct Particle {
    x: f64,
    y: f64,
    vx: f64,
    vy: f64,
    life: f64,
    max_life: f64,
    color: &'static str,
}

pub struct Particles {
    parts: Vec<Particle>,
    burst_in: f64,
    rng: SeededRng,
}

impl Particles {
    pub fn new(seed: u64) -> Self {
        Self {
            parts: Vec::new(),
            burst_in: 1.0,
            rng: SeededRng::fork(seed, 7),
        }
    }

    /// Radial burst at a normalized position.
    pub fn burst(&mut self, x: f64, y: f64, count: usize, color: &'static str) {
        for _ in 0..count {
            let angle = self.rng.next_range(0.0, std::f64::consts::TAU);
            let speed = self.rng.next_range(0.05, 0.25);
            let life = self.rng.next_range(0.3, 0.9);
            self.parts.push(Particle {
                x,
                y,
                vx: angle.cos() * speed,
                vy: angle.sin() * speed,
                life,
                max_life: life,
                color,
            });
        }
    }
}

impl Subsystem for Particles {
    fn update(&mut self, dt: f64, _ctx: &FrameContext) {
        self.burst_in -= dt;
        if self.burst_in <= 0.0 {
            let (x, y) = (self.rng.next_range(0.1, 0.9), self.rng.next_range(0.1, 0.6));
            self.burst(x, y, 14, "#ffb36b");
            self.burst_in = self.rng.next_range(1.5, 4.0);
        }
        for part in &mut self.parts {
            part.x += part.vx * dt;
            part.y += part.vy * dt;
            part.vy += 0.05 * dt;
            part.life -= dt;
        }
        self.parts.retain(|p| p.life > 0.0);
    }

    fn draw(&self, p: &mut dyn Painter, ctx: &FrameContext) {
        for part in &self.parts {
            let fade = (part.life / part.max_life).clamp(0.0, 1.0);
            p.fill_circle(
                part.x * ctx.width,
                part.y * ctx.height,
                1.5 + 2.5 * fade,
                part.color,
            );
        }
    }
}
