//! Enemy drones descending through the act.

use super::painter::Painter;
use super::rng::{RandomSource, SeededRng};
use super::subsystem::{FrameContext, Subsystem};

struct Drone {
    x: f64,
    y: f64,
    speed: f64,
    sway_phase: f64,
    size: f64,
}

pub struct Enemies {
    drones: Vec<Drone>,
    spawn_in: f64,
    rng: SeededRng,
}

impl Enemies {
    pub fn new(seed: u64) -> Self {
        Self {
            drones: Vec::new(),
            spawn_in: 0.4,
            rng: SeededRng::fork(seed, 4),
        }
    }

    fn spawn(&mut self) {
        self.drones.push(Drone {
            x: self.rng.next_range(0.08, 0.92),
            y: -0.05,
            speed: self.rng.next_range(0.06, 0.16),
            sway_phase: self.rng.next_range(0.0, std::f64::consts::TAU),
            size: self.rng.next_range(10.0, 18.0),
        });
    }
}

impl Subsystem for Enemies {
    fn update(&mut self, dt: f64, _ctx: &FrameContext) {
        self.spawn_in -= dt;
        if self.spawn_in <= 0.0 && self.drones.len() < 24 {
            self.spawn();
            self.spawn_in = self.rng.next_range(0.5, 1.6);
        }
        for d in &mut self.drones {
            d.y += d.speed * dt;
            d.sway_phase += dt * 2.0;
        }
        self.drones.retain(|d| d.y < 1.1);
    }

    fn draw(&self, p: &mut dyn Painter, ctx: &FrameContext) {
        for d in &self.drones {
            let x = d.x * ctx.width + d.sway_phase.sin() * 14.0;
            let y = d.y * ctx.height;
            p.fill_rect(x - d.size / 2.0, y - d.size / 2.0, d.size, d.size, "#c75b5b");
            p.fill_rect(
                x - d.size / 2.0 - 4.0,
                y - 2.0,
                d.size + 8.0,
                4.0,
                "#7a3030",
            );
        }
    }
}
