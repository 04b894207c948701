//! Loot orbs drifting down for the player to catch.

use super::painter::Painter;
use super::rng::{RandomSource, SeededRng};
use super::subsystem::{FrameContext, Subsystem};

struct Orb {
    x: f64,
    y: f64,
    bob_phase: f64,
    color: &'static str,
}

pub struct Pickups {
    orbs: Vec<Orb>,
    spawn_in: f64,
    rng: SeededRng,
}

impl Pickups {
    pub fn new(seed: u64) -> Self {
        Self {
            orbs: Vec::new(),
            spawn_in: 2.0,
            rng: SeededRng::fork(seed, 6),
        }
    }

    fn rarity_color(&mut self) -> &'static str {
        // Drop-table oddity only; act-level variety goes through the
        // freshness selector at act entry.
        let roll = self.rng.next_f64();
        if roll < 0.70 {
            "#cfcfcf"
        } else if roll < 0.93 {
            "#6fb0ff"
        } else {
            "#ffce5c"
        }
    }
}

impl Subsystem for Pickups {
    fn update(&mut self, dt: f64, _ctx: &FrameContext) {
        self.spawn_in -= dt;
        if self.spawn_in <= 0.0 && self.orbs.len() < 8 {
            let color = self.rarity_color();
            self.orbs.push(Orb {
                x: self.rng.next_range(0.1, 0.9),
                y: -0.04,
                bob_phase: 0.0,
                color,
            });
            self.spawn_in = self.rng.next_range(3.0, 7.0);
        }
        for orb in &mut self.orbs {
            orb.y += 0.04 * dt;
            orb.bob_phase += dt * 3.0;
        }
        self.orbs.retain(|o| o.y < 1.05);
    }

    fn draw(&self, p: &mut dyn Painter, ctx: &FrameContext) {
        for orb in &self.orbs {
            let x = orb.x * ctx.width;
            let y = orb.y * ctx.height + orb.bob_phase.sin() * 3.0;
            p.fill_circle(x, y, 8.0, "rgba(255,255,255,0.12)");
            p.fill_circle(x, y, 5.0, orb.color);
        }
    }
}
