//! Per-frame orchestration.
//!
//! One `GameLoop` owns the frame clock, the scene gate and the seven
//! simulation subsystem slots. Each frame: derive a clamped delta, advance
//! the scene transition, update the subsystems (scene permitting) in a fixed
//! order, then clear the surface and draw them in a fixed order with the
//! transition curtain on top. The loop itself never terminates; the host
//! wiring decides whether another frame gets scheduled.

use super::clock::FrameClock;
use super::painter::Painter;
use super::scene::SceneGate;
use super::subsystem::{FrameContext, Noop, Subsystem};

pub struct GameLoop {
    clock: FrameClock,
    pub gate: SceneGate,
    pub camera: Box<dyn Subsystem>,
    pub world: Box<dyn Subsystem>,
    pub player: Box<dyn Subsystem>,
    pub enemies: Box<dyn Subsystem>,
    pub bullets: Box<dyn Subsystem>,
    pub pickups: Box<dyn Subsystem>,
    pub particles: Box<dyn Subsystem>,
}

impl GameLoop {
    /// Every subsystem slot starts as a no-op; the host installs the real
    /// implementations as they come up.
    pub fn new(gate: SceneGate, now_ms: f64) -> Self {
        Self {
            clock: FrameClock::new(now_ms),
            gate,
            camera: Box::new(Noop),
            world: Box::new(Noop),
            player: Box::new(Noop),
            enemies: Box::new(Noop),
            bullets: Box::new(Noop),
            pickups: Box::new(Noop),
            particles: Box::new(Noop),
        }
    }

    /// One full frame. Returns the delta so the host can run its own
    /// per-frame bookkeeping on the same clock.
    pub fn frame(&mut self, now_ms: f64, p: &mut dyn Painter, width: f64, height: f64) -> f64 {
        let dt = self.clock.tick(now_ms);
        self.update(dt, width, height);
        self.draw(p, width, height);
        dt
    }

    /// Transition first (it animates in every scene), then the simulation
    /// pass, gated on the scene. The hub runs nothing per-frame.
    pub fn update(&mut self, dt: f64, width: f64, height: f64) {
        self.gate.update_transition(dt);
        if !self.gate.current().simulates() {
            return;
        }
        let ctx = FrameContext { width, height };
        self.camera.update(dt, &ctx);
        self.world.update(dt, &ctx);
        self.player.update(dt, &ctx);
        self.enemies.update(dt, &ctx);
        self.bullets.update(dt, &ctx);
        self.pickups.update(dt, &ctx);
        self.particles.update(dt, &ctx);
    }

    /// Clear, then background-to-foreground: world, pickups, enemies,
    /// bullets, player, particles last so effects sit above actors. The
    /// camera has no draw pass. The fade curtain always lands on top.
    pub fn draw(&mut self, p: &mut dyn Painter, width: f64, height: f64) {
        p.clear(width, height);
        if self.gate.current().simulates() {
            let ctx = FrameContext { width, height };
            self.world.draw(p, &ctx);
            self.pickups.draw(p, &ctx);
            self.enemies.draw(p, &ctx);
            self.bullets.draw(p, &ctx);
            self.player.draw(p, &ctx);
            self.particles.draw(p, &ctx);
        }
        self.gate.draw_transition_overlay(p, width, height);
    }
}
