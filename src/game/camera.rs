//! Combat camera. Updates only; it has no draw pass.

use super::rng::{RandomSource, SeededRng};
use super::subsystem::{FrameContext, Subsystem};

/// Eases toward a slowly wandering focus offset and decays hit-shake.
/// Subsystems draw in screen space, so the offset only feeds the subtle
/// backdrop drift; it still has to advance first so a frame sees one
/// coherent camera.
pub struct Camera {
    x: f64,
    y: f64,
    target_x: f64,
    target_y: f64,
    shake: f64,
    retarget_in: f64,
    rng: SeededRng,
}

impl Camera {
    pub fn new(seed: u64) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            target_x: 0.0,
            target_y: 0.0,
            shake: 0.0,
            retarget_in: 0.0,
            rng: SeededRng::fork(seed, 1),
        }
    }

    pub fn offset(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Impulse from explosions / heavy hits.
    pub fn kick(&mut self, amount: f64) {
        self.shake = (self.shake + amount).min(24.0);
    }
}

impl Subsystem for Camera {
    fn update(&mut self, dt: f64, _ctx: &FrameContext) {
        self.retarget_in -= dt;
        if self.retarget_in <= 0.0 {
            self.target_x = self.rng.next_range(-24.0, 24.0);
            self.target_y = self.rng.next_range(-16.0, 16.0);
            self.retarget_in = self.rng.next_range(2.0, 5.0);
        }
        let ease = (dt * 1.5).min(1.0);
        self.x += (self.target_x - self.x) * ease;
        self.y += (self.target_y - self.y) * ease;
        self.shake = (self.shake - dt * 30.0).max(0.0);
    }
}
