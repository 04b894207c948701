//! Frame timing.

/// Upper bound on a single frame's delta, in seconds. Tab stalls and
/// debugger pauses otherwise hand the simulation a multi-second step.
pub const MAX_FRAME_DT: f64 = 0.05;

/// Tracks the previous frame's timestamp and derives a clamped delta.
/// Owned exclusively by the game loop.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    last_ms: f64,
}

impl FrameClock {
    /// `now_ms` is a `performance.now()`-style millisecond timestamp.
    pub fn new(now_ms: f64) -> Self {
        Self { last_ms: now_ms }
    }

    /// Advances the clock and returns the delta in seconds, clamped to
    /// [0, MAX_FRAME_DT]. A timestamp that went backwards yields 0.
    pub fn tick(&mut self, now_ms: f64) -> f64 {
        let dt = ((now_ms - self.last_ms) / 1000.0).clamp(0.0, MAX_FRAME_DT);
        self.last_ms = now_ms;
        dt
    }
}
