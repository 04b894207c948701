//! The uniform contract every simulation subsystem satisfies.

use super::painter::Painter;

/// Shared per-frame context handed to every update and draw call. Subsystems
/// use the surface dimensions for bounds and layout; they own everything
/// else themselves.
#[derive(Debug, Clone, Copy)]
pub struct FrameContext {
    pub width: f64,
    pub height: f64,
}

/// Update/draw contract composed by the game loop in a fixed order. Both
/// methods default to no-ops so a subsystem that only simulates (camera) or
/// only renders needs no stub code.
pub trait Subsystem {
    fn update(&mut self, _dt: f64, _ctx: &FrameContext) {}
    fn draw(&self, _p: &mut dyn Painter, _ctx: &FrameContext) {}
}

/// Stand-in occupying a loop slot before the real subsystem is installed.
/// A frame during partial initialization is a sequence of no-ops, never a
/// failure.
pub struct Noop;

impl Subsystem for Noop {}
