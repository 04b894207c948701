//! Act backdrop: a scrolling two-layer starfield tinted by the act theme.

use super::painter::Painter;
use super::rng::{RandomSource, SeededRng};
use super::subsystem::{FrameContext, Subsystem};

struct Star {
    // Normalized [0,1) coordinates, scaled to the surface at draw time so a
    // resize never tears the field.
    x: f64,
    y: f64,
    speed: f64,
    radius: f64,
}

pub struct World {
    stars: Vec<Star>,
    tint: &'static str,
}

impl World {
    pub fn new(seed: u64, theme: &str) -> Self {
        let mut rng = SeededRng::fork(seed, 2);
        let stars = (0..96)
            .map(|_| Star {
                x: rng.next_f64(),
                y: rng.next_f64(),
                speed: rng.next_range(0.02, 0.14),
                radius: rng.next_range(0.6, 1.9),
            })
            .collect();
        Self {
            stars,
            tint: theme_tint(theme),
        }
    }
}

/// Star color per act theme; unknown themes get the neutral palette.
fn theme_tint(theme: &str) -> &'static str {
    match theme {
        "nebula_drift" => "#c9a2e8",
        "ion_storm" => "#8fd8ff",
        "derelict_fleet" => "#b8b8a8",
        "pirate_blockade" => "#e8a2a2",
        _ => "#9fb4ff",
    }
}

impl Subsystem for World {
    fn update(&mut self, dt: f64, _ctx: &FrameContext) {
        for star in &mut self.stars {
            star.y += star.speed * dt;
            if star.y >= 1.0 {
                star.y -= 1.0;
            }
        }
    }

    fn draw(&self, p: &mut dyn Painter, ctx: &FrameContext) {
        for star in &self.stars {
            p.fill_circle(
                star.x * ctx.width,
                star.y * ctx.height,
                star.radius,
                self.tint,
            );
        }
    }
}
