//! Scene state and transitions.
//!
//! Exactly one scene is current at a time and gates which subsystems
//! simulate. A transition is not a scene: it is a time-bounded fade curtain
//! that animates every frame regardless of what the current scene is, and
//! draws on top of everything else.

use super::painter::Painter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scene {
    /// DOM-driven town/stash screen; no per-frame simulation.
    Hub,
    /// Act generation pause. Simulates so spawners can warm up behind the fade.
    Loading,
    /// Real-time combat inside an act.
    Combat,
}

impl Scene {
    /// Whether the seven simulation subsystems run in this scene.
    pub fn simulates(self) -> bool {
        matches!(self, Scene::Loading | Scene::Combat)
    }
}

#[derive(Debug, Clone, Copy)]
struct Transition {
    to: Scene,
    elapsed: f64,
    duration: f64,
    switched: bool,
}

/// Owns the current scene and any in-flight fade.
#[derive(Debug)]
pub struct SceneGate {
    scene: Scene,
    transition: Option<Transition>,
}

impl SceneGate {
    pub fn new(initial: Scene) -> Self {
        Self {
            scene: initial,
            transition: None,
        }
    }

    pub fn current(&self) -> Scene {
        self.scene
    }

    pub fn transitioning(&self) -> bool {
        self.transition.is_some()
    }

    /// Immediate scene change without a fade (startup only).
    pub fn set_scene(&mut self, scene: Scene) {
        self.scene = scene;
        self.transition = None;
    }

    /// Starts a fade toward `to`. A fade already in flight is replaced.
    pub fn begin(&mut self, to: Scene, duration: f64) {
        self.transition = Some(Transition {
            to,
            elapsed: 0.0,
            duration: duration.max(0.01),
            switched: false,
        });
    }

    /// Advances the fade. Called every frame, before any scene gating: a
    /// curtain keeps animating even while gameplay is gated off. The logical
    /// scene flips at the fade midpoint, when the curtain is fully opaque.
    pub fn update_transition(&mut self, dt: f64) {
        let Some(tr) = self.transition.as_mut() else {
            return;
        };
        tr.elapsed += dt;
        if !tr.switched && tr.elapsed >= tr.duration * 0.5 {
            self.scene = tr.to;
            tr.switched = true;
        }
        if tr.elapsed >= tr.duration {
            self.transition = None;
        }
    }

    /// Curtain opacity: ramps 0→1 to the midpoint, back to 0 after. Zero
    /// when no transition is in flight.
    pub fn overlay_alpha(&self) -> f64 {
        let Some(tr) = self.transition.as_ref() else {
            return 0.0;
        };
        let t = (tr.elapsed / tr.duration).clamp(0.0, 1.0);
        if t < 0.5 { t * 2.0 } else { (1.0 - t) * 2.0 }
    }

    /// Fade curtain over the full surface. Always drawn after all gameplay
    /// drawing.
    pub fn draw_transition_overlay(&self, p: &mut dyn Painter, width: f64, height: f64) {
        let alpha = self.overlay_alpha();
        if alpha <= 0.0 {
            return;
        }
        p.fill_rect(0.0, 0.0, width, height, &format!("rgba(0,0,0,{alpha:.3})"));
    }
}
