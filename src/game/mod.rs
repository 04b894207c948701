//! Exploration-mode runtime: canvas bootstrap, scene routing and the
//! requestAnimationFrame loop.
//!
//! The hub is DOM-driven; pressing 1-3 enters an unlocked act (fade to a
//! short loading beat, then combat), Escape returns to the hub and marks the
//! act completed. Entering an act rolls the world theme through the
//! freshness selector so back-to-back runs stay varied, and flushes the
//! save.

use std::cell::RefCell;
use std::rc::Rc;

use log::{info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, window};

pub mod bullets;
pub mod camera;
pub mod clock;
pub mod enemies;
pub mod freshness;
pub mod painter;
pub mod particles;
pub mod pickups;
pub mod player;
pub mod rng;
pub mod runner;
pub mod save;
pub mod scene;
pub mod subsystem;
pub mod world;

use freshness::{FreshnessConfig, WeightedOption};
use painter::CanvasPainter;
use rng::{RandomSource, SeededRng};
use runner::GameLoop;
use save::ProfileMeta;
use scene::{Scene, SceneGate};

/// World theme candidates with their base weights. The freshness penalty
/// reshapes these per profile as themes get picked.
const ACT_THEMES: [(&str, f64); 5] = [
    ("asteroid_field", 3.0),
    ("nebula_drift", 2.0),
    ("derelict_fleet", 2.0),
    ("ion_storm", 1.0),
    ("pirate_blockade", 1.0),
];

const ACT_IDS: [&str; 3] = ["act1", "act2", "act3"];

/// Loading beat between the hub fade and combat, seconds.
const LOADING_HOLD: f64 = 0.6;

struct GameRuntime {
    game_loop: GameLoop,
    painter: CanvasPainter,
    canvas: HtmlCanvasElement,
    profile: ProfileMeta,
    rng: SeededRng,
    current_act: Option<String>,
    loading_remaining: f64,
    running: bool,
}

thread_local! {
    static GAME: RefCell<Option<GameRuntime>> = RefCell::new(None);
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

pub fn start() -> Result<(), JsValue> {
    let win = window().ok_or("no window")?;
    let doc = win.document().ok_or("no document")?;

    let canvas: HtmlCanvasElement = if let Some(el) = doc.get_element_by_id("bz-canvas") {
        el.dyn_into()?
    } else {
        let c: HtmlCanvasElement = doc.create_element("canvas")?.dyn_into()?;
        c.set_id("bz-canvas");
        c.set_width(960);
        c.set_height(600);
        c.set_attribute(
            "style",
            "position:fixed; left:50%; top:50%; transform:translate(-50%,-50%); \
             border:2px solid #222; border-radius:12px; background:#070811; z-index:10;",
        )
        .ok();
        doc.body().ok_or("no body")?.append_child(&c)?;
        c
    };
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or("no 2d context")?
        .dyn_into()?;
    ctx.set_font("16px 'Fira Code', monospace");
    ctx.set_text_align("center");

    let mut profile = match save::load() {
        Ok(Some(meta)) => meta,
        Ok(None) => ProfileMeta::new_profile(0),
        Err(err) => {
            warn!("save unavailable ({err}); running without persistence");
            ProfileMeta::new_profile(0)
        }
    };
    if profile.world_seed == 0 {
        profile.world_seed = derive_seed(&win);
        if let Err(err) = save::store(&profile) {
            warn!("could not persist new profile: {err}");
        }
    }
    info!(
        "BONZOOKAA exploration mode ready (seed {})",
        profile.world_seed
    );

    let now = win.performance().map(|p| p.now()).unwrap_or(0.0);
    let rng = SeededRng::new(profile.world_seed);
    let runtime = GameRuntime {
        game_loop: GameLoop::new(SceneGate::new(Scene::Hub), now),
        painter: CanvasPainter::new(ctx),
        canvas,
        profile,
        rng,
        current_act: None,
        loading_remaining: 0.0,
        running: true,
    };
    GAME.with(|cell| *cell.borrow_mut() = Some(runtime));
    set_status("HUB - press 1-3 to enter an act, Escape to return");

    install_key_listener(&doc)?;
    start_frame_loop();
    Ok(())
}

/// Clears the loop's re-arm flag; the current frame finishes and no next
/// frame is scheduled.
pub fn stop() {
    GAME.with(|cell| {
        if let Some(rt) = cell.borrow_mut().as_mut() {
            rt.running = false;
        }
    });
}

/// Seed for brand-new profiles. Not cryptographic; it only has to differ
/// between first launches.
fn derive_seed(win: &web_sys::Window) -> u64 {
    let now = win.performance().map(|p| p.now()).unwrap_or(1.0);
    (now as u64)
        .wrapping_mul(1664525)
        .wrapping_add(1013904223)
        | 1
}

fn install_key_listener(doc: &web_sys::Document) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(move |evt: web_sys::KeyboardEvent| {
        let key = evt.key();
        GAME.with(|cell| {
            if let Some(rt) = cell.borrow_mut().as_mut() {
                match key.as_str() {
                    "1" => rt.enter_act(0),
                    "2" => rt.enter_act(1),
                    "3" => rt.enter_act(2),
                    "Escape" => rt.leave_act(),
                    _ => {}
                }
            }
        });
    }) as Box<dyn FnMut(_)>);
    doc.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn start_frame_loop() {
    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        let keep_running = GAME.with(|cell| {
            if let Some(rt) = cell.borrow_mut().as_mut() {
                rt.frame(ts);
                rt.running
            } else {
                false
            }
        });
        if keep_running {
            if let Some(w) = window() {
                let _ = w
                    .request_animation_frame(f.borrow().as_ref().unwrap().as_ref().unchecked_ref());
            }
        }
    }) as Box<dyn FnMut(f64)>));
    if let Some(w) = window() {
        let _ = w.request_animation_frame(g.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}

fn set_status(text: &str) {
    if let Some(doc) = window().and_then(|w| w.document()) {
        if let Some(el) = doc.get_element_by_id("bz-status") {
            el.set_text_content(Some(text));
        }
    }
}

impl GameRuntime {
    fn frame(&mut self, ts: f64) {
        let width = self.canvas.width() as f64;
        let height = self.canvas.height() as f64;
        let dt = self.game_loop.frame(ts, &mut self.painter, width, height);

        // Loading is a timed beat: hold behind the fade, then cut to combat.
        if self.game_loop.gate.current() == Scene::Loading {
            self.loading_remaining -= dt;
            if self.loading_remaining <= 0.0 && !self.game_loop.gate.transitioning() {
                self.game_loop.gate.begin(Scene::Combat, 0.4);
            }
        }
    }

    fn enter_act(&mut self, act_index: usize) {
        if self.game_loop.gate.current() != Scene::Hub {
            return;
        }
        let Some(act_id) = ACT_IDS.get(act_index).copied() else {
            return;
        };
        if !self.profile.act_unlocked(act_id) {
            set_status(&format!("{act_id} is locked - complete the previous act"));
            return;
        }

        let theme = self.roll_theme();
        info!("entering {act_id} ({theme})");
        set_status(&format!("{act_id} - {theme}"));

        // Fresh subsystem set per run; each forks its own stream off the
        // run seed so one spawner's draws never shift another's.
        let run_seed = (self.rng.next_f64() * 9_007_199_254_740_992.0) as u64;
        self.game_loop.camera = Box::new(camera::Camera::new(run_seed));
        self.game_loop.world = Box::new(world::World::new(run_seed, &theme));
        self.game_loop.player = Box::new(player::Player::new(run_seed));
        self.game_loop.enemies = Box::new(enemies::Enemies::new(run_seed));
        self.game_loop.bullets = Box::new(bullets::Bullets::new(run_seed));
        self.game_loop.pickups = Box::new(pickups::Pickups::new(run_seed));
        self.game_loop.particles = Box::new(particles::Particles::new(run_seed));

        self.current_act = Some(act_id.to_owned());
        self.loading_remaining = LOADING_HOLD;
        self.game_loop.gate.begin(Scene::Loading, 0.5);
    }

    fn leave_act(&mut self) {
        if !self.game_loop.gate.current().simulates() {
            return;
        }
        if let Some(act_id) = self.current_act.take() {
            self.profile.acts_completed.insert(act_id.clone(), true);
            if let Some(pos) = ACT_IDS.iter().position(|id| *id == act_id) {
                if let Some(next) = ACT_IDS.get(pos + 1) {
                    self.profile.acts_unlocked.insert((*next).to_owned(), true);
                }
            }
            if let Err(err) = save::store(&self.profile) {
                warn!("save failed: {err}");
            }
            info!("{act_id} complete");
        }
        set_status("HUB - press 1-3 to enter an act, Escape to return");
        self.game_loop.gate.begin(Scene::Hub, 0.4);
    }

    /// Weighted theme roll, biased away from recent picks, committed to the
    /// freshness history and flushed to the save.
    fn roll_theme(&mut self) -> String {
        let cfg = FreshnessConfig::default();
        freshness::ensure(&mut self.profile, &cfg);
        let options: Vec<WeightedOption<&str>> = ACT_THEMES
            .iter()
            .map(|(id, w)| WeightedOption::new(*id, *w))
            .collect();
        let theme = match freshness::pick(&mut self.rng, &options, None, &self.profile, &cfg) {
            Some(sel) => {
                freshness::push(&mut self.profile, &sel.key);
                sel.key
            }
            None => "asteroid_field".to_owned(),
        };
        if let Err(err) = save::store(&self.profile) {
            warn!("save failed: {err}");
        }
        theme
    }
}
