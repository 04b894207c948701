//! BONZOOKAA client core crate.
//!
//! Exploration-mode runtime for the browser: a DOM-driven hub, procedurally
//! varied acts and a real-time canvas combat loop. The interesting machinery
//! lives in `game::freshness` (save-persisted anti-repetition picks) and
//! `game::runner` (the per-frame update/draw orchestration); everything is
//! exposed to the page through `start_game()`.

use wasm_bindgen::prelude::*;

pub mod game;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

struct ConsoleLogger;

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::Level::Info
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!("{}", record.args());
        match record.level() {
            log::Level::Error => web_sys::console::error_1(&line.into()),
            log::Level::Warn => web_sys::console::warn_1(&line.into()),
            _ => web_sys::console::log_1(&line.into()),
        }
    }

    fn flush(&self) {}
}

static LOGGER: ConsoleLogger = ConsoleLogger;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(log::LevelFilter::Info);
    }
}

/// Boots the exploration runtime: canvas, save profile, input routing and
/// the frame loop. Canvas lookup is idempotent, so a page can call this
/// again after replacing its DOM.
#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    game::start()
}

/// Stops scheduling frames. Runtime state (and the save) stay intact;
/// `start_game` boots a fresh runtime.
#[wasm_bindgen]
pub fn stop_game() {
    game::stop();
}
