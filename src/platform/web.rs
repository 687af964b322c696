//! Browser bindings
//!
//! JS owns the canvas, the input listeners and the `requestAnimationFrame`
//! loop. Each frame it calls `frame(time)` and draws the returned snapshot.

use wasm_bindgen::prelude::*;

use crate::Game;
use crate::persistence::LocalStorageStore;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"flapgap: logger already initialised".into());
    }
    log::info!("Flapgap starting...");
}

#[wasm_bindgen]
pub struct WebGame {
    game: Game,
}

#[wasm_bindgen]
impl WebGame {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WebGame {
        WebGame {
            game: Game::new(super::session_seed(), Box::new(LocalStorageStore::default())),
        }
    }

    /// Advance one display frame; returns the scene as JSON for the renderer
    pub fn frame(&mut self, time: f64) -> String {
        self.game.frame(time);
        self.snapshot()
    }

    pub fn flap(&mut self) {
        self.game.flap();
    }

    #[wasm_bindgen(js_name = togglePause)]
    pub fn toggle_pause(&mut self) {
        self.game.toggle_pause();
    }

    pub fn snapshot(&self) -> String {
        serde_json::to_string(&self.game.snapshot()).unwrap_or_else(|e| {
            log::error!("Snapshot serialization failed: {e}");
            String::from("{}")
        })
    }

    pub fn fps(&self) -> Option<f32> {
        self.game.fps()
    }
}

impl Default for WebGame {
    fn default() -> Self {
        Self::new()
    }
}
