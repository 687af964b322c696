//! Caller-owned game context
//!
//! Owns the simulation state, the frame clock and the best-score store.
//! Platform code feeds it timestamps and input commands, then renders from
//! [`Game::snapshot`] after every frame regardless of phase.

use crate::frame::FrameClock;
use crate::persistence::{BestScoreStore, load_best_or_default};
use crate::sim::{GameEvent, GameState, Snapshot, tick};

pub struct Game {
    state: GameState,
    clock: FrameClock,
    store: Box<dyn BestScoreStore>,
}

impl Game {
    /// Create a game in the Ready phase, loading the best score from `store`
    pub fn new(seed: u64, store: Box<dyn BestScoreStore>) -> Self {
        let best = load_best_or_default(&*store);
        log::info!("Best score so far: {best}");
        Self {
            state: GameState::new(seed, best),
            clock: FrameClock::new(),
            store,
        }
    }

    /// Flap input; applied immediately
    pub fn flap(&mut self) {
        self.state.flap();
        self.dispatch_events();
    }

    /// Pause-toggle input; applied immediately
    pub fn toggle_pause(&mut self) {
        self.state.toggle_pause();
        self.dispatch_events();
    }

    /// Run one display frame at `timestamp_ms`. Returns the clamped dt used.
    pub fn frame(&mut self, timestamp_ms: f64) -> f32 {
        let dt = self.clock.advance(timestamp_ms);
        tick(&mut self.state, dt);
        self.dispatch_events();
        dt
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    pub fn fps(&self) -> Option<f32> {
        self.clock.fps()
    }

    fn dispatch_events(&mut self) {
        for event in self.state.drain_events() {
            match event {
                GameEvent::Started => log::info!("Run started"),
                GameEvent::Paused => log::info!("Paused"),
                GameEvent::Resumed => log::info!("Resumed"),
                GameEvent::GameOver { score, cause } => {
                    log::info!("Game over ({cause:?}) with score {score}");
                }
                GameEvent::NewBest { best } => {
                    log::info!("New best score: {best}");
                    // The in-memory best is already updated; a failed save only loses it on restart
                    if let Err(e) = self.store.save_best(best) {
                        log::warn!("Could not save best score {best}: {e}");
                    }
                }
                GameEvent::Flapped | GameEvent::Spawned { .. } | GameEvent::Scored { .. } => {}
            }
        }
    }
}
