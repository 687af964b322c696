//! Flapgap entry point
//!
//! On wasm32 the library's `#[wasm_bindgen(start)]` hook does the setup and JS
//! drives the frame loop. Natively this runs a headless autopilot demo.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use flapgap::Game;
    use flapgap::persistence::FileStore;
    use flapgap::platform::session_seed;
    use flapgap::sim::{GamePhase, autopilot};

    /// 60 Hz display refresh
    const FRAME_MS: f64 = 1000.0 / 60.0;
    /// Frames to linger on the game-over screen before restarting
    const RESTART_DELAY_FRAMES: u32 = 45;

    env_logger::init();
    log::info!("Flapgap (native) starting headless demo...");

    let frames: u64 = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(60 * 120);

    let store = FileStore::new(std::env::temp_dir().join("flapgap").join("best.json"));
    log::info!("Best score file: {}", store.path().display());
    let mut game = Game::new(session_seed(), Box::new(store));

    let mut runs = 0u32;
    let mut game_over_frames = 0u32;
    for frame in 0..frames {
        match game.state().phase {
            GamePhase::Ready => {
                game.flap();
                runs += 1;
            }
            GamePhase::GameOver => {
                game_over_frames += 1;
                if game_over_frames >= RESTART_DELAY_FRAMES {
                    game_over_frames = 0;
                    game.flap();
                    runs += 1;
                }
            }
            GamePhase::Playing => {
                if autopilot::wants_flap(game.state()) {
                    game.flap();
                }
            }
            GamePhase::Paused => game.toggle_pause(),
        }
        game.frame(frame as f64 * FRAME_MS);
    }

    let state = game.state();
    println!(
        "{} frames, {} runs, last score {}, best {}",
        frames, runs, state.score, state.best
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is `flapgap::platform::web::start`, this is just to satisfy the compiler
}
