//! Flapgap - a side-scrolling flap-through-the-gap arcade game
//!
//! Core modules:
//! - `sim`: Simulation (avatar physics, obstacles, collisions, game phases)
//! - `frame`: Variable-timestep frame clock
//! - `game`: Caller-owned game context wiring the sim to persistence
//! - `persistence`: Best-score storage
//! - `platform`: Browser bindings (wasm32 only)
//! - `tuning`: Gameplay constants as a value

pub mod frame;
pub mod game;
pub mod persistence;
pub mod platform;
pub mod sim;
pub mod tuning;

pub use frame::FrameClock;
pub use game::Game;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (logical pixels)
    pub const SCREEN_WIDTH: f32 = 400.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Downward acceleration (px/s²)
    pub const GRAVITY: f32 = 1500.0;
    /// Velocity set by a flap (negative is up)
    pub const FLAP_VELOCITY: f32 = -420.0;
    /// Downward speed cap
    pub const TERMINAL_VELOCITY: f32 = 650.0;

    /// Avatar defaults
    pub const AVATAR_RADIUS: f32 = 14.0;
    pub const AVATAR_X: f32 = SCREEN_WIDTH * 0.3;

    /// Cosmetic tilt (radians)
    pub const TILT_FLAP: f32 = -0.45;
    pub const TILT_DOWN_LIMIT: f32 = 1.2;
    /// Easing rate toward the down limit (1/s)
    pub const TILT_EASE_RATE: f32 = 3.0;

    /// Obstacle defaults
    pub const OBSTACLE_SPEED: f32 = 150.0;
    pub const OBSTACLE_WIDTH: f32 = 64.0;
    pub const GAP_HEIGHT: f32 = 160.0;
    /// Minimum distance between the gap and the top/bottom of the screen
    pub const OBSTACLE_MARGIN: f32 = 40.0;
    /// Seconds of simulated time between spawns
    pub const SPAWN_INTERVAL: f32 = 1.4;
    /// Obstacles are reaped once their right edge is this far left of x = 0
    pub const REAP_MARGIN: f32 = 10.0;

    /// Largest dt fed into the simulation (backgrounded tab, debugger pause)
    pub const MAX_FRAME_DT: f32 = 1.0 / 30.0;
}
