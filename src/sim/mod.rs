//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of platform
//! concerns:
//! - Caller-owned state only, no globals
//! - Seeded RNG only
//! - Variable timestep, clamped by the caller
//! - No rendering, storage or input dependencies

pub mod autopilot;
pub mod avatar;
pub mod collision;
pub mod obstacles;
pub mod state;
pub mod tick;

pub use avatar::Avatar;
pub use collision::{Rect, circle_intersects_rect, clamp};
pub use obstacles::{Obstacle, ObstacleField};
pub use state::{
    AvatarView, DeathCause, GameEvent, GamePhase, GameState, ObstacleView, Snapshot,
};
pub use tick::tick;
