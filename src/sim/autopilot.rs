//! Demo mode controller
//!
//! Decides when to flap so the game can play itself (headless demo, attract
//! screen). Purely a function of the current state, so runs stay deterministic.

use super::state::{GamePhase, GameState};

/// How far below the gap centre the avatar may sink before flapping
const AIM_BELOW_CENTER: f32 = 18.0;

/// Don't flap again while still rising faster than this (px/s)
const MAX_RISE_SPEED: f32 = -300.0;

/// Gap centre of the nearest obstacle still ahead of (or under) the avatar
pub fn target_y(state: &GameState) -> f32 {
    let avatar_left = state.avatar.pos.x - state.avatar.radius;
    state
        .obstacles
        .obstacles
        .iter()
        .filter(|o| o.right_edge(state.tuning.obstacle_width) >= avatar_left)
        .min_by(|a, b| a.x.total_cmp(&b.x))
        .map(|o| o.gap_y)
        .unwrap_or(state.tuning.screen_height / 2.0)
}

/// Should the autopilot flap this frame?
pub fn wants_flap(state: &GameState) -> bool {
    match state.phase {
        GamePhase::Playing => {
            let below_target = state.avatar.pos.y > target_y(state) + AIM_BELOW_CENTER;
            below_target && state.avatar.vel_y > MAX_RISE_SPEED
        }
        GamePhase::Ready | GamePhase::GameOver | GamePhase::Paused => false,
    }
}
