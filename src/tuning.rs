//! Gameplay balance as a value
//!
//! The shipped game always runs on [`Tuning::default`], which is built from
//! [`crate::consts`]. Keeping the numbers in one `Copy` struct lets the
//! simulation take them by value and lets tests build alternate playfields.

use serde::{Deserialize, Serialize};

use crate::consts::*;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    pub screen_width: f32,
    pub screen_height: f32,

    // === Avatar ===
    pub gravity: f32,
    pub flap_velocity: f32,
    pub terminal_velocity: f32,
    pub avatar_radius: f32,
    pub avatar_x: f32,

    // === Obstacles ===
    pub obstacle_speed: f32,
    pub obstacle_width: f32,
    pub gap_height: f32,
    pub obstacle_margin: f32,
    pub spawn_interval: f32,
    pub reap_margin: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,

            gravity: GRAVITY,
            flap_velocity: FLAP_VELOCITY,
            terminal_velocity: TERMINAL_VELOCITY,
            avatar_radius: AVATAR_RADIUS,
            avatar_x: AVATAR_X,

            obstacle_speed: OBSTACLE_SPEED,
            obstacle_width: OBSTACLE_WIDTH,
            gap_height: GAP_HEIGHT,
            obstacle_margin: OBSTACLE_MARGIN,
            spawn_interval: SPAWN_INTERVAL,
            reap_margin: REAP_MARGIN,
        }
    }
}

impl Tuning {
    /// Lowest allowed gap centre (smallest y)
    pub fn min_gap_y(&self) -> f32 {
        self.obstacle_margin + self.gap_height / 2.0
    }

    /// Highest allowed gap centre (largest y)
    pub fn max_gap_y(&self) -> f32 {
        self.screen_height - self.obstacle_margin - self.gap_height / 2.0
    }

    /// Where the avatar starts each run
    pub fn avatar_start_y(&self) -> f32 {
        self.screen_height / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_gap_range_fits_screen() {
        let tuning = Tuning::default();
        assert!(tuning.min_gap_y() < tuning.max_gap_y());
        assert!(tuning.min_gap_y() - tuning.gap_height / 2.0 >= tuning.obstacle_margin);
        assert!(
            tuning.max_gap_y() + tuning.gap_height / 2.0
                <= tuning.screen_height - tuning.obstacle_margin
        );
    }

    #[test]
    fn test_avatar_starts_inside_bounds() {
        let tuning = Tuning::default();
        let y = tuning.avatar_start_y();
        assert!(y > tuning.avatar_radius);
        assert!(y < tuning.screen_height - tuning.avatar_radius);
    }
}
