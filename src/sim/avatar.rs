//! The player-controlled avatar and its vertical physics

use glam::Vec2;

use crate::consts::{TILT_DOWN_LIMIT, TILT_EASE_RATE, TILT_FLAP};
use crate::tuning::Tuning;

/// The single falling entity
#[derive(Debug, Clone, PartialEq)]
pub struct Avatar {
    /// Centre position; x never changes during a run
    pub pos: Vec2,
    /// Vertical velocity (px/s, positive is down)
    pub vel_y: f32,
    pub radius: f32,
    /// Cosmetic tilt (radians), no effect on physics or collision
    pub tilt: f32,
}

impl Avatar {
    /// Avatar at the start position for `tuning`, at rest
    pub fn spawn(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.avatar_x, tuning.avatar_start_y()),
            vel_y: 0.0,
            radius: tuning.avatar_radius,
            tilt: 0.0,
        }
    }

    /// Accelerate downward, capped at terminal velocity
    pub fn apply_gravity(&mut self, dt: f32, gravity: f32, terminal_velocity: f32) {
        self.vel_y = (self.vel_y + gravity * dt).min(terminal_velocity);
    }

    /// Discrete impulse: velocity is replaced, not added to
    pub fn flap(&mut self, flap_velocity: f32) {
        self.vel_y = flap_velocity;
        self.tilt = TILT_FLAP;
    }

    pub fn integrate(&mut self, dt: f32) {
        self.pos.y += self.vel_y * dt;
    }

    /// Ease the tilt toward the nose-down limit
    pub fn ease_tilt(&mut self, dt: f32) {
        let t = (TILT_EASE_RATE * dt).min(1.0);
        self.tilt += (TILT_DOWN_LIMIT - self.tilt) * t;
    }

    /// Soft stop at the top of the screen: position pinned, velocity zeroed
    pub fn clamp_to_ceiling(&mut self) {
        if self.pos.y - self.radius <= 0.0 {
            self.pos.y = self.radius;
            self.vel_y = 0.0;
        }
    }

    /// Pin to the floor. Returns true when the floor was reached, which ends the run.
    pub fn clamp_to_floor(&mut self, screen_height: f32) -> bool {
        if self.pos.y + self.radius >= screen_height {
            self.pos.y = screen_height - self.radius;
            true
        } else {
            false
        }
    }
}
