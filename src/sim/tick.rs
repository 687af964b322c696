//! Per-frame simulation step
//!
//! Advances avatar physics, obstacle spawning/scrolling, scoring and
//! collision by one variable `dt`. Runs only while Playing.

use super::state::{DeathCause, GameEvent, GamePhase, GameState};

/// Advance the game state by `dt` seconds (already clamped by the frame clock)
pub fn tick(state: &mut GameState, dt: f32) {
    // Ready, Paused and GameOver are frozen
    if state.phase != GamePhase::Playing {
        return;
    }

    let tuning = state.tuning;
    state.run_time += dt;

    // Avatar physics
    let avatar = &mut state.avatar;
    avatar.apply_gravity(dt, tuning.gravity, tuning.terminal_velocity);
    avatar.integrate(dt);
    avatar.ease_tilt(dt);
    avatar.clamp_to_ceiling();
    if avatar.clamp_to_floor(tuning.screen_height) {
        log::debug!("Hit the floor at t={:.2}s", state.run_time);
        state.end_run(DeathCause::Floor);
        return;
    }

    // Spawn cadence runs on simulated time only
    state.spawn_clock += dt;
    if state.spawn_clock >= tuning.spawn_interval {
        state.spawn_clock = 0.0;
        let gap_y = state.obstacles.spawn(&mut state.rng, &tuning);
        log::debug!("Spawned obstacle with gap at y={gap_y:.1}");
        state.push_event(GameEvent::Spawned { gap_y });
    }

    // Reverse index order so removal never skips or revisits an obstacle
    let center = state.avatar.pos;
    let radius = state.avatar.radius;
    for i in (0..state.obstacles.len()).rev() {
        let obstacle = &mut state.obstacles.obstacles[i];
        obstacle.advance(dt, tuning.obstacle_speed);

        if obstacle.try_pass(center.x, tuning.obstacle_width) {
            state.score += 1;
            let score = state.score;
            log::debug!("Passed obstacle, score {score}");
            state.push_event(GameEvent::Scored { score });
        }

        let obstacle = &state.obstacles.obstacles[i];
        if obstacle.is_offscreen(&tuning) {
            state.obstacles.obstacles.remove(i);
            continue;
        }

        if obstacle.collides(center, radius, &tuning) {
            log::debug!("Hit obstacle at x={:.1}", obstacle.x);
            state.end_run(DeathCause::Obstacle);
            return;
        }
    }
}
