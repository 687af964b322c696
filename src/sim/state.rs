//! Game state and phase transitions
//!
//! `GameState` is the whole simulation context. The caller owns it and passes
//! it by `&mut` into every command and tick; there is no global state.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::avatar::Avatar;
use super::obstacles::ObstacleField;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for the first flap
    Ready,
    /// Active gameplay
    Playing,
    /// Frozen mid-run
    Paused,
    /// Run ended, waiting for a flap to restart
    GameOver,
}

/// What ended a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeathCause {
    Floor,
    Obstacle,
}

/// Things that happened during a command or tick, for logging, persistence and sound
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Started,
    Flapped,
    Spawned { gap_y: f32 },
    Scored { score: u32 },
    Paused,
    Resumed,
    GameOver { score: u32, cause: DeathCause },
    NewBest { best: u32 },
}

/// Complete simulation context
#[derive(Debug, Clone)]
pub struct GameState {
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub avatar: Avatar,
    pub obstacles: ObstacleField,
    pub score: u32,
    /// Best score across runs (loaded by the caller at startup)
    pub best: u32,
    /// Simulated seconds in the current run
    pub run_time: f32,
    /// Simulated seconds since the last spawn
    pub spawn_clock: f32,
    pub(crate) rng: Pcg32,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game in the Ready phase
    pub fn new(seed: u64, best: u32) -> Self {
        Self::with_tuning(seed, best, Tuning::default())
    }

    pub fn with_tuning(seed: u64, best: u32, tuning: Tuning) -> Self {
        Self {
            tuning,
            phase: GamePhase::Ready,
            avatar: Avatar::spawn(&tuning),
            obstacles: ObstacleField::new(),
            score: 0,
            best,
            run_time: 0.0,
            spawn_clock: 0.0,
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
        }
    }

    /// Flap command (tap/click/space)
    ///
    /// Starts a fresh run from Ready or GameOver, lifts the avatar while
    /// Playing, and does nothing while Paused.
    pub fn flap(&mut self) {
        match self.phase {
            GamePhase::Ready | GamePhase::GameOver => self.start_run(),
            GamePhase::Playing => {
                self.avatar.flap(self.tuning.flap_velocity);
                self.events.push(GameEvent::Flapped);
            }
            GamePhase::Paused => {}
        }
    }

    /// Pause toggle; only meaningful mid-run
    pub fn toggle_pause(&mut self) {
        match self.phase {
            GamePhase::Playing => {
                self.phase = GamePhase::Paused;
                self.events.push(GameEvent::Paused);
            }
            GamePhase::Paused => {
                self.phase = GamePhase::Playing;
                self.events.push(GameEvent::Resumed);
            }
            GamePhase::Ready | GamePhase::GameOver => {}
        }
    }

    /// Full reset into Playing
    fn start_run(&mut self) {
        self.obstacles.clear();
        self.score = 0;
        self.avatar = Avatar::spawn(&self.tuning);
        self.run_time = 0.0;
        self.spawn_clock = 0.0;
        self.phase = GamePhase::Playing;
        self.events.push(GameEvent::Started);
    }

    /// Playing -> GameOver, updating the best score
    pub(crate) fn end_run(&mut self, cause: DeathCause) {
        self.phase = GamePhase::GameOver;
        self.events.push(GameEvent::GameOver {
            score: self.score,
            cause,
        });
        if self.score > self.best {
            self.best = self.score;
            self.events.push(GameEvent::NewBest { best: self.best });
        }
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all events recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Read-only view for the renderer
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            avatar: AvatarView {
                x: self.avatar.pos.x,
                y: self.avatar.pos.y,
                tilt: self.avatar.tilt,
                radius: self.avatar.radius,
            },
            obstacles: self
                .obstacles
                .obstacles
                .iter()
                .map(|o| ObstacleView {
                    x: o.x,
                    gap_y: o.gap_y,
                })
                .collect(),
            obstacle_width: self.tuning.obstacle_width,
            gap_height: self.tuning.gap_height,
            screen_width: self.tuning.screen_width,
            screen_height: self.tuning.screen_height,
            score: self.score,
            best: self.best,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvatarView {
    pub x: f32,
    pub y: f32,
    pub tilt: f32,
    pub radius: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleView {
    pub x: f32,
    pub gap_y: f32,
}

/// Everything the render collaborator needs for one frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub avatar: AvatarView,
    pub obstacles: Vec<ObstacleView>,
    pub obstacle_width: f32,
    pub gap_height: f32,
    pub screen_width: f32,
    pub screen_height: f32,
    pub score: u32,
    pub best: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::obstacles::Obstacle;

    #[test]
    fn test_initial_phase_is_ready() {
        let state = GameState::new(1, 0);
        assert_eq!(state.phase, GamePhase::Ready);
        assert!(state.obstacles.is_empty());
    }

    #[test]
    fn test_first_flap_starts_without_impulse() {
        let mut state = GameState::new(1, 0);
        state.flap();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.avatar.vel_y, 0.0);
        assert_eq!(state.drain_events(), vec![GameEvent::Started]);

        state.flap();
        assert_eq!(state.avatar.vel_y, state.tuning.flap_velocity);
        assert_eq!(state.drain_events(), vec![GameEvent::Flapped]);
    }

    #[test]
    fn test_pause_toggle() {
        let mut state = GameState::new(1, 0);

        // Ready ignores pause
        state.toggle_pause();
        assert_eq!(state.phase, GamePhase::Ready);

        state.flap();
        state.toggle_pause();
        assert_eq!(state.phase, GamePhase::Paused);
        state.toggle_pause();
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_flap_while_paused_is_noop() {
        let mut state = GameState::new(1, 0);
        state.flap();
        state.avatar.vel_y = 123.0;
        state.toggle_pause();
        state.drain_events();

        state.flap();
        assert_eq!(state.phase, GamePhase::Paused);
        assert_eq!(state.avatar.vel_y, 123.0);
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_game_over_updates_best() {
        let mut state = GameState::new(1, 3);
        state.flap();
        state.score = 5;
        state.drain_events();
        state.end_run(DeathCause::Obstacle);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.best, 5);
        assert_eq!(
            state.drain_events(),
            vec![
                GameEvent::GameOver {
                    score: 5,
                    cause: DeathCause::Obstacle
                },
                GameEvent::NewBest { best: 5 },
            ]
        );
    }

    #[test]
    fn test_game_over_keeps_higher_best() {
        let mut state = GameState::new(1, 5);
        state.flap();
        state.score = 2;
        state.end_run(DeathCause::Floor);
        assert_eq!(state.best, 5);
        assert!(
            !state
                .drain_events()
                .iter()
                .any(|e| matches!(e, GameEvent::NewBest { .. }))
        );
    }

    #[test]
    fn test_restart_from_game_over_resets() {
        let mut state = GameState::new(1, 0);
        state.flap();
        state.score = 4;
        state.run_time = 12.0;
        state.spawn_clock = 0.7;
        state.avatar.pos.y = 500.0;
        state.avatar.vel_y = 300.0;
        state.obstacles.obstacles.push(Obstacle::new(100.0, 300.0));
        state.end_run(DeathCause::Obstacle);

        state.flap();
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.score, 0);
        assert_eq!(state.run_time, 0.0);
        assert_eq!(state.spawn_clock, 0.0);
        assert_eq!(state.avatar, Avatar::spawn(&state.tuning));
        assert_eq!(state.best, 4);
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut state = GameState::new(1, 9);
        state.obstacles.obstacles.push(Obstacle::new(250.0, 310.0));
        let snap = state.snapshot();
        assert_eq!(snap.phase, GamePhase::Ready);
        assert_eq!(snap.best, 9);
        assert_eq!(snap.obstacles.len(), 1);
        assert_eq!(snap.obstacles[0].gap_y, 310.0);
        assert_eq!(snap.avatar.x, state.tuning.avatar_x);

        let json = serde_json::to_string(&snap).unwrap();
        assert!(json.contains("\"phase\":\"Ready\""));
    }
}
