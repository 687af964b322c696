//! Scrolling gap obstacles
//!
//! Each obstacle is a pair of solid rectangles with a vertical gap between
//! them. The field spawns them off the right edge, scrolls them left, marks
//! them passed once they clear the avatar, and drops them once invisible.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::collision::{Rect, circle_intersects_rect};
use crate::tuning::Tuning;

/// A gap pair
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    /// Left edge
    pub x: f32,
    /// Centre of the gap
    pub gap_y: f32,
    /// Set once the right edge has crossed left of the avatar
    pub passed: bool,
}

impl Obstacle {
    pub fn new(x: f32, gap_y: f32) -> Self {
        Self {
            x,
            gap_y,
            passed: false,
        }
    }

    pub fn advance(&mut self, dt: f32, speed: f32) {
        self.x -= speed * dt;
    }

    pub fn right_edge(&self, width: f32) -> f32 {
        self.x + width
    }

    /// Mark as passed if the right edge is left of `avatar_x`.
    /// Returns true only on the transition, so each obstacle scores once.
    pub fn try_pass(&mut self, avatar_x: f32, width: f32) -> bool {
        if !self.passed && self.right_edge(width) < avatar_x {
            self.passed = true;
            return true;
        }
        false
    }

    pub fn is_offscreen(&self, tuning: &Tuning) -> bool {
        self.right_edge(tuning.obstacle_width) < -tuning.reap_margin
    }

    /// The solid top and bottom rectangles
    pub fn rects(&self, tuning: &Tuning) -> [Rect; 2] {
        let half_gap = tuning.gap_height / 2.0;
        let top = Rect::new(
            Vec2::new(self.x, 0.0),
            Vec2::new(self.x + tuning.obstacle_width, self.gap_y - half_gap),
        );
        let bottom = Rect::new(
            Vec2::new(self.x, self.gap_y + half_gap),
            Vec2::new(self.x + tuning.obstacle_width, tuning.screen_height),
        );
        [top, bottom]
    }

    /// Does a circle touch either solid half?
    pub fn collides(&self, center: Vec2, radius: f32, tuning: &Tuning) -> bool {
        self.rects(tuning)
            .iter()
            .any(|rect| circle_intersects_rect(center, radius, rect))
    }
}

/// The live set of obstacles, oldest first
#[derive(Debug, Clone, Default)]
pub struct ObstacleField {
    pub obstacles: Vec<Obstacle>,
}

impl ObstacleField {
    pub fn new() -> Self {
        Self {
            obstacles: Vec::new(),
        }
    }

    pub fn clear(&mut self) {
        self.obstacles.clear();
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    /// Append a new obstacle just past the right edge with a random gap.
    /// Returns the chosen gap centre.
    pub fn spawn(&mut self, rng: &mut Pcg32, tuning: &Tuning) -> f32 {
        let lo = tuning.min_gap_y();
        let hi = tuning.max_gap_y();
        let gap_y = if lo < hi {
            rng.random_range(lo..=hi)
        } else {
            // Gap plus margins taller than the screen
            tuning.screen_height / 2.0
        };

        let x = tuning.screen_width + tuning.obstacle_width;
        self.obstacles.push(Obstacle::new(x, gap_y));
        gap_y
    }

    pub fn advance(&mut self, dt: f32, speed: f32) {
        for obstacle in &mut self.obstacles {
            obstacle.advance(dt, speed);
        }
    }

    /// Drop every obstacle that has scrolled fully off the left edge.
    /// Returns how many were removed.
    pub fn reap_offscreen(&mut self, tuning: &Tuning) -> usize {
        let before = self.obstacles.len();
        self.obstacles.retain(|o| !o.is_offscreen(tuning));
        before - self.obstacles.len()
    }

    /// Mark newly passed obstacles; returns the number of score increments
    pub fn score_passed(&mut self, avatar_x: f32, width: f32) -> u32 {
        let mut scored = 0;
        for obstacle in &mut self.obstacles {
            if obstacle.try_pass(avatar_x, width) {
                scored += 1;
            }
        }
        scored
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_spawn_gap_stays_in_bounds() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(7);
        let mut field = ObstacleField::new();

        for _ in 0..1000 {
            let gap_y = field.spawn(&mut rng, &tuning);
            assert!(gap_y >= tuning.obstacle_margin + tuning.gap_height / 2.0);
            assert!(gap_y <= tuning.screen_height - tuning.obstacle_margin - tuning.gap_height / 2.0);
        }
        assert_eq!(field.len(), 1000);
        assert!(
            field
                .obstacles
                .iter()
                .all(|o| o.x == tuning.screen_width + tuning.obstacle_width && !o.passed)
        );
    }

    #[test]
    fn test_spawn_with_oversized_gap_centres() {
        let tuning = Tuning {
            gap_height: 700.0,
            ..Tuning::default()
        };
        let mut rng = Pcg32::seed_from_u64(1);
        let mut field = ObstacleField::new();
        assert_eq!(field.spawn(&mut rng, &tuning), tuning.screen_height / 2.0);
    }

    #[test]
    fn test_advance_moves_left() {
        let mut field = ObstacleField::new();
        field.obstacles.push(Obstacle::new(200.0, 300.0));
        field.obstacles.push(Obstacle::new(400.0, 300.0));
        field.advance(0.5, 100.0);
        assert_eq!(field.obstacles[0].x, 150.0);
        assert_eq!(field.obstacles[1].x, 350.0);
    }

    #[test]
    fn test_pass_scores_once() {
        let width = 64.0;
        let avatar_x = 120.0;
        let mut obstacle = Obstacle::new(avatar_x - width + 1.0, 300.0);

        // Right edge still right of the avatar
        assert!(!obstacle.try_pass(avatar_x, width));
        assert!(!obstacle.passed);

        obstacle.advance(0.02, 100.0);
        assert!(obstacle.try_pass(avatar_x, width));
        assert!(obstacle.passed);

        for _ in 0..10 {
            obstacle.advance(0.02, 100.0);
            assert!(!obstacle.try_pass(avatar_x, width));
        }
    }

    #[test]
    fn test_score_passed_counts_each_obstacle_once() {
        let mut field = ObstacleField::new();
        field.obstacles.push(Obstacle::new(0.0, 300.0));
        field.obstacles.push(Obstacle::new(20.0, 300.0));
        field.obstacles.push(Obstacle::new(300.0, 300.0));

        assert_eq!(field.score_passed(120.0, 64.0), 2);
        assert_eq!(field.score_passed(120.0, 64.0), 0);
        assert!(!field.obstacles[2].passed);
    }

    #[test]
    fn test_reap_keeps_the_rest() {
        let tuning = Tuning::default();
        let mut field = ObstacleField::new();
        // Right edge at -11: gone
        field.obstacles.push(Obstacle::new(-tuning.obstacle_width - 11.0, 250.0));
        // Right edge at -5: still inside the threshold
        field.obstacles.push(Obstacle::new(-tuning.obstacle_width - 5.0, 260.0));
        field.obstacles.push(Obstacle::new(200.0, 270.0));

        assert_eq!(field.reap_offscreen(&tuning), 1);
        let gaps: Vec<f32> = field.obstacles.iter().map(|o| o.gap_y).collect();
        assert_eq!(gaps, vec![260.0, 270.0]);
    }

    #[test]
    fn test_rects_leave_the_gap_open() {
        let tuning = Tuning::default();
        let obstacle = Obstacle::new(100.0, 300.0);
        let [top, bottom] = obstacle.rects(&tuning);
        assert_eq!(top.min.y, 0.0);
        assert_eq!(top.max.y, 300.0 - tuning.gap_height / 2.0);
        assert_eq!(bottom.min.y, 300.0 + tuning.gap_height / 2.0);
        assert_eq!(bottom.max.y, tuning.screen_height);

        let x_mid = 100.0 + tuning.obstacle_width / 2.0;
        assert!(!obstacle.collides(Vec2::new(x_mid, 300.0), tuning.avatar_radius, &tuning));
        assert!(obstacle.collides(Vec2::new(x_mid, 150.0), tuning.avatar_radius, &tuning));
        assert!(obstacle.collides(Vec2::new(x_mid, 450.0), tuning.avatar_radius, &tuning));
    }
}
