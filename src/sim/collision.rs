//! Collision detection between the avatar circle and obstacle rectangles
//!
//! Everything here is pure math. The avatar is a circle, each obstacle half is
//! an axis-aligned rectangle, and the only question asked is "do they touch".

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Restrict `v` to `[lo, hi]`
///
/// Unlike `f32::clamp` this never panics: with `lo > hi` the result is `hi`.
#[inline]
pub fn clamp(v: f32, lo: f32, hi: f32) -> f32 {
    v.max(lo).min(hi)
}

/// Axis-aligned rectangle in screen space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_xywh(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            max: Vec2::new(x + w, y + h),
        }
    }

    /// Point on or inside the rectangle closest to `p`
    #[inline]
    pub fn nearest_point(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            clamp(p.x, self.min.x, self.max.x),
            clamp(p.y, self.min.y, self.max.y),
        )
    }
}

/// Check whether a circle touches a rectangle
///
/// Tangent contact (distance exactly `radius`) counts as a hit.
pub fn circle_intersects_rect(center: Vec2, radius: f32, rect: &Rect) -> bool {
    let nearest = rect.nearest_point(center);
    center.distance_squared(nearest) <= radius * radius
}
