//! Shared geometry + velocity record
//!
//! Paddles and the ball both carry one of these. Position is the top-left
//! corner of the axis-aligned bounding box, in court pixels (y grows down).

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned box with a per-tick velocity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height
    pub size: Vec2,
    /// Displacement per tick
    pub vel: Vec2,
}

impl Entity {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            size,
            vel: Vec2::ZERO,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Strict box overlap: touching edges do not count
    pub fn overlaps(&self, other: &Entity) -> bool {
        self.pos.x < other.right()
            && self.right() > other.pos.x
            && self.pos.y < other.bottom()
            && self.bottom() > other.pos.y
    }

    /// Advance position by one tick of velocity
    #[inline]
    pub fn integrate(&mut self) {
        self.pos += self.vel;
    }
}
