//! Copies of round state for the renderer.
//!
//! A snapshot holds plain rectangles and counters, so drawing never borrows
//! the engine. The game loop refills one buffer every frame.

use super::geometry::BoundingBox;
use super::obstacle::Obstacle;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObstacleSnapshot {
    pub top: BoundingBox,
    pub bottom: BoundingBox,
    pub passed: bool,
}

impl From<&Obstacle> for ObstacleSnapshot {
    fn from(value: &Obstacle) -> Self {
        Self {
            top: value.top_rect(),
            bottom: value.bottom_rect(),
            passed: value.passed,
        }
    }
}

/// Read-only view of a round handed to the renderer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RoundSnapshot {
    pub avatar: BoundingBox,
    pub avatar_velocity: f64,
    /// Oldest first.
    pub obstacles: Vec<ObstacleSnapshot>,
    pub score: u32,
    pub high_score: u32,
    pub alive: bool,
    pub tick: u64,
}

impl RoundSnapshot {
    pub fn clear(&mut self) {
        self.avatar = BoundingBox::default();
        self.avatar_velocity = 0.0;
        self.obstacles.clear();
        self.score = 0;
        self.high_score = 0;
        self.alive = false;
        self.tick = 0;
    }
}
