//! A single obstacle: a top pipe and a bottom pipe with a gap between them.

use super::geometry::BoundingBox;
use crate::core::config::GameConfig;
use rand::Rng;

#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    /// Bottom edge of the top pipe.
    pub gap_top_y: f64,
    /// Top edge of the bottom pipe. Always `gap_top_y + gap_height`.
    pub gap_bottom_y: f64,
    /// Left edge of both pipes.
    pub x_position: f64,
    /// Set once, when the avatar has fully cleared this obstacle.
    pub passed: bool,
    width: f64,
    speed: f64,
    viewport_height: f64,
}

impl Obstacle {
    /// Spawn an obstacle at `spawn_x` with a random gap position.
    ///
    /// The gap top is drawn uniformly from the configured range, whose upper
    /// bound is clamped so the bottom pipe always has a non-negative height.
    pub fn new<R: Rng>(spawn_x: f64, config: &GameConfig, rng: &mut R) -> Self {
        let range = config.effective_gap_top_range();
        let gap_top_y = if range.start() < range.end() {
            rng.gen_range(range)
        } else {
            *range.start()
        };
        Self::with_gap(spawn_x, gap_top_y, config)
    }

    /// Spawn an obstacle with a known gap position, clamped into range.
    ///
    /// Never panics, even for a config that fails validation (a NaN bound is
    /// ignored rather than compared).
    pub fn with_gap(spawn_x: f64, gap_top_y: f64, config: &GameConfig) -> Self {
        let range = config.effective_gap_top_range();
        let gap_top_y = gap_top_y.min(*range.end()).max(*range.start());
        Self {
            gap_top_y,
            gap_bottom_y: gap_top_y + config.gap_height,
            x_position: spawn_x,
            passed: false,
            width: config.obstacle_width,
            speed: config.obstacle_speed,
            viewport_height: config.viewport_height,
        }
    }

    /// Move one tick to the left.
    pub fn advance(&mut self) {
        self.x_position -= self.speed;
    }

    /// Right edge, the last part of the obstacle to leave the screen.
    pub fn trailing_edge(&self) -> f64 {
        self.x_position + self.width
    }

    pub fn is_off_screen(&self) -> bool {
        self.trailing_edge() < 0.0
    }

    /// Height of the bottom pipe.
    pub fn bottom_height(&self) -> f64 {
        self.viewport_height - self.gap_bottom_y
    }

    pub fn top_rect(&self) -> BoundingBox {
        BoundingBox::new(self.x_position, 0.0, self.width, self.gap_top_y)
    }

    pub fn bottom_rect(&self) -> BoundingBox {
        BoundingBox::new(
            self.x_position,
            self.gap_bottom_y,
            self.width,
            self.bottom_height(),
        )
    }

    /// True if `avatar` intersects either pipe.
    pub fn overlaps(&self, avatar: &BoundingBox) -> bool {
        avatar.intersects(&self.top_rect()) || avatar.intersects(&self.bottom_rect())
    }
}
