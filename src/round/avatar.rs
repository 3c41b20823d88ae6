//! The player-controlled avatar: a point mass with a fixed-size hitbox.

use super::geometry::BoundingBox;
use crate::core::config::GameConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct Avatar {
    /// Horizontal center. Never changes during a round.
    pub x_position: f64,
    /// Vertical center (positive = further down).
    pub y_position: f64,
    /// Rows per tick (positive = downward).
    pub velocity: f64,
    pub width: f64,
    pub height: f64,
    gravity: f64,
    jump_velocity: f64,
}

impl Avatar {
    /// Avatar at the round's starting position, at rest.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            x_position: config.avatar_x,
            y_position: config.avatar_start_y(),
            velocity: 0.0,
            width: config.avatar_width,
            height: config.avatar_height,
            gravity: config.gravity,
            jump_velocity: config.jump_velocity,
        }
    }

    /// Overwrite velocity with the upward jump impulse.
    pub fn jump(&mut self) {
        self.velocity = self.jump_velocity;
    }

    /// One tick of physics: gravity first, then position.
    pub fn update(&mut self) {
        self.velocity += self.gravity;
        self.y_position += self.velocity;
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::centered(self.x_position, self.y_position, self.width, self.height)
    }

    /// Edge an obstacle's trailing edge has to clear before it counts as
    /// passed. This is the avatar's left side: the pipe must be fully behind it.
    pub fn leading_edge(&self) -> f64 {
        self.bounding_box().left
    }

    /// True once the hitbox touches the ceiling or the floor.
    pub fn collides_with_bounds(&self, viewport_height: f64) -> bool {
        let bbox = self.bounding_box();
        bbox.top <= 0.0 || bbox.bottom() >= viewport_height
    }
}
