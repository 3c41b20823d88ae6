//! The ordered stream of obstacles scrolling through the viewport.
//!
//! Obstacles are kept in spawn order, which is also the order they cross the
//! avatar and leave the screen. Nothing ever reorders the stream.

use super::obstacle::Obstacle;
use crate::core::config::GameConfig;
use rand::Rng;

#[derive(Debug, Clone, PartialEq)]
pub struct ObstacleStream {
    obstacles: Vec<Obstacle>,
}

impl ObstacleStream {
    /// A stream seeded with one obstacle at the spawn position.
    pub fn new<R: Rng>(config: &GameConfig, rng: &mut R) -> Self {
        let mut stream = Self {
            obstacles: Vec::with_capacity(4),
        };
        stream.spawn(config, rng);
        stream
    }

    /// Build a stream from existing obstacles, oldest first.
    ///
    /// Returns `None` for an empty list or one whose left edges are not
    /// strictly increasing, since spawn order is what scoring and spawning
    /// rely on.
    pub fn from_obstacles(obstacles: Vec<Obstacle>) -> Option<Self> {
        if obstacles.is_empty() || !Self::in_spawn_order(&obstacles) {
            return None;
        }
        Some(Self { obstacles })
    }

    /// Whether left edges strictly increase from oldest to newest.
    pub fn in_spawn_order(obstacles: &[Obstacle]) -> bool {
        obstacles
            .windows(2)
            .all(|pair| pair[0].x_position < pair[1].x_position)
    }

    /// x where new obstacles appear, past the right edge.
    pub fn spawn_x(config: &GameConfig) -> f64 {
        config.viewport_width + config.spawn_offset
    }

    fn spawn<R: Rng>(&mut self, config: &GameConfig, rng: &mut R) {
        self.obstacles
            .push(Obstacle::new(Self::spawn_x(config), config, rng));
    }

    /// Scroll every obstacle one tick left.
    pub fn advance(&mut self) {
        for obstacle in &mut self.obstacles {
            obstacle.advance();
        }
    }

    /// Append a new obstacle once the newest one has crossed the horizontal
    /// midpoint. Returns whether a spawn happened.
    pub fn maybe_spawn<R: Rng>(&mut self, config: &GameConfig, rng: &mut R) -> bool {
        let threshold = config.viewport_width / 2.0;
        let should_spawn = self
            .obstacles
            .last()
            .map_or(true, |newest| newest.x_position < threshold);
        if should_spawn {
            self.spawn(config, rng);
        }
        should_spawn
    }

    /// Drop obstacles that have fully left the screen. Returns how many.
    pub fn prune(&mut self) -> usize {
        let before = self.obstacles.len();
        self.obstacles.retain(|o| !o.is_off_screen());
        before - self.obstacles.len()
    }

    /// Clear back to a single fresh obstacle.
    pub fn reset<R: Rng>(&mut self, config: &GameConfig, rng: &mut R) {
        self.obstacles.clear();
        self.spawn(config, rng);
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Obstacle> {
        self.obstacles.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Obstacle> {
        self.obstacles.iter_mut()
    }

    pub fn as_slice(&self) -> &[Obstacle] {
        &self.obstacles
    }
}
