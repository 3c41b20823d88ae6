//! Round orchestration: physics, obstacle scrolling, collisions and scoring.

use super::avatar::Avatar;
use super::obstacle::Obstacle;
use super::snapshot::{ObstacleSnapshot, RoundSnapshot};
use super::stream::ObstacleStream;
use crate::core::config::{ConfigError, GameConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Score bookkeeping for the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundState {
    pub score: u32,
    /// Best score seen this session, seeded from the persisted value.
    pub high_score: u32,
    pub alive: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    Active,
    Over,
}

/// What ended the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOverCause {
    /// Hit the ceiling or the floor.
    Bounds,
    /// Hit a pipe.
    Obstacle,
}

pub struct RoundEngine<R: Rng = StdRng> {
    config: GameConfig,
    rng: R,
    avatar: Avatar,
    obstacles: ObstacleStream,
    state: RoundState,
    over_cause: Option<RoundOverCause>,
    tick: u64,
}

impl RoundEngine<StdRng> {
    /// Start an active round with an entropy-seeded generator.
    pub fn new(config: GameConfig, high_score: u32) -> Result<Self, ConfigError> {
        Self::with_rng(config, high_score, StdRng::from_entropy())
    }
}

impl<R: Rng> RoundEngine<R> {
    /// Start an active round drawing gaps from `rng`.
    ///
    /// The config is validated first: gap clamping and bottom pipe heights
    /// only hold for a config that passes [`GameConfig::validate`].
    pub fn with_rng(
        config: GameConfig,
        high_score: u32,
        mut rng: R,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let avatar = Avatar::new(&config);
        let obstacles = ObstacleStream::new(&config, &mut rng);
        Ok(Self {
            config,
            rng,
            avatar,
            obstacles,
            state: RoundState {
                score: 0,
                high_score,
                alive: true,
            },
            over_cause: None,
            tick: 0,
        })
    }

    /// Apply this tick's input. Ignored once the round is over.
    pub fn apply_input(&mut self, jump: bool) {
        if jump && self.state.alive {
            self.avatar.jump();
        }
    }

    /// Advance one tick and return the resulting state.
    ///
    /// Order: avatar physics, obstacle scroll, spawn, prune, collisions,
    /// then scoring. A collision ends the round before anything is scored
    /// for that tick. Does nothing once the round is over.
    pub fn update(&mut self) -> RoundState {
        if !self.state.alive {
            return self.state;
        }
        self.tick += 1;

        self.avatar.update();
        self.obstacles.advance();
        self.obstacles.maybe_spawn(&self.config, &mut self.rng);
        self.obstacles.prune();

        if let Some(cause) = self.detect_collision() {
            self.state.alive = false;
            self.over_cause = Some(cause);
            log::debug!(
                "round over at tick {} ({:?}), score {}",
                self.tick,
                cause,
                self.state.score
            );
            return self.state;
        }

        let leading_edge = self.avatar.leading_edge();
        for obstacle in self.obstacles.iter_mut() {
            if !obstacle.passed && obstacle.trailing_edge() < leading_edge {
                obstacle.passed = true;
                self.state.score += 1;
            }
        }

        if self.state.score > self.state.high_score {
            self.state.high_score = self.state.score;
        }
        self.state
    }

    fn detect_collision(&self) -> Option<RoundOverCause> {
        if self
            .avatar
            .collides_with_bounds(self.config.viewport_height)
        {
            return Some(RoundOverCause::Bounds);
        }
        let bbox = self.avatar.bounding_box();
        if self.obstacles.iter().any(|o| o.overlaps(&bbox)) {
            return Some(RoundOverCause::Obstacle);
        }
        None
    }

    /// Start a fresh round. The high score carries over.
    pub fn reset(&mut self) {
        self.avatar = Avatar::new(&self.config);
        self.obstacles.reset(&self.config, &mut self.rng);
        self.state.score = 0;
        self.state.alive = true;
        self.over_cause = None;
        self.tick = 0;
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        let mut out = RoundSnapshot::default();
        self.snapshot_into(&mut out);
        out
    }

    /// Fill `out` in place, reusing its obstacle buffer.
    pub fn snapshot_into(&self, out: &mut RoundSnapshot) {
        out.clear();
        out.avatar = self.avatar.bounding_box();
        out.avatar_velocity = self.avatar.velocity;
        out.obstacles
            .extend(self.obstacles.iter().map(ObstacleSnapshot::from));
        out.score = self.state.score;
        out.high_score = self.state.high_score;
        out.alive = self.state.alive;
        out.tick = self.tick;
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn phase(&self) -> RoundPhase {
        if self.state.alive {
            RoundPhase::Active
        } else {
            RoundPhase::Over
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase() == RoundPhase::Over
    }

    pub fn over_cause(&self) -> Option<RoundOverCause> {
        self.over_cause
    }

    /// Ticks simulated in the current round.
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn avatar(&self) -> &Avatar {
        &self.avatar
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        self.obstacles.as_slice()
    }

    // Scenario setup for tests. Not part of the renderer-facing surface.

    #[doc(hidden)]
    pub fn avatar_mut(&mut self) -> &mut Avatar {
        &mut self.avatar
    }

    /// Replace the obstacle stream, oldest first. An empty list, or one whose
    /// left edges are not strictly increasing, is rejected and the current
    /// stream is kept. Returns whether the replacement happened.
    #[doc(hidden)]
    pub fn set_obstacles(&mut self, obstacles: Vec<Obstacle>) -> bool {
        match ObstacleStream::from_obstacles(obstacles) {
            Some(stream) => {
                self.obstacles = stream;
                true
            }
            None => false,
        }
    }
}
