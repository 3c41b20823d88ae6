//! Game tuning configuration.
//!
//! Every constant the round engine depends on lives here so a round can be
//! built with non-default physics (tests, slower tick rates, bigger viewports).

use super::constants::*;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::time::Duration;
use thiserror::Error;

/// Reasons a configuration is rejected at startup.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name} must be a finite number, got {value}")]
    NotFinite { name: &'static str, value: f64 },

    #[error("{name} must be greater than zero, got {value}")]
    NotPositive { name: &'static str, value: f64 },

    #[error("gravity must not be negative, got {0}")]
    NegativeGravity(f64),

    #[error("jump velocity must be negative (upward), got {0}")]
    JumpNotUpward(f64),

    #[error("tick rate must be at least 1 tick per second")]
    ZeroTickRate,

    #[error("min gap top {min} is greater than max gap top {max}")]
    GapRangeInverted { min: f64, max: f64 },

    #[error("gap of height {gap_height} starting at {min_gap_top} does not fit in a viewport of height {viewport_height}")]
    GapDoesNotFit {
        min_gap_top: f64,
        gap_height: f64,
        viewport_height: f64,
    },

    #[error("avatar x {avatar_x} lies outside the viewport width {viewport_width}")]
    AvatarOutsideViewport { avatar_x: f64, viewport_width: f64 },
}

/// Tunables for one game session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub viewport_width: f64,
    pub viewport_height: f64,

    /// Velocity added every tick (positive = downward).
    pub gravity: f64,
    /// Velocity set by a jump (negative = upward).
    pub jump_velocity: f64,

    /// Horizontal center of the avatar. Fixed for the whole round.
    pub avatar_x: f64,
    pub avatar_width: f64,
    pub avatar_height: f64,

    /// Leftward distance an obstacle moves each tick.
    pub obstacle_speed: f64,
    pub obstacle_width: f64,
    /// Vertical opening between the top and bottom pipe.
    pub gap_height: f64,
    pub min_gap_top: f64,
    pub max_gap_top: f64,
    /// Distance past the right viewport edge where new obstacles appear.
    pub spawn_offset: f64,

    /// Simulation ticks per second.
    pub tick_rate: u32,

    pub background_speed: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,
            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,
            avatar_x: AVATAR_X,
            avatar_width: AVATAR_WIDTH,
            avatar_height: AVATAR_HEIGHT,
            obstacle_speed: OBSTACLE_SPEED,
            obstacle_width: OBSTACLE_WIDTH,
            gap_height: GAP_HEIGHT,
            min_gap_top: MIN_GAP_TOP,
            max_gap_top: MAX_GAP_TOP,
            spawn_offset: SPAWN_OFFSET,
            tick_rate: TICK_RATE,
            background_speed: BACKGROUND_SPEED,
        }
    }
}

impl GameConfig {
    /// Check every constant, returning the first violation found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("viewport_width", self.viewport_width),
            ("viewport_height", self.viewport_height),
            ("gravity", self.gravity),
            ("jump_velocity", self.jump_velocity),
            ("avatar_x", self.avatar_x),
            ("avatar_width", self.avatar_width),
            ("avatar_height", self.avatar_height),
            ("obstacle_speed", self.obstacle_speed),
            ("obstacle_width", self.obstacle_width),
            ("gap_height", self.gap_height),
            ("min_gap_top", self.min_gap_top),
            ("max_gap_top", self.max_gap_top),
            ("spawn_offset", self.spawn_offset),
            ("background_speed", self.background_speed),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { name, value });
            }
        }

        let positive = [
            ("viewport_width", self.viewport_width),
            ("viewport_height", self.viewport_height),
            ("avatar_width", self.avatar_width),
            ("avatar_height", self.avatar_height),
            ("obstacle_speed", self.obstacle_speed),
            ("obstacle_width", self.obstacle_width),
            ("gap_height", self.gap_height),
        ];
        for (name, value) in positive {
            if value <= 0.0 {
                return Err(ConfigError::NotPositive { name, value });
            }
        }

        if self.gravity < 0.0 {
            return Err(ConfigError::NegativeGravity(self.gravity));
        }
        if self.jump_velocity >= 0.0 {
            return Err(ConfigError::JumpNotUpward(self.jump_velocity));
        }
        if self.tick_rate == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        if self.min_gap_top > self.max_gap_top {
            return Err(ConfigError::GapRangeInverted {
                min: self.min_gap_top,
                max: self.max_gap_top,
            });
        }
        if self.min_gap_top < 0.0 || self.min_gap_top + self.gap_height > self.viewport_height {
            return Err(ConfigError::GapDoesNotFit {
                min_gap_top: self.min_gap_top,
                gap_height: self.gap_height,
                viewport_height: self.viewport_height,
            });
        }
        if self.avatar_x < 0.0 || self.avatar_x > self.viewport_width {
            return Err(ConfigError::AvatarOutsideViewport {
                avatar_x: self.avatar_x,
                viewport_width: self.viewport_width,
            });
        }
        Ok(())
    }

    /// Wall-clock length of one tick.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_nanos(1_000_000_000 / u64::from(self.tick_rate.max(1)))
    }

    /// Range the gap top is drawn from, with the upper bound clamped so the
    /// bottom pipe never gets a negative height. That guarantee needs a
    /// config that passes [`GameConfig::validate`].
    pub fn effective_gap_top_range(&self) -> RangeInclusive<f64> {
        let ceiling = (self.viewport_height - self.gap_height).max(self.min_gap_top);
        self.min_gap_top..=self.max_gap_top.min(ceiling).max(self.min_gap_top)
    }

    /// Avatar starting height: vertical center of the viewport.
    pub fn avatar_start_y(&self) -> f64 {
        self.viewport_height / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_constants() {
        let config = GameConfig::default();
        assert!((config.gravity - 0.5).abs() < f64::EPSILON);
        assert!((config.jump_velocity - (-8.0)).abs() < f64::EPSILON);
        assert!((config.gap_height - 150.0).abs() < f64::EPSILON);
        assert_eq!(config.tick_rate, 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_negative_gap_height() {
        let config = GameConfig {
            gap_height: -10.0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NotPositive {
                name: "gap_height",
                value: -10.0
            })
        );
    }

    #[test]
    fn test_rejects_inverted_gap_range() {
        let config = GameConfig {
            min_gap_top: 300.0,
            max_gap_top: 100.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::GapRangeInverted { .. })
        ));
    }

    #[test]
    fn test_rejects_downward_jump() {
        let config = GameConfig {
            jump_velocity: 4.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::JumpNotUpward(4.0)));
    }

    #[test]
    fn test_rejects_zero_tick_rate() {
        let config = GameConfig {
            tick_rate: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroTickRate));
    }

    #[test]
    fn test_rejects_nan() {
        let config = GameConfig {
            gravity: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotFinite { name: "gravity", .. })
        ));
    }

    #[test]
    fn test_gap_range_clamped_to_viewport() {
        let config = GameConfig {
            viewport_height: 400.0,
            gap_height: 150.0,
            min_gap_top: 100.0,
            max_gap_top: 300.0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
        let range = config.effective_gap_top_range();
        assert!((*range.start() - 100.0).abs() < f64::EPSILON);
        assert!((*range.end() - 250.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_tick_interval() {
        let config = GameConfig {
            tick_rate: 50,
            ..Default::default()
        };
        assert_eq!(config.tick_interval(), Duration::from_millis(20));
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{"tick_rate": 60}"#).unwrap();
        assert_eq!(config.tick_rate, 60);
        assert!((config.viewport_width - VIEWPORT_WIDTH).abs() < f64::EPSILON);
    }
}
