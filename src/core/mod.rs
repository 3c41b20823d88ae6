//! Tuning constants and configuration.

pub mod config;
pub mod constants;

pub use config::{ConfigError, GameConfig};
pub use constants::*;
