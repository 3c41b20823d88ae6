//! Flappy - terminal side-scroller.
//!
//! This module exposes the round engine, configuration and persistence for
//! testing and for the binary.

pub mod core;
pub mod input;
pub mod round;
pub mod ui;
pub mod utils;

pub use crate::core::{ConfigError, GameConfig};
pub use round::{RoundEngine, RoundOverCause, RoundPhase, RoundSnapshot, RoundState};
pub use utils::HighScoreStore;
