//! Utility modules: persistence, logging.

pub mod logging;
pub mod persistence;

pub use persistence::{HighScoreRecord, HighScoreStore};
