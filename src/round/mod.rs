//! The round simulation: avatar physics, obstacle stream, collisions and
//! scoring. Pure logic with no terminal or filesystem access, driven one tick
//! at a time by the game loop.

pub mod avatar;
pub mod engine;
pub mod geometry;
pub mod obstacle;
pub mod snapshot;
pub mod stream;

pub use avatar::Avatar;
pub use engine::{RoundEngine, RoundOverCause, RoundPhase, RoundState};
pub use geometry::BoundingBox;
pub use obstacle::Obstacle;
pub use snapshot::{ObstacleSnapshot, RoundSnapshot};
pub use stream::ObstacleStream;
