// Viewport (screen-space units)
pub const VIEWPORT_WIDTH: f64 = 400.0;
pub const VIEWPORT_HEIGHT: f64 = 600.0;

// Avatar physics
pub const GRAVITY: f64 = 0.5;
pub const JUMP_VELOCITY: f64 = -8.0;

// Avatar placement and hitbox
pub const AVATAR_X: f64 = 50.0;
pub const AVATAR_WIDTH: f64 = 50.0;
pub const AVATAR_HEIGHT: f64 = 35.0;

// Obstacles
pub const OBSTACLE_SPEED: f64 = 3.0;
pub const OBSTACLE_WIDTH: f64 = 80.0;
pub const GAP_HEIGHT: f64 = 150.0;
pub const MIN_GAP_TOP: f64 = 100.0;
pub const MAX_GAP_TOP: f64 = 300.0;
pub const SPAWN_OFFSET: f64 = 100.0; // past the right edge

// Timing
pub const TICK_RATE: u32 = 30;

// Background scroll, slower than the pipes for parallax
pub const BACKGROUND_SPEED: f64 = 2.0;

// Persistence
pub const DATA_DIR_NAME: &str = ".flappy";
pub const HIGH_SCORE_FILE: &str = "highscore.json";
pub const CONFIG_FILE: &str = "config.json";
pub const LOG_FILE: &str = "flappy.log";
