//! Endlessly scrolling backdrop.
//!
//! Two copies of one viewport-wide tile sit side by side and scroll left; a
//! tile that leaves the screen jumps to the right of the other one.

use crate::core::config::GameConfig;

/// Decoration points within one tile, as fractions of the viewport.
static DECOR: [(f64, f64, char); 9] = [
    (0.08, 0.12, '·'),
    (0.21, 0.30, '~'),
    (0.37, 0.07, '·'),
    (0.52, 0.22, '·'),
    (0.64, 0.41, '~'),
    (0.79, 0.15, '·'),
    (0.90, 0.33, '·'),
    (0.15, 0.55, '·'),
    (0.70, 0.62, '·'),
];

#[derive(Debug, Clone, PartialEq)]
pub struct Background {
    tiles: [f64; 2],
    tile_width: f64,
    speed: f64,
}

impl Background {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            tiles: [0.0, config.viewport_width],
            tile_width: config.viewport_width,
            speed: config.background_speed,
        }
    }

    /// Scroll one tick.
    pub fn advance(&mut self) {
        self.tiles[0] -= self.speed;
        self.tiles[1] -= self.speed;
        if self.tiles[0] + self.tile_width <= 0.0 {
            self.tiles[0] = self.tiles[1] + self.tile_width;
        }
        if self.tiles[1] + self.tile_width <= 0.0 {
            self.tiles[1] = self.tiles[0] + self.tile_width;
        }
    }

    /// Left edges of both tiles.
    pub fn tile_offsets(&self) -> [f64; 2] {
        self.tiles
    }

    /// Decorations in viewport coordinates: (x, y_fraction, glyph).
    pub fn decorations(&self) -> impl Iterator<Item = (f64, f64, char)> + '_ {
        self.tiles.iter().flat_map(move |&tile_x| {
            DECOR
                .iter()
                .map(move |&(fx, fy, glyph)| (tile_x + fx * self.tile_width, fy, glyph))
        })
    }
}
