//! Axis-aligned bounding boxes in viewport coordinates.
//!
//! The y axis points down: `top` < `bottom`, row 0 is the ceiling.

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Build a box from its center point.
    pub fn centered(center_x: f64, center_y: f64, width: f64, height: f64) -> Self {
        Self::new(
            center_x - width / 2.0,
            center_y - height / 2.0,
            width,
            height,
        )
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Strict overlap: boxes that only share an edge do not intersect, and a
    /// box with no area never intersects anything.
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        if self.width <= 0.0 || self.height <= 0.0 || other.width <= 0.0 || other.height <= 0.0 {
            return false;
        }
        self.left < other.right()
            && other.left < self.right()
            && self.top < other.bottom()
            && other.top < self.bottom()
    }
}
