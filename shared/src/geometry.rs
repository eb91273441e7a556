use serde::{Deserialize, Serialize};

/// Rendered marker edge length in local map units.
pub const MARKER_SIZE: f64 = 24.0;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned bounding box in the map surface's local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BBox {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Marker anchor: one third into the box on both axes.
    ///
    /// Not a centroid; it lands inside roughly convex landmasses without a
    /// point-in-polygon test.
    pub fn anchor(&self) -> Point {
        Point::new(self.x + self.width / 3.0, self.y + self.height / 3.0)
    }
}
