//! Geographic extent of a map.

use serde::{Deserialize, Serialize};

/// A geographic bounding box in decimal degrees (EPSG:4326).
///
/// `x` is longitude and `y` is latitude, so southern hemisphere extents have
/// negative `min_y`/`max_y`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// Create a new bounding box from corner coordinates.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Mainland Tasmania with the Furneaux group, King Island and the
    /// southern offshore islands.
    pub fn tasmania() -> Self {
        Self::new(143.5, -43.8, 148.5, -39.5)
    }

    /// Width of the bounding box in degrees of longitude.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Height of the bounding box in degrees of latitude.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Check if a point (longitude, latitude) is contained within this bbox.
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    /// Project a point onto a `width_px` x `height_px` canvas with the origin
    /// at the top-left corner (north-west).
    pub fn to_pixel(&self, x: f64, y: f64, width_px: f64, height_px: f64) -> (f64, f64) {
        let px = (x - self.min_x) / self.width() * width_px;
        let py = (self.max_y - y) / self.height() * height_px;
        (px, py)
    }
}
