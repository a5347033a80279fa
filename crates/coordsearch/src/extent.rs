use coordsearch_projection::Point;

use crate::error::{CoordSearchError, Result};

/// Axis-aligned bounding box `[min_x, min_y, max_x, max_y]` in the canonical
/// (LV03) frame. Every accepted coordinate must fall inside it.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Extent {
    /// Create an extent, rejecting inverted or non-finite bounds.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Result<Self> {
        let extent = Self {
            min_x,
            min_y,
            max_x,
            max_y,
        };
        if ![min_x, min_y, max_x, max_y].iter().all(|v| v.is_finite()) {
            return Err(CoordSearchError::ConfigError(format!(
                "Extent bounds must be finite, got {extent:?}"
            )));
        }
        if min_x > max_x || min_y > max_y {
            return Err(CoordSearchError::ConfigError(format!(
                "Extent minimum exceeds maximum: {extent:?}"
            )));
        }
        Ok(extent)
    }

    /// Inclusive containment test.
    pub fn contains(&self, point: Point) -> bool {
        self.min_x <= point.x
            && point.x <= self.max_x
            && self.min_y <= point.y
            && point.y <= self.max_y
    }
}

impl From<[f64; 4]> for Extent {
    fn from([min_x, min_y, max_x, max_y]: [f64; 4]) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }
}

impl From<Extent> for [f64; 4] {
    fn from(extent: Extent) -> Self {
        [extent.min_x, extent.min_y, extent.max_x, extent.max_y]
    }
}
