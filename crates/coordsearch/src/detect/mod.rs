//! Recognisers for the coordinate notations a user may type.
//!
//! Each recogniser looks at the raw query on its own and reports a [`Detection`].
//! They do not share state; their patterns are compiled once and never mutated.
//! [`crate::CoordinateResolver`] runs them in priority order.

pub(crate) mod angle;
pub(crate) mod grid;
pub(crate) mod pair;

use coordsearch_projection::{Crs, Point, transform};

use crate::Extent;

/// Outcome of running one recogniser over a query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Detection {
    /// The query is not in this notation.
    NoMatch,
    /// Parsed, but the canonical point lies outside the extent.
    Rejected(Point),
    /// Parsed and inside the extent; the point is in the canonical frame.
    Accepted(Point),
}

impl Detection {
    /// Canonical-frame `point` checked against `extent`.
    pub fn check(extent: &Extent, point: Point) -> Self {
        if extent.contains(point) {
            Self::Accepted(point)
        } else {
            Self::Rejected(point)
        }
    }

    /// Geodetic `point` projected to the canonical frame, then checked.
    pub fn check_geodetic(extent: &Extent, lon_lat: Point) -> Self {
        Self::check(extent, transform(lon_lat, Crs::Wgs84, Crs::Lv03))
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    pub fn accepted(self) -> Option<Point> {
        match self {
            Self::Accepted(point) => Some(point),
            Self::NoMatch | Self::Rejected(_) => None,
        }
    }
}

/// Round both components to millimetres.
pub fn round_to_millimetres(point: Point) -> Point {
    Point::new(
        (point.x * 1000.0).round() / 1000.0,
        (point.y * 1000.0).round() / 1000.0,
    )
}
