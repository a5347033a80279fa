//! Coordinate reference systems and conversions used by `coordsearch`.
//!
//! This crate holds the coordinate math the resolver treats as a black box:
//!
//! - [`Crs`] identifiers for WGS84 (EPSG:4326), the Swiss LV03 grid (EPSG:21781) and
//!   the newer LV95 grid (EPSG:2056)
//! - [`transform`], a pure and deterministic point transform between them, based on
//!   the swisstopo approximation formulas (metre level accuracy inside Switzerland)
//! - [`mgrs::decode`], which turns a compact MGRS reference into WGS84 longitude and
//!   latitude through the UTM inverse projection
//!
//! ```rust
//! use coordsearch_projection::{Crs, Point, transform};
//!
//! let bern = transform(Point::new(7.438_632, 46.951_083), Crs::Wgs84, Crs::Lv03);
//! assert!((bern.x - 600_000.0).abs() < 5.0);
//! assert!((bern.y - 200_000.0).abs() < 5.0);
//! ```

mod crs;
mod error;
pub mod mgrs;
pub mod swiss;
pub mod utm;

pub use crs::{Crs, Point, transform};
pub use error::{ProjectionError, Result};
