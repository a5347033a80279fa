use std::fmt;

use crate::swiss;

/// A 2D point. Its meaning depends on the [`Crs`] it is expressed in: for
/// [`Crs::Wgs84`] `x` is the longitude and `y` the latitude in decimal degrees,
/// for the Swiss grids they are easting and northing in metres.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Both components are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for [f64; 2] {
    fn from(point: Point) -> Self {
        [point.x, point.y]
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Coordinate reference systems known to the resolver.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Crs {
    /// Geodetic longitude/latitude on WGS84.
    Wgs84,
    /// Swiss grid CH1903 / LV03, the canonical frame.
    Lv03,
    /// Swiss grid CH1903+ / LV95.
    Lv95,
}

impl Crs {
    pub const fn epsg(self) -> u32 {
        match self {
            Self::Wgs84 => 4326,
            Self::Lv03 => 21781,
            Self::Lv95 => 2056,
        }
    }

    pub const fn from_epsg(code: u32) -> Option<Self> {
        match code {
            4326 => Some(Self::Wgs84),
            21781 => Some(Self::Lv03),
            2056 => Some(Self::Lv95),
            _ => None,
        }
    }
}

impl fmt::Display for Crs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EPSG:{}", self.epsg())
    }
}

/// Transform `point` from one reference system to another.
///
/// Pure and deterministic. Transforms between the two Swiss grids apply the
/// false-origin shift directly, everything else pivots through WGS84.
pub fn transform(point: Point, from: Crs, to: Crs) -> Point {
    match (from, to) {
        (a, b) if a == b => point,
        (Crs::Lv95, Crs::Lv03) => swiss::lv95_to_lv03(point),
        (Crs::Lv03, Crs::Lv95) => swiss::lv03_to_lv95(point),
        (Crs::Wgs84, Crs::Lv03) => swiss::wgs84_to_lv03(point),
        (Crs::Wgs84, Crs::Lv95) => swiss::wgs84_to_lv95(point),
        (Crs::Lv03, Crs::Wgs84) => swiss::lv03_to_wgs84(point),
        (Crs::Lv95, Crs::Wgs84) => swiss::lv95_to_wgs84(point),
        _ => unreachable!("identity transforms are handled above"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epsg_codes() {
        assert_eq!(Crs::Wgs84.epsg(), 4326);
        assert_eq!(Crs::Lv03.epsg(), 21781);
        assert_eq!(Crs::Lv95.epsg(), 2056);
        assert_eq!(Crs::from_epsg(21781), Some(Crs::Lv03));
        assert_eq!(Crs::from_epsg(3857), None);
        assert_eq!(Crs::Lv95.to_string(), "EPSG:2056");
    }

    #[test]
    fn test_identity_transform() {
        let p = Point::new(600_123.4, 200_456.7);
        assert_eq!(transform(p, Crs::Lv03, Crs::Lv03), p);
    }

    #[test]
    fn test_swiss_grid_shift() {
        let p = transform(Point::new(2_600_000.0, 1_200_000.0), Crs::Lv95, Crs::Lv03);
        assert_eq!(p, Point::new(600_000.0, 200_000.0));

        let back = transform(p, Crs::Lv03, Crs::Lv95);
        assert_eq!(back, Point::new(2_600_000.0, 1_200_000.0));
    }

    #[test]
    fn test_wgs84_to_lv95_matches_lv03_shift() {
        let geo = Point::new(8.5, 47.3);
        let lv03 = transform(geo, Crs::Wgs84, Crs::Lv03);
        let lv95 = transform(geo, Crs::Wgs84, Crs::Lv95);
        assert!((lv95.x - lv03.x - 2_000_000.0).abs() < 1e-6);
        assert!((lv95.y - lv03.y - 1_000_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_point_conversions() {
        let p: Point = [1.0, 2.0].into();
        assert_eq!(p, Point::new(1.0, 2.0));
        let arr: [f64; 2] = p.into();
        assert_eq!(arr, [1.0, 2.0]);
        assert!(!Point::new(f64::NAN, 0.0).is_finite());
    }
}
