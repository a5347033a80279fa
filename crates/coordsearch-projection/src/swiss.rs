//! Swiss grid conversions.
//!
//! Implements the swisstopo approximation formulas between WGS84 and the CH1903
//! (LV03) and CH1903+ (LV95) plane coordinates. Accuracy is within a few metres
//! inside Switzerland, which is plenty for centring a map view. High accuracy
//! LV95/LV03 conversion (FINELTRA) is the job of a reframe service.

use crate::Point;

/// LV95 easting minus LV03 easting.
pub const LV95_EASTING_OFFSET: f64 = 2_000_000.0;
/// LV95 northing minus LV03 northing.
pub const LV95_NORTHING_OFFSET: f64 = 1_000_000.0;

const BERN_LAT_ARCSEC: f64 = 169_028.66;
const BERN_LON_ARCSEC: f64 = 26_782.5;

/// WGS84 longitude/latitude to LV03 easting/northing.
pub fn wgs84_to_lv03(geo: Point) -> Point {
    let phi = (geo.y * 3600.0 - BERN_LAT_ARCSEC) / 10_000.0;
    let lambda = (geo.x * 3600.0 - BERN_LON_ARCSEC) / 10_000.0;

    let easting = 600_072.37 + 211_455.93 * lambda
        - 10_938.51 * lambda * phi
        - 0.36 * lambda * phi.powi(2)
        - 44.54 * lambda.powi(3);

    let northing = 200_147.07
        + 308_807.95 * phi
        + 3_745.25 * lambda.powi(2)
        + 76.63 * phi.powi(2)
        - 194.56 * lambda.powi(2) * phi
        + 119.79 * phi.powi(3);

    Point::new(easting, northing)
}

/// LV03 easting/northing to WGS84 longitude/latitude.
pub fn lv03_to_wgs84(grid: Point) -> Point {
    let y = (grid.x - 600_000.0) / 1_000_000.0;
    let x = (grid.y - 200_000.0) / 1_000_000.0;

    let lambda = 2.677_909_4 + 4.728_982 * y + 0.791_484 * y * x + 0.130_6 * y * x.powi(2)
        - 0.043_6 * y.powi(3);

    let phi = 16.902_389_2 + 3.238_272 * x
        - 0.270_978 * y.powi(2)
        - 0.002_528 * x.powi(2)
        - 0.044_7 * y.powi(2) * x
        - 0.014_0 * x.powi(3);

    // Results are in units of 10000", convert to degrees.
    Point::new(lambda * 100.0 / 36.0, phi * 100.0 / 36.0)
}

pub fn wgs84_to_lv95(geo: Point) -> Point {
    lv03_to_lv95(wgs84_to_lv03(geo))
}

pub fn lv95_to_wgs84(grid: Point) -> Point {
    lv03_to_wgs84(lv95_to_lv03(grid))
}

/// Shift LV95 to LV03 by the false-origin offsets.
pub fn lv95_to_lv03(grid: Point) -> Point {
    Point::new(grid.x - LV95_EASTING_OFFSET, grid.y - LV95_NORTHING_OFFSET)
}

pub fn lv03_to_lv95(grid: Point) -> Point {
    Point::new(grid.x + LV95_EASTING_OFFSET, grid.y + LV95_NORTHING_OFFSET)
}
