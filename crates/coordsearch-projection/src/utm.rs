//! Inverse Universal Transverse Mercator projection on the WGS84 ellipsoid.

use crate::{Point, ProjectionError, Result};

const SCALE_FACTOR: f64 = 0.9996;
const SEMI_MAJOR_AXIS: f64 = 6_378_137.0;
const ECC_SQUARED: f64 = 0.006_694_38;
const FALSE_EASTING: f64 = 500_000.0;
const FALSE_NORTHING_SOUTH: f64 = 10_000_000.0;

/// Which side of the equator a UTM northing is measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hemisphere {
    North,
    South,
}

/// A position in a UTM zone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtmCoord {
    pub zone: u8,
    pub hemisphere: Hemisphere,
    pub easting: f64,
    pub northing: f64,
}

impl UtmCoord {
    /// Longitude of the zone's central meridian.
    pub fn central_meridian(&self) -> f64 {
        f64::from(self.zone) * 6.0 - 183.0
    }

    /// Convert to WGS84 longitude/latitude in degrees.
    pub fn to_wgs84(&self) -> Result<Point> {
        if !(1..=60).contains(&self.zone) {
            return Err(ProjectionError::InvalidUtmZone(self.zone));
        }

        let ecc_prime_squared = ECC_SQUARED / (1.0 - ECC_SQUARED);
        let e1 = (1.0 - (1.0 - ECC_SQUARED).sqrt()) / (1.0 + (1.0 - ECC_SQUARED).sqrt());

        let x = self.easting - FALSE_EASTING;
        let y = match self.hemisphere {
            Hemisphere::North => self.northing,
            Hemisphere::South => self.northing - FALSE_NORTHING_SOUTH,
        };

        let meridional_arc = y / SCALE_FACTOR;
        let mu = meridional_arc
            / (SEMI_MAJOR_AXIS
                * (1.0
                    - ECC_SQUARED / 4.0
                    - 3.0 * ECC_SQUARED.powi(2) / 64.0
                    - 5.0 * ECC_SQUARED.powi(3) / 256.0));

        // Footpoint latitude
        let phi1 = mu
            + (3.0 * e1 / 2.0 - 27.0 * e1.powi(3) / 32.0) * (2.0 * mu).sin()
            + (21.0 * e1.powi(2) / 16.0 - 55.0 * e1.powi(4) / 32.0) * (4.0 * mu).sin()
            + (151.0 * e1.powi(3) / 96.0) * (6.0 * mu).sin();

        let sin_phi1 = phi1.sin();
        let cos_phi1 = phi1.cos();
        let tan_phi1 = phi1.tan();

        let n1 = SEMI_MAJOR_AXIS / (1.0 - ECC_SQUARED * sin_phi1.powi(2)).sqrt();
        let t1 = tan_phi1.powi(2);
        let c1 = ecc_prime_squared * cos_phi1.powi(2);
        let r1 = SEMI_MAJOR_AXIS * (1.0 - ECC_SQUARED)
            / (1.0 - ECC_SQUARED * sin_phi1.powi(2)).powf(1.5);
        let d = x / (n1 * SCALE_FACTOR);

        let lat = phi1
            - (n1 * tan_phi1 / r1)
                * (d.powi(2) / 2.0
                    - (5.0 + 3.0 * t1 + 10.0 * c1 - 4.0 * c1.powi(2) - 9.0 * ecc_prime_squared)
                        * d.powi(4)
                        / 24.0
                    + (61.0 + 90.0 * t1 + 298.0 * c1 + 45.0 * t1.powi(2)
                        - 252.0 * ecc_prime_squared
                        - 3.0 * c1.powi(2))
                        * d.powi(6)
                        / 720.0);

        let lon = (d - (1.0 + 2.0 * t1 + c1) * d.powi(3) / 6.0
            + (5.0 - 2.0 * c1 + 28.0 * t1 - 3.0 * c1.powi(2)
                + 8.0 * ecc_prime_squared
                + 24.0 * t1.powi(2))
                * d.powi(5)
                / 120.0)
            / cos_phi1;

        Ok(Point::new(
            self.central_meridian() + lon.to_degrees(),
            lat.to_degrees(),
        ))
    }
}
