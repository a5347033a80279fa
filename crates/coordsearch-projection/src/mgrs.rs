//! Military Grid Reference System decoding.
//!
//! A compact reference such as `32TLT1234` is made of the UTM zone number
//! (`32`), the latitude band (`T`), the 100 km square identifier (`LT`) and an
//! even number of digits split equally between easting and northing. The more
//! digits, the smaller the referenced square: two digits give 10 km, ten give 1 m.

use tracing::trace;

use crate::{
    Point, ProjectionError, Result,
    utm::{Hemisphere, UtmCoord},
};

/// Number of 100 km square letter sets; the set repeats every six zones.
const NUM_100K_SETS: u8 = 6;
/// Column letter of the first 100 km square for each set.
const SET_ORIGIN_COLUMN_LETTERS: [u8; 6] = *b"AJSAJS";
/// Row letter of the first 100 km square for each set.
const SET_ORIGIN_ROW_LETTERS: [u8; 6] = *b"AFAFAF";
const MAX_DIGITS: usize = 10;

/// Decoded reference: the south west corner of the referenced square and its
/// edge length in metres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSquare {
    pub utm: UtmCoord,
    pub accuracy: f64,
}

impl GridSquare {
    /// Centre of the square in UTM.
    pub fn centre(&self) -> UtmCoord {
        UtmCoord {
            easting: self.utm.easting + self.accuracy / 2.0,
            northing: self.utm.northing + self.accuracy / 2.0,
            ..self.utm
        }
    }
}

/// Decode a compact MGRS reference (no whitespace) into WGS84 longitude and
/// latitude of the centre of the referenced square.
pub fn decode(reference: &str) -> Result<Point> {
    let square = parse(reference)?;
    let point = square.centre().to_wgs84()?;
    trace!(reference, lon = point.x, lat = point.y, "Decoded MGRS reference");
    Ok(point)
}

/// Parse a compact MGRS reference into its UTM square.
pub fn parse(reference: &str) -> Result<GridSquare> {
    let upper = reference.to_ascii_uppercase();
    let bytes = upper.as_bytes();

    let zone_len = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
    if !(1..=2).contains(&zone_len) {
        return Err(ProjectionError::grid(reference, "expected a 1 or 2 digit zone"));
    }
    let zone: u8 = upper[..zone_len]
        .parse()
        .map_err(|_| ProjectionError::grid(reference, "unreadable zone number"))?;
    if !(1..=60).contains(&zone) {
        return Err(ProjectionError::InvalidUtmZone(zone));
    }

    let letters = &bytes[zone_len..];
    if letters.len() < 3 || !letters[..3].iter().all(u8::is_ascii_alphabetic) {
        return Err(ProjectionError::grid(
            reference,
            "expected a band letter and two 100 km square letters",
        ));
    }
    let band = letters[0];
    let min_northing =
        band_min_northing(band).ok_or(ProjectionError::InvalidLatitudeBand(char::from(band)))?;

    let set = square_set(zone);
    let east_100k = easting_from_letter(letters[1], set)
        .ok_or_else(|| ProjectionError::grid(reference, "invalid 100 km column letter"))?;
    let mut north_100k = northing_from_letter(letters[2], set)
        .ok_or_else(|| ProjectionError::grid(reference, "invalid 100 km row letter"))?;
    // Row letters repeat every 2000 km, lift into the latitude band.
    while north_100k < min_northing {
        north_100k += 2_000_000.0;
    }

    let digits = &upper[zone_len + 3..];
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ProjectionError::grid(reference, "non-digit in easting/northing"));
    }
    if digits.len() % 2 != 0 || digits.len() > MAX_DIGITS {
        return Err(ProjectionError::grid(
            reference,
            "easting and northing need the same number of digits (at most 5 each)",
        ));
    }

    let precision = digits.len() / 2;
    let accuracy = 100_000.0 / 10_f64.powi(precision as i32);
    let (east_digits, north_digits) = digits.split_at(precision);
    let easting = parse_digits(east_digits) * accuracy;
    let northing = parse_digits(north_digits) * accuracy;

    let hemisphere = if band < b'N' {
        Hemisphere::South
    } else {
        Hemisphere::North
    };

    Ok(GridSquare {
        utm: UtmCoord {
            zone,
            hemisphere,
            easting: east_100k + easting,
            northing: north_100k + northing,
        },
        accuracy,
    })
}

fn parse_digits(digits: &str) -> f64 {
    digits
        .bytes()
        .fold(0.0, |acc, b| acc * 10.0 + f64::from(b - b'0'))
}

/// Letter set (1..=6) used for the 100 km square identifiers of `zone`.
fn square_set(zone: u8) -> u8 {
    match zone % NUM_100K_SETS {
        0 => NUM_100K_SETS,
        set => set,
    }
}

/// Steps from the set's origin letter to `target`, skipping `I` and `O` and
/// wrapping once after `last`.
fn letter_offset(origin: u8, target: u8, last: u8) -> Option<u32> {
    if !(b'A'..=last).contains(&target) || target == b'I' || target == b'O' {
        return None;
    }
    let mut current = origin;
    let mut steps = 0;
    let mut wrapped = false;
    while current != target {
        current += 1;
        if current == b'I' || current == b'O' {
            current += 1;
        }
        if current > last {
            if wrapped {
                return None;
            }
            current = b'A';
            wrapped = true;
        }
        steps += 1;
    }
    Some(steps)
}

fn easting_from_letter(letter: u8, set: u8) -> Option<f64> {
    let origin = SET_ORIGIN_COLUMN_LETTERS[usize::from(set - 1)];
    letter_offset(origin, letter, b'Z').map(|steps| f64::from(steps + 1) * 100_000.0)
}

fn northing_from_letter(letter: u8, set: u8) -> Option<f64> {
    let origin = SET_ORIGIN_ROW_LETTERS[usize::from(set - 1)];
    letter_offset(origin, letter, b'V').map(|steps| f64::from(steps) * 100_000.0)
}

/// Lowest northing covered by a latitude band.
fn band_min_northing(band: u8) -> Option<f64> {
    let northing = match band {
        b'C' => 1_100_000.0,
        b'D' => 2_000_000.0,
        b'E' => 2_800_000.0,
        b'F' => 3_700_000.0,
        b'G' => 4_600_000.0,
        b'H' => 5_500_000.0,
        b'J' => 6_400_000.0,
        b'K' => 7_300_000.0,
        b'L' => 8_200_000.0,
        b'M' => 9_100_000.0,
        b'N' => 0.0,
        b'P' => 800_000.0,
        b'Q' => 1_700_000.0,
        b'R' => 2_600_000.0,
        b'S' => 3_500_000.0,
        b'T' => 4_400_000.0,
        b'U' => 5_300_000.0,
        b'V' => 6_200_000.0,
        b'W' => 7_000_000.0,
        b'X' => 7_900_000.0,
        _ => return None,
    };
    Some(northing)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ten_km_square() {
        let square = parse("33UXP04").unwrap();
        assert_eq!(square.utm.zone, 33);
        assert_eq!(square.utm.hemisphere, Hemisphere::North);
        assert_eq!(square.utm.easting, 600_000.0);
        assert_eq!(square.utm.northing, 5_340_000.0);
        assert_eq!(square.accuracy, 10_000.0);
    }

    #[test]
    fn test_decode_vienna_square() {
        let point = decode("33UXP04").unwrap();
        assert!((point.x - 16.414_5).abs() < 1e-3, "lon {}", point.x);
        assert!((point.y - 48.249_5).abs() < 1e-3, "lat {}", point.y);
    }

    #[test]
    fn test_decode_is_case_insensitive() {
        assert_eq!(decode("32tlt1234").unwrap(), decode("32TLT1234").unwrap());
    }

    #[test]
    fn test_more_digits_refine_the_square() {
        let coarse = parse("32TLT12").unwrap();
        let fine = parse("32TLT1234567890").unwrap();
        assert_eq!(coarse.accuracy, 10_000.0);
        assert_eq!(fine.accuracy, 1.0);
        assert_eq!(fine.utm.easting, 312_345.0);
        assert_eq!(fine.utm.northing, 5_267_890.0);
    }

    #[test]
    fn test_switzerland_reference_lands_in_switzerland() {
        let point = decode("32TLT12").unwrap();
        assert!((5.9..10.5).contains(&point.x), "lon {}", point.x);
        assert!((45.8..47.9).contains(&point.y), "lat {}", point.y);
    }

    #[test]
    fn test_rejects_malformed_references() {
        for bad in ["", "32", "32T", "32TL", "32TLT1", "32TLT123", "61TLT12", "32ILT12"] {
            assert!(parse(bad).is_err(), "{bad:?} should be rejected");
        }
        assert_eq!(
            parse("32ALT12").unwrap_err(),
            ProjectionError::InvalidLatitudeBand('A')
        );
        assert!(parse("32TLW12").is_err(), "row letters stop at V");
        assert!(parse("32TLT12345678901").is_err());
    }

    #[test]
    fn test_square_sets_cycle_every_six_zones() {
        assert_eq!(square_set(1), 1);
        assert_eq!(square_set(6), 6);
        assert_eq!(square_set(32), 2);
        assert_eq!(square_set(36), 6);
    }
}
