//! Degree/minute/second notation with mandatory hemisphere letters, e.g.
//! `46° 57' 3.9" N 7° 26' 19.1" E` or simply `46 N 7 E`.

use coordsearch_projection::Point;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::{instrument, trace};

use super::Detection;
use crate::Extent;

const DEGREES: &str = r"(?P<deg>[0-9]{1,3}(?:\.[0-9]+)?)\s*[°º]?\s*";
const MINUTES: &str = r"(?:(?P<min>[0-9]{1,2}(?:\.[0-9]+)?)\s*['′]\s*)?";
const SECONDS: &str = r#"(?:(?P<sec>[0-9]+(?:\.[0-9]*)?|\.[0-9]+)\s*(?:"|''|′′|″)\s*)?"#;

static NORTHING: Lazy<Regex> = Lazy::new(|| axis_pattern('N'));
static EASTING: Lazy<Regex> = Lazy::new(|| axis_pattern('E'));

/// The hemisphere letter must stand alone, so `46 Niederbipp` is not an angle.
fn axis_pattern(hemisphere: char) -> Regex {
    Regex::new(&format!(r"\b{DEGREES}{MINUTES}{SECONDS}{hemisphere}(?:[^\p{{L}}]|$)"))
        .expect("angle pattern")
}

/// Decimal degrees of the only angle `pattern` finds in `query`.
fn single_angle(pattern: &Regex, query: &str) -> Option<f64> {
    let mut matches = pattern.captures_iter(query);
    let (Some(caps), None) = (matches.next(), matches.next()) else {
        return None;
    };
    to_decimal_degrees(&caps)
}

fn to_decimal_degrees(caps: &Captures<'_>) -> Option<f64> {
    let component = |name: &str| -> Option<f64> {
        caps.name(name)
            .map_or(Some(0.0), |m| m.as_str().parse::<f64>().ok())
    };
    let degrees = component("deg")?;
    let minutes = component("min")?;
    let seconds = component("sec")?;
    let decimal = degrees + minutes / 60.0 + seconds / 3600.0;
    decimal.is_finite().then_some(decimal)
}

/// Longitude/latitude written in the query, if both axes are present exactly once.
pub(crate) fn parse(query: &str) -> Option<Point> {
    let northing = single_angle(&NORTHING, query)?;
    let easting = single_angle(&EASTING, query)?;
    Some(Point::new(easting, northing))
}

#[instrument(level = "trace", skip(extent))]
pub(crate) fn detect(query: &str, extent: &Extent) -> Detection {
    let Some(lon_lat) = parse(query) else {
        return Detection::NoMatch;
    };
    trace!(lon = lon_lat.x, lat = lon_lat.y, "Parsed DMS angles");
    Detection::check_geodetic(extent, lon_lat)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: Point, lon: f64, lat: f64) {
        assert!(
            (actual.x - lon).abs() < 1e-9 && (actual.y - lat).abs() < 1e-9,
            "expected ({lon}, {lat}), got {actual}"
        );
    }

    #[test]
    fn test_degrees_only() {
        assert_close(parse("46 N 7 E").unwrap(), 7.0, 46.0);
        assert_close(parse("46°N 7°E").unwrap(), 7.0, 46.0);
        assert_close(parse("7º E 46º N").unwrap(), 7.0, 46.0);
    }

    #[test]
    fn test_full_dms() {
        let point = parse("46° 57' 3.9\" N 7° 26' 19.1\" E").unwrap();
        assert_close(
            point,
            7.0 + 26.0 / 60.0 + 19.1 / 3600.0,
            46.0 + 57.0 / 60.0 + 3.9 / 3600.0,
        );
    }

    #[test]
    fn test_unicode_glyphs() {
        let point = parse("46°57′3.9″N 7°26′19.1″E").unwrap();
        assert_close(
            point,
            7.0 + 26.0 / 60.0 + 19.1 / 3600.0,
            46.0 + 57.0 / 60.0 + 3.9 / 3600.0,
        );

        let doubled = parse("46° 30′′ N 7° 30'' E").unwrap();
        assert_close(doubled, 7.0 + 30.0 / 3600.0, 46.0 + 30.0 / 3600.0);
    }

    #[test]
    fn test_minutes_default_and_seconds_default() {
        assert_close(parse("46° 30' N 7° 15' E").unwrap(), 7.25, 46.5);
    }

    #[test]
    fn test_missing_hemisphere_never_matches() {
        assert_eq!(parse("46° 57' 7° 26'"), None);
        assert_eq!(parse("46° N 7°"), None);
        assert_eq!(parse("46° 7° E"), None);
    }

    #[test]
    fn test_repeated_axis_never_matches() {
        assert_eq!(parse("46 N 47 N 7 E"), None);
        assert_eq!(parse("46 N 7 E 8 E"), None);
    }

    #[test]
    fn test_hemisphere_letter_must_end_the_angle() {
        assert_close(parse("46°N7°E").unwrap(), 7.0, 46.0);
        assert_close(parse("46 N, 7 E.").unwrap(), 7.0, 46.0);
        assert_eq!(parse("Hauptstrasse 46 Niederbipp 7 Egerkingen"), None);
        assert_eq!(parse("46 Nord 7 Est"), None);
    }

    #[test]
    fn test_only_ascii_digits() {
        assert_eq!(parse("٤٦ N ٧ E"), None);
    }

    #[test]
    fn test_hemisphere_letters_are_case_sensitive() {
        assert_eq!(parse("46 n 7 e"), None);
    }

    #[test]
    fn test_detect_checks_extent() {
        let swiss = Extent::from([420_000.0, 30_000.0, 900_000.0, 350_000.0]);
        assert!(detect("46 N 7 E", &swiss).is_accepted());
        assert!(matches!(detect("10 N 7 E", &swiss), Detection::Rejected(_)));
        assert_eq!(detect("main street", &swiss), Detection::NoMatch);
    }
}
