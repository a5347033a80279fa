//! Two bare numbers: LV03 metres, decimal degrees, or LV95 metres.
//!
//! Swiss users also type the old split notation `600 000 200 000`, where each
//! coordinate is written as two groups; four numbers are glued back into two.
//! Apostrophes are thousands separators (`2'600'000`).

use coordsearch_projection::Point;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, instrument, trace, warn};

use super::Detection;
use crate::{Extent, reframe::Reprojector};

static NUMBER_PAIR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([0-9.']+)[\s,]+([0-9.']+)(?:[\s,]+([0-9.']+)[\s,]+([0-9.']+))?")
        .expect("number pair pattern")
});

/// The two numbers typed by the user, in typing order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct NumberPair {
    pub left: f64,
    pub right: f64,
}

impl NumberPair {
    /// Planar reading: Swiss eastings exceed northings, so the larger number is x.
    pub fn planar(&self) -> Point {
        let Self { left, right } = *self;
        Point::new(
            if left > right { left } else { right },
            if right < left { right } else { left },
        )
    }

    /// Geodetic reading (longitude, latitude): in Switzerland the latitude is
    /// the larger of the two. `None` when either number cannot be a degree value.
    pub fn geodetic(&self) -> Option<Point> {
        let Self { left, right } = *self;
        let in_range = |v: f64| (-180.0..=180.0).contains(&v);
        (in_range(left) && in_range(right)).then(|| {
            Point::new(
                if left > right { right } else { left },
                if right < left { left } else { right },
            )
        })
    }
}

fn parse_number(token: &str) -> Option<f64> {
    token
        .replace('\'', "")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// First pair (or split quadruple) of numbers in `query`.
pub(crate) fn parse(query: &str) -> Option<NumberPair> {
    let caps = NUMBER_PAIR.captures(query)?;
    let (left, right) = match (caps.get(3), caps.get(4)) {
        (Some(third), Some(fourth)) => (
            format!("{}{}", &caps[1], &caps[2]),
            format!("{}{}", third.as_str(), fourth.as_str()),
        ),
        _ => (caps[1].to_owned(), caps[2].to_owned()),
    };
    let (Some(left), Some(right)) = (parse_number(&left), parse_number(&right)) else {
        trace!(%left, %right, "Number pair is not numeric");
        return None;
    };
    Some(NumberPair { left, right })
}

/// The synchronous readings: LV03 as typed, then decimal degrees. Returns
/// `Rejected` with the planar reading when neither lies inside `extent`.
pub(crate) fn detect_local(pair: NumberPair, extent: &Extent) -> Detection {
    let planar = pair.planar();
    if extent.contains(planar) {
        debug!(x = planar.x, y = planar.y, "Number pair read as LV03");
        return Detection::Accepted(planar);
    }

    if let Some(lon_lat) = pair.geodetic() {
        let detection = Detection::check_geodetic(extent, lon_lat);
        if detection.is_accepted() {
            debug!(lon = lon_lat.x, lat = lon_lat.y, "Number pair read as WGS84");
            return detection;
        }
    }

    Detection::Rejected(planar)
}

/// All three readings; the planar reading is finally treated as LV95 and
/// handed to `reprojector` when one is given.
#[instrument(level = "trace", skip(extent, reprojector))]
pub(crate) async fn detect<R>(query: &str, extent: &Extent, reprojector: Option<&R>) -> Detection
where
    R: Reprojector + ?Sized,
{
    let Some(pair) = parse(query) else {
        return Detection::NoMatch;
    };

    let planar = match detect_local(pair, extent) {
        Detection::Rejected(planar) => planar,
        other => return other,
    };

    let Some(reprojector) = reprojector else {
        return Detection::NoMatch;
    };

    match reprojector.lv95_to_lv03(planar).await {
        Ok(lv03) if extent.contains(lv03) => {
            debug!(x = lv03.x, y = lv03.y, "Number pair read as LV95");
            Detection::Accepted(lv03)
        }
        Ok(lv03) => {
            trace!(x = lv03.x, y = lv03.y, "Reframed LV95 pair outside extent");
            Detection::NoMatch
        }
        Err(e) => {
            warn!(error = %e, "LV95 reframe failed, treating query as no match");
            Detection::NoMatch
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reframe::ApproximateReframe;

    fn swiss() -> Extent {
        Extent::from([420_000.0, 30_000.0, 900_000.0, 350_000.0])
    }

    #[test]
    fn test_parse_pairs() {
        assert_eq!(
            parse("600000 200000"),
            Some(NumberPair {
                left: 600_000.0,
                right: 200_000.0
            })
        );
        assert_eq!(
            parse("47.3, 8.5"),
            Some(NumberPair {
                left: 47.3,
                right: 8.5
            })
        );
        assert_eq!(parse("main street"), None);
        assert_eq!(parse("8000"), None);
    }

    #[test]
    fn test_split_notation_is_concatenated() {
        assert_eq!(
            parse("600 000 200 000"),
            Some(NumberPair {
                left: 600_000.0,
                right: 200_000.0
            })
        );
    }

    #[test]
    fn test_apostrophes_are_thousands_separators() {
        assert_eq!(
            parse("2'600'000 1'200'000"),
            Some(NumberPair {
                left: 2_600_000.0,
                right: 1_200_000.0
            })
        );
    }

    #[test]
    fn test_malformed_numbers_are_no_match() {
        assert_eq!(parse(". ."), None);
        assert_eq!(parse("1.2.3 4"), None);
        assert_eq!(parse("47.3. 8.5"), None);
    }

    #[test]
    fn test_only_ascii_digits() {
        assert_eq!(parse("٦٠٠٠٠٠ ٢٠٠٠٠٠"), None);
    }

    #[test]
    fn test_planar_orders_by_magnitude() {
        let pair = NumberPair {
            left: 200_000.0,
            right: 600_000.0,
        };
        assert_eq!(pair.planar(), Point::new(600_000.0, 200_000.0));
    }

    #[test]
    fn test_geodetic_puts_larger_value_on_latitude() {
        let pair = NumberPair {
            left: 8.5,
            right: 47.3,
        };
        assert_eq!(pair.geodetic(), Some(Point::new(8.5, 47.3)));
        let swapped = NumberPair {
            left: 47.3,
            right: 8.5,
        };
        assert_eq!(swapped.geodetic(), Some(Point::new(8.5, 47.3)));
        let planar = NumberPair {
            left: 600_000.0,
            right: 200_000.0,
        };
        assert_eq!(planar.geodetic(), None);
    }

    #[test]
    fn test_detect_local_prefers_lv03() {
        let pair = parse("600 000 200 000").unwrap();
        assert_eq!(
            detect_local(pair, &swiss()),
            Detection::Accepted(Point::new(600_000.0, 200_000.0))
        );
    }

    #[test]
    fn test_detect_local_falls_back_to_degrees() {
        let pair = parse("47.3 8.5").unwrap();
        let Detection::Accepted(point) = detect_local(pair, &swiss()) else {
            panic!("47.3 8.5 should be read as WGS84");
        };
        assert!((point.x - 680_270.0).abs() < 5.0, "easting {}", point.x);
        assert!((point.y - 239_333.0).abs() < 5.0, "northing {}", point.y);
    }

    #[tokio::test]
    async fn test_lv95_reading_through_reprojector() {
        let detection = detect("2600000 1200000", &swiss(), Some(&ApproximateReframe)).await;
        assert_eq!(
            detection,
            Detection::Accepted(Point::new(600_000.0, 200_000.0))
        );
    }

    #[tokio::test]
    async fn test_without_reprojector_lv95_is_no_match() {
        let detection = detect::<ApproximateReframe>("2600000 1200000", &swiss(), None).await;
        assert_eq!(detection, Detection::NoMatch);
    }

    #[tokio::test]
    async fn test_reframed_point_outside_extent_is_no_match() {
        let detection = detect("5 6", &swiss(), Some(&ApproximateReframe)).await;
        assert_eq!(detection, Detection::NoMatch);
    }
}
