//! MGRS grid references, e.g. `32TLT 12 34` or `32 TLT1234`.

use coordsearch_projection::mgrs;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, instrument, trace};

use super::Detection;
use crate::Extent;

/// UTM zones 31 to 33 cover Switzerland and its surroundings.
static GRID_REFERENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b3[123](?:\s*(?i-u:[a-z])){3}[\s0-9]*").expect("grid reference pattern")
});

/// Find the single grid reference in `query` and return it without whitespace.
fn compact_reference(query: &str) -> Option<String> {
    let mut matches = GRID_REFERENCE.find_iter(query);
    let (Some(found), None) = (matches.next(), matches.next()) else {
        return None;
    };
    Some(found.as_str().split_whitespace().collect())
}

/// The compact length fits the precision policy: at least `min_len`, and any
/// extra digits come in easting/northing pairs.
fn has_valid_precision(reference: &str, min_len: usize) -> bool {
    reference.len() >= min_len && (reference.len() - min_len) % 2 == 0
}

#[instrument(level = "trace", skip(extent))]
pub(crate) fn detect(query: &str, min_len: usize, extent: &Extent) -> Detection {
    let Some(reference) = compact_reference(query) else {
        return Detection::NoMatch;
    };
    if !has_valid_precision(&reference, min_len) {
        debug!(%reference, min_len, "Grid reference has invalid precision");
        return Detection::NoMatch;
    }
    match mgrs::decode(&reference) {
        Ok(lon_lat) => Detection::check_geodetic(extent, lon_lat),
        Err(e) => {
            trace!(error = %e, "Grid reference could not be decoded");
            Detection::NoMatch
        }
    }
}
