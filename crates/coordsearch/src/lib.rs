//! coordsearch - Coordinate Search Resolution for Map Clients
//!
//! coordsearch recognises coordinates typed into a map search box and resolves them
//! to the Swiss LV03 grid (EPSG:21781), so the client can centre its view instead of
//! running a text search. It understands:
//!
//! - MGRS grid references: `32TLT 12 34`
//! - Degrees, minutes and seconds with hemisphere letters: `46° 57' 3.9" N 7° 26' 19.1" E`
//! - Decimal degrees: `47.3 8.5`
//! - LV03 metres, also in the split notation: `600 000 200 000`, `600000, 200000`
//! - LV95 metres, reprojected to LV03: `2'600'000 1'200'000`
//!
//! # Quick Start
//!
//! ```rust
//! use coordsearch::{CoordinateResolver, Extent};
//!
//! let resolver = CoordinateResolver::new();
//! let extent = Extent::new(420_000.0, 30_000.0, 900_000.0, 350_000.0)?;
//!
//! // Split LV03 notation, returned as is
//! assert_eq!(
//!     resolver.resolve_blocking(extent, "600 000 200 000"),
//!     Some([600_000.0, 200_000.0])
//! );
//!
//! // Anything else is not a coordinate
//! assert_eq!(resolver.resolve_blocking(extent, "Bahnhofstrasse"), None);
//! # Ok::<(), coordsearch::error::CoordSearchError>(())
//! ```
//!
//! Results are always rounded to millimetres and always lie inside the extent.
//! The search utilities [`highlight`], [`clean_label`] and [`TokenAnalyser`] cover
//! the text side of the search box.
use once_cell::sync::OnceCell;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

mod config;
mod core;
mod detect;
pub mod error;
mod extent;
mod labels;
pub mod reframe;
mod tokens;

pub use crate::core::{CoordinateResolver, CoordinateResolverBuilder};

pub use config::{
    DEFAULT_REFRAME_TIMEOUT, DEFAULT_REFRAME_URL, MIN_GRID_REFERENCE_LEN, ResolverConfig,
    ResolverConfigBuilder,
};
pub use coordsearch_projection as projection;
pub use coordsearch_projection::{Crs, Point};
pub use extent::Extent;
pub use labels::{HIGHLIGHT_END, HIGHLIGHT_START, clean_label, highlight};
#[cfg(feature = "reframe")]
pub use reframe::ReframeClient;
pub use reframe::{ApproximateReframe, ReframeError, Reprojector};
pub use tokens::{AnalysedQuery, TokenAnalyser};

static LOGGER_INIT: OnceCell<()> = OnceCell::new();

/// Initialize logging for the coordsearch library.
///
/// Sets up a `tracing` fmt subscriber filtered by `RUST_LOG` when set, otherwise
/// by `level`. Safe to call more than once; only the first call installs it.
///
/// # Examples
///
/// ```rust
/// use coordsearch::init_logging;
/// use tracing::Level;
///
/// init_logging(Level::INFO)?;
/// # Ok::<(), coordsearch::error::CoordSearchError>(())
/// ```
pub fn init_logging(level: impl Into<LevelFilter>) -> Result<&'static (), error::CoordSearchError> {
    LOGGER_INIT.get_or_try_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(level.into().to_string()))?
            .add_directive("hyper_util=warn".parse()?)
            .add_directive("reqwest=warn".parse()?);

        tracing_subscriber::fmt::fmt()
            .with_env_filter(filter)
            .with_span_events(FmtSpan::CLOSE)
            .try_init()
            .map_err(|e| anyhow::anyhow!(e))?;
        Ok(())
    })
}
