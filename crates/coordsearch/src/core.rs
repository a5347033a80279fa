//! The coordinate resolver: the main entry point of the library.
//!
//! [`CoordinateResolver`] turns free search text into an LV03 coordinate inside a
//! caller-supplied [`Extent`], or nothing. Notations are tried in a fixed order and
//! the first reading that lands inside the extent wins:
//!
//! 1. MGRS grid reference (`32TLT 12 34`)
//! 2. Degrees/minutes/seconds with hemisphere letters (`46° 57' 3.9" N 7° 26' 19.1" E`)
//! 3. A pair of numbers, read as LV03 metres, then decimal degrees, then LV95
//!    metres through the [`Reprojector`]
//!
//! ```rust
//! use coordsearch::{CoordinateResolver, Extent};
//!
//! let resolver = CoordinateResolver::new();
//! let switzerland = Extent::from([420_000.0, 30_000.0, 900_000.0, 350_000.0]);
//!
//! let position = resolver.resolve_blocking(switzerland, "600 000 200 000");
//! assert_eq!(position, Some([600_000.0, 200_000.0]));
//!
//! assert_eq!(resolver.resolve_blocking(switzerland, "main street"), None);
//! ```

use std::{fmt, sync::Arc};

use tracing::{debug, instrument};

use crate::{
    Extent,
    config::ResolverConfig,
    detect::{Detection, angle, grid, pair, round_to_millimetres},
    reframe::{ApproximateReframe, Reprojector},
};

/// Resolves search text to canonical (LV03) coordinates.
///
/// Holds no per-query state: resolving the same query against the same extent
/// always gives the same answer, and a resolver can be shared between tasks.
#[derive(Clone)]
pub struct CoordinateResolver {
    reprojector: Arc<dyn Reprojector>,
    config: ResolverConfig,
}

impl fmt::Debug for CoordinateResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CoordinateResolver")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for CoordinateResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl CoordinateResolver {
    /// Resolver with the default configuration and the in-process
    /// [`ApproximateReframe`] reprojector.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Resolver using `reprojector` for the LV95 fallback.
    pub fn with_reprojector(reprojector: impl Reprojector + 'static) -> Self {
        Self::builder().reprojector(reprojector).build()
    }

    pub fn builder() -> CoordinateResolverBuilder {
        CoordinateResolverBuilder::default()
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve `query` to a millimetre-rounded LV03 `[x, y]` inside `extent`.
    ///
    /// Never fails: text that is not a coordinate, coordinates outside the
    /// extent and reprojector failures all give `None`.
    #[instrument(name = "Resolve coordinate", level = "debug", skip(self, extent))]
    pub async fn resolve(&self, extent: impl Into<Extent>, query: &str) -> Option<[f64; 2]> {
        let extent = extent.into();
        let point = self.detect(&extent, query).await.accepted()?;
        let rounded = round_to_millimetres(point);
        // Rounding may nudge a point sitting on an off-grid extent edge outside.
        if !extent.contains(rounded) {
            debug!(x = rounded.x, y = rounded.y, "Rounded coordinate left the extent");
            return None;
        }
        debug!(x = rounded.x, y = rounded.y, "Query resolved to coordinate");
        Some(rounded.into())
    }

    /// Blocking variant of [`resolve`](Self::resolve) for callers without an
    /// async runtime. Do not call it from inside one; await `resolve` there.
    pub fn resolve_blocking(&self, extent: impl Into<Extent>, query: &str) -> Option<[f64; 2]> {
        futures::executor::block_on(self.resolve(extent, query))
    }

    /// Run the recognisers in priority order until one accepts.
    pub(crate) async fn detect(&self, extent: &Extent, query: &str) -> Detection {
        let by_grid = grid::detect(query, self.config.grid_min_length, extent);
        if by_grid.is_accepted() {
            debug!("Query is a grid reference");
            return by_grid;
        }

        let by_angle = angle::detect(query, extent);
        if by_angle.is_accepted() {
            debug!("Query is a DMS position");
            return by_angle;
        }

        let reprojector = self
            .config
            .reframe_fallback
            .then_some(self.reprojector.as_ref());
        pair::detect(query, extent, reprojector).await
    }
}

/// Builder for [`CoordinateResolver`].
#[derive(Default)]
pub struct CoordinateResolverBuilder {
    reprojector: Option<Arc<dyn Reprojector>>,
    config: ResolverConfig,
}

impl CoordinateResolverBuilder {
    /// Use `reprojector` for the LV95 fallback instead of [`ApproximateReframe`].
    pub fn reprojector(mut self, reprojector: impl Reprojector + 'static) -> Self {
        self.reprojector = Some(Arc::new(reprojector));
        self
    }

    /// Share an existing reprojector between several resolvers.
    pub fn shared_reprojector(mut self, reprojector: Arc<dyn Reprojector>) -> Self {
        self.reprojector = Some(reprojector);
        self
    }

    pub fn config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> CoordinateResolver {
        CoordinateResolver {
            reprojector: self
                .reprojector
                .unwrap_or_else(|| Arc::new(ApproximateReframe)),
            config: self.config,
        }
    }
}
