use std::time::Duration;

use crate::error::CoordSearchError;

/// Shortest compact grid reference accepted by default: zone (2) + band (1) +
/// 100 km square (2) + one easting and one northing digit, i.e. 10 km precision.
pub const MIN_GRID_REFERENCE_LEN: usize = 7;
/// Zone, band and square letters without any digits.
const SHORTEST_GRID_REFERENCE_LEN: usize = 5;
/// Zone, band, square letters and five digits per axis (1 m).
const LONGEST_GRID_REFERENCE_LEN: usize = 15;

pub const DEFAULT_REFRAME_URL: &str = "https://geodesy.geo.admin.ch/reframe/";
pub const DEFAULT_REFRAME_TIMEOUT: Duration = Duration::from_secs(10);

/// Tunables of the coordinate resolver.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ResolverConfig {
    /// Minimum length of a compact grid reference; longer references must exceed
    /// it by an even number of characters.
    pub grid_min_length: usize,
    /// Whether planar pairs that fit nothing else are sent to the reprojector as
    /// LV95 coordinates.
    pub reframe_fallback: bool,
    /// Base URL of the reframe service used by the HTTP reprojector.
    pub reframe_base_url: String,
    /// Request timeout of the HTTP reprojector.
    pub reframe_timeout: Duration,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            grid_min_length: MIN_GRID_REFERENCE_LEN,
            reframe_fallback: true,
            reframe_base_url: DEFAULT_REFRAME_URL.to_owned(),
            reframe_timeout: DEFAULT_REFRAME_TIMEOUT,
        }
    }
}

impl ResolverConfig {
    pub fn builder() -> ResolverConfigBuilder {
        ResolverConfigBuilder::new()
    }
}

/// Builder for creating resolver configurations with ergonomic defaults
#[derive(Debug, Clone, Default)]
pub struct ResolverConfigBuilder {
    config: ResolverConfig,
}

impl ResolverConfigBuilder {
    /// Create a new builder with sensible defaults
    pub fn new() -> Self {
        Self {
            config: ResolverConfig::default(),
        }
    }

    /// Create a builder that never calls out to the reprojector
    pub fn offline() -> Self {
        let mut builder = Self::new();
        builder.config.reframe_fallback = false;
        builder
    }

    /// Set the minimum compact grid reference length
    pub fn grid_min_length(mut self, len: usize) -> Result<Self, CoordSearchError> {
        if !(SHORTEST_GRID_REFERENCE_LEN..=LONGEST_GRID_REFERENCE_LEN).contains(&len) {
            return Err(CoordSearchError::ConfigError(format!(
                "Grid reference minimum length must be within \
                 {SHORTEST_GRID_REFERENCE_LEN}..={LONGEST_GRID_REFERENCE_LEN}, got {len}"
            )));
        }
        self.config.grid_min_length = len;
        Ok(self)
    }

    /// Enable or disable the LV95 reprojection fallback
    pub fn reframe_fallback(mut self, enabled: bool) -> Self {
        self.config.reframe_fallback = enabled;
        self
    }

    /// Point the HTTP reprojector at another reframe service
    pub fn reframe_base_url(mut self, url: impl Into<String>) -> Self {
        self.config.reframe_base_url = url.into();
        self
    }

    pub fn reframe_timeout(mut self, timeout: Duration) -> Self {
        self.config.reframe_timeout = timeout;
        self
    }

    /// Build the final configuration
    pub fn build(self) -> ResolverConfig {
        self.config
    }
}
