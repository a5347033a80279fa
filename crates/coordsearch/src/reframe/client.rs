use std::sync::Arc;

use coordsearch_projection::Point;
use futures::FutureExt;
use once_cell::sync::OnceCell;
use serde::Deserialize;
use tokio::runtime::{Handle, Runtime};
use tracing::{debug, instrument};

use super::{BoxFuture, ReframeError, Reprojector, Result};
use crate::config::ResolverConfig;

#[derive(Debug, Deserialize)]
struct ReframeResponse {
    coordinates: [f64; 2],
}

fn parse_response(body: &[u8]) -> Result<Point> {
    let ReframeResponse {
        coordinates: [x, y],
    } = serde_json::from_slice(body)?;
    let point = Point::new(x, y);
    if point.is_finite() {
        Ok(point)
    } else {
        Err(ReframeError::NonFinite(point))
    }
}

/// Reprojector backed by a REFRAME HTTP service
/// (`GET {base}/lv95tolv03?easting=..&northing=..&format=json`).
///
/// Requests run on the caller's Tokio runtime. Outside of one, as with
/// [`CoordinateResolver::resolve_blocking`](crate::CoordinateResolver::resolve_blocking),
/// the client starts a small runtime of its own on first use and keeps it.
#[derive(Debug, Clone)]
pub struct ReframeClient {
    client: reqwest::Client,
    base_url: String,
    runtime: Arc<OnceCell<Runtime>>,
}

impl ReframeClient {
    /// Client for the public swisstopo service with the default timeout.
    pub fn new() -> Result<Self> {
        Self::with_config(&ResolverConfig::default())
    }

    /// Client using the base URL and timeout of `config`.
    pub fn with_config(config: &ResolverConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.reframe_timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: config.reframe_base_url.clone(),
            runtime: Arc::new(OnceCell::new()),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/lv95tolv03", self.base_url.trim_end_matches('/'))
    }

    fn own_runtime(&self) -> Result<&Runtime> {
        self.runtime.get_or_try_init(|| {
            debug!("No Tokio runtime around, starting one for reframe requests");
            tokio::runtime::Builder::new_multi_thread()
                .worker_threads(1)
                .thread_name("coordsearch-reframe")
                .enable_all()
                .build()
                .map_err(ReframeError::Runtime)
        })
    }

    #[instrument(name = "Reframe LV95 to LV03", level = "debug", skip(self))]
    async fn request(&self, point: Point) -> Result<Point> {
        let url = self.endpoint();
        let response = self
            .client
            .get(&url)
            .query(&[
                ("easting", point.x.to_string()),
                ("northing", point.y.to_string()),
                ("format", "json".to_owned()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body = response.bytes().await?;
        let lv03 = parse_response(&body)?;
        debug!(x = lv03.x, y = lv03.y, "Reframe service answered");
        Ok(lv03)
    }
}

impl Reprojector for ReframeClient {
    fn lv95_to_lv03(&self, point: Point) -> BoxFuture<'_, Result<Point>> {
        if Handle::try_current().is_ok() {
            return self.request(point).boxed();
        }
        async move { self.own_runtime()?.block_on(self.request(point)) }.boxed()
    }
}
