//! LV95 to LV03 reprojection, the resolver's only asynchronous collaborator.
//!
//! The resolver hands planar pairs that fit no other reading to a
//! [`Reprojector`] as LV95 coordinates and accepts the LV03 result if it lies in
//! the extent. [`ApproximateReframe`] does this in process with the false-origin
//! shift; [`ReframeClient`] (feature `reframe`) asks a REFRAME HTTP service.

#[cfg(feature = "reframe")]
mod client;

use std::sync::Arc;

#[cfg(feature = "reframe")]
pub use client::ReframeClient;
use coordsearch_projection::{Crs, Point, transform};
pub use futures::future::BoxFuture;
use futures::FutureExt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReframeError {
    #[cfg(feature = "reframe")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[cfg(feature = "reframe")]
    #[error("Invalid reframe response: {0}")]
    InvalidResponse(#[from] serde_json::Error),
    #[cfg(feature = "reframe")]
    #[error("Could not start the reframe runtime: {0}")]
    Runtime(std::io::Error),
    #[error("Reframe service returned a non-finite coordinate {0}")]
    NonFinite(Point),
    #[error("Reframe unavailable: {0}")]
    Unavailable(String),
}

pub type Result<T> = std::result::Result<T, ReframeError>;

/// Converts LV95 coordinates to the canonical LV03 frame.
///
/// Implementations may be slow or fail; the resolver turns any failure into
/// "no match" and imposes no timeout of its own.
pub trait Reprojector: Send + Sync {
    fn lv95_to_lv03(&self, point: Point) -> BoxFuture<'_, Result<Point>>;
}

impl<R: Reprojector + ?Sized> Reprojector for Arc<R> {
    fn lv95_to_lv03(&self, point: Point) -> BoxFuture<'_, Result<Point>> {
        (**self).lv95_to_lv03(point)
    }
}

impl<R: Reprojector + ?Sized> Reprojector for Box<R> {
    fn lv95_to_lv03(&self, point: Point) -> BoxFuture<'_, Result<Point>> {
        (**self).lv95_to_lv03(point)
    }
}

/// In-process reprojector applying the constant LV95/LV03 origin shift.
///
/// Good to a few decimetres inside Switzerland; use [`ReframeClient`] when the
/// official FINELTRA transformation is required.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApproximateReframe;

impl Reprojector for ApproximateReframe {
    fn lv95_to_lv03(&self, point: Point) -> BoxFuture<'_, Result<Point>> {
        let lv03 = transform(point, Crs::Lv95, Crs::Lv03);
        futures::future::ready(if lv03.is_finite() {
            Ok(lv03)
        } else {
            Err(ReframeError::NonFinite(lv03))
        })
        .boxed()
    }
}
