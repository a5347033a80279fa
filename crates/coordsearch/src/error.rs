use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoordSearchError {
    #[error("Projection error: {0}")]
    Projection(#[from] coordsearch_projection::ProjectionError),
    #[error("Reframe error: {0}")]
    Reframe(#[from] crate::reframe::ReframeError),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Init Logging error: {0}")]
    InitLoggingError(#[from] tracing_subscriber::filter::ParseError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, CoordSearchError>;
