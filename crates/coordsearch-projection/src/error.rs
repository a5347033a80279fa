use thiserror::Error;
pub type Result<T> = std::result::Result<T, ProjectionError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProjectionError {
    #[error("Invalid MGRS reference '{reference}': {reason}")]
    InvalidGridReference {
        reference: String,
        reason: &'static str,
    },
    #[error("UTM zone {0} is outside 1..=60")]
    InvalidUtmZone(u8),
    #[error("Latitude band '{0}' is not a valid MGRS band letter")]
    InvalidLatitudeBand(char),
}

impl ProjectionError {
    pub(crate) fn grid(reference: &str, reason: &'static str) -> Self {
        Self::InvalidGridReference {
            reference: reference.to_owned(),
            reason,
        }
    }
}
