use crate::frame::DrawKey;
use thiserror::Error;

/// Failure to build a single drawable element.
///
/// These never abort a frame: the caller logs and skips the element.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    #[error("non-finite coordinates for {key}")]
    NonFinite { key: DrawKey },
    #[error("particle {index} has a non-finite {field}")]
    MalformedParticle { index: usize, field: &'static str },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    #[error("a submission is already in flight")]
    InFlight,
    #[error("network error: {0}")]
    Transport(String),
    #[error("relay rejected the submission")]
    Rejected,
}
