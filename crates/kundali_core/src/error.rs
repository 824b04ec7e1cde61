//! Adapter failure type.

use thiserror::Error;

use crate::Body;

/// Failure of an ephemeris adapter to produce a sample.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EphemerisError {
    #[error("unsupported body: {}", .0.name())]
    UnsupportedBody(Body),
    #[error("epoch out of range: JD {jd}")]
    EpochOutOfRange { jd: f64 },
    #[error("internal error: {0}")]
    Internal(String),
}
