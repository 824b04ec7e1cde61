//! Error types for Vedic calculations.

use kundali_time::TimeError;
use thiserror::Error;

/// Errors from Vedic base calculations.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum VedicError {
    /// Error from instant construction.
    #[error("time error: {0}")]
    Time(#[from] TimeError),
    /// Invalid geographic location parameter.
    #[error("invalid location: {0}")]
    InvalidLocation(String),
    /// A name did not match any graha.
    #[error("unknown graha: {0:?}")]
    UnknownGraha(String),
    /// A period list does not form a nine-period contiguous timeline.
    #[error("invalid dasha timeline: {0}")]
    InvalidTimeline(String),
}
