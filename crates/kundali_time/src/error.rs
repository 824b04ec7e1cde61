//! Error types for instant construction and parsing.

use thiserror::Error;

/// Errors from building or parsing a [`crate::Moment`].
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// The date/time fields do not name a real proleptic-Gregorian instant.
    #[error("invalid moment: {0}")]
    InvalidMoment(String),
    /// The text could not be parsed as an ISO-8601 date-time.
    #[error("cannot parse date-time {input:?}: {reason}")]
    Parse { input: String, reason: String },
}

impl TimeError {
    /// True when the input was well-formed but names no real instant.
    pub fn is_invalid_moment(&self) -> bool {
        matches!(self, Self::InvalidMoment(_))
    }
}
