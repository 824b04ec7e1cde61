//! Error types for chart computation.

use kundali_core::EphemerisError;
use kundali_time::TimeError;
use kundali_vedic_base::VedicError;
use thiserror::Error;

/// Errors from chart computation. No partial chart accompanies any of them.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ChartError {
    /// The birth instant did not resolve to a calendar instant.
    #[error(transparent)]
    Time(#[from] TimeError),
    /// Invalid location or other input rejected by the classifiers.
    #[error(transparent)]
    Vedic(#[from] VedicError),
    /// The ephemeris adapter could not produce a sample.
    #[error("computation failed for {what}: {source}")]
    ComputationFailed {
        what: &'static str,
        #[source]
        source: EphemerisError,
    },
}

impl ChartError {
    pub(crate) fn adapter(what: &'static str) -> impl FnOnce(EphemerisError) -> Self {
        move |source| Self::ComputationFailed { what, source }
    }
}
