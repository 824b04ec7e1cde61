//! Ephemeris adapter contract.
//!
//! The chart engine never computes raw planetary positions itself. It asks
//! an [`EphemerisAdapter`] for the tropical ecliptic longitude of a body and
//! for Greenwich sidereal time at an instant. [`MeanElementEphemeris`] is a
//! self-contained analytic adapter so the workspace runs without data files.

pub mod error;
pub mod mean_elements;

use serde::{Deserialize, Serialize};

pub use error::EphemerisError;
pub use kundali_time::Moment;
pub use mean_elements::MeanElementEphemeris;

/// Bodies an adapter must be able to sample.
///
/// Lunar nodes are not here: they are derived analytically downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
}

/// All sampled bodies in a fixed order.
pub const ALL_BODIES: [Body; 7] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
];

impl Body {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
        }
    }

    /// Sun and Moon.
    pub const fn is_luminary(self) -> bool {
        matches!(self, Self::Sun | Self::Moon)
    }

    pub const fn all() -> &'static [Body; 7] {
        &ALL_BODIES
    }
}

impl std::fmt::Display for Body {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One adapter sample for a body at an instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodySample {
    /// Tropical ecliptic longitude of date, degrees in [0, 360).
    pub tropical_longitude_deg: f64,
    /// Geocentric ecliptic rectangular position in AU.
    pub geocentric_vector_au: [f64; 3],
}

/// Source of raw celestial positions.
///
/// Implementations must be deterministic for the same input and accept any
/// historical or future instant they claim to support. Adapters are shared
/// across threads (`Arc<dyn EphemerisAdapter>`), so they hold no per-call
/// mutable state.
pub trait EphemerisAdapter: Send + Sync {
    /// Short identifier recorded in chart metadata.
    fn name(&self) -> &'static str;

    /// Tropical position of `body` at `moment`.
    fn body_position(&self, body: Body, moment: &Moment) -> Result<BodySample, EphemerisError>;

    /// Greenwich sidereal time at `moment`, in hours.
    fn sidereal_time_hours(&self, moment: &Moment) -> Result<f64, EphemerisError>;
}

impl<T: EphemerisAdapter + ?Sized> EphemerisAdapter for &T {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn body_position(&self, body: Body, moment: &Moment) -> Result<BodySample, EphemerisError> {
        (**self).body_position(body, moment)
    }

    fn sidereal_time_hours(&self, moment: &Moment) -> Result<f64, EphemerisError> {
        (**self).sidereal_time_hours(moment)
    }
}
