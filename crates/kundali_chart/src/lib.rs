//! Vedic birth chart assembly.
//!
//! [`compute_chart`] drives an [`EphemerisAdapter`](kundali_core::EphemerisAdapter)
//! through the sidereal pipeline in `kundali_vedic_base` and returns an
//! immutable [`Chart`]. The [`geocode`] module supplies the place-name
//! collaborator used by front ends.

pub mod chart;
pub mod error;
pub mod geocode;
pub mod positions;
pub mod types;

pub use chart::{classify_point, compute_chart, compute_chart_from_iso};
pub use error::ChartError;
pub use geocode::{DEFAULT_COORDINATE, DEFAULT_PLACE_NAME, Gazetteer, Place, PlaceResolver};
pub use positions::{graha_to_body, sample_body};
pub use types::{Chart, ChartMeta, ChartPoint, ChartPointKind};
