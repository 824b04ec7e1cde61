//! UTC instants and the date arithmetic used by the chart and dasha engines.
//!
//! This crate provides:
//! - `Moment`, a validated UTC instant (chrono-backed, serde as RFC 3339)
//! - Julian Date <-> calendar conversions
//! - Greenwich Mean Sidereal Time
//! - Mean-year addition and calendar-span subtraction for dasha periods

pub mod calendar;
pub mod error;
pub mod julian;
pub mod moment;
pub mod sidereal;

pub use calendar::{
    CalendarSpan, MEAN_GREGORIAN_YEAR_DAYS, MILLIS_PER_MEAN_YEAR, add_years, calendar_span,
    days_in_month,
};
pub use error::TimeError;
pub use julian::{
    DAYS_PER_JULIAN_CENTURY, J2000_JD, SECONDS_PER_DAY, UNIX_EPOCH_JD, calendar_to_jd,
    jd_to_calendar, jd_to_centuries,
};
pub use moment::Moment;
pub use sidereal::{earth_rotation_angle_rad, gmst_hours, gmst_rad, local_sidereal_time_hours};
