//! Linear ayanamsa model.
//!
//! `ayanamsa = 23.85 + 0.0139 * (year - 2000)` with the year interpolated
//! by zero-based month (`calendarYear + month0 / 12`). This is a coarse
//! stand-in for a precession series and is kept as-is: every sign, house
//! and dasha result downstream depends on it.

use kundali_time::Moment;

/// Ayanamsa at the start of 2000, degrees.
pub const AYANAMSA_AT_2000_DEG: f64 = 23.85;

/// Annual drift of the ayanamsa, degrees per year.
pub const AYANAMSA_RATE_DEG_PER_YEAR: f64 = 0.0139;

/// `calendarYear + month0 / 12`.
pub fn fractional_year(moment: &Moment) -> f64 {
    moment.year() as f64 + moment.month0() as f64 / 12.0
}

/// Ayanamsa in degrees for a fractional year.
pub fn ayanamsa_for_year(year: f64) -> f64 {
    AYANAMSA_AT_2000_DEG + AYANAMSA_RATE_DEG_PER_YEAR * (year - 2000.0)
}

/// Ayanamsa in degrees at a moment.
pub fn ayanamsa_deg(moment: &Moment) -> f64 {
    ayanamsa_for_year(fractional_year(moment))
}
