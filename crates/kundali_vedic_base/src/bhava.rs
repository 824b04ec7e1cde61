//! House (bhava) assignment.
//!
//! Equal 30 deg houses whose first boundary sits 15 deg before the
//! ascendant degree: `house = floor(normalize(L - (asc - 15)) / 30) + 1`.

use crate::util::normalize_360;

/// Offset of the house-1 boundary behind the ascendant, degrees.
pub const HOUSE_BOUNDARY_OFFSET_DEG: f64 = 15.0;

/// House number 1..=12 of a sidereal longitude for a sidereal ascendant.
pub fn house_number(sidereal_lon_deg: f64, ascendant_deg: f64) -> u8 {
    let adj = normalize_360(sidereal_lon_deg - (ascendant_deg - HOUSE_BOUNDARY_OFFSET_DEG));
    ((adj / 30.0).floor() as u8).min(11) + 1
}
