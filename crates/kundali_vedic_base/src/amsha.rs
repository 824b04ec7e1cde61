//! Navamsa (D9) sign from a continuous pada count.
//!
//! `pada = floor(L * 60 / 200)`, navamsa sign index = `pada mod 12`. The
//! count runs around the whole zodiac from Mesha; no element-based
//! starting sign is applied.

use crate::rashi::Rashi;
use crate::util::normalize_360;

/// One navamsa (pada) in arc-minutes: 3 deg 20'.
pub const NAVAMSA_ARC_MINUTES: f64 = 200.0;

/// Navamsa pada count from 0 deg, 0..=107.
pub fn navamsa_pada(sidereal_lon_deg: f64) -> u16 {
    let minutes = normalize_360(sidereal_lon_deg) * 60.0;
    ((minutes / NAVAMSA_ARC_MINUTES).floor() as u16).min(107)
}

/// 0-based navamsa sign index.
pub fn navamsa_index(sidereal_lon_deg: f64) -> u8 {
    (navamsa_pada(sidereal_lon_deg) % 12) as u8
}

/// Navamsa sign of a sidereal longitude.
pub fn navamsa_rashi(sidereal_lon_deg: f64) -> Rashi {
    Rashi::from_index(navamsa_index(sidereal_lon_deg))
}
