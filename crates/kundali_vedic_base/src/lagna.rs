//! Lagna (ascendant) from sidereal time, latitude and a fixed obliquity.
//!
//! `Asc = atan2(cos RAMC, -sin RAMC cos eps - tan phi sin eps)`
//! (Meeus, "Astronomical Algorithms", Ch. 13) with `eps` held at 23.44 deg.

use serde::{Deserialize, Serialize};

use crate::location::GeoCoordinate;
use crate::util::normalize_360;

/// Obliquity of the ecliptic used for the ascendant, degrees.
pub const OBLIQUITY_DEG: f64 = 23.44;

/// Ascendant computation result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ascendant {
    /// Local sidereal time, hours (`gmst + longitude / 15`, unwrapped).
    pub lst_hours: f64,
    /// Right ascension of the meridian, degrees [0, 360).
    pub ramc_deg: f64,
    /// Tropical ascendant longitude, degrees [0, 360).
    pub tropical_deg: f64,
    /// Sidereal ascendant longitude, degrees [0, 360).
    pub sidereal_deg: f64,
}

/// RAMC in degrees from local sidereal time in hours.
pub fn ramc_deg(lst_hours: f64) -> f64 {
    normalize_360(lst_hours * 15.0)
}

/// Tropical ascendant longitude in degrees [0, 360).
pub fn tropical_ascendant_deg(ramc_deg: f64, latitude_deg: f64) -> f64 {
    let ramc = ramc_deg.to_radians();
    let eps = OBLIQUITY_DEG.to_radians();
    let phi = latitude_deg.to_radians();
    let asc = f64::atan2(ramc.cos(), -ramc.sin() * eps.cos() - phi.tan() * eps.sin());
    normalize_360(asc.to_degrees())
}

/// Full ascendant chain from Greenwich sidereal time (hours).
pub fn compute_ascendant(
    gmst_hours: f64,
    coordinate: &GeoCoordinate,
    ayanamsa_deg: f64,
) -> Ascendant {
    let lst_hours = kundali_time::local_sidereal_time_hours(gmst_hours, coordinate.longitude);
    let ramc = ramc_deg(lst_hours);
    let tropical = tropical_ascendant_deg(ramc, coordinate.latitude);
    Ascendant {
        lst_hours,
        ramc_deg: ramc,
        tropical_deg: tropical,
        sidereal_deg: normalize_360(tropical - ayanamsa_deg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::wrapped_delta_deg;

    #[test]
    fn equator_cardinal_points() {
        // RAMC 0 on the equator: Cancer point rising.
        assert!((tropical_ascendant_deg(0.0, 0.0) - 90.0).abs() < 1e-9);
        // RAMC 90: Libra point rising.
        assert!((tropical_ascendant_deg(90.0, 0.0) - 180.0).abs() < 1e-9);
        assert!(wrapped_delta_deg(tropical_ascendant_deg(270.0, 0.0), 0.0).abs() < 1e-9);
    }

    #[test]
    fn ascendant_leads_ramc_by_quarter_at_equinox_points() {
        // At RAMC 180 the ascendant is 270 deg at any latitude.
        for lat in [-60.0, -20.0, 0.0, 28.6, 51.5] {
            let asc = tropical_ascendant_deg(180.0, lat);
            assert!((asc - 270.0).abs() < 1e-9, "lat {lat}: {asc}");
        }
    }

    #[test]
    fn sidereal_subtracts_ayanamsa() {
        let delhi = GeoCoordinate::new(28.6139, 77.2090).unwrap();
        let a = compute_ascendant(6.0, &delhi, 24.0);
        assert!((a.lst_hours - (6.0 + 77.2090 / 15.0)).abs() < 1e-12);
        assert!((normalize_360(a.tropical_deg - a.sidereal_deg) - 24.0).abs() < 1e-9);
    }

    #[test]
    fn west_longitude_wraps_ramc() {
        let c = GeoCoordinate::new(40.0, -120.0).unwrap();
        let a = compute_ascendant(2.0, &c, 0.0);
        // 2h - 8h = -6h -> 270 deg
        assert!((a.ramc_deg - 270.0).abs() < 1e-9);
    }
}
