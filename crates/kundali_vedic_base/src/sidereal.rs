//! Tropical to sidereal conversion and the retrograde rule.

use serde::{Deserialize, Serialize};

use crate::graha::Graha;
use crate::util::{normalize_360, wrapped_delta_deg};

/// Hours between the two samples used for retrograde detection.
pub const RETROGRADE_SAMPLE_HOURS: f64 = 1.0;

/// A body's sidereal placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SiderealPosition {
    /// Sidereal longitude in [0, 360).
    pub longitude: f64,
    pub is_retrograde: bool,
}

/// `normalize(tropical - ayanamsa)`.
pub fn sidereal_longitude(tropical_lon_deg: f64, ayanamsa_deg: f64) -> f64 {
    normalize_360(tropical_lon_deg - ayanamsa_deg)
}

/// True when the longitude decreased between the two samples.
///
/// The difference is wrapped into (-180, 180] before the sign test.
pub fn is_moving_backward(current_deg: f64, previous_deg: f64) -> bool {
    wrapped_delta_deg(current_deg, previous_deg) < 0.0
}

/// Retrograde flag for a graha.
///
/// Surya and Chandra are never retrograde and the nodes always are, whatever
/// the samples say. Other grahas use the one-hour backward difference of
/// their tropical longitudes.
pub fn graha_retrograde(graha: Graha, current_deg: f64, previous_deg: f64) -> bool {
    match graha {
        Graha::Surya | Graha::Chandra => false,
        Graha::Rahu | Graha::Ketu => true,
        _ => is_moving_backward(current_deg, previous_deg),
    }
}

/// Sidereal position from the current and one-hour-earlier tropical samples.
pub fn sidereal_position(
    graha: Graha,
    tropical_now_deg: f64,
    tropical_before_deg: f64,
    ayanamsa_deg: f64,
) -> SiderealPosition {
    SiderealPosition {
        longitude: sidereal_longitude(tropical_now_deg, ayanamsa_deg),
        is_retrograde: graha_retrograde(graha, tropical_now_deg, tropical_before_deg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subtracts_ayanamsa() {
        assert!((sidereal_longitude(280.5, 23.85) - 256.65).abs() < 1e-10);
        assert!((sidereal_longitude(10.0, 23.85) - 346.15).abs() < 1e-10);
    }

    #[test]
    fn backward_motion_across_zero() {
        assert!(is_moving_backward(359.9, 0.1));
        assert!(!is_moving_backward(0.1, 359.9));
        assert!(!is_moving_backward(100.0, 100.0));
    }

    #[test]
    fn luminaries_and_nodes_fixed() {
        assert!(!graha_retrograde(Graha::Surya, 10.0, 11.0));
        assert!(!graha_retrograde(Graha::Chandra, 10.0, 11.0));
        assert!(graha_retrograde(Graha::Rahu, 11.0, 10.0));
        assert!(graha_retrograde(Graha::Ketu, 11.0, 10.0));
    }

    #[test]
    fn planets_follow_samples() {
        assert!(graha_retrograde(Graha::Budha, 10.0, 10.01));
        assert!(!graha_retrograde(Graha::Shani, 10.01, 10.0));
        let p = sidereal_position(Graha::Guru, 100.0, 100.1, 24.0);
        assert!(p.is_retrograde);
        assert!((p.longitude - 76.0).abs() < 1e-10);
    }
}
