//! Mean lunar node (Rahu/Ketu) longitudes.
//!
//! `Omega = 125.04452 - 1934.136261 T + 0.0020708 T^2 + T^3 / 450000`
//! with `T` in Julian centuries from J2000.0 (Meeus, Ch. 47). Rahu is the
//! ascending node, Ketu is always Rahu + 180 deg.

use kundali_time::jd_to_centuries;

use crate::util::normalize_360;

/// Which lunar node to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LunarNode {
    Rahu,
    Ketu,
}

/// Mean Rahu tropical longitude in degrees [0, 360).
pub fn mean_rahu_deg(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    normalize_360(125.04452 - 1934.136261 * t + 0.0020708 * t2 + t3 / 450_000.0)
}

/// Mean Ketu tropical longitude in degrees [0, 360).
pub fn mean_ketu_deg(t: f64) -> f64 {
    normalize_360(mean_rahu_deg(t) + 180.0)
}

/// Sidereal `(rahu, ketu)` at a Julian Date for a given ayanamsa.
pub fn sidereal_nodes_deg(jd: f64, ayanamsa_deg: f64) -> (f64, f64) {
    let rahu = normalize_360(mean_rahu_deg(jd_to_centuries(jd)) - ayanamsa_deg);
    (rahu, normalize_360(rahu + 180.0))
}

/// Sidereal longitude of one node.
pub fn sidereal_node_deg(node: LunarNode, jd: f64, ayanamsa_deg: f64) -> f64 {
    let (rahu, ketu) = sidereal_nodes_deg(jd, ayanamsa_deg);
    match node {
        LunarNode::Rahu => rahu,
        LunarNode::Ketu => ketu,
    }
}
