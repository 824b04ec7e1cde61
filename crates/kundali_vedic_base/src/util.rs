//! Shared angle helpers.

/// Normalize an angle to [0, 360) degrees.
///
/// `((d mod 360) + 360) mod 360`, with the rounding case of tiny negative
/// inputs (where `r + 360.0 == 360.0`) folded back to zero.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    let r = if r < 0.0 { r + 360.0 } else { r };
    if r >= 360.0 { 0.0 } else { r }
}

/// Signed difference `current - previous` wrapped into (-180, 180].
pub fn wrapped_delta_deg(current: f64, previous: f64) -> f64 {
    let diff = (current - previous).rem_euclid(360.0);
    if diff > 180.0 { diff - 360.0 } else { diff }
}
