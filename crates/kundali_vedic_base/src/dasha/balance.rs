//! Birth balance of the first Vimshottari mahadasha.

use crate::graha::{Graha, VIMSHOTTARI_LORDS};
use crate::nakshatra::NAKSHATRA_SPAN_27;
use crate::util::normalize_360;

use super::vimshottari::dasha_years;

/// Where the Moon sits in its nakshatra and what remains of the first period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonBalance {
    /// 0-based nakshatra index (0 = Ashwini).
    pub nakshatra_index: u8,
    /// Position in [`VIMSHOTTARI_LORDS`] of the first lord.
    pub lord_index: usize,
    pub first_lord: Graha,
    /// Fraction of the nakshatra already traversed, [0, 1).
    pub fraction_traversed: f64,
    pub fraction_remaining: f64,
    /// `DASHA_YEARS[first_lord] * fraction_remaining`.
    pub balance_years: f64,
}

/// Birth balance from the Moon's sidereal longitude.
pub fn vimshottari_balance(moon_sidereal_lon: f64) -> MoonBalance {
    let pos = normalize_360(moon_sidereal_lon) / NAKSHATRA_SPAN_27;
    let nakshatra_index = (pos.floor() as u8).min(26);
    let fraction_traversed = (pos - nakshatra_index as f64).clamp(0.0, 1.0);
    let fraction_remaining = 1.0 - fraction_traversed;
    let lord_index = nakshatra_index as usize % VIMSHOTTARI_LORDS.len();
    let first_lord = VIMSHOTTARI_LORDS[lord_index];
    MoonBalance {
        nakshatra_index,
        lord_index,
        first_lord,
        fraction_traversed,
        fraction_remaining,
        balance_years: dasha_years(first_lord) * fraction_remaining,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moon_at_54_5() {
        let b = vimshottari_balance(54.5);
        assert_eq!(b.nakshatra_index, 4);
        assert_eq!(b.lord_index, 4);
        assert_eq!(b.first_lord, Graha::Kuja);
        assert!((b.fraction_traversed - 0.0875).abs() < 1e-9);
        assert!((b.balance_years - 6.3875).abs() < 1e-9);
    }

    #[test]
    fn start_of_nakshatra_is_full_period() {
        let b = vimshottari_balance(0.0);
        assert_eq!(b.first_lord, Graha::Ketu);
        assert!((b.balance_years - 7.0).abs() < 1e-12);
    }

    #[test]
    fn revati_end_is_budha() {
        let b = vimshottari_balance(359.999);
        assert_eq!(b.nakshatra_index, 26);
        assert_eq!(b.first_lord, Graha::Budha);
        assert!(b.balance_years > 0.0 && b.balance_years < 0.01);
    }
}
