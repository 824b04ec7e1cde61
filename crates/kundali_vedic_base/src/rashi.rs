//! Sidereal signs and the degree-minute display of a position within one.
//!
//! Twelve 30 deg signs from Mesha at sidereal 0 deg.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::util::normalize_360;

/// Width of one rashi in degrees.
pub const RASHI_SPAN_DEG: f64 = 30.0;

/// Sidereal zodiac signs, Mesha first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    /// Sanskrit name, as printed in charts.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Western equivalent (Mesha is Aries).
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// Position in [`ALL_RASHIS`], 0..=11.
    pub const fn index(self) -> u8 {
        match self {
            Self::Mesha => 0,
            Self::Vrishabha => 1,
            Self::Mithuna => 2,
            Self::Karka => 3,
            Self::Simha => 4,
            Self::Kanya => 5,
            Self::Tula => 6,
            Self::Vrischika => 7,
            Self::Dhanu => 8,
            Self::Makara => 9,
            Self::Kumbha => 10,
            Self::Meena => 11,
        }
    }

    /// 1-based sign number (Mesha=1 .. Meena=12).
    pub const fn number(self) -> u8 {
        self.index() + 1
    }

    /// Rashi at a 0-based index, wrapping modulo 12.
    pub const fn from_index(index: u8) -> Rashi {
        ALL_RASHIS[(index % 12) as usize]
    }

    /// Mesha through Meena.
    pub const fn all() -> &'static [Rashi; 12] {
        &ALL_RASHIS
    }
}

impl Display for Rashi {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// An angle split into whole degrees, arc-minutes and arc-seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dms {
    /// 0..=29 for a position inside a sign.
    pub degrees: u16,
    /// Arc-minutes (0..59).
    pub minutes: u8,
    /// Fractional arc-seconds, [0, 60).
    pub seconds: f64,
}

impl Dms {
    /// Degrees and whole minutes, e.g. `12°34'`.
    pub fn deg_min(&self) -> String {
        format!("{}°{:02}'", self.degrees, self.minutes)
    }
}

impl Display for Dms {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°{:02}'{:04.1}\"", self.degrees, self.minutes, self.seconds)
    }
}

/// Sign placement of a sidereal longitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RashiInfo {
    pub rashi: Rashi,
    /// Same as `rashi.index()`.
    pub rashi_index: u8,
    pub dms: Dms,
    /// `L mod 30`.
    pub degrees_in_rashi: f64,
}

/// Decimal degrees of a [`Dms`].
pub fn dms_to_deg(dms: &Dms) -> f64 {
    f64::from(dms.degrees) + f64::from(dms.minutes) / 60.0 + dms.seconds / 3600.0
}

/// Split decimal degrees, flooring each field. The sign is dropped.
pub fn deg_to_dms(deg: f64) -> Dms {
    let magnitude = deg.abs();
    let degrees = magnitude.floor();
    let arcmin = (magnitude - degrees) * 60.0;
    let minutes = arcmin.floor().min(59.0);
    Dms {
        degrees: degrees as u16,
        minutes: minutes as u8,
        seconds: (arcmin - minutes) * 60.0,
    }
}

/// `floor(L / 30)` over the normalized longitude, 0..=11.
pub fn sign_index(sidereal_lon_deg: f64) -> u8 {
    let lon = normalize_360(sidereal_lon_deg);
    ((lon / RASHI_SPAN_DEG).floor() as u8).min(11)
}

/// Sign, in-sign degrees and DMS of a sidereal longitude.
pub fn rashi_from_longitude(sidereal_lon_deg: f64) -> RashiInfo {
    let normalized = normalize_360(sidereal_lon_deg);
    let index = sign_index(normalized);
    let degrees_in_rashi = normalized - f64::from(index) * RASHI_SPAN_DEG;
    RashiInfo {
        rashi: Rashi::from_index(index),
        rashi_index: index,
        dms: deg_to_dms(degrees_in_rashi),
        degrees_in_rashi,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_index_wraps() {
        assert_eq!(Rashi::from_index(0), Rashi::Mesha);
        assert_eq!(Rashi::from_index(11), Rashi::Meena);
        assert_eq!(Rashi::from_index(13), Rashi::Vrishabha);
        for r in Rashi::all() {
            assert_eq!(Rashi::from_index(r.index()), *r);
            assert_eq!(r.number(), r.index() + 1);
        }
    }

    #[test]
    fn display_uses_sanskrit() {
        assert_eq!(Rashi::Vrischika.to_string(), "Vrischika");
        assert_eq!(Rashi::Vrischika.western_name(), "Scorpio");
    }

    #[test]
    fn dms_of_ayanamsa_value() {
        // 24.1234 deg = 24 deg 07' 24.24"
        let d = deg_to_dms(24.1234);
        assert_eq!((d.degrees, d.minutes), (24, 7));
        assert!((d.seconds - 24.24).abs() < 1e-6, "{}", d.seconds);
        assert!((dms_to_deg(&d) - 24.1234).abs() < 1e-12);
        assert_eq!(d.to_string(), "24°07'24.2\"");
    }

    #[test]
    fn negative_angles_drop_sign() {
        assert_eq!(deg_to_dms(-12.5), deg_to_dms(12.5));
    }

    #[test]
    fn deg_min_format() {
        assert_eq!(deg_to_dms(12.5).deg_min(), "12°30'");
        assert_eq!(deg_to_dms(7.11).deg_min(), "7°06'");
        assert_eq!(deg_to_dms(0.0).deg_min(), "0°00'");
    }

    #[test]
    fn sign_index_examples() {
        assert_eq!(sign_index(45.0), 1);
        assert_eq!(sign_index(0.0), 0);
        assert_eq!(sign_index(359.999), 11);
        assert_eq!(sign_index(-10.0), 11);
    }

    #[test]
    fn cusps_start_their_sign() {
        for r in ALL_RASHIS {
            let info = rashi_from_longitude(f64::from(r.index()) * RASHI_SPAN_DEG);
            assert_eq!(info.rashi, r);
            assert!(info.degrees_in_rashi.abs() < 1e-9, "{r}");
        }
    }

    #[test]
    fn kuja_in_makara() {
        let info = rashi_from_longitude(298.75);
        assert_eq!(info.rashi, Rashi::Makara);
        assert_eq!(info.rashi_index, 9);
        assert!((info.degrees_in_rashi - 28.75).abs() < 1e-9);
        assert_eq!(info.dms.deg_min(), "28°45'");
    }

    #[test]
    fn out_of_range_longitudes_wrap() {
        let info = rashi_from_longitude(395.0);
        assert_eq!(info.rashi, Rashi::Vrishabha);
        assert!((info.degrees_in_rashi - 5.0).abs() < 1e-9);
        let info = rashi_from_longitude(-0.5);
        assert_eq!(info.rashi, Rashi::Meena);
        assert!((info.degrees_in_rashi - 29.5).abs() < 1e-9);
    }
}
