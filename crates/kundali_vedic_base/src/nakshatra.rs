//! Lunar mansions: 27 equal arcs of 13 deg 20', four padas of 3 deg 20'
//! in each.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::util::normalize_360;

/// Width of one nakshatra in degrees.
pub const NAKSHATRA_SPAN_27: f64 = 360.0 / 27.0;

/// Width of one pada in degrees.
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN_27 / 4.0;

/// Nakshatras in zodiac order; the first starts at sidereal 0 deg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    #[serde(rename = "Purva Phalguni")]
    PurvaPhalguni,
    #[serde(rename = "Uttara Phalguni")]
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    #[serde(rename = "Purva Ashadha")]
    PurvaAshadha,
    #[serde(rename = "Uttara Ashadha")]
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    #[serde(rename = "Purva Bhadrapada")]
    PurvaBhadrapada,
    #[serde(rename = "Uttara Bhadrapada")]
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini, 26 = Revati).
pub const ALL_NAKSHATRAS_27: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishtha,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

impl Nakshatra {
    /// Chart label; two-word names keep their space.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishtha => "Dhanishtha",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// Position in [`ALL_NAKSHATRAS_27`].
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn all() -> &'static [Nakshatra; 27] {
        &ALL_NAKSHATRAS_27
    }
}

impl Display for Nakshatra {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Nakshatra placement of a sidereal longitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NakshatraInfo {
    pub nakshatra: Nakshatra,
    pub nakshatra_index: u8,
    /// 1..=4.
    pub pada: u8,
    pub degrees_in_nakshatra: f64,
    pub degrees_in_pada: f64,
}

/// `floor(L / (360/27))` over the normalized longitude, 0..=26.
pub fn nakshatra_index(sidereal_lon_deg: f64) -> u8 {
    let lon = normalize_360(sidereal_lon_deg);
    ((lon / NAKSHATRA_SPAN_27).floor() as u8).min(26)
}

/// Nakshatra, pada and offsets of a sidereal longitude.
pub fn nakshatra_from_longitude(sidereal_lon_deg: f64) -> NakshatraInfo {
    let normalized = normalize_360(sidereal_lon_deg);
    let index = nakshatra_index(normalized);
    let within = normalized - f64::from(index) * NAKSHATRA_SPAN_27;
    let quarter = ((within / PADA_SPAN).floor() as u8).min(3);
    NakshatraInfo {
        nakshatra: ALL_NAKSHATRAS_27[usize::from(index)],
        nakshatra_index: index,
        pada: quarter + 1,
        degrees_in_nakshatra: within,
        degrees_in_pada: within - f64::from(quarter) * PADA_SPAN,
    }
}
