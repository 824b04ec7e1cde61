//! Vedic planet (graha) enum, rashi lordship and the nakshatra lord cycle.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VedicError;
use crate::nakshatra::Nakshatra;
use crate::rashi::Rashi;

/// The 9 Vedic grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Graha {
    Surya,
    Chandra,
    Kuja,
    Budha,
    Guru,
    Shukra,
    Shani,
    Rahu,
    Ketu,
}

/// All 9 grahas in chart order.
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Kuja,
    Graha::Budha,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

/// The nakshatra lord cycle, also the Vimshottari dasha order.
pub const VIMSHOTTARI_LORDS: [Graha; 9] = [
    Graha::Ketu,
    Graha::Shukra,
    Graha::Surya,
    Graha::Chandra,
    Graha::Kuja,
    Graha::Rahu,
    Graha::Guru,
    Graha::Shani,
    Graha::Budha,
];

impl Graha {
    /// Sanskrit name of the graha.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Kuja => "Kuja",
            Self::Budha => "Budha",
            Self::Guru => "Guru",
            Self::Shukra => "Shukra",
            Self::Shani => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// English name of the graha.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Surya => "Sun",
            Self::Chandra => "Moon",
            Self::Kuja => "Mars",
            Self::Budha => "Mercury",
            Self::Guru => "Jupiter",
            Self::Shukra => "Venus",
            Self::Shani => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// 0-based index into [`ALL_GRAHAS`].
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Position in [`VIMSHOTTARI_LORDS`].
    pub const fn lord_cycle_index(self) -> usize {
        match self {
            Self::Ketu => 0,
            Self::Shukra => 1,
            Self::Surya => 2,
            Self::Chandra => 3,
            Self::Kuja => 4,
            Self::Rahu => 5,
            Self::Guru => 6,
            Self::Shani => 7,
            Self::Budha => 8,
        }
    }

    /// Rahu and Ketu, the mean lunar nodes.
    pub const fn is_node(self) -> bool {
        matches!(self, Self::Rahu | Self::Ketu)
    }

    pub const fn all() -> &'static [Graha; 9] {
        &ALL_GRAHAS
    }
}

impl Display for Graha {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Graha {
    type Err = VedicError;

    /// Accepts Sanskrit or English names, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ALL_GRAHAS
            .iter()
            .copied()
            .find(|g| {
                g.name().eq_ignore_ascii_case(wanted)
                    || g.english_name().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| VedicError::UnknownGraha(s.to_string()))
    }
}

/// Planetary lord of a rashi.
///
/// - Mesha/Vrischika -> Kuja
/// - Vrishabha/Tula -> Shukra
/// - Mithuna/Kanya -> Budha
/// - Karka -> Chandra
/// - Simha -> Surya
/// - Dhanu/Meena -> Guru
/// - Makara/Kumbha -> Shani
pub const fn rashi_lord(rashi: Rashi) -> Graha {
    match rashi {
        Rashi::Mesha | Rashi::Vrischika => Graha::Kuja,
        Rashi::Vrishabha | Rashi::Tula => Graha::Shukra,
        Rashi::Mithuna | Rashi::Kanya => Graha::Budha,
        Rashi::Karka => Graha::Chandra,
        Rashi::Simha => Graha::Surya,
        Rashi::Dhanu | Rashi::Meena => Graha::Guru,
        Rashi::Makara | Rashi::Kumbha => Graha::Shani,
    }
}

/// Lord of a nakshatra: `VIMSHOTTARI_LORDS[index mod 9]`.
pub const fn nakshatra_lord(nakshatra: Nakshatra) -> Graha {
    VIMSHOTTARI_LORDS[(nakshatra.index() % 9) as usize]
}
