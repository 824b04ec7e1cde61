//! Exaltation, debilitation and own-sign dignity.
//!
//! Each graha carries one static rule; classification returns the first
//! match in the order exalted, debilitated, own sign, otherwise neutral.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::graha::Graha;
use crate::rashi::Rashi;

/// Dignity of a chart point in its sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dignity {
    Exalted,
    Debilitated,
    #[serde(rename = "Own Sign")]
    OwnSign,
    Neutral,
    /// Points without a rule (the Lagna).
    #[serde(rename = "-")]
    NotApplicable,
}

impl Dignity {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Exalted => "Exalted",
            Self::Debilitated => "Debilitated",
            Self::OwnSign => "Own Sign",
            Self::Neutral => "Neutral",
            Self::NotApplicable => "-",
        }
    }
}

impl Display for Dignity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Static exaltation/debilitation/own-sign record for one graha.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DignityRule {
    pub exaltation: Rashi,
    pub debilitation: Rashi,
    pub own_signs: &'static [Rashi],
}

/// Dignity rule for a graha.
///
/// Node rules follow the common convention: Rahu exalted in Vrishabha,
/// Ketu in Vrischika, each debilitated in the other's exaltation sign.
pub const fn dignity_rule(graha: Graha) -> DignityRule {
    match graha {
        Graha::Surya => DignityRule {
            exaltation: Rashi::Mesha,
            debilitation: Rashi::Tula,
            own_signs: &[Rashi::Simha],
        },
        Graha::Chandra => DignityRule {
            exaltation: Rashi::Vrishabha,
            debilitation: Rashi::Vrischika,
            own_signs: &[Rashi::Karka],
        },
        Graha::Kuja => DignityRule {
            exaltation: Rashi::Makara,
            debilitation: Rashi::Karka,
            own_signs: &[Rashi::Mesha, Rashi::Vrischika],
        },
        Graha::Budha => DignityRule {
            exaltation: Rashi::Kanya,
            debilitation: Rashi::Meena,
            own_signs: &[Rashi::Mithuna, Rashi::Kanya],
        },
        Graha::Guru => DignityRule {
            exaltation: Rashi::Karka,
            debilitation: Rashi::Makara,
            own_signs: &[Rashi::Dhanu, Rashi::Meena],
        },
        Graha::Shukra => DignityRule {
            exaltation: Rashi::Meena,
            debilitation: Rashi::Kanya,
            own_signs: &[Rashi::Vrishabha, Rashi::Tula],
        },
        Graha::Shani => DignityRule {
            exaltation: Rashi::Tula,
            debilitation: Rashi::Mesha,
            own_signs: &[Rashi::Makara, Rashi::Kumbha],
        },
        Graha::Rahu => DignityRule {
            exaltation: Rashi::Vrishabha,
            debilitation: Rashi::Vrischika,
            own_signs: &[Rashi::Kumbha],
        },
        Graha::Ketu => DignityRule {
            exaltation: Rashi::Vrischika,
            debilitation: Rashi::Vrishabha,
            own_signs: &[Rashi::Vrischika],
        },
    }
}

/// Dignity of `graha` placed in `rashi`.
pub fn dignity(graha: Graha, rashi: Rashi) -> Dignity {
    let rule = dignity_rule(graha);
    if rule.exaltation == rashi {
        Dignity::Exalted
    } else if rule.debilitation == rashi {
        Dignity::Debilitated
    } else if rule.own_signs.contains(&rashi) {
        Dignity::OwnSign
    } else {
        Dignity::Neutral
    }
}

/// Dignity of an optional graha; `None` (the Lagna) has no rule.
pub fn point_dignity(graha: Option<Graha>, rashi: Rashi) -> Dignity {
    match graha {
        Some(g) => dignity(g, rashi),
        None => Dignity::NotApplicable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graha::ALL_GRAHAS;

    #[test]
    fn surya_examples() {
        assert_eq!(dignity(Graha::Surya, Rashi::Mesha), Dignity::Exalted);
        assert_eq!(dignity(Graha::Surya, Rashi::Tula), Dignity::Debilitated);
        assert_eq!(dignity(Graha::Surya, Rashi::Simha), Dignity::OwnSign);
        assert_eq!(dignity(Graha::Surya, Rashi::Vrishabha), Dignity::Neutral);
    }

    #[test]
    fn exaltation_wins_over_own_sign() {
        // Budha is both exalted in and lord of Kanya.
        assert_eq!(dignity(Graha::Budha, Rashi::Kanya), Dignity::Exalted);
        // Ketu owns and is exalted in Vrischika.
        assert_eq!(dignity(Graha::Ketu, Rashi::Vrischika), Dignity::Exalted);
    }

    #[test]
    fn debilitation_opposite_exaltation() {
        for g in ALL_GRAHAS {
            let rule = dignity_rule(g);
            assert_eq!(
                (rule.exaltation.index() + 6) % 12,
                rule.debilitation.index(),
                "{g}"
            );
        }
    }

    #[test]
    fn lagna_placeholder() {
        assert_eq!(point_dignity(None, Rashi::Mesha).name(), "-");
        assert_eq!(point_dignity(Some(Graha::Shani), Rashi::Tula), Dignity::Exalted);
    }
}
