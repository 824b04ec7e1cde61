//! Chart value types.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use kundali_time::Moment;
use kundali_vedic_base::{
    ActiveDasha, DashaTimeline, Dignity, Dms, GeoCoordinate, Graha, Nakshatra, Rashi, VedicError,
    active_dasha, compute_mahadashas,
};

/// Which point of the chart a [`ChartPoint`] describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ChartPointKind {
    Lagna,
    Graha(Graha),
}

impl ChartPointKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lagna => "Lagna",
            Self::Graha(g) => g.name(),
        }
    }

    pub const fn graha(self) -> Option<Graha> {
        match self {
            Self::Lagna => None,
            Self::Graha(g) => Some(g),
        }
    }
}

impl Display for ChartPointKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChartPointKind {
    type Err = VedicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("lagna") || s.trim().eq_ignore_ascii_case("ascendant") {
            Ok(Self::Lagna)
        } else {
            s.parse().map(Self::Graha)
        }
    }
}

impl TryFrom<String> for ChartPointKind {
    type Error = VedicError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ChartPointKind> for String {
    fn from(kind: ChartPointKind) -> String {
        kind.name().to_string()
    }
}

/// One placement in the birth chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub kind: ChartPointKind,
    /// 1-based sign number (Mesha = 1).
    pub sign_id: u8,
    pub sign: Rashi,
    /// Decimal degrees within the sign, [0, 30).
    pub degrees_in_sign: f64,
    pub dms: Dms,
    pub nakshatra: Nakshatra,
    /// Pada within the nakshatra, 1-4.
    pub nakshatra_pada: u8,
    pub nakshatra_lord: Graha,
    pub sign_lord: Graha,
    pub dignity: Dignity,
    pub is_retrograde: bool,
    /// Sidereal longitude, [0, 360).
    pub longitude: f64,
    /// House 1-12.
    pub house: u8,
    pub navamsa_sign: Rashi,
}

impl ChartPoint {
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Degrees and minutes within the sign, e.g. `12°34'`.
    pub fn degree_label(&self) -> String {
        self.dms.deg_min()
    }
}

/// Inputs and intermediate values recorded alongside a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartMeta {
    pub moment: Moment,
    pub coordinate: GeoCoordinate,
    pub julian_day: f64,
    pub lst_hours: f64,
    pub ramc_deg: f64,
    pub tropical_ascendant_deg: f64,
    pub sidereal_ascendant_deg: f64,
    /// Name of the ephemeris adapter that produced the samples.
    pub adapter: String,
}

/// A computed birth chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    /// Lagna first, then the nine grahas.
    pub points: Vec<ChartPoint>,
    pub ascendant_sign: Rashi,
    pub ayanamsa: f64,
    pub meta: ChartMeta,
}

impl Chart {
    pub fn point(&self, kind: ChartPointKind) -> Option<&ChartPoint> {
        self.points.iter().find(|p| p.kind == kind)
    }

    pub fn graha(&self, graha: Graha) -> Option<&ChartPoint> {
        self.point(ChartPointKind::Graha(graha))
    }

    pub fn lagna(&self) -> Option<&ChartPoint> {
        self.point(ChartPointKind::Lagna)
    }

    /// Sidereal longitude of Chandra.
    pub fn moon_longitude(&self) -> Option<f64> {
        self.graha(Graha::Chandra).map(|p| p.longitude)
    }

    /// Mahadasha timeline keyed on this chart's Moon and birth instant.
    pub fn mahadashas(&self) -> Option<DashaTimeline> {
        self.moon_longitude()
            .map(|moon| compute_mahadashas(moon, self.meta.moment))
    }

    /// Periods running at `query` for this chart.
    pub fn active_dasha(&self, query: Moment) -> Option<ActiveDasha> {
        self.moon_longitude()
            .and_then(|moon| active_dasha(moon, self.meta.moment, query))
    }
}
