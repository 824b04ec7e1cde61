//! Core types for Vimshottari dasha periods.

use serde::{Deserialize, Serialize};

use kundali_time::{CalendarSpan, Moment, add_years, calendar_span};

use crate::error::VedicError;
use crate::graha::Graha;

/// Number of periods at every level.
pub const PERIODS_PER_LEVEL: usize = 9;

/// The three hierarchical dasha levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum DashaLevel {
    Mahadasha = 1,
    Antardasha = 2,
    Pratyantardasha = 3,
}

impl DashaLevel {
    /// Create from the level number (1..=3).
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            1 => Some(Self::Mahadasha),
            2 => Some(Self::Antardasha),
            3 => Some(Self::Pratyantardasha),
            _ => None,
        }
    }

    pub const fn number(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Mahadasha => "Mahadasha",
            Self::Antardasha => "Antardasha",
            Self::Pratyantardasha => "Pratyantardasha",
        }
    }

    /// Next deeper level, if any.
    pub const fn child_level(self) -> Option<Self> {
        match self {
            Self::Mahadasha => Some(Self::Antardasha),
            Self::Antardasha => Some(Self::Pratyantardasha),
            Self::Pratyantardasha => None,
        }
    }
}

impl From<DashaLevel> for u8 {
    fn from(level: DashaLevel) -> u8 {
        level.number()
    }
}

impl TryFrom<u8> for DashaLevel {
    type Error = VedicError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        Self::from_u8(v).ok_or_else(|| VedicError::InvalidTimeline(format!("dasha level {v}")))
    }
}

/// A single dasha period, `[start, end)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashaPeriod {
    /// `"Kuja"`, `"Kuja - Rahu"`, `"Kuja - Rahu - Guru"`.
    pub label: String,
    /// Ruling graha of this period.
    pub lord: Graha,
    pub start: Moment,
    pub end: Moment,
    /// Length in mean Gregorian years.
    pub duration_years: f64,
    /// Calendar-field length (`end - start` with borrow).
    pub span: CalendarSpan,
    pub level: DashaLevel,
    /// Ancestors from the mahadasha lord down; empty at level 1.
    pub parent_chain: Vec<Graha>,
}

impl DashaPeriod {
    /// Lay out a period of `duration_years` starting at `start`.
    pub fn new(
        lord: Graha,
        parent_chain: Vec<Graha>,
        level: DashaLevel,
        start: Moment,
        duration_years: f64,
    ) -> Self {
        let end = add_years(start, duration_years);
        let label = parent_chain
            .iter()
            .chain(std::iter::once(&lord))
            .map(|g| g.name())
            .collect::<Vec<_>>()
            .join(" - ");
        Self {
            label,
            lord,
            start,
            end,
            duration_years,
            span: calendar_span(&start, &end),
            level,
            parent_chain,
        }
    }

    /// Half-open containment: `start <= moment < end`.
    pub fn contains(&self, moment: &Moment) -> bool {
        self.start <= *moment && *moment < self.end
    }
}

/// Exactly nine contiguous periods at one level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<DashaPeriod>", into = "Vec<DashaPeriod>")]
pub struct DashaTimeline {
    periods: Vec<DashaPeriod>,
}

impl DashaTimeline {
    /// Validate and wrap a period list.
    pub fn from_periods(periods: Vec<DashaPeriod>) -> Result<Self, VedicError> {
        if periods.len() != PERIODS_PER_LEVEL {
            return Err(VedicError::InvalidTimeline(format!(
                "expected {PERIODS_PER_LEVEL} periods, got {}",
                periods.len()
            )));
        }
        let level = periods[0].level;
        for pair in periods.windows(2) {
            if pair[1].level != level {
                return Err(VedicError::InvalidTimeline("mixed levels".into()));
            }
            if pair[0].end != pair[1].start {
                return Err(VedicError::InvalidTimeline(format!(
                    "gap or overlap between {} and {}",
                    pair[0].label, pair[1].label
                )));
            }
        }
        Ok(Self { periods })
    }

    /// Wrap periods laid end to end by the generators.
    pub(crate) fn from_laid_out(periods: Vec<DashaPeriod>) -> Self {
        debug_assert_eq!(periods.len(), PERIODS_PER_LEVEL);
        Self { periods }
    }

    pub fn periods(&self) -> &[DashaPeriod] {
        &self.periods
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DashaPeriod> {
        self.periods.iter()
    }

    pub fn len(&self) -> usize {
        self.periods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    pub fn level(&self) -> DashaLevel {
        self.periods[0].level
    }

    pub fn first(&self) -> &DashaPeriod {
        &self.periods[0]
    }

    pub fn last(&self) -> &DashaPeriod {
        &self.periods[PERIODS_PER_LEVEL - 1]
    }

    pub fn start(&self) -> Moment {
        self.first().start
    }

    pub fn end(&self) -> Moment {
        self.last().end
    }

    /// Sum of `duration_years` over the nine periods.
    pub fn total_years(&self) -> f64 {
        self.periods.iter().map(|p| p.duration_years).sum()
    }

    /// Period ruled by `lord`.
    pub fn find(&self, lord: Graha) -> Option<&DashaPeriod> {
        self.periods.iter().find(|p| p.lord == lord)
    }

    /// Period containing `moment`, if any.
    pub fn active_at(&self, moment: &Moment) -> Option<&DashaPeriod> {
        self.periods.iter().find(|p| p.contains(moment))
    }
}

impl TryFrom<Vec<DashaPeriod>> for DashaTimeline {
    type Error = VedicError;

    fn try_from(periods: Vec<DashaPeriod>) -> Result<Self, Self::Error> {
        Self::from_periods(periods)
    }
}

impl From<DashaTimeline> for Vec<DashaPeriod> {
    fn from(timeline: DashaTimeline) -> Self {
        timeline.periods
    }
}

impl<'a> IntoIterator for &'a DashaTimeline {
    type Item = &'a DashaPeriod;
    type IntoIter = std::slice::Iter<'a, DashaPeriod>;

    fn into_iter(self) -> Self::IntoIter {
        self.periods.iter()
    }
}

impl std::ops::Index<usize> for DashaTimeline {
    type Output = DashaPeriod;

    fn index(&self, i: usize) -> &DashaPeriod {
        &self.periods[i]
    }
}

/// Active periods at one instant, one per level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveDasha {
    pub query: Moment,
    pub mahadasha: DashaPeriod,
    pub antardasha: DashaPeriod,
    pub pratyantardasha: DashaPeriod,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start() -> Moment {
        Moment::from_utc(2000, 1, 1, 0, 0, 0.0).unwrap()
    }

    #[test]
    fn level_numbers() {
        assert_eq!(DashaLevel::from_u8(1), Some(DashaLevel::Mahadasha));
        assert_eq!(DashaLevel::from_u8(3), Some(DashaLevel::Pratyantardasha));
        assert_eq!(DashaLevel::from_u8(0), None);
        assert_eq!(DashaLevel::from_u8(4), None);
        assert_eq!(DashaLevel::Antardasha.number(), 2);
        assert_eq!(DashaLevel::Pratyantardasha.child_level(), None);
    }

    #[test]
    fn label_joins_chain() {
        let p = DashaPeriod::new(
            Graha::Guru,
            vec![Graha::Kuja, Graha::Rahu],
            DashaLevel::Pratyantardasha,
            start(),
            0.1,
        );
        assert_eq!(p.label, "Kuja - Rahu - Guru");
        let m = DashaPeriod::new(Graha::Kuja, vec![], DashaLevel::Mahadasha, start(), 7.0);
        assert_eq!(m.label, "Kuja");
        assert_eq!(m.span.years, 7);
    }

    #[test]
    fn contains_is_half_open() {
        let p = DashaPeriod::new(Graha::Ketu, vec![], DashaLevel::Mahadasha, start(), 1.0);
        assert!(p.contains(&p.start));
        assert!(!p.contains(&p.end));
    }

    #[test]
    fn timeline_rejects_wrong_length() {
        let p = DashaPeriod::new(Graha::Ketu, vec![], DashaLevel::Mahadasha, start(), 1.0);
        assert!(DashaTimeline::from_periods(vec![p]).is_err());
    }

    #[test]
    fn timeline_rejects_gaps() {
        let mut periods = Vec::new();
        let mut cursor = start();
        for g in crate::graha::VIMSHOTTARI_LORDS {
            let p = DashaPeriod::new(g, vec![], DashaLevel::Mahadasha, cursor, 1.0);
            cursor = p.end.plus_millis(1);
            periods.push(p);
        }
        assert!(DashaTimeline::from_periods(periods).is_err());
    }
}
