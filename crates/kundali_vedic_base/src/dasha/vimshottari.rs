//! Vimshottari dasha generators for the three levels.
//!
//! Each generator is a pure function returning a freshly built nine-period
//! timeline laid end to end from its start instant. Periods are built with
//! a `scan` over the lord cycle; the running cursor is the previous end.

use kundali_time::Moment;

use crate::graha::{Graha, VIMSHOTTARI_LORDS};

use super::balance::vimshottari_balance;
use super::types::{DashaLevel, DashaPeriod, DashaTimeline, PERIODS_PER_LEVEL};

/// Full cycle length in years.
pub const VIMSHOTTARI_TOTAL_YEARS: f64 = 120.0;

/// Years allotted to each lord, in [`VIMSHOTTARI_LORDS`] order.
pub const DASHA_YEARS: [f64; 9] = [7.0, 20.0, 6.0, 10.0, 7.0, 18.0, 16.0, 19.0, 17.0];

/// Years allotted to `lord` in a full cycle.
pub const fn dasha_years(lord: Graha) -> f64 {
    DASHA_YEARS[lord.lord_cycle_index()]
}

/// Lords starting from `first`, wrapping once around the cycle.
fn cycle_from(first: usize) -> impl Iterator<Item = Graha> {
    (0..PERIODS_PER_LEVEL).map(move |i| VIMSHOTTARI_LORDS[(first + i) % PERIODS_PER_LEVEL])
}

/// Lay `(lord, years)` pairs end to end from `start`.
fn lay_out(
    start: Moment,
    level: DashaLevel,
    parent_chain: &[Graha],
    entries: impl Iterator<Item = (Graha, f64)>,
) -> DashaTimeline {
    let periods: Vec<DashaPeriod> = entries
        .scan(start, |cursor, (lord, years)| {
            let period = DashaPeriod::new(lord, parent_chain.to_vec(), level, *cursor, years);
            *cursor = period.end;
            Some(period)
        })
        .collect();
    DashaTimeline::from_laid_out(periods)
}

/// Level 1: the nine mahadashas from birth.
///
/// The first period is the birth balance of the Moon's nakshatra lord; the
/// other eight carry their full allotment. One pass only, no repetition.
pub fn compute_mahadashas(moon_sidereal_lon: f64, birth: Moment) -> DashaTimeline {
    let balance = vimshottari_balance(moon_sidereal_lon);
    log::debug!(
        "mahadashas: moon {moon_sidereal_lon:.4} deg, nakshatra {}, first lord {} balance {:.4} y",
        balance.nakshatra_index,
        balance.first_lord,
        balance.balance_years
    );
    let entries = cycle_from(balance.lord_index).enumerate().map(|(i, lord)| {
        let years = if i == 0 {
            balance.balance_years
        } else {
            dasha_years(lord)
        };
        (lord, years)
    });
    lay_out(birth, DashaLevel::Mahadasha, &[], entries)
}

/// Level 2: the nine antardashas of `parent_lord` from `period_start`.
///
/// Sub-period `j` lasts `DASHA_YEARS[parent] * DASHA_YEARS[j] / 120` years.
pub fn compute_antardashas(parent_lord: Graha, period_start: Moment) -> DashaTimeline {
    let parent_years = dasha_years(parent_lord);
    let entries = cycle_from(parent_lord.lord_cycle_index())
        .map(|sub| (sub, parent_years * dasha_years(sub) / VIMSHOTTARI_TOTAL_YEARS));
    lay_out(period_start, DashaLevel::Antardasha, &[parent_lord], entries)
}

/// Level 3: the nine pratyantardashas of `grandparent_lord` / `parent_lord`.
pub fn compute_pratyantardashas(
    grandparent_lord: Graha,
    parent_lord: Graha,
    period_start: Moment,
) -> DashaTimeline {
    let antar_years =
        dasha_years(grandparent_lord) * dasha_years(parent_lord) / VIMSHOTTARI_TOTAL_YEARS;
    let entries = cycle_from(parent_lord.lord_cycle_index())
        .map(|sub| (sub, antar_years * dasha_years(sub) / VIMSHOTTARI_TOTAL_YEARS));
    lay_out(
        period_start,
        DashaLevel::Pratyantardasha,
        &[grandparent_lord, parent_lord],
        entries,
    )
}
