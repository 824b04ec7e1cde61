//! Active-period lookup across all three levels.

use kundali_time::Moment;

use super::types::{ActiveDasha, DashaPeriod, DashaTimeline};
use super::vimshottari::{compute_antardashas, compute_mahadashas, compute_pratyantardashas};

/// Period containing `moment`, else the last one when `moment` falls in the
/// sub-millisecond slack between a parent's end and its children's end.
fn containing_or_last(timeline: &DashaTimeline, moment: &Moment) -> DashaPeriod {
    timeline
        .active_at(moment)
        .unwrap_or_else(|| timeline.last())
        .clone()
}

/// Mahadasha, antardasha and pratyantardasha running at `query`.
///
/// Returns `None` when `query` lies before birth or after the single
/// 120-year pass ends.
pub fn active_dasha(moon_sidereal_lon: f64, birth: Moment, query: Moment) -> Option<ActiveDasha> {
    let mahas = compute_mahadashas(moon_sidereal_lon, birth);
    let mahadasha = mahas.active_at(&query)?.clone();
    let antars = compute_antardashas(mahadasha.lord, mahadasha.start);
    let antardasha = containing_or_last(&antars, &query);
    let pratyantars =
        compute_pratyantardashas(mahadasha.lord, antardasha.lord, antardasha.start);
    let pratyantardasha = containing_or_last(&pratyantars, &query);
    log::trace!("active dasha at {query}: {}", pratyantardasha.label);
    Some(ActiveDasha {
        query,
        mahadasha,
        antardasha,
        pratyantardasha,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graha::Graha;

    fn birth() -> Moment {
        Moment::from_utc(1990, 5, 15, 5, 0, 0.0).unwrap()
    }

    #[test]
    fn at_birth_everything_starts() {
        let a = active_dasha(54.5, birth(), birth()).unwrap();
        assert_eq!(a.mahadasha.lord, Graha::Kuja);
        assert_eq!(a.antardasha.lord, Graha::Kuja);
        assert_eq!(a.pratyantardasha.lord, Graha::Kuja);
        assert_eq!(a.pratyantardasha.label, "Kuja - Kuja - Kuja");
    }

    #[test]
    fn before_birth_is_none() {
        assert!(active_dasha(54.5, birth(), birth().minus_hours(1.0)).is_none());
    }

    #[test]
    fn after_pass_is_none() {
        let end = compute_mahadashas(54.5, birth()).end();
        assert!(active_dasha(54.5, birth(), end).is_none());
    }

    #[test]
    fn nested_periods_agree() {
        let q = Moment::from_utc(2010, 6, 1, 0, 0, 0.0).unwrap();
        let a = active_dasha(54.5, birth(), q).unwrap();
        // Kuja balance ends in 1996, Rahu runs 18 years to 2014.
        assert_eq!(a.mahadasha.lord, Graha::Rahu);
        assert_eq!(a.antardasha.parent_chain, vec![Graha::Rahu]);
        assert_eq!(a.pratyantardasha.parent_chain, vec![Graha::Rahu, a.antardasha.lord]);
        assert!(a.antardasha.contains(&q));
        assert!(a.pratyantardasha.contains(&q));
    }
}
