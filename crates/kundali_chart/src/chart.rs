//! Birth chart computation.
//!
//! Control flow: ayanamsa, then sidereal time and ascendant from the
//! adapter, then one sidereal position per graha (adapter samples for the
//! seven bodies, the mean-node formula for Rahu and Ketu), then the
//! classifiers over each longitude.

use kundali_core::EphemerisAdapter;
use kundali_time::Moment;
use kundali_vedic_base::{
    ALL_GRAHAS, GeoCoordinate, Graha, SiderealPosition, ayanamsa_deg, compute_ascendant,
    house_number, nakshatra_from_longitude, nakshatra_lord, navamsa_rashi, point_dignity,
    rashi_from_longitude, rashi_lord, sidereal_nodes_deg,
};

use crate::error::ChartError;
use crate::positions::{graha_to_body, sample_body};
use crate::types::{Chart, ChartMeta, ChartPoint, ChartPointKind};

/// Classify one sidereal longitude into a chart point.
pub fn classify_point(
    kind: ChartPointKind,
    position: SiderealPosition,
    ascendant_deg: f64,
) -> ChartPoint {
    let lon = position.longitude;
    let rashi = rashi_from_longitude(lon);
    let nakshatra = nakshatra_from_longitude(lon);
    ChartPoint {
        kind,
        sign_id: rashi.rashi.number(),
        sign: rashi.rashi,
        degrees_in_sign: rashi.degrees_in_rashi,
        dms: rashi.dms,
        nakshatra: nakshatra.nakshatra,
        nakshatra_pada: nakshatra.pada,
        nakshatra_lord: nakshatra_lord(nakshatra.nakshatra),
        sign_lord: rashi_lord(rashi.rashi),
        dignity: point_dignity(kind.graha(), rashi.rashi),
        is_retrograde: position.is_retrograde,
        longitude: lon,
        house: house_number(lon, ascendant_deg),
        navamsa_sign: navamsa_rashi(lon),
    }
}

/// Sidereal position of every graha, in [`ALL_GRAHAS`] order.
fn graha_positions<A: EphemerisAdapter + ?Sized>(
    adapter: &A,
    moment: &Moment,
    ayanamsa: f64,
) -> Result<Vec<(Graha, SiderealPosition)>, ChartError> {
    let (rahu, ketu) = sidereal_nodes_deg(moment.julian_day(), ayanamsa);
    ALL_GRAHAS
        .iter()
        .map(|&graha| {
            let position = match (graha, graha_to_body(graha)) {
                (_, Some(body)) => sample_body(adapter, graha, body, moment, ayanamsa)?,
                (Graha::Rahu, None) => SiderealPosition {
                    longitude: rahu,
                    is_retrograde: true,
                },
                (_, None) => SiderealPosition {
                    longitude: ketu,
                    is_retrograde: true,
                },
            };
            Ok::<_, ChartError>((graha, position))
        })
        .collect()
}

/// Compute the birth chart for `moment` at `coordinate`.
///
/// Any adapter failure aborts the whole computation with
/// [`ChartError::ComputationFailed`].
pub fn compute_chart<A: EphemerisAdapter + ?Sized>(
    adapter: &A,
    moment: &Moment,
    coordinate: &GeoCoordinate,
) -> Result<Chart, ChartError> {
    let ayanamsa = ayanamsa_deg(moment);
    let gmst = adapter
        .sidereal_time_hours(moment)
        .map_err(ChartError::adapter("sidereal time"))?;
    let asc = compute_ascendant(gmst, coordinate, ayanamsa);
    log::debug!(
        "chart {moment} at {coordinate}: ayanamsa {ayanamsa:.4}, lst {:.4} h, ascendant {:.4} deg",
        asc.lst_hours,
        asc.sidereal_deg
    );

    let lagna = classify_point(
        ChartPointKind::Lagna,
        SiderealPosition {
            longitude: asc.sidereal_deg,
            is_retrograde: false,
        },
        asc.sidereal_deg,
    );
    let ascendant_sign = lagna.sign;
    let grahas = graha_positions(adapter, moment, ayanamsa)?;
    let graha_points = grahas
        .into_iter()
        .map(|(graha, pos)| classify_point(ChartPointKind::Graha(graha), pos, asc.sidereal_deg));
    let points: Vec<ChartPoint> = std::iter::once(lagna).chain(graha_points).collect();

    Ok(Chart {
        points,
        ascendant_sign,
        ayanamsa,
        meta: ChartMeta {
            moment: *moment,
            coordinate: *coordinate,
            julian_day: moment.julian_day(),
            lst_hours: asc.lst_hours,
            ramc_deg: asc.ramc_deg,
            tropical_ascendant_deg: asc.tropical_deg,
            sidereal_ascendant_deg: asc.sidereal_deg,
            adapter: adapter.name().to_string(),
        },
    })
}

/// Parse an ISO-8601 instant and compute its chart.
pub fn compute_chart_from_iso<A: EphemerisAdapter + ?Sized>(
    adapter: &A,
    iso: &str,
    coordinate: &GeoCoordinate,
) -> Result<Chart, ChartError> {
    let moment: Moment = iso.parse()?;
    compute_chart(adapter, &moment, coordinate)
}
