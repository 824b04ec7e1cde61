//! Per-graha sampling through the ephemeris adapter.

use kundali_core::{Body, EphemerisAdapter};
use kundali_time::Moment;
use kundali_vedic_base::{Graha, RETROGRADE_SAMPLE_HOURS, SiderealPosition, sidereal_position};

use crate::error::ChartError;

/// Adapter body for a graha; `None` for the nodes, which are derived
/// analytically.
pub const fn graha_to_body(graha: Graha) -> Option<Body> {
    match graha {
        Graha::Surya => Some(Body::Sun),
        Graha::Chandra => Some(Body::Moon),
        Graha::Kuja => Some(Body::Mars),
        Graha::Budha => Some(Body::Mercury),
        Graha::Guru => Some(Body::Jupiter),
        Graha::Shukra => Some(Body::Venus),
        Graha::Shani => Some(Body::Saturn),
        Graha::Rahu | Graha::Ketu => None,
    }
}

/// Sidereal position of an adapter-sampled body.
///
/// Luminaries are sampled once; the other bodies are sampled again one hour
/// earlier for the retrograde test.
pub fn sample_body<A: EphemerisAdapter + ?Sized>(
    adapter: &A,
    graha: Graha,
    body: Body,
    moment: &Moment,
    ayanamsa_deg: f64,
) -> Result<SiderealPosition, ChartError> {
    let now = adapter
        .body_position(body, moment)
        .map_err(ChartError::adapter(body.name()))?
        .tropical_longitude_deg;
    let before = if body.is_luminary() {
        now
    } else {
        let earlier = moment.minus_hours(RETROGRADE_SAMPLE_HOURS);
        adapter
            .body_position(body, &earlier)
            .map_err(ChartError::adapter(body.name()))?
            .tropical_longitude_deg
    };
    log::trace!("{graha}: tropical {now:.6} deg, one hour earlier {before:.6} deg");
    Ok(sidereal_position(graha, now, before, ayanamsa_deg))
}
