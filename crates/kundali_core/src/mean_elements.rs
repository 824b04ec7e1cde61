//! Analytic ephemeris from mean orbital elements.
//!
//! Elements are referred to the mean ecliptic and equinox of date, with
//! epoch 2000 Jan 0.0 UT (JD 2451543.5). Kepler's equation is solved by
//! Newton-Raphson; Jupiter, Saturn and the Moon get their principal
//! periodic perturbations in longitude.
//!
//! Source: P. Schlyter, "How to compute planetary positions". Accuracy is
//! about one arc-minute for the Sun and a few arc-minutes for the Moon and
//! planets over the modern era.

use kundali_time::{Moment, gmst_hours};

use crate::{Body, BodySample, EphemerisAdapter, EphemerisError};

/// Julian Date of the element epoch, 2000 Jan 0.0 UT.
pub const ELEMENT_EPOCH_JD: f64 = 2_451_543.5;

/// Days either side of the epoch the elements are trusted for.
pub const SUPPORTED_SPAN_DAYS: f64 = 5000.0 * 365.25;

/// Equatorial Earth radius in AU (lunar distance unit conversion).
const EARTH_RADIUS_AU: f64 = 6378.14 / 149_597_870.7;

const KEPLER_TOLERANCE: f64 = 1e-12;
const KEPLER_MAX_ITER: u32 = 30;

/// Keplerian elements at a day number: degrees, AU (Earth radii for the Moon).
#[derive(Debug, Clone, Copy, PartialEq)]
struct Elements {
    node: f64,
    inclination: f64,
    perihelion: f64,
    semi_major: f64,
    eccentricity: f64,
    mean_anomaly: f64,
}

fn elements(body: Body, d: f64) -> Elements {
    let (node, inclination, perihelion, semi_major, eccentricity, mean_anomaly) = match body {
        Body::Sun => (
            0.0,
            0.0,
            282.9404 + 4.70935e-5 * d,
            1.0,
            0.016709 - 1.151e-9 * d,
            356.0470 + 0.985_600_258_5 * d,
        ),
        Body::Moon => (
            125.1228 - 0.052_953_808_3 * d,
            5.1454,
            318.0634 + 0.164_357_322_3 * d,
            60.2666,
            0.054900,
            115.3654 + 13.064_992_950_9 * d,
        ),
        Body::Mercury => (
            48.3313 + 3.24587e-5 * d,
            7.0047 + 5.00e-8 * d,
            29.1241 + 1.01444e-5 * d,
            0.387098,
            0.205635 + 5.59e-10 * d,
            168.6562 + 4.092_334_436_8 * d,
        ),
        Body::Venus => (
            76.6799 + 2.46590e-5 * d,
            3.3946 + 2.75e-8 * d,
            54.8910 + 1.38374e-5 * d,
            0.723330,
            0.006773 - 1.302e-9 * d,
            48.0052 + 1.602_130_224_4 * d,
        ),
        Body::Mars => (
            49.5574 + 2.11081e-5 * d,
            1.8497 - 1.78e-8 * d,
            286.5016 + 2.92961e-5 * d,
            1.523688,
            0.093405 + 2.516e-9 * d,
            18.6021 + 0.524_020_776_6 * d,
        ),
        Body::Jupiter => (
            100.4542 + 2.76854e-5 * d,
            1.3030 - 1.557e-7 * d,
            273.8777 + 1.64505e-5 * d,
            5.20256,
            0.048498 + 4.469e-9 * d,
            19.8950 + 0.083_085_300_1 * d,
        ),
        Body::Saturn => (
            113.6634 + 2.38980e-5 * d,
            2.4886 - 1.081e-7 * d,
            339.3939 + 2.97661e-5 * d,
            9.55475,
            0.055546 - 9.499e-9 * d,
            316.9670 + 0.033_444_228_2 * d,
        ),
    };
    Elements {
        node,
        inclination,
        perihelion,
        semi_major,
        eccentricity,
        mean_anomaly: mean_anomaly.rem_euclid(360.0),
    }
}

/// Solve `E - e sin E = M` for the eccentric anomaly (radians).
pub fn solve_kepler(mean_anomaly_rad: f64, eccentricity: f64) -> f64 {
    let m = mean_anomaly_rad.rem_euclid(std::f64::consts::TAU);
    let mut e_anom = m;
    for _ in 0..KEPLER_MAX_ITER {
        let f = e_anom - eccentricity * e_anom.sin() - m;
        let f_prime = 1.0 - eccentricity * e_anom.cos();
        let delta = f / f_prime;
        e_anom -= delta;
        if delta.abs() < KEPLER_TOLERANCE {
            break;
        }
    }
    e_anom
}

/// Rectangular ecliptic position in the orbit's own distance unit.
fn orbital_position(el: &Elements) -> [f64; 3] {
    let e = el.eccentricity;
    let ecc = solve_kepler(el.mean_anomaly.to_radians(), e);
    let xv = el.semi_major * (ecc.cos() - e);
    let yv = el.semi_major * (1.0 - e * e).sqrt() * ecc.sin();
    let v = yv.atan2(xv);
    let r = xv.hypot(yv);

    let (sn, cn) = el.node.to_radians().sin_cos();
    let (si, ci) = el.inclination.to_radians().sin_cos();
    let (su, cu) = (v + el.perihelion.to_radians()).sin_cos();
    [
        r * (cn * cu - sn * su * ci),
        r * (sn * cu + cn * su * ci),
        r * su * si,
    ]
}

fn sin_deg(x: f64) -> f64 {
    x.to_radians().sin()
}

fn cos_deg(x: f64) -> f64 {
    x.to_radians().cos()
}

/// Jupiter longitude perturbation by Saturn, degrees.
fn jupiter_perturbation(mj: f64, ms: f64) -> f64 {
    -0.332 * sin_deg(2.0 * mj - 5.0 * ms - 67.6) - 0.056 * sin_deg(2.0 * mj - 2.0 * ms + 21.0)
        + 0.042 * sin_deg(3.0 * mj - 5.0 * ms + 21.0)
        - 0.036 * sin_deg(mj - 2.0 * ms)
        + 0.022 * cos_deg(mj - ms)
        + 0.023 * sin_deg(2.0 * mj - 3.0 * ms + 52.0)
        - 0.016 * sin_deg(mj - 5.0 * ms - 69.0)
}

/// Saturn longitude perturbation by Jupiter, degrees.
fn saturn_perturbation(mj: f64, ms: f64) -> f64 {
    0.812 * sin_deg(2.0 * mj - 5.0 * ms - 67.6) - 0.229 * cos_deg(2.0 * mj - 4.0 * ms - 2.0)
        + 0.119 * sin_deg(mj - 2.0 * ms - 3.0)
        + 0.046 * sin_deg(2.0 * mj - 6.0 * ms - 69.0)
        + 0.014 * sin_deg(mj - 3.0 * ms + 32.0)
}

/// Principal lunar longitude perturbations, degrees.
///
/// `mm`/`ms` are the Moon's and Sun's mean anomalies, `d` the mean
/// elongation and `f` the argument of latitude.
fn lunar_perturbation(mm: f64, ms: f64, d: f64, f: f64) -> f64 {
    -1.274 * sin_deg(mm - 2.0 * d) // evection
        + 0.658 * sin_deg(2.0 * d) // variation
        - 0.186 * sin_deg(ms) // yearly equation
        - 0.059 * sin_deg(2.0 * mm - 2.0 * d)
        - 0.057 * sin_deg(mm - 2.0 * d + ms)
        + 0.053 * sin_deg(mm + 2.0 * d)
        + 0.046 * sin_deg(2.0 * d - ms)
        + 0.041 * sin_deg(mm - ms)
        - 0.035 * sin_deg(d)
        - 0.031 * sin_deg(mm + ms)
        - 0.015 * sin_deg(2.0 * f - 2.0 * d)
        + 0.011 * sin_deg(mm - 4.0 * d)
}

/// Rotate a rectangular vector to a new ecliptic longitude, keeping its
/// radius and latitude.
fn with_longitude(v: [f64; 3], lon_rad: f64) -> [f64; 3] {
    let r = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
    if r == 0.0 {
        return v;
    }
    let lat = (v[2] / r).asin();
    let (sl, cl) = lon_rad.sin_cos();
    [r * lat.cos() * cl, r * lat.cos() * sl, r * lat.sin()]
}

fn longitude_deg(v: &[f64; 3]) -> f64 {
    v[1].atan2(v[0]).to_degrees().rem_euclid(360.0)
}

/// Analytic adapter built from mean orbital elements.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanElementEphemeris;

impl MeanElementEphemeris {
    pub fn new() -> Self {
        Self
    }

    fn day_number(moment: &Moment) -> Result<f64, EphemerisError> {
        let jd = moment.julian_day();
        let d = jd - ELEMENT_EPOCH_JD;
        if !d.is_finite() || d.abs() > SUPPORTED_SPAN_DAYS {
            return Err(EphemerisError::EpochOutOfRange { jd });
        }
        Ok(d)
    }

    /// Geocentric Sun vector in AU.
    fn sun_vector(d: f64) -> [f64; 3] {
        orbital_position(&elements(Body::Sun, d))
    }

    fn moon_vector(d: f64) -> [f64; 3] {
        let moon = elements(Body::Moon, d);
        let sun = elements(Body::Sun, d);
        let raw = orbital_position(&moon);

        let sun_mean_lon = sun.mean_anomaly + sun.perihelion;
        let moon_mean_lon = moon.mean_anomaly + moon.perihelion + moon.node;
        let elong = moon_mean_lon - sun_mean_lon;
        let arg_lat = moon_mean_lon - moon.node;
        let dlon = lunar_perturbation(moon.mean_anomaly, sun.mean_anomaly, elong, arg_lat);

        let lon = raw[1].atan2(raw[0]) + dlon.to_radians();
        let v = with_longitude(raw, lon);
        [v[0] * EARTH_RADIUS_AU, v[1] * EARTH_RADIUS_AU, v[2] * EARTH_RADIUS_AU]
    }

    fn planet_vector(body: Body, d: f64) -> [f64; 3] {
        let helio = orbital_position(&elements(body, d));
        let helio = match body {
            Body::Jupiter | Body::Saturn => {
                let mj = elements(Body::Jupiter, d).mean_anomaly;
                let ms = elements(Body::Saturn, d).mean_anomaly;
                let dlon = if body == Body::Jupiter {
                    jupiter_perturbation(mj, ms)
                } else {
                    saturn_perturbation(mj, ms)
                };
                with_longitude(helio, helio[1].atan2(helio[0]) + dlon.to_radians())
            }
            _ => helio,
        };
        let sun = Self::sun_vector(d);
        [helio[0] + sun[0], helio[1] + sun[1], helio[2] + sun[2]]
    }
}

impl EphemerisAdapter for MeanElementEphemeris {
    fn name(&self) -> &'static str {
        "mean-elements"
    }

    fn body_position(&self, body: Body, moment: &Moment) -> Result<BodySample, EphemerisError> {
        let d = Self::day_number(moment)?;
        let vector = match body {
            Body::Sun => Self::sun_vector(d),
            Body::Moon => Self::moon_vector(d),
            _ => Self::planet_vector(body, d),
        };
        let lon = longitude_deg(&vector);
        log::trace!("{body} at {moment}: tropical {lon:.4} deg");
        Ok(BodySample {
            tropical_longitude_deg: lon,
            geocentric_vector_au: vector,
        })
    }

    fn sidereal_time_hours(&self, moment: &Moment) -> Result<f64, EphemerisError> {
        Self::day_number(moment)?;
        Ok(gmst_hours(moment.julian_day()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kepler_circular_is_identity() {
        let m = 1.234;
        assert!((solve_kepler(m, 0.0) - m).abs() < 1e-15);
    }

    #[test]
    fn kepler_satisfies_equation() {
        for &e in &[0.0167, 0.2056, 0.6, 0.9] {
            for i in 0..12 {
                let m = i as f64 * 0.5;
                let ecc = solve_kepler(m, e);
                let resid = ecc - e * ecc.sin() - m.rem_euclid(std::f64::consts::TAU);
                assert!(resid.abs() < 1e-10, "e={e} m={m} resid={resid}");
            }
        }
    }

    #[test]
    fn sun_distance_near_one_au() {
        let v = MeanElementEphemeris::sun_vector(0.0);
        let r = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
        assert!((r - 0.983).abs() < 0.005, "r = {r}");
    }

    #[test]
    fn moon_distance_in_au() {
        let v = MeanElementEphemeris::moon_vector(0.0);
        let r = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
        assert!(r > 0.0023 && r < 0.0028, "r = {r} AU");
    }

    #[test]
    fn with_longitude_keeps_radius() {
        let v = [1.0, 2.0, 0.5];
        let w = with_longitude(v, 1.0);
        let r1 = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
        let r2 = (w[0] * w[0] + w[1] * w[1] + w[2] * w[2]).sqrt();
        assert!((r1 - r2).abs() < 1e-12);
        assert!((w[2] - v[2]).abs() < 1e-12);
        assert!((longitude_deg(&w) - 1.0f64.to_degrees()).abs() < 1e-9);
    }

    #[test]
    fn far_epoch_rejected() {
        let m = Moment::from_utc(9000, 1, 1, 0, 0, 0.0).unwrap();
        let err = MeanElementEphemeris.body_position(Body::Sun, &m).unwrap_err();
        assert!(matches!(err, EphemerisError::EpochOutOfRange { .. }));
    }
}
