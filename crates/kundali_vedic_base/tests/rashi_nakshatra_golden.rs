//! Golden values for sign, nakshatra, navamsa, house and dignity lookups.

use kundali_time::Moment;
use kundali_vedic_base::{
    Dignity, GeoCoordinate, Graha, Nakshatra, Rashi, ayanamsa_deg, compute_ascendant, dignity,
    house_number, nakshatra_from_longitude, nakshatra_lord, navamsa_rashi, rashi_from_longitude,
    rashi_lord,
};

#[test]
fn rashi_at_45_is_vrishabha_15() {
    let info = rashi_from_longitude(45.0);
    assert_eq!(info.rashi, Rashi::Vrishabha);
    assert_eq!(info.rashi.number(), 2);
    assert_eq!(info.dms.deg_min(), "15°00'");
}

#[test]
fn nakshatra_at_54_5_is_mrigashira() {
    let info = nakshatra_from_longitude(54.5);
    assert_eq!(info.nakshatra, Nakshatra::Mrigashira);
    assert_eq!(info.nakshatra_index, 4);
    assert_eq!(info.pada, 1);
    assert_eq!(nakshatra_lord(info.nakshatra), Graha::Kuja);
}

#[test]
fn nakshatra_boundaries() {
    // 13 deg 20' starts Bharani; 359.99 is still Revati pada 4.
    assert_eq!(nakshatra_from_longitude(40.0 / 3.0).nakshatra, Nakshatra::Bharani);
    let last = nakshatra_from_longitude(359.99);
    assert_eq!(last.nakshatra, Nakshatra::Revati);
    assert_eq!(last.pada, 4);
}

#[test]
fn navamsa_examples() {
    assert_eq!(navamsa_rashi(0.0), Rashi::Mesha);
    assert_eq!(navamsa_rashi(3.5), Rashi::Vrishabha);
    // 30 deg is pada 9, the tenth navamsa from Mesha.
    assert_eq!(navamsa_rashi(30.0), Rashi::Makara);
    assert_eq!(navamsa_rashi(359.9), Rashi::Meena);
}

#[test]
fn houses_around_ascendant() {
    assert_eq!(house_number(100.0, 100.0), 1);
    assert_eq!(house_number(85.0, 100.0), 1);
    assert_eq!(house_number(84.9, 100.0), 12);
    assert_eq!(house_number(115.0, 100.0), 2);
    assert_eq!(house_number(280.0, 100.0), 7);
}

#[test]
fn lords_and_dignities() {
    assert_eq!(rashi_lord(Rashi::Simha), Graha::Surya);
    assert_eq!(rashi_lord(Rashi::Kumbha), Graha::Shani);
    assert_eq!(dignity(Graha::Surya, Rashi::Mesha), Dignity::Exalted);
    assert_eq!(dignity(Graha::Shani, Rashi::Mesha), Dignity::Debilitated);
    assert_eq!(dignity(Graha::Guru, Rashi::Meena), Dignity::OwnSign);
    assert_eq!(dignity(Graha::Budha, Rashi::Kanya), Dignity::Exalted);
    assert_eq!(dignity(Graha::Kuja, Rashi::Simha), Dignity::Neutral);
    assert_eq!(Dignity::OwnSign.to_string(), "Own Sign");
}

#[test]
fn ayanamsa_linear_model() {
    let m = Moment::from_utc(2000, 1, 1, 0, 0, 0.0).unwrap();
    assert!((ayanamsa_deg(&m) - 23.85).abs() < 1e-12);
    let m = Moment::from_utc(2024, 7, 15, 0, 0, 0.0).unwrap();
    let expected = 23.85 + 0.0139 * (24.0 + 6.0 / 12.0);
    assert!((ayanamsa_deg(&m) - expected).abs() < 1e-12);
}

#[test]
fn ascendant_at_equator_on_aries_meridian() {
    // RAMC 0 at the equator puts the ascendant at tropical 90 deg.
    let here = GeoCoordinate::new(0.0, 0.0).unwrap();
    let asc = compute_ascendant(0.0, &here, 24.0);
    assert!((asc.tropical_deg - 90.0).abs() < 1e-9, "asc = {}", asc.tropical_deg);
    assert!((asc.sidereal_deg - 66.0).abs() < 1e-9);
}
