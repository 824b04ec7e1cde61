//! Sidereal zodiac calculations for a Vedic birth chart.
//!
//! This crate provides:
//! - Linear ayanamsa and tropical-to-sidereal conversion
//! - Ascendant (lagna) from sidereal time and observer latitude
//! - Rashi, nakshatra, navamsa and equal-house classification
//! - Graha lordship and dignity tables
//! - Three-level Vimshottari dasha timelines
//!
//! Everything here is a pure function of its inputs; ephemeris sampling
//! lives in `kundali_core` and chart assembly in `kundali_chart`.

pub mod amsha;
pub mod ayanamsha;
pub mod bhava;
pub mod dasha;
pub mod dignity;
pub mod error;
pub mod graha;
pub mod lagna;
pub mod location;
pub mod lunar_nodes;
pub mod nakshatra;
pub mod rashi;
pub mod sidereal;
pub mod util;

pub use amsha::{NAVAMSA_ARC_MINUTES, navamsa_index, navamsa_pada, navamsa_rashi};
pub use ayanamsha::{
    AYANAMSA_AT_2000_DEG, AYANAMSA_RATE_DEG_PER_YEAR, ayanamsa_deg, ayanamsa_for_year,
    fractional_year,
};
pub use bhava::{HOUSE_BOUNDARY_OFFSET_DEG, house_number};
pub use dasha::{
    ActiveDasha, DASHA_YEARS, DashaLevel, DashaPeriod, DashaTimeline, MoonBalance,
    PERIODS_PER_LEVEL, VIMSHOTTARI_TOTAL_YEARS, active_dasha, compute_antardashas,
    compute_mahadashas, compute_pratyantardashas, dasha_years, vimshottari_balance,
};
pub use dignity::{Dignity, DignityRule, dignity, dignity_rule, point_dignity};
pub use error::VedicError;
pub use graha::{ALL_GRAHAS, Graha, VIMSHOTTARI_LORDS, nakshatra_lord, rashi_lord};
pub use lagna::{Ascendant, OBLIQUITY_DEG, compute_ascendant, ramc_deg, tropical_ascendant_deg};
pub use location::GeoCoordinate;
pub use lunar_nodes::{
    LunarNode, mean_ketu_deg, mean_rahu_deg, sidereal_node_deg, sidereal_nodes_deg,
};
pub use nakshatra::{
    ALL_NAKSHATRAS_27, NAKSHATRA_SPAN_27, Nakshatra, NakshatraInfo, PADA_SPAN,
    nakshatra_from_longitude, nakshatra_index,
};
pub use rashi::{
    ALL_RASHIS, Dms, RASHI_SPAN_DEG, Rashi, RashiInfo, deg_to_dms, dms_to_deg,
    rashi_from_longitude, sign_index,
};
pub use sidereal::{
    RETROGRADE_SAMPLE_HOURS, SiderealPosition, graha_retrograde, is_moving_backward,
    sidereal_longitude, sidereal_position,
};
pub use util::{normalize_360, wrapped_delta_deg};
