//! Vimshottari dasha: 120-year planetary period cycle in three levels.

pub mod balance;
pub mod query;
pub mod types;
pub mod vimshottari;

pub use balance::{MoonBalance, vimshottari_balance};
pub use query::active_dasha;
pub use types::{ActiveDasha, DashaLevel, DashaPeriod, DashaTimeline, PERIODS_PER_LEVEL};
pub use vimshottari::{
    DASHA_YEARS, VIMSHOTTARI_TOTAL_YEARS, compute_antardashas, compute_mahadashas,
    compute_pratyantardashas, dasha_years,
};
