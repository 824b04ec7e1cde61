//! Dasha date arithmetic: mean-year addition and calendar-field subtraction.
//!
//! Period ends are computed by adding a whole number of milliseconds built
//! from the mean Gregorian year. Period lengths are displayed by subtracting
//! UTC calendar fields with borrow, so the two do not invert each other
//! exactly.

use serde::{Deserialize, Serialize};

use crate::moment::Moment;

/// Mean Gregorian year in days.
pub const MEAN_GREGORIAN_YEAR_DAYS: f64 = 365.2425;

/// Mean Gregorian year in milliseconds.
pub const MILLIS_PER_MEAN_YEAR: f64 = 31_556_952_000.0;

/// A years/months/days difference between two instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CalendarSpan {
    pub years: i32,
    pub months: i32,
    pub days: i32,
}

impl CalendarSpan {
    /// Fractional-year reading of the span (months as twelfths, days as
    /// mean-year days).
    pub fn approx_years(&self) -> f64 {
        self.years as f64 + self.months as f64 / 12.0 + self.days as f64 / MEAN_GREGORIAN_YEAR_DAYS
    }
}

impl std::fmt::Display for CalendarSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}y {}m {}d", self.years, self.months, self.days)
    }
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Days in a 1-based month of a proleptic Gregorian year.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// `start + years` mean Gregorian years.
///
/// The offset is truncated to whole milliseconds toward zero; results past
/// the representable range saturate.
pub fn add_years(start: Moment, years: f64) -> Moment {
    let millis = years * MILLIS_PER_MEAN_YEAR;
    let millis = if millis.is_nan() {
        0
    } else {
        // `as` saturates at i64 bounds for out-of-range floats.
        millis.trunc() as i64
    };
    start.plus_millis(millis)
}

/// Calendar-field difference `end - start` in UTC.
///
/// Days borrow from the month preceding `end`'s month; months borrow
/// twelve from years.
pub fn calendar_span(start: &Moment, end: &Moment) -> CalendarSpan {
    let mut years = end.year() - start.year();
    let mut months = end.month() as i32 - start.month() as i32;
    let mut days = end.day() as i32 - start.day() as i32;

    if days < 0 {
        months -= 1;
        let (py, pm) = if end.month() == 1 {
            (end.year() - 1, 12)
        } else {
            (end.year(), end.month() - 1)
        };
        days += days_in_month(py, pm) as i32;
    }
    if months < 0 {
        years -= 1;
        months += 12;
    }
    CalendarSpan {
        years,
        months,
        days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32) -> Moment {
        Moment::from_utc(y, m, d, 0, 0, 0.0).unwrap()
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(2023, 4), 30);
        assert_eq!(days_in_month(2023, 12), 31);
    }

    #[test]
    fn add_whole_years_uses_mean_year() {
        let start = at(2000, 1, 1);
        let end = add_years(start, 1.0);
        let elapsed = end.timestamp_millis() - start.timestamp_millis();
        assert_eq!(elapsed, 31_556_952_000);
    }

    #[test]
    fn add_negative_years_goes_back() {
        let start = at(2000, 1, 1);
        assert!(add_years(start, -2.5) < start);
    }

    #[test]
    fn add_years_saturates() {
        let start = at(2000, 1, 1);
        let far = add_years(start, 1e300);
        assert!(far > start);
        assert_eq!(add_years(far, 1.0), far);
    }

    #[test]
    fn span_without_borrow() {
        let s = calendar_span(&at(2000, 3, 10), &at(2006, 8, 25));
        assert_eq!(s, CalendarSpan { years: 6, months: 5, days: 15 });
    }

    #[test]
    fn span_borrows_days_from_previous_month() {
        let s = calendar_span(&at(2024, 1, 10), &at(2024, 3, 5));
        assert_eq!(s, CalendarSpan { years: 0, months: 1, days: 24 });
    }

    #[test]
    fn span_single_borrow_can_leave_negative_days() {
        // February 2024 has 29 days, one short of covering the 30-day deficit.
        let s = calendar_span(&at(2024, 1, 31), &at(2024, 3, 1));
        assert_eq!(s, CalendarSpan { years: 0, months: 1, days: -1 });
    }

    #[test]
    fn span_borrows_from_december_across_year() {
        let s = calendar_span(&at(2020, 11, 20), &at(2021, 1, 5));
        assert_eq!(s, CalendarSpan { years: 0, months: 1, days: 16 });
    }

    #[test]
    fn span_borrows_months_from_years() {
        let s = calendar_span(&at(2000, 10, 1), &at(2003, 2, 1));
        assert_eq!(s, CalendarSpan { years: 2, months: 4, days: 0 });
    }

    #[test]
    fn span_display() {
        let s = CalendarSpan { years: 6, months: 4, days: 19 };
        assert_eq!(s.to_string(), "6y 4m 19d");
        assert!((s.approx_years() - (6.0 + 4.0 / 12.0 + 19.0 / 365.2425)).abs() < 1e-12);
    }
}
