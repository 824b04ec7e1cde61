//! Absolute UTC instant with millisecond-or-better precision.
//!
//! `Moment` is the canonical instant used throughout the workspace. Every
//! constructor validates its input, so holding a `Moment` means holding a
//! real proleptic-Gregorian instant.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::format::ParseErrorKind;
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::TimeError;
use crate::julian::{SECONDS_PER_DAY, UNIX_EPOCH_JD};

const MILLIS_PER_DAY: f64 = SECONDS_PER_DAY * 1000.0;

/// Offset-free forms read as UTC.
const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f"];

/// A validated UTC instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Moment(DateTime<Utc>);

impl Moment {
    /// Build from UTC calendar fields.
    ///
    /// `month` and `day` are 1-based. `second` may carry a fraction and
    /// must lie in `[0, 60)`.
    pub fn from_utc(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Result<Self, TimeError> {
        if !second.is_finite() || !(0.0..60.0).contains(&second) {
            return Err(TimeError::InvalidMoment(format!("second {second} outside [0, 60)")));
        }
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            let ymd = format!("{year:04}-{month:02}-{day:02}");
            TimeError::InvalidMoment(format!("{ymd} is not a calendar date"))
        })?;
        let whole = second.floor();
        let nanos = (((second - whole) * 1e9).round() as u32).min(999_999_999);
        let time = NaiveTime::from_hms_nano_opt(hour, minute, whole as u32, nanos).ok_or_else(|| {
            let hms = format!("{hour:02}:{minute:02}:{second}");
            TimeError::InvalidMoment(format!("{hms} is not a time of day"))
        })?;
        Ok(Self(NaiveDateTime::new(date, time).and_utc()))
    }

    /// Build from milliseconds since the Unix epoch.
    pub fn from_timestamp_millis(millis: i64) -> Result<Self, TimeError> {
        DateTime::from_timestamp_millis(millis)
            .map(Self)
            .ok_or_else(|| TimeError::InvalidMoment(format!("timestamp {millis} ms out of range")))
    }

    /// Build from a UTC Julian Date.
    pub fn from_julian_day(jd: f64) -> Result<Self, TimeError> {
        if !jd.is_finite() {
            return Err(TimeError::InvalidMoment(format!("julian day {jd} is not finite")));
        }
        let millis = ((jd - UNIX_EPOCH_JD) * MILLIS_PER_DAY).round();
        if millis.abs() >= i64::MAX as f64 {
            return Err(TimeError::InvalidMoment(format!("julian day {jd} out of range")));
        }
        Self::from_timestamp_millis(millis as i64)
    }

    /// The underlying chrono instant.
    pub fn datetime(&self) -> DateTime<Utc> {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// 1-based month.
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// 0-based month (January = 0).
    pub fn month0(&self) -> u32 {
        self.0.month0()
    }

    /// 1-based day of month.
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Seconds including the sub-second fraction.
    pub fn second(&self) -> f64 {
        self.0.second() as f64 + self.0.nanosecond() as f64 / 1e9
    }

    /// Milliseconds since the Unix epoch.
    pub fn timestamp_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    /// UTC Julian Date.
    pub fn julian_day(&self) -> f64 {
        let nanos_in_milli = (self.0.nanosecond() % 1_000_000) as f64 / 1e6;
        UNIX_EPOCH_JD + (self.timestamp_millis() as f64 + nanos_in_milli) / MILLIS_PER_DAY
    }

    /// Shift by a signed number of milliseconds, saturating at the
    /// representable range.
    pub fn plus_millis(self, millis: i64) -> Self {
        let shifted =
            TimeDelta::try_milliseconds(millis).and_then(|d| self.0.checked_add_signed(d));
        match shifted {
            Some(t) => Self(t),
            None if millis >= 0 => Self(DateTime::<Utc>::MAX_UTC),
            None => Self(DateTime::<Utc>::MIN_UTC),
        }
    }

    /// The instant `hours` earlier (fractional hours allowed).
    pub fn minus_hours(self, hours: f64) -> Self {
        self.plus_millis(-(hours * 3_600_000.0) as i64)
    }
}

impl Display for Moment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%dT%H:%M:%S%.fZ"))
    }
}

impl FromStr for Moment {
    type Err = TimeError;

    /// Accepts RFC 3339 (`2024-03-20T12:30:00Z`, `...+05:30`), a bare
    /// `YYYY-MM-DDThh:mm[:ss[.fff]]` read as UTC, or a bare date at 00:00 UTC.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let rfc = match DateTime::parse_from_rfc3339(s) {
            Ok(dt) => return Ok(Self(dt.with_timezone(&Utc))),
            Err(e) => e,
        };
        let mut out_of_range = is_range_error(rfc.kind());
        for fmt in NAIVE_FORMATS {
            match NaiveDateTime::parse_from_str(s, fmt) {
                Ok(naive) => return Ok(Self(naive.and_utc())),
                Err(e) => out_of_range |= is_range_error(e.kind()),
            }
        }
        match NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            Ok(date) => Ok(Self(date.and_time(NaiveTime::default()).and_utc())),
            Err(e) if out_of_range || is_range_error(e.kind()) => {
                Err(TimeError::InvalidMoment(format!("{s:?} names no calendar instant")))
            }
            Err(_) => Err(TimeError::Parse {
                input: s.to_string(),
                reason: rfc.to_string(),
            }),
        }
    }
}

fn is_range_error(kind: ParseErrorKind) -> bool {
    matches!(kind, ParseErrorKind::OutOfRange | ParseErrorKind::Impossible)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_utc_fields() {
        let m = Moment::from_utc(2024, 3, 20, 12, 30, 45.5).unwrap();
        assert_eq!(m.year(), 2024);
        assert_eq!(m.month(), 3);
        assert_eq!(m.month0(), 2);
        assert_eq!(m.day(), 20);
        assert_eq!(m.hour(), 12);
        assert_eq!(m.minute(), 30);
        assert!((m.second() - 45.5).abs() < 1e-9);
    }

    #[test]
    fn rejects_impossible_dates() {
        assert!(matches!(
            Moment::from_utc(2023, 2, 29, 0, 0, 0.0),
            Err(TimeError::InvalidMoment(_))
        ));
        assert!(Moment::from_utc(2024, 13, 1, 0, 0, 0.0).is_err());
        assert!(Moment::from_utc(2024, 1, 1, 24, 0, 0.0).is_err());
        assert!(Moment::from_utc(2024, 1, 1, 0, 0, 60.0).is_err());
        assert!(Moment::from_utc(2024, 1, 1, 0, 0, f64::NAN).is_err());
    }

    #[test]
    fn accepts_leap_day() {
        assert!(Moment::from_utc(2024, 2, 29, 23, 59, 59.999).is_ok());
    }

    #[test]
    fn julian_day_j2000() {
        let m = Moment::from_utc(2000, 1, 1, 12, 0, 0.0).unwrap();
        assert!((m.julian_day() - 2_451_545.0).abs() < 1e-9);
    }

    #[test]
    fn julian_day_roundtrip() {
        let m = Moment::from_utc(1987, 4, 10, 19, 21, 0.0).unwrap();
        let back = Moment::from_julian_day(m.julian_day()).unwrap();
        assert_eq!(m, back);
    }

    #[test]
    fn julian_day_rejects_nan() {
        assert!(Moment::from_julian_day(f64::NAN).is_err());
        assert!(Moment::from_julian_day(f64::INFINITY).is_err());
    }

    #[test]
    fn parse_rfc3339_with_offset() {
        let m: Moment = "1990-05-15T10:30:00+05:30".parse().unwrap();
        assert_eq!(m.hour(), 5);
        assert_eq!(m.minute(), 0);
    }

    #[test]
    fn parse_naive_as_utc() {
        let m: Moment = "2024-01-15T06:45:00".parse().unwrap();
        assert_eq!((m.year(), m.month(), m.day(), m.hour(), m.minute()), (2024, 1, 15, 6, 45));
        let d: Moment = "2024-01-15".parse().unwrap();
        assert_eq!(d.hour(), 0);
    }

    #[test]
    fn parse_rejects_invalid_calendar_date() {
        for input in [
            "2023-02-30T10:00:00Z",
            "2023-02-30T10:00:00+05:30",
            "2023-02-30T10:00:00",
            "2023-02-30T10:00:00.250",
            "2023-02-30T10:00",
            "2023-02-30 10:00:00",
            "2023-02-30",
            "2024-01-15T25:00",
        ] {
            let err = input.parse::<Moment>().unwrap_err();
            assert!(matches!(err, TimeError::InvalidMoment(_)), "{input}: {err:?}");
            assert!(err.is_invalid_moment());
        }
    }

    #[test]
    fn parse_rejects_malformed_text() {
        for input in ["not a date", "", "2023-02", "15/05/1990 10:00"] {
            let err = input.parse::<Moment>().unwrap_err();
            assert!(matches!(err, TimeError::Parse { .. }), "{input}: {err:?}");
            assert!(!err.is_invalid_moment());
        }
    }

    #[test]
    fn parse_minute_precision_form() {
        let m: Moment = "2024-02-29T10:00".parse().unwrap();
        assert_eq!((m.month(), m.day(), m.hour(), m.minute()), (2, 29, 10, 0));
    }

    #[test]
    fn display_is_iso() {
        let m = Moment::from_utc(2024, 1, 15, 0, 0, 0.0).unwrap();
        assert_eq!(m.to_string(), "2024-01-15T00:00:00Z");
    }

    #[test]
    fn minus_one_hour() {
        let m = Moment::from_utc(2024, 1, 1, 0, 30, 0.0).unwrap();
        let earlier = m.minus_hours(1.0);
        assert_eq!((earlier.year(), earlier.month(), earlier.day()), (2023, 12, 31));
        assert_eq!((earlier.hour(), earlier.minute()), (23, 30));
    }

    #[test]
    fn plus_millis_saturates() {
        let m = Moment::from_utc(2024, 1, 1, 0, 0, 0.0).unwrap();
        assert_eq!(m.plus_millis(i64::MAX).datetime(), DateTime::<Utc>::MAX_UTC);
        assert_eq!(m.plus_millis(i64::MIN).datetime(), DateTime::<Utc>::MIN_UTC);
    }

    #[test]
    fn serde_roundtrip_iso_string() {
        let m = Moment::from_utc(1990, 5, 15, 5, 0, 0.0).unwrap();
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "\"1990-05-15T05:00:00Z\"");
        let back: Moment = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }
}
