//! Canonical day keys and calendar arithmetic.
//!
//! Every completion is keyed by the local calendar day it belongs to, never by
//! a raw timestamp. [`DayKey`] is that key: a date with no time component,
//! written as `YYYY-MM-DD`.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Days, Local, NaiveDate, TimeZone};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValidationError;

const DAY_FORMAT: &str = "%Y-%m-%d";

/// A calendar day with no time component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayKey(NaiveDate);

impl DayKey {
    /// Wrap a calendar date.
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Build a day from its parts, or `None` if the date does not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for DayKey {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DAY_FORMAT))
    }
}

impl FromStr for DayKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        // chrono accepts unpadded fields; the key format is strictly zero-padded.
        if trimmed.len() != 10 {
            return Err(ValidationError::InvalidDay(s.to_string()));
        }
        NaiveDate::parse_from_str(trimmed, DAY_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidDay(s.to_string()))
    }
}

impl Serialize for DayKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DayKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Truncate a timestamp to its calendar day in the local time zone.
pub fn canonical_day<Tz: TimeZone>(ts: &DateTime<Tz>) -> DayKey {
    canonical_day_in(ts, &Local)
}

/// Truncate a timestamp to its calendar day in `tz`.
pub fn canonical_day_in<Tz: TimeZone, Z: TimeZone>(ts: &DateTime<Tz>, tz: &Z) -> DayKey {
    DayKey(ts.with_timezone(tz).date_naive())
}

/// The local calendar day right now.
pub fn today() -> DayKey {
    canonical_day(&Local::now())
}

pub fn is_same_day_as_today(day: DayKey) -> bool {
    day == today()
}

/// Move `n` calendar days forward. Saturates at the end of chrono's date range.
pub fn add_days(day: DayKey, n: u64) -> DayKey {
    DayKey(day.0.checked_add_days(Days::new(n)).unwrap_or(NaiveDate::MAX))
}

/// Move `n` calendar days back. Saturates at the start of chrono's date range.
pub fn sub_days(day: DayKey, n: u64) -> DayKey {
    DayKey(day.0.checked_sub_days(Days::new(n)).unwrap_or(NaiveDate::MIN))
}

/// Number of calendar days in `[start, end]`, counting both ends.
///
/// Equal days give 1. The result is zero or negative when `end` precedes
/// `start`; callers clamp as needed.
pub fn days_between_inclusive(start: DayKey, end: DayKey) -> i64 {
    end.0.signed_duration_since(start.0).num_days() + 1
}
