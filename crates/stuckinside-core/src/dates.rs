//! # Policy Dates — Compact Feed Dates and Calendar Arithmetic
//!
//! The OxCGRT feed writes dates as compact `YYYYMMDD` values and marks an
//! open-ended policy period with the *string literal* `"null"` — not a JSON
//! null. [`PolicyDate`] makes that sentinel a first-class enum variant so
//! the "is this period still open" question is type-checked rather than a
//! string comparison scattered through the code.
//!
//! Any input that is neither eight digits forming a real calendar date nor
//! the sentinel is rejected at construction — there is no silent
//! mis-formatting of unexpected shapes.

use chrono::NaiveDate;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CoreError;

/// A policy period boundary: either a concrete calendar date or the feed's
/// open-ended `"null"` sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PolicyDate {
    /// A concrete calendar date.
    Date(NaiveDate),
    /// The `"null"` sentinel: the period has no end yet.
    Open,
}

impl PolicyDate {
    /// Parse a feed date: a compact `YYYYMMDD` digit string or the literal
    /// `"null"`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidDate`] if the input is any other shape,
    /// or if the digits name an impossible date (e.g. `20200230`).
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        if value == "null" {
            return Ok(Self::Open);
        }
        if value.len() != 8 || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CoreError::InvalidDate {
                value: value.to_string(),
                reason: "expected 8 digits (YYYYMMDD) or \"null\"".to_string(),
            });
        }
        // Slicing is safe: all-ASCII checked above.
        let year: i32 = value[..4].parse().map_err(|_| CoreError::InvalidDate {
            value: value.to_string(),
            reason: "year out of range".to_string(),
        })?;
        let month: u32 = value[4..6].parse().unwrap_or(0);
        let day: u32 = value[6..8].parse().unwrap_or(0);
        let date =
            NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| CoreError::InvalidDate {
                value: value.to_string(),
                reason: "not a real calendar date".to_string(),
            })?;
        Ok(Self::Date(date))
    }

    /// The concrete date, if the period boundary is not open-ended.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(d) => Some(*d),
            Self::Open => None,
        }
    }

    /// Whether this is the open-ended sentinel.
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }
}

impl std::fmt::Display for PolicyDate {
    /// Renders `YYYY-MM-DD`, or `null` for the open sentinel — the same
    /// surface form the page and JSON API expose.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Self::Open => f.write_str("null"),
        }
    }
}

impl Serialize for PolicyDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for PolicyDate {
    /// Accepts both the dashed `YYYY-MM-DD` form (round-tripping our own
    /// output) and the compact feed form.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        if s == "null" {
            return Ok(Self::Open);
        }
        if let Ok(d) = NaiveDate::parse_from_str(&s, "%Y-%m-%d") {
            return Ok(Self::Date(d));
        }
        Self::parse(&s).map_err(D::Error::custom)
    }
}

/// Civil calendar-day difference `as_of - date`.
///
/// This is a date-component subtraction, not elapsed-time bucketing: a date
/// of `2020-01-01` evaluated at any wall-clock moment on `2020-01-11` is 10
/// days, even at 23:59. Negative for future dates, 0 for today.
pub fn days_since(date: NaiveDate, as_of: NaiveDate) -> i64 {
    (as_of - date).num_days()
}
