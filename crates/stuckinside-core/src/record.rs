//! # Policy Records — Wire Types and Normalization
//!
//! [`RawRecord`] mirrors one row of the aggregated policy feed exactly as
//! received. The feed is loosely typed: dates arrive as bare numbers
//! (`20200315`), digit strings, or JSON null; `PolicyValue` arrives as an
//! integer, the string `"null"`, or not at all. Custom deserializers absorb
//! those shapes so the rest of the crate only sees typed values.
//!
//! [`normalize`] turns raw rows into [`NormalizedRecord`]s: the alpha-3
//! country code is resolved against the country table and both dates are
//! parsed. Rows that fail either step are dropped with a `warn` log —
//! per-record recovery, never a failed feed.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::country;
use crate::dates::PolicyDate;

/// One row of the feed, as received.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    /// Country name as the feed spells it.
    #[serde(rename = "CountryName")]
    pub country_name: String,
    /// ISO 3166-1 alpha-3 code.
    #[serde(rename = "CountryCode")]
    pub country_code: String,
    /// Compact `YYYYMMDD` start of the policy period.
    #[serde(rename = "StartDate", deserialize_with = "de_compact_date")]
    pub start_date: String,
    /// Compact `YYYYMMDD` end of the period, or the `"null"` sentinel for a
    /// currently-open period.
    #[serde(rename = "EndDate", deserialize_with = "de_compact_date", default = "null_sentinel")]
    pub end_date: String,
    /// Policy indicator name (e.g. `"C6: Stay at home requirements"`).
    #[serde(rename = "PolicyType", default)]
    pub policy_type: String,
    /// Stay-at-home severity 0–3, when reported.
    #[serde(rename = "PolicyValue", deserialize_with = "de_policy_value", default)]
    pub policy_value: Option<u8>,
    /// OxCGRT geographic-scope flag; carried through but unused.
    #[serde(rename = "Flag", default)]
    pub flag: Option<i64>,
    /// Free-text note attached to the first record of the period.
    #[serde(rename = "InitialNote", deserialize_with = "de_opt_string", default)]
    pub initial_note: Option<String>,
}

fn null_sentinel() -> String {
    "null".to_string()
}

/// Accepts a JSON number, a string, or null for a compact date field.
/// Null becomes the `"null"` sentinel string, matching the feed's own
/// convention for open-ended periods.
fn de_compact_date<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.to_string(),
        Some(serde_json::Value::String(s)) => s,
        Some(other) => other.to_string(),
        None => null_sentinel(),
    })
}

/// Accepts an integer, a digit string, the string `"null"`, or null.
fn de_policy_value<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u8>, D::Error> {
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.as_u64().and_then(|v| u8::try_from(v).ok()),
        Some(serde_json::Value::String(s)) => s.parse::<u8>().ok(),
        _ => None,
    })
}

/// Accepts a string or null.
fn de_opt_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        _ => None,
    })
}

/// A feed row with its country resolved and its dates parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    /// Canonical internet-style country label (`"us"`, `"uk"`). This is the
    /// grouping key for aggregation.
    pub code: String,
    /// The original alpha-3 code, for traceability back to the feed.
    pub country_code: String,
    /// Country name as the feed spells it.
    pub name: String,
    /// Start of the policy period.
    pub start: NaiveDate,
    /// End of the period; [`PolicyDate::Open`] while the policy is active.
    pub end: PolicyDate,
    /// Policy indicator name.
    pub policy_type: String,
    /// Stay-at-home severity 0–3, when reported.
    pub policy_value: Option<u8>,
    /// Free-text note for the period.
    pub initial_note: String,
}

/// One summary per country: the earliest policy period and the current one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountrySummary {
    /// Canonical internet-style country label.
    pub code: String,
    /// Country name.
    pub name: String,
    /// The record with the earliest start date — when the country first
    /// locked down.
    pub first: NormalizedRecord,
    /// The record describing the country's current policy.
    pub latest: NormalizedRecord,
}

/// Normalize raw feed rows, dropping the ones that cannot be resolved.
///
/// A row is dropped (with a `warn` log, never an error) when:
/// - its alpha-3 code is not in the country table,
/// - its start date is malformed or the `"null"` sentinel,
/// - its end date is malformed.
pub fn normalize(records: Vec<RawRecord>) -> Vec<NormalizedRecord> {
    let mut out = Vec::with_capacity(records.len());
    for record in records {
        let Some(country) = country::by_iso3(&record.country_code) else {
            tracing::warn!(
                country_code = %record.country_code,
                "dropping record with unresolvable country code"
            );
            continue;
        };

        let start = match PolicyDate::parse(&record.start_date) {
            Ok(PolicyDate::Date(d)) => d,
            Ok(PolicyDate::Open) => {
                tracing::warn!(
                    country_code = %record.country_code,
                    "dropping record with open-ended start date"
                );
                continue;
            }
            Err(e) => {
                tracing::warn!(
                    country_code = %record.country_code,
                    error = %e,
                    "dropping record with malformed start date"
                );
                continue;
            }
        };

        let end = match PolicyDate::parse(&record.end_date) {
            Ok(end) => end,
            Err(e) => {
                tracing::warn!(
                    country_code = %record.country_code,
                    error = %e,
                    "dropping record with malformed end date"
                );
                continue;
            }
        };

        out.push(NormalizedRecord {
            code: country.internet.to_string(),
            country_code: record.country_code,
            name: record.country_name,
            start,
            end,
            policy_type: record.policy_type,
            policy_value: record.policy_value,
            initial_note: record.initial_note.unwrap_or_default(),
        });
    }
    out
}
