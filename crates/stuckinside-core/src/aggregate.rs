//! # Aggregation — One Summary per Country
//!
//! Folds the normalized record list into an ordered sequence of
//! [`CountrySummary`]: grouped by canonical country code, output order is
//! the order each code first appears in the input.
//!
//! `first` is always the group's minimum-start record (input-order stable on
//! ties). `latest` depends on [`LatestMode`]:
//!
//! - [`LatestMode::PerCountry`] (default) — the group's first open-ended
//!   record, falling back to its maximum-start record when every period has
//!   closed.
//! - [`LatestMode::GlobalFirstOpen`] — bug-compatible with the original
//!   site: the first open-ended record of the *entire* feed is shared by
//!   every country. Kept only as an explicit compatibility switch; when the
//!   feed has no open record at all this mode falls back to the per-country
//!   rule.

use std::collections::HashMap;

use crate::record::{CountrySummary, NormalizedRecord};

/// How the `latest` record of each summary is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LatestMode {
    /// Each country's own current record.
    #[default]
    PerCountry,
    /// Every country shares the feed's first open-ended record.
    GlobalFirstOpen,
}

/// Aggregate normalized records into one [`CountrySummary`] per country.
///
/// Empty input (or input where nothing resolved) yields an empty output.
pub fn aggregate(records: &[NormalizedRecord], mode: LatestMode) -> Vec<CountrySummary> {
    // Group by canonical code, preserving first-occurrence order.
    let mut order: Vec<&str> = Vec::new();
    let mut groups: HashMap<&str, Vec<&NormalizedRecord>> = HashMap::new();
    for record in records {
        let group = groups.entry(record.code.as_str()).or_default();
        if group.is_empty() {
            order.push(record.code.as_str());
        }
        group.push(record);
    }

    let global_open = match mode {
        LatestMode::GlobalFirstOpen => records.iter().find(|r| r.end.is_open()),
        LatestMode::PerCountry => None,
    };

    order
        .into_iter()
        .map(|code| {
            let group = &groups[code];
            let first = min_by_start(group);
            let latest = global_open.unwrap_or_else(|| current_of(group));
            CountrySummary {
                code: code.to_string(),
                name: first.name.clone(),
                first: first.clone(),
                latest: latest.clone(),
            }
        })
        .collect()
}

/// The group's minimum-start record; the earliest-encountered one wins ties.
fn min_by_start<'a>(group: &[&'a NormalizedRecord]) -> &'a NormalizedRecord {
    let mut best = group[0];
    for r in &group[1..] {
        if r.start < best.start {
            best = r;
        }
    }
    best
}

/// The group's current record: its first open-ended one, or the
/// maximum-start record when every period has closed.
fn current_of<'a>(group: &[&'a NormalizedRecord]) -> &'a NormalizedRecord {
    if let Some(open) = group.iter().find(|r| r.end.is_open()) {
        return open;
    }
    let mut best = group[0];
    for r in &group[1..] {
        if r.start > best.start {
            best = r;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dates::PolicyDate;
    use crate::record::normalize;
    use crate::record::RawRecord;

    fn rows(entries: &[(&str, &str, &str)]) -> Vec<NormalizedRecord> {
        let raw: Vec<RawRecord> = entries
            .iter()
            .map(|(code, start, end)| {
                serde_json::from_value(serde_json::json!({
                    "CountryName": code,
                    "CountryCode": code,
                    "StartDate": start,
                    "EndDate": end,
                    "PolicyType": "C6",
                    "PolicyValue": 2
                }))
                .unwrap()
            })
            .collect();
        normalize(raw)
    }

    #[test]
    fn test_one_summary_per_country_in_first_occurrence_order() {
        let records = rows(&[
            ("FRA", "20200317", "20200510"),
            ("ITA", "20200309", "null"),
            ("FRA", "20200520", "null"),
        ]);
        let out = aggregate(&records, LatestMode::PerCountry);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].code, "fr");
        assert_eq!(out[1].code, "it");
    }

    #[test]
    fn test_first_is_minimum_start() {
        let records = rows(&[
            ("ESP", "20200310", "20200420"),
            ("ESP", "20200115", "20200301"),
            ("ESP", "20200501", "null"),
        ]);
        let out = aggregate(&records, LatestMode::PerCountry);
        assert_eq!(out[0].first.start.to_string(), "2020-01-15");
    }

    #[test]
    fn test_first_ties_keep_input_order() {
        let mut records = rows(&[
            ("ESP", "20200310", "20200420"),
            ("ESP", "20200310", "null"),
        ]);
        records[0].initial_note = "earlier row".to_string();
        let out = aggregate(&records, LatestMode::PerCountry);
        assert_eq!(out[0].first.initial_note, "earlier row");
    }

    #[test]
    fn test_latest_per_country_prefers_open_record() {
        let records = rows(&[
            ("DEU", "20200322", "20200504"),
            ("DEU", "20201102", "null"),
            ("FRA", "20200317", "null"),
        ]);
        let out = aggregate(&records, LatestMode::PerCountry);
        assert_eq!(out[0].code, "de");
        assert!(out[0].latest.end.is_open());
        assert_eq!(out[0].latest.start.to_string(), "2020-11-02");
        assert!(out[1].latest.end.is_open());
        assert_eq!(out[1].latest.start.to_string(), "2020-03-17");
    }

    #[test]
    fn test_latest_falls_back_to_max_start_when_all_closed() {
        let records = rows(&[
            ("DNK", "20200311", "20200415"),
            ("DNK", "20201209", "20210301"),
        ]);
        let out = aggregate(&records, LatestMode::PerCountry);
        assert_eq!(out[0].latest.start.to_string(), "2020-12-09");
        assert_eq!(out[0].latest.end, PolicyDate::parse("20210301").unwrap());
    }

    #[test]
    fn test_global_mode_shares_one_record() {
        let records = rows(&[
            ("FRA", "20200317", "20200510"),
            ("ITA", "20200309", "null"),
            ("DEU", "20200322", "null"),
        ]);
        let out = aggregate(&records, LatestMode::GlobalFirstOpen);
        // The first open record feed-wide is Italy's; every summary gets it.
        for summary in &out {
            assert_eq!(summary.latest.code, "it");
            assert_eq!(summary.latest.start.to_string(), "2020-03-09");
        }
        // `first` selection is unaffected by the mode.
        assert_eq!(out[0].first.code, "fr");
    }

    #[test]
    fn test_global_mode_without_open_record_falls_back() {
        let records = rows(&[
            ("FRA", "20200317", "20200510"),
            ("ITA", "20200309", "20200504"),
        ]);
        let out = aggregate(&records, LatestMode::GlobalFirstOpen);
        assert_eq!(out[0].latest.code, "fr");
        assert_eq!(out[1].latest.code, "it");
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(aggregate(&[], LatestMode::PerCountry).is_empty());
        assert!(aggregate(&[], LatestMode::GlobalFirstOpen).is_empty());
    }
}
