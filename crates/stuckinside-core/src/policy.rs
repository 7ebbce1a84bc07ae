//! # Stay-at-Home Policy Severity
//!
//! The feed's `PolicyValue` is the OxCGRT C6 "stay at home requirements"
//! ordinal: 0–3, or missing/`"null"` where a country reported nothing.

/// Human-readable description for a stay-at-home severity value.
///
/// Total over all inputs: `None` (missing or `"null"` in the feed) renders
/// `"No data"`, and any value outside the documented 0–3 range renders
/// `"Unknown status"` rather than panicking on a feed change.
pub fn status_text(value: Option<u8>) -> &'static str {
    match value {
        Some(0) => "No measures",
        Some(1) => "Recommend not leaving house",
        Some(2) => {
            "Require not leaving house with exceptions for daily exercise, \
             grocery shopping, and 'essential' trips"
        }
        Some(3) => {
            "Require not leaving house with minimal exceptions (eg allowed to \
             leave once a week, or only one person can leave at a time, etc)"
        }
        Some(_) => "Unknown status",
        None => "No data",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_documented_values_are_distinct_fixed_strings() {
        let texts: Vec<_> = (0..=3).map(|v| status_text(Some(v))).collect();
        let unique: HashSet<_> = texts.iter().collect();
        assert_eq!(unique.len(), 4);
        assert_eq!(texts[0], "No measures");
        assert_eq!(texts[1], "Recommend not leaving house");
    }

    #[test]
    fn test_missing_value_is_no_data() {
        assert_eq!(status_text(None), "No data");
    }

    #[test]
    fn test_out_of_range_value_is_unknown() {
        assert_eq!(status_text(Some(4)), "Unknown status");
        assert_eq!(status_text(Some(255)), "Unknown status");
    }
}
