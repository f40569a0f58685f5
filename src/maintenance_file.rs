//! The `.maintenance` sentinel file and its `upgrading = <timestamp>;` marker.

use regex::Regex;
use std::sync::LazyLock;

pub const SENTINEL_FILE_NAME: &str = ".maintenance";

static UPGRADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)upgrading\s*=\s*([0-9]+)\s*;").expect("upgrading pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MaintenanceRecord {
    /// Unix timestamp the sentinel was written at. Zero when the file
    /// carries no readable marker.
    pub upgrading_at: i64,
}

impl MaintenanceRecord {
    /// Parses sentinel contents. The flag is false when no marker was found,
    /// in which case the record falls back to timestamp 0.
    pub fn parse(contents: &str) -> (Self, bool) {
        match parse_upgrading_timestamp(contents) {
            Some(upgrading_at) => (MaintenanceRecord { upgrading_at }, true),
            None => (MaintenanceRecord::default(), false),
        }
    }
}

/// Extracts the timestamp from the first `upgrading = N;` statement.
///
/// Only the first match is considered and only ASCII digits count. A digit
/// run too large for `i64` saturates to `i64::MAX`.
pub fn parse_upgrading_timestamp(contents: &str) -> Option<i64> {
    UPGRADING_RE
        .captures(contents)
        .and_then(|caps| caps.get(1))
        .map(|digits| digits.as_str().parse().unwrap_or(i64::MAX))
}

/// Sentinel contents for a site entering maintenance at `timestamp`.
pub fn render_sentinel(timestamp: i64) -> String {
    format!("<?php $upgrading = {timestamp}; ?>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_php_assignment() {
        assert_eq!(
            parse_upgrading_timestamp("<?php $upgrading = 1700000000; ?>"),
            Some(1700000000)
        );
    }

    #[test]
    fn parses_without_whitespace_and_any_case() {
        assert_eq!(parse_upgrading_timestamp("UPGRADING=12;"), Some(12));
        assert_eq!(parse_upgrading_timestamp("Upgrading =\n 34 \t;"), Some(34));
    }

    #[test]
    fn uses_first_match_only() {
        let contents = "$upgrading = 100;\n$upgrading = 200;";
        assert_eq!(parse_upgrading_timestamp(contents), Some(100));
    }

    #[test]
    fn rejects_non_numeric_values() {
        assert_eq!(parse_upgrading_timestamp("$upgrading = time();"), None);
        assert_eq!(parse_upgrading_timestamp("$upgrading = -5;"), None);
        assert_eq!(parse_upgrading_timestamp("$upgrading = 5"), None);
        assert_eq!(parse_upgrading_timestamp(""), None);
    }

    #[test]
    fn overflowing_digits_saturate() {
        assert_eq!(
            parse_upgrading_timestamp("$upgrading = 99999999999999999999999;"),
            Some(i64::MAX)
        );

        let (record, found) = MaintenanceRecord::parse("$upgrading = 99999999999999999999999;");
        assert!(found);
        assert_eq!(record.upgrading_at, i64::MAX);
    }

    #[test]
    fn non_ascii_digits_do_not_match() {
        assert_eq!(parse_upgrading_timestamp("$upgrading = \u{0661};"), None);
        assert_eq!(
            parse_upgrading_timestamp("$upgrading = \u{0661}; $upgrading = 1700000000;"),
            Some(1700000000)
        );
    }

    #[test]
    fn record_defaults_to_zero_when_marker_missing() {
        let (record, found) = MaintenanceRecord::parse("garbage");
        assert!(!found);
        assert_eq!(record.upgrading_at, 0);
    }

    #[test]
    fn rendered_sentinel_is_parseable() {
        let (record, found) = MaintenanceRecord::parse(&render_sentinel(1234));
        assert!(found);
        assert_eq!(record.upgrading_at, 1234);
    }
}
