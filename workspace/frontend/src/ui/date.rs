use chrono::{NaiveDate, NaiveDateTime};
use std::fmt::Write;

/// Shown in place of a goal's target date when it has none.
pub const MISSING_DATE: &str = "not set";

const FALLBACK_FORMAT: &str = "%Y-%m-%d";

/// Format a creation timestamp as a calendar date.
pub fn format_timestamp(value: &NaiveDateTime, format: &str) -> String {
    format_date(Some(value.date()), format)
}

/// Format an optional date. A format string chrono rejects falls back to ISO dates.
pub fn format_date(value: Option<NaiveDate>, format: &str) -> String {
    let Some(date) = value else {
        return MISSING_DATE.to_string();
    };

    let mut out = String::new();
    if write!(out, "{}", date.format(format)).is_err() {
        tracing::warn!("Invalid date format `{}`, falling back to {}", format, FALLBACK_FORMAT);
        return date.format(FALLBACK_FORMAT).to_string();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_use_the_configured_format() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 1);
        assert_eq!(format_date(date, "%-m/%-d/%Y"), "3/1/2025");
        assert_eq!(format_date(date, "%d.%m.%Y"), "01.03.2025");
    }

    #[test]
    fn missing_date_reads_not_set() {
        assert_eq!(format_date(None, "%-m/%-d/%Y"), "not set");
    }

    #[test]
    fn broken_format_falls_back() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 1);
        assert_eq!(format_date(date, "%Q"), "2025-03-01");
    }

    #[test]
    fn timestamps_drop_the_time() {
        let value = NaiveDate::from_ymd_opt(2025, 1, 5)
            .and_then(|d| d.and_hms_opt(23, 59, 0))
            .unwrap();
        assert_eq!(format_timestamp(&value, "%-m/%-d/%Y"), "1/5/2025");
    }
}
