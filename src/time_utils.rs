// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting.

use chrono::{DateTime, NaiveDate, NaiveTime, SecondsFormat, Utc};

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Day shown in tables, e.g. `2025-03-04`.
pub fn format_day(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Clock time shown in tables, e.g. `07:30`.
pub fn format_clock(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formats() {
        let ts = DateTime::from_timestamp(1_735_725_600, 0).unwrap();
        assert_eq!(format_utc_rfc3339(ts), "2025-01-01T10:00:00Z");
        assert_eq!(
            format_day(NaiveDate::from_ymd_opt(2025, 3, 4).unwrap()),
            "2025-03-04"
        );
        assert_eq!(
            format_clock(NaiveTime::from_hms_opt(7, 30, 0).unwrap()),
            "07:30"
        );
    }
}
