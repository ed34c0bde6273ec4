// SPDX-License-Identifier: MIT
// Copyright 2026 The Twotoo Authors

//! Shared helpers for date/time parsing and formatting.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

use crate::error::AppError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse an ISO-8601 string into its calendar day.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps, and offset-less date-times.
/// The day is taken in the timestamp's own offset.
pub fn parse_calendar_date(raw: &str) -> Result<NaiveDate, AppError> {
    let raw = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        return Ok(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(dt.date());
    }

    Err(AppError::InvalidDate(raw.to_string()))
}

/// Format a calendar day as `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Today's date on the local clock.
///
/// Only entry points call this; everything below them takes `today` as a
/// parameter.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Every day from `start` to `end` inclusive, newest first.
///
/// Empty when `end` precedes `start`.
pub fn days_newest_first(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut days: Vec<NaiveDate> = start.iter_days().take_while(|d| *d <= end).collect();
    days.reverse();
    days
}

/// Inclusive number of days between `start` and `end` (0 if reversed).
pub fn inclusive_day_count(start: NaiveDate, end: NaiveDate) -> u32 {
    let days = (end - start).num_days() + 1;
    u32::try_from(days.max(0)).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(raw: &str) -> NaiveDate {
        NaiveDate::parse_from_str(raw, DATE_FORMAT).unwrap()
    }

    #[test]
    fn test_parse_plain_date() {
        assert_eq!(parse_calendar_date("2023-05-01").unwrap(), date("2023-05-01"));
    }

    #[test]
    fn test_parse_rfc3339_keeps_own_offset() {
        // 23:30 in Seoul is still the 1st locally
        let parsed = parse_calendar_date("2023-05-01T23:30:00+09:00").unwrap();
        assert_eq!(parsed, date("2023-05-01"));

        let parsed = parse_calendar_date("2023-05-01T10:00:00.000Z").unwrap();
        assert_eq!(parsed, date("2023-05-01"));
    }

    #[test]
    fn test_parse_naive_datetime() {
        let parsed = parse_calendar_date("2023-05-02T08:15:00").unwrap();
        assert_eq!(parsed, date("2023-05-02"));

        let parsed = parse_calendar_date("2023-05-02T08:15:00.123").unwrap();
        assert_eq!(parsed, date("2023-05-02"));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = parse_calendar_date("May 1st").unwrap_err();
        assert!(matches!(err, AppError::InvalidDate(_)));
    }

    #[test]
    fn test_days_newest_first() {
        let days = days_newest_first(date("2023-04-29"), date("2023-05-02"));
        let formatted: Vec<String> = days.into_iter().map(format_date).collect();
        assert_eq!(
            formatted,
            vec!["2023-05-02", "2023-05-01", "2023-04-30", "2023-04-29"]
        );
    }

    #[test]
    fn test_days_reversed_range_is_empty() {
        assert!(days_newest_first(date("2023-05-02"), date("2023-05-01")).is_empty());
        assert_eq!(inclusive_day_count(date("2023-05-02"), date("2023-05-01")), 0);
    }

    #[test]
    fn test_inclusive_day_count() {
        assert_eq!(inclusive_day_count(date("2023-05-01"), date("2023-05-01")), 1);
        assert_eq!(inclusive_day_count(date("2023-05-01"), date("2023-05-22")), 22);
    }
}
