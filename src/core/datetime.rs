//! Calendar-day utilities.
//!
//! Deadlines are compared by local calendar day, never by exact timestamp.
//! This module parses the deadline formats found in task files and the date
//! expressions accepted on the command line.

use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, NaiveDateTime, Weekday};

/// Deadline layouts without an offset, tried in order.
const NAIVE_DEADLINE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parse a stored deadline into local wall-clock time.
///
/// Accepts RFC 3339 timestamps (converted to the local zone), naive
/// `YYYY-MM-DDTHH:MM[:SS]` timestamps and bare `YYYY-MM-DD` dates, which
/// are taken as midnight. Returns `None` for anything else; an unreadable
/// deadline means "no deadline".
#[must_use]
pub fn parse_deadline(input: &str) -> Option<NaiveDateTime> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Local).naive_local());
    }

    for format in NAIVE_DEADLINE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, format) {
            return Some(dt);
        }
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Parse a date expression given on the command line.
///
/// Supports:
/// - `today`, `tomorrow`, `yesterday`
/// - `in 3 days`, `in 2 weeks`
/// - `2024-12-15` (ISO format)
#[must_use]
pub fn parse_date(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let input = input.trim().to_lowercase();

    match input.as_str() {
        "today" => return Some(today),
        "tomorrow" => return Some(today + Duration::days(1)),
        "yesterday" => return Some(today - Duration::days(1)),
        _ => {},
    }

    if let Some(date) = parse_relative_offset(&input, today) {
        return Some(date);
    }

    NaiveDate::parse_from_str(&input, "%Y-%m-%d").ok()
}

/// Parse a deadline given on the command line.
///
/// Either a full timestamp understood by [`parse_deadline`] or a date
/// expression understood by [`parse_date`], which then means end of day.
#[must_use]
pub fn parse_deadline_arg(input: &str, today: NaiveDate) -> Option<NaiveDateTime> {
    if input.contains(':') {
        return parse_deadline(input);
    }
    parse_date(input, today).and_then(|d| d.and_hms_opt(23, 59, 0))
}

/// Parse "in X days/weeks" patterns.
fn parse_relative_offset(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let parts: Vec<&str> = input.split_whitespace().collect();

    if parts.len() == 3 && parts[0] == "in" {
        let amount: i64 = parts[1].parse().ok()?;
        let unit = parts[2].trim_end_matches('s');

        let days = match unit {
            "day" => amount,
            "week" => amount.checked_mul(7)?,
            _ => return None,
        };

        return today.checked_add_signed(Duration::try_days(days)?);
    }

    None
}

/// Last calendar day of the week containing `today`.
///
/// `week_start` is the first day of a week; the week ends six days later.
#[must_use]
pub fn end_of_week(today: NaiveDate, week_start: Weekday) -> NaiveDate {
    let offset = (today.weekday().num_days_from_monday() + 7
        - week_start.num_days_from_monday())
        % 7;
    today + Duration::days(i64::from(6 - offset))
}
