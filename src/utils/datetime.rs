// ============================================================================
// DATETIME HELPERS
// ============================================================================
// Backend timestamps are ISO-8601 strings (usually UTC with `Z`).
// Form inputs use the `datetime-local` format: local wall clock, minutes.
// ============================================================================

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Format of an HTML `datetime-local` input value
pub const INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Human readable "Jan 5, 2025, 3:04:05 PM"
pub const DISPLAY_FORMAT: &str = "%b %-d, %Y, %-I:%M:%S %p";

const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];

/// Parses a backend timestamp. Values without offset are read as local time.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    parse_timestamp_in(value, &Local)
}

pub fn parse_timestamp_in<Tz: TimeZone>(value: &str, tz: &Tz) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    let naive = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })?;

    tz.from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Parses a `datetime-local` input value (seconds optional)
pub fn parse_input(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    NaiveDateTime::parse_from_str(value, INPUT_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}

/// Converts a backend timestamp to a `datetime-local` value; empty if unparseable
pub fn to_input_value(value: &str) -> String {
    to_input_value_in(value, &Local)
}

pub fn to_input_value_in<Tz: TimeZone>(value: &str, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    parse_timestamp_in(value, tz)
        .map(|dt| dt.with_timezone(tz).format(INPUT_FORMAT).to_string())
        .unwrap_or_default()
}

pub fn format_display(dt: &DateTime<Utc>) -> String {
    format_display_in(dt, &Local)
}

pub fn format_display_in<Tz: TimeZone>(dt: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    dt.with_timezone(tz).format(DISPLAY_FORMAT).to_string()
}

/// Current local wall-clock time, comparable with `parse_input` values
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn parses_rfc3339_with_zulu() {
        let dt = parse_timestamp_in("2025-03-04T10:15:30.000Z", &Utc).unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2025, 3, 4));
        assert_eq!((dt.hour(), dt.minute(), dt.second()), (10, 15, 30));
    }

    #[test]
    fn parses_naive_values_in_given_zone() {
        let dt = parse_timestamp_in("2025-03-04T10:15", &Utc).unwrap();
        assert_eq!(dt.hour(), 10);
        assert!(parse_timestamp_in("2025-03-04", &Utc).is_some());
    }

    #[test]
    fn rejects_blank_and_garbage() {
        assert!(parse_timestamp_in("", &Utc).is_none());
        assert!(parse_timestamp_in("   ", &Utc).is_none());
        assert!(parse_timestamp_in("yesterday", &Utc).is_none());
    }

    #[test]
    fn input_value_is_minute_precision() {
        assert_eq!(to_input_value_in("2025-03-04T10:15:30.000Z", &Utc), "2025-03-04T10:15");
        assert_eq!(to_input_value_in("not a date", &Utc), "");
    }

    #[test]
    fn parses_input_with_and_without_seconds() {
        assert!(parse_input("2025-03-04T10:15").is_some());
        assert!(parse_input("2025-03-04T10:15:59").is_some());
        assert!(parse_input("04/03/2025").is_none());
    }

    #[test]
    fn display_format_matches_card_layout() {
        let dt = parse_timestamp_in("2025-01-05T15:04:05Z", &Utc).unwrap();
        assert_eq!(format_display_in(&dt, &Utc), "Jan 5, 2025, 3:04:05 PM");
    }
}
