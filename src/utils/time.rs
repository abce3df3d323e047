// src/utils/time.rs - Timestamp parsing and display formatting

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Asia::Jakarta;

/// Placeholder shown wherever a timestamp is absent or unreadable
pub const MISSING_PLACEHOLDER: &str = "—";

/// Parse an ISO-8601 timestamp as the backend emits it.
///
/// Accepts RFC 3339 with offset, a bare datetime (taken as UTC), and a bare
/// date (taken as midnight UTC).
pub fn parse_timestamp(value: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt);
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(Utc.from_utc_datetime(&naive).fixed_offset());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(Utc.from_utc_datetime(&naive).fixed_offset());
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        let naive = date.and_hms_opt(0, 0, 0)?;
        return Some(Utc.from_utc_datetime(&naive).fixed_offset());
    }
    None
}

/// On-screen form: converted to the Jakarta timezone, 24-hour clock, with
/// the id-ID dotted time separator. Absent or unparsable input renders the
/// placeholder.
pub fn format_timestamp_display(value: Option<&str>) -> String {
    let Some(raw) = value else {
        return MISSING_PLACEHOLDER.to_string();
    };
    match parse_timestamp(raw) {
        Some(dt) => dt
            .with_timezone(&Jakarta)
            .format("%d/%m/%Y %H.%M.%S")
            .to_string(),
        None => MISSING_PLACEHOLDER.to_string(),
    }
}

/// CSV form: `YYYY-MM-DD HH:mm:ss` using the timestamp's own wall clock.
/// Unlike the display form this performs no timezone conversion; the two
/// rules diverge on purpose. Absent or unparsable input yields an empty
/// cell.
pub fn format_timestamp_csv(value: Option<&str>) -> String {
    let Some(raw) = value else {
        return String::new();
    };
    match parse_timestamp(raw) {
        Some(dt) => dt.naive_local().format("%Y-%m-%d %H:%M:%S").to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rfc3339_with_offset() {
        let dt = parse_timestamp("2025-03-14T10:30:45+07:00").unwrap();
        assert_eq!(dt.offset().local_minus_utc(), 7 * 3600);
    }

    #[test]
    fn test_parse_bare_datetime_and_date() {
        assert!(parse_timestamp("2025-03-14T10:30:45").is_some());
        assert!(parse_timestamp("2025-03-14 10:30:45").is_some());
        assert!(parse_timestamp("2025-03-14").is_some());
        assert!(parse_timestamp("not a date").is_none());
    }

    #[test]
    fn test_display_converts_to_jakarta() {
        // 03:30:45 UTC is 10:30:45 in Jakarta (UTC+7)
        let formatted = format_timestamp_display(Some("2025-03-14T03:30:45Z"));
        assert_eq!(formatted, "14/03/2025 10.30.45");
    }

    #[test]
    fn test_display_placeholder() {
        assert_eq!(format_timestamp_display(None), MISSING_PLACEHOLDER);
        assert_eq!(format_timestamp_display(Some("garbage")), MISSING_PLACEHOLDER);
    }

    #[test]
    fn test_csv_keeps_wall_clock() {
        // The +07:00 wall clock is written as-is; no conversion happens
        let formatted = format_timestamp_csv(Some("2025-03-14T10:30:45+07:00"));
        assert_eq!(formatted, "2025-03-14 10:30:45");
    }

    #[test]
    fn test_csv_and_display_diverge() {
        let raw = Some("2025-03-14T03:30:45Z");
        assert_eq!(format_timestamp_csv(raw), "2025-03-14 03:30:45");
        assert_eq!(format_timestamp_display(raw), "14/03/2025 10.30.45");
    }

    #[test]
    fn test_csv_empty_for_absent() {
        assert_eq!(format_timestamp_csv(None), "");
        assert_eq!(format_timestamp_csv(Some("garbage")), "");
    }
}
