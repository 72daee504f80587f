//! Date helper functions

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Format used when a date has to be synthesized (ISO 8601, UTC)
pub const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Parse a front-matter date string in various formats.
///
/// The wall-clock time is taken as written: offsets are accepted but not
/// converted, so "2023-03-15" is March 15 on every machine.
pub fn parse_date_string(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
    ];
    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }

    // RFC 3339 / ISO 8601 with offset or Z
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }

    None
}

/// Format date in full format (like "January 5, 2024")
pub fn full_date(date: &NaiveDateTime) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Format a timestamp the way a missing date is recorded
pub fn iso_date(date: &NaiveDateTime) -> String {
    date.format(ISO_FORMAT).to_string()
}
