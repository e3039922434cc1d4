use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Parse a date out of the loosely-formatted strings the snapshot carries.
/// Accepts plain dates, RFC 3339 timestamps, and `T`-separated naive
/// timestamps. Anything else is treated as "no date".
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.date());
    }
    None
}

/// Midnight-UTC epoch milliseconds for a date. Comparators work in epoch
/// millis so dates and timestamps order consistently.
pub fn epoch_ms(d: NaiveDate) -> i64 {
    d.and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc().timestamp_millis())
        .unwrap_or(0)
}
