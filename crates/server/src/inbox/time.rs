use chrono::{DateTime, NaiveDateTime, Utc};
use chrono_tz::Tz;

/// Parses an upstream `created_at`. Timestamps without an offset are read as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// `M/D/YYYY, h:mm:ss AM` in the display timezone. Unparseable input renders empty.
pub fn format_display_time(raw: &str, tz: Tz) -> String {
    match parse_timestamp(raw) {
        Some(dt) => dt
            .with_timezone(&tz)
            .format("%-m/%-d/%Y, %-I:%M:%S %p")
            .to_string(),
        None => String::new(),
    }
}

/// Coarse "time ago" label used by the conversation list.
pub fn format_relative(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff_ms = (now - then).num_milliseconds();
    if diff_ms < 0 {
        return "just now".into();
    }
    let seconds = diff_ms / 1000;
    if seconds < 5 {
        return "just now".into();
    }
    if seconds < 60 {
        return format!("{}s ago", seconds);
    }
    let minutes = seconds / 60;
    if minutes < 60 {
        return format!("{}m ago", minutes);
    }
    let hours = minutes / 60;
    if hours < 24 {
        return format!("{}h ago", hours);
    }
    let days = hours / 24;
    if days < 7 {
        return format!("{}d ago", days);
    }
    let weeks = days / 7;
    if weeks < 5 {
        return format!("{}w ago", weeks);
    }
    let months = days / 30;
    if months < 12 {
        return format!("{}mo ago", months);
    }
    format!("{}y ago", days / 365)
}
