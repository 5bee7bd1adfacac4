//! Time-token normalization.
//!
//! Header time tokens come as bare 24-hour `h:mm` or as 12-hour
//! `h:mm a.m.` / `h:mm p.m.` with locale-specific spacing. They are
//! converted to zero-padded 24-hour `HH:MM` and combined with the day-first
//! date token into a [`NaiveDateTime`].

use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;

static LEADING_CLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{1,2}):([0-9]{2})").expect("valid clock regex"));

/// Formats tried for `"{date} {HH:MM}"`. Day-first, with month-first as the
/// lenient fallback for dates whose day cannot be a month (e.g. `1/13/2024`).
const CONVERTED_FORMATS: &[&str] = &["%d/%m/%Y %H:%M", "%m/%d/%Y %H:%M"];

/// Formats tried for `"{date} {original token}"`.
const ORIGINAL_FORMATS: &[&str] = &[
    "%d/%m/%Y %H:%M",
    "%d/%m/%Y %I:%M%p",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %I:%M%p",
];

/// Converts a time token to zero-padded 24-hour `HH:MM`.
///
/// Whitespace is ignored and the token is lower-cased; `a.` marks AM, `p.`
/// marks PM, neither means the token is already 24-hour. Returns `None`
/// if the token does not start with `h:mm`.
///
/// # Example
///
/// ```rust
/// use chatpulse::parsing::to_24_hour;
///
/// assert_eq!(to_24_hour("6:49 p. m.").as_deref(), Some("18:49"));
/// assert_eq!(to_24_hour("12:15a.m.").as_deref(), Some("00:15"));
/// assert_eq!(to_24_hour("23:00").as_deref(), Some("23:00"));
/// assert_eq!(to_24_hour("noon"), None);
/// ```
pub fn to_24_hour(time: &str) -> Option<String> {
    let compact: String = time
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase();

    let am = compact.contains("a.");
    let pm = compact.contains("p.");

    let caps = LEADING_CLOCK.captures(&compact)?;
    let mut hour: u32 = caps[1].parse().ok()?;
    let minute: u32 = caps[2].parse().ok()?;

    if pm && hour != 12 {
        hour += 12;
    }
    if am && hour == 12 {
        hour = 0;
    }

    Some(format!("{hour:02}:{minute:02}"))
}

/// Combines a date token and a time token into a timestamp.
///
/// The converted 24-hour time is tried first; if that does not produce a
/// valid date-time, the original token is tried as written. Never fails
/// loudly: anything unparseable yields `None`.
///
/// # Example
///
/// ```rust
/// use chatpulse::parsing::normalize_timestamp;
/// use chrono::{Datelike, Timelike};
///
/// let ts = normalize_timestamp("12/5/2023", "6:49p.m.").unwrap();
/// assert_eq!((ts.day(), ts.month(), ts.year()), (12, 5, 2023));
/// assert_eq!((ts.hour(), ts.minute()), (18, 49));
///
/// assert!(normalize_timestamp("99/99/9999", "9:00").is_none());
/// ```
pub fn normalize_timestamp(date: &str, time: &str) -> Option<NaiveDateTime> {
    if let Some(converted) = to_24_hour(time) {
        if let Some(ts) = parse_with(date, &converted, CONVERTED_FORMATS) {
            return Some(ts);
        }
    }

    parse_with(date, time.trim(), ORIGINAL_FORMATS)
}

fn parse_with(date: &str, time: &str, formats: &[&str]) -> Option<NaiveDateTime> {
    let datetime_str = format!("{date} {time}");

    formats
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(&datetime_str, format).ok())
}
