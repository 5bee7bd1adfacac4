//! Feature enrichment: timestamp normalization, derived calendar fields and
//! media detection.

use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::config::TranscriptConfig;
use crate::message::{EnrichedMessage, RawMessage};
use crate::parsing::normalize_timestamp;

/// Returns `true` if `body` contains any of `markers`, ignoring case.
///
/// Both sides are lower-cased, so markers may be given in any case.
/// This is a substring test, so `"omitted"` also matches inside longer words.
///
/// # Example
///
/// ```rust
/// use chatpulse::core::is_media;
///
/// let markers = ["<media", "omitted"];
/// assert!(is_media("<Media omitted>", &markers));
/// assert!(is_media("IMAGE OMITTED", &markers));
/// assert!(!is_media("see you tomorrow", &markers));
/// assert!(is_media("<media omitted>", &["<Media"]));
/// ```
pub fn is_media<S: AsRef<str>>(body: &str, markers: &[S]) -> bool {
    let body_lower = body.to_lowercase();
    markers
        .iter()
        .any(|marker| body_lower.contains(&marker.as_ref().to_lowercase()))
}

/// Enriches a raw message with its timestamp and derived fields.
pub fn enrich(raw: RawMessage, config: &TranscriptConfig) -> EnrichedMessage {
    let timestamp = normalize_timestamp(&raw.date, &raw.time);
    let is_media = is_media(&raw.body, &config.media_markers);

    EnrichedMessage {
        timestamp,
        date_only: timestamp.map(|ts| ts.date()),
        year: timestamp.map(|ts| ts.year()),
        month_name: timestamp.map(month_name),
        hour: timestamp.map(|ts| ts.hour()),
        weekday_name: timestamp.map(weekday_name),
        is_media,
        raw,
    }
}

fn month_name(ts: NaiveDateTime) -> String {
    ts.format("%B").to_string()
}

fn weekday_name(ts: NaiveDateTime) -> String {
    ts.format("%A").to_string()
}

impl EnrichedMessage {
    /// Builds an enriched message from a raw one. See [`enrich`].
    pub fn from_raw(raw: RawMessage, config: &TranscriptConfig) -> Self {
        enrich(raw, config)
    }
}
