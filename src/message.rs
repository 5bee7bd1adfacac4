//! Message records produced by the transcript pipeline.
//!
//! - [`RawMessage`] is what the line classifier emits: the four header
//!   fields, with continuation lines already merged into `body`.
//! - [`EnrichedMessage`] adds the normalized timestamp and the fields
//!   derived from it, plus the media flag.
//!
//! # Examples
//!
//! ```
//! use chatpulse::{EnrichedMessage, RawMessage};
//! use chatpulse::config::TranscriptConfig;
//!
//! let raw = RawMessage::new("12/5/2023", "6:49p.m.", "Alice", "Hello");
//! let msg = EnrichedMessage::from_raw(raw, &TranscriptConfig::default());
//!
//! assert_eq!(msg.hour, Some(18));
//! assert_eq!(msg.weekday_name.as_deref(), Some("Friday"));
//! assert!(!msg.is_media);
//! ```

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One message as it appears in the transcript.
///
/// Identity is positional. `body` may contain newlines when continuation
/// lines were merged into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMessage {
    /// Date token exactly as written, e.g. `12/5/2023`.
    pub date: String,

    /// Time token with no-break spaces and whitespace removed, e.g. `6:49p.m.`.
    pub time: String,

    /// Author display name.
    pub author: String,

    /// Message text, possibly empty, possibly multi-line.
    pub body: String,
}

impl RawMessage {
    /// Creates a raw message from its four header fields.
    pub fn new(
        date: impl Into<String>,
        time: impl Into<String>,
        author: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
            author: author.into(),
            body: body.into(),
        }
    }

    /// Appends a continuation line to the body.
    pub fn push_continuation(&mut self, line: &str) {
        self.body.push('\n');
        self.body.push_str(line);
    }
}

/// A [`RawMessage`] with temporal and content features attached.
///
/// `timestamp` is `None` when the date/time tokens could not be normalized;
/// in that case every derived field is `None` as well.
///
/// | Field | Derived from |
/// |-------|--------------|
/// | `date_only` | `timestamp.date()` |
/// | `year` | calendar year |
/// | `month_name` | English month name (`"January"`) |
/// | `hour` | 0-23 |
/// | `weekday_name` | English weekday name (`"Monday"`) |
/// | `is_media` | body contains a media marker |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedMessage {
    #[serde(flatten)]
    pub raw: RawMessage,

    #[serde(default)]
    pub timestamp: Option<NaiveDateTime>,

    #[serde(default)]
    pub date_only: Option<NaiveDate>,

    #[serde(default)]
    pub year: Option<i32>,

    #[serde(default)]
    pub month_name: Option<String>,

    #[serde(default)]
    pub hour: Option<u32>,

    #[serde(default)]
    pub weekday_name: Option<String>,

    pub is_media: bool,
}

impl EnrichedMessage {
    /// Author of the message.
    pub fn author(&self) -> &str {
        &self.raw.author
    }

    /// Message text.
    pub fn body(&self) -> &str {
        &self.raw.body
    }

    /// Returns `true` if the timestamp was normalized successfully.
    pub fn has_timestamp(&self) -> bool {
        self.timestamp.is_some()
    }
}
