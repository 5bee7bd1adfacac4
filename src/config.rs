//! Configuration types for parsing and summarizing transcripts.
//!
//! Configuration is passed explicitly to the parser and to the summary
//! builder; nothing is read from process-wide state.
//!
//! - [`TranscriptConfig`] - media placeholder markers and emoji tallying mode
//! - [`SummaryConfig`] - sizes of the top-N lists in a [`ChatSummary`](crate::core::ChatSummary)
//!
//! # Example
//!
//! ```rust
//! use chatpulse::config::TranscriptConfig;
//! use chatpulse::parser::TranscriptParser;
//!
//! let config = TranscriptConfig::new()
//!     .with_media_marker("<adjunto>")
//!     .with_split_emoji_runs(true);
//!
//! let parser = TranscriptParser::with_config(config);
//! ```

use serde::{Deserialize, Serialize};

/// Sentinel substrings that mark an attachment placeholder.
///
/// Matched case-insensitively as substrings, so `"omitted"` also fires on
/// ordinary words containing it.
pub const DEFAULT_MEDIA_MARKERS: &[&str] = &[
    "<multimedia",
    "<media",
    "omitted",
    "archivo adjunto",
    "image omitted",
];

/// Configuration for transcript parsing and enrichment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranscriptConfig {
    /// Substrings that flag a message body as media (case-insensitive).
    pub media_markers: Vec<String>,

    /// Tally each emoji on its own instead of whole runs (default: false).
    /// Pairs of regional indicators stay together as one flag.
    pub split_emoji_runs: bool,
}

impl Default for TranscriptConfig {
    fn default() -> Self {
        Self {
            media_markers: DEFAULT_MEDIA_MARKERS
                .iter()
                .map(|m| (*m).to_string())
                .collect(),
            split_emoji_runs: false,
        }
    }
}

impl TranscriptConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one more media marker. Markers are stored lower-cased.
    #[must_use]
    pub fn with_media_marker(mut self, marker: impl Into<String>) -> Self {
        self.media_markers.push(marker.into().to_lowercase());
        self
    }

    /// Replaces the media markers entirely.
    #[must_use]
    pub fn with_media_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.media_markers = markers
            .into_iter()
            .map(|m| m.into().to_lowercase())
            .collect();
        self
    }

    /// Enables or disables splitting emoji runs into single code points.
    #[must_use]
    pub fn with_split_emoji_runs(mut self, split: bool) -> Self {
        self.split_emoji_runs = split;
        self
    }
}

/// Configuration for [`ChatSummary`](crate::core::ChatSummary).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    /// Length of the author, hour, date and media top lists (default: 10)
    pub top_n: usize,

    /// Number of emojis kept in `top_emojis` (default: 6)
    pub top_emojis: usize,

    /// Number of lines in the emoji summary text (default: 3)
    pub emoji_summary_len: usize,

    /// Messages kept per author in `recent_by_author` (default: 50)
    pub recent_per_author: usize,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            top_n: 10,
            top_emojis: 6,
            emoji_summary_len: 3,
            recent_per_author: 50,
        }
    }
}

impl SummaryConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the length of the top-N lists.
    #[must_use]
    pub fn with_top_n(mut self, n: usize) -> Self {
        self.top_n = n;
        self
    }

    /// Sets how many emojis are kept.
    #[must_use]
    pub fn with_top_emojis(mut self, n: usize) -> Self {
        self.top_emojis = n;
        self
    }

    /// Sets how many lines the emoji summary has.
    #[must_use]
    pub fn with_emoji_summary_len(mut self, n: usize) -> Self {
        self.emoji_summary_len = n;
        self
    }

    /// Sets how many recent messages are kept per author.
    #[must_use]
    pub fn with_recent_per_author(mut self, n: usize) -> Self {
        self.recent_per_author = n;
        self
    }
}
