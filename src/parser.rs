//! Transcript parser: line classification, continuation merging and
//! enrichment.
//!
//! # Example
//!
//! ```rust
//! use chatpulse::parser::TranscriptParser;
//!
//! let transcript = "\
//! 1/1/2024, 9:00 - Bob: First line
//! still Bob's message
//! 1/1/2024, 9:01 - Alice: Hi Bob";
//!
//! let parser = TranscriptParser::new();
//! let messages = parser.parse_str(transcript);
//!
//! assert_eq!(messages.len(), 2);
//! assert_eq!(messages[0].body(), "First line\nstill Bob's message");
//! ```
//!
//! Parsing never fails on malformed content. Lines before the first header
//! are dropped, and a transcript with no header at all yields an empty vec;
//! use [`require_usable`] to turn that into an error.

use std::fs;
use std::path::Path;

use tracing::{debug, trace};

use crate::config::TranscriptConfig;
use crate::core::emoji::{EmojiTally, tally_messages};
use crate::core::enrich::enrich;
use crate::error::{ChatpulseError, Result};
use crate::message::{EnrichedMessage, RawMessage};
use crate::parsing::{LineKind, classify_line};

/// Parser for exported chat transcripts.
#[derive(Debug, Clone, Default)]
pub struct TranscriptParser {
    config: TranscriptConfig,
}

impl TranscriptParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: TranscriptConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &TranscriptConfig {
        &self.config
    }

    /// Groups lines into raw messages.
    ///
    /// Each line is trimmed and blank lines are skipped. A header line opens
    /// a new message; any other line is appended to the current message
    /// with a newline, or dropped if no message has started yet.
    pub fn parse_lines<S: AsRef<str>>(&self, lines: &[S]) -> Vec<RawMessage> {
        let mut messages: Vec<RawMessage> = Vec::new();
        let mut orphans = 0usize;

        for line in lines {
            let line = line.as_ref().trim();
            if line.is_empty() {
                continue;
            }

            match classify_line(line) {
                LineKind::Header(header) => {
                    messages.push(RawMessage::new(
                        header.date,
                        header.time,
                        header.author,
                        header.message,
                    ));
                }
                LineKind::Continuation => {
                    if let Some(current) = messages.last_mut() {
                        current.push_continuation(line);
                    } else {
                        trace!(line, "dropping line before first header");
                        orphans += 1;
                    }
                }
            }
        }

        debug!(
            messages = messages.len(),
            orphans, "classified transcript lines"
        );
        messages
    }

    /// Splits a text blob into lines and groups them into raw messages.
    pub fn parse_raw(&self, content: &str) -> Vec<RawMessage> {
        let lines: Vec<&str> = content.lines().collect();
        self.parse_lines(&lines)
    }

    /// Enriches raw messages, preserving their order.
    pub fn enrich_all(&self, raw: Vec<RawMessage>) -> Vec<EnrichedMessage> {
        let enriched: Vec<EnrichedMessage> = raw
            .into_iter()
            .map(|msg| enrich(msg, &self.config))
            .collect();

        let without_timestamp = enriched.iter().filter(|m| !m.has_timestamp()).count();
        if without_timestamp > 0 {
            debug!(
                without_timestamp,
                total = enriched.len(),
                "some timestamps could not be normalized"
            );
        }

        enriched
    }

    /// Runs the full pipeline over a transcript held in memory.
    pub fn parse_str(&self, content: &str) -> Vec<EnrichedMessage> {
        self.enrich_all(self.parse_raw(content))
    }

    /// Reads a transcript from disk in one go and runs the full pipeline.
    ///
    /// # Errors
    ///
    /// Returns [`ChatpulseError::Io`] if the file cannot be read and
    /// [`ChatpulseError::Utf8`] if it is not valid UTF-8.
    pub fn parse(&self, path: &Path) -> Result<Vec<EnrichedMessage>> {
        let content = load_transcript(path)?;
        Ok(self.parse_str(&content))
    }

    /// Tallies emojis over parsed messages using this parser's run mode.
    pub fn emoji_tally(&self, messages: &[EnrichedMessage]) -> EmojiTally {
        tally_messages(messages, self.config.split_emoji_runs)
    }
}

/// Reads a whole transcript file as UTF-8.
pub fn load_transcript(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    let content = String::from_utf8(bytes)
        .map_err(|e| ChatpulseError::transcript_encoding(path, e))?;
    debug!(path = %path.display(), bytes = content.len(), "loaded transcript");
    Ok(content)
}

/// Rejects a parse result that has nothing to analyze.
///
/// A transcript is unusable when no line matched a header grammar, or when
/// every matched message has a null timestamp.
///
/// # Example
///
/// ```rust
/// use chatpulse::parser::{TranscriptParser, require_usable};
///
/// let messages = TranscriptParser::new().parse_str("not a transcript");
/// assert!(require_usable(&messages, None).is_err());
/// ```
pub fn require_usable(messages: &[EnrichedMessage], path: Option<&Path>) -> Result<()> {
    let reason = if messages.is_empty() {
        "no line matched a known message header"
    } else if messages.iter().all(|m| !m.has_timestamp()) {
        "no message timestamp could be read"
    } else {
        return Ok(());
    };

    Err(ChatpulseError::no_messages(
        reason,
        path.map(Path::to_path_buf),
    ))
}
