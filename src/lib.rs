//! # Chatpulse
//!
//! Parse exported WhatsApp chat transcripts into structured, feature-rich
//! message records and summarize chat activity.
//!
//! ## Overview
//!
//! A transcript is plain text, one message per line, with multi-line
//! messages continuing on the following lines:
//!
//! ```text
//! 12/5/2023, 6:49 p. m. - Alice: Hello
//! 12/5/2023 6:50 p. m. - Bob: Hi! 👋🏽
//! 13/5/2023, 9:02 - Alice: Look at this:
//! a second line
//! ```
//!
//! The pipeline:
//! 1. **Classify & merge** - each line is a header (date, time, author,
//!    message start) or a continuation appended to the previous message.
//! 2. **Enrich** - the time token is normalized to 24-hour, combined with
//!    the day-first date, and the date, year, month, hour and weekday are
//!    derived. Media placeholders are flagged.
//! 3. **Tally emojis** - skin-tone variants collapse into one key.
//! 4. **Summarize** (optional) - per-author, per-weekday, per-month... counts.
//!
//! Malformed content never produces an error: unmatched lines become
//! continuations and unreadable timestamps become `None`.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatpulse::prelude::*;
//!
//! let transcript = "\
//! 12/5/2023, 6:49 p. m. - Alice: Hello 👋🏻
//! 12/5/2023, 6:50 p. m. - Bob: Hi 👋🏿
//! how are you?";
//!
//! let parser = TranscriptParser::new();
//! let messages = parser.parse_str(transcript);
//!
//! assert_eq!(messages.len(), 2);
//! assert_eq!(messages[1].body(), "Hi 👋🏿\nhow are you?");
//! assert_eq!(messages[0].hour, Some(18));
//!
//! let tally = parser.emoji_tally(&messages);
//! assert_eq!(tally.get("👋"), 2);
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`TranscriptParser`](parser::TranscriptParser), the loader and [`require_usable`](parser::require_usable)
//! - [`parsing`] - header grammars and time-token normalization
//! - [`message`] - [`RawMessage`], [`EnrichedMessage`]
//! - [`core`] - enrichment, emoji tallying, [`ChatSummary`](core::ChatSummary), table writers
//! - [`config`] - [`TranscriptConfig`](config::TranscriptConfig), [`SummaryConfig`](config::SummaryConfig)
//! - [`format`] - [`OutputFormat`](format::OutputFormat) and format dispatch
//! - [`error`] - [`ChatpulseError`], [`Result`]
//! - [`cli`] - CLI arguments and report rendering (feature `cli`)
//! - [`prelude`] - Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod message;
pub mod parser;
pub mod parsing;

// Re-export the main types at the crate root for convenience
pub use error::{ChatpulseError, Result};
pub use message::{EnrichedMessage, RawMessage};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatpulse::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{EnrichedMessage, RawMessage};

    pub use crate::error::{ChatpulseError, Result};

    pub use crate::parser::{TranscriptParser, require_usable};

    pub use crate::config::{SummaryConfig, TranscriptConfig};

    pub use crate::core::{ChatSummary, EmojiTally, count_emojis, extract_emojis, is_media};

    pub use crate::format::{OutputFormat, to_format_string, write_to_format};
}
