//! Core processing logic for chatpulse.
//!
//! This module contains:
//! - [`enrich`] - Timestamp normalization, derived fields and media detection
//! - [`emoji`] - Emoji extraction and [`EmojiTally`]
//! - [`summary`] - Aggregated activity statistics ([`ChatSummary`])
//! - [`output`] - Table writers (CSV, JSON, JSONL)
//!
//! # Quick Start
//!
//! ```rust
//! use chatpulse::core::{ChatSummary, count_emojis, is_media};
//! use chatpulse::config::SummaryConfig;
//! use chatpulse::parser::TranscriptParser;
//!
//! let messages = TranscriptParser::new().parse_str("1/1/2024, 9:00 - Bob: hi 🎉");
//! let summary = ChatSummary::from_messages(&messages, &SummaryConfig::default(), false);
//!
//! assert_eq!(summary.total_messages, 1);
//! assert_eq!(summary.top_emojis[0].0, "🎉");
//! ```

pub mod emoji;
pub mod enrich;
pub mod output;
pub mod summary;

pub use emoji::{EmojiTally, canonical_emoji, count_emojis, extract_emojis, tally_messages};
pub use enrich::{enrich, is_media};
pub use summary::{ChatSummary, MONTHS, WEEKDAYS};

// Conditionally re-export output writers
#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, to_jsonl, write_json, write_jsonl};
