//! Low-level transcript parsing utilities.
//!
//! - [`header`] - header grammars and the header/continuation classifier
//! - [`timestamp`] - 12/24-hour time normalization and date-time assembly
//!
//! These are the building blocks of [`TranscriptParser`](crate::parser::TranscriptParser);
//! most callers only need the parser.

pub mod header;
pub mod timestamp;

pub use header::{HeaderFields, HeaderGrammar, LineKind, classify_line, clean_time_token};
pub use timestamp::{normalize_timestamp, to_24_hour};
