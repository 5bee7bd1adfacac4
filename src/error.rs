//! Unified error types for chatpulse.
//!
//! Parsing and enrichment never fail on malformed-but-present data: lines
//! that do not look like headers become continuations, and timestamps that
//! cannot be normalized are stored as `None`. The errors here cover the
//! edges around that core:
//!
//! - **Loading** a transcript from disk ([`ChatpulseError::Io`], [`ChatpulseError::Utf8`])
//! - **Rejecting** a transcript that produced nothing usable ([`ChatpulseError::NoMessages`])
//! - **Writing** the enriched table ([`ChatpulseError::Csv`], [`ChatpulseError::Json`])

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatpulse operations.
///
/// # Example
///
/// ```rust
/// use chatpulse::error::Result;
/// use chatpulse::EnrichedMessage;
///
/// fn my_function() -> Result<Vec<EnrichedMessage>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatpulseError>;

/// The error type for all chatpulse operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatpulseError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The transcript file doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The transcript is not valid UTF-8.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// No usable messages were found.
    ///
    /// Raised by callers that opt in via
    /// [`require_usable`](crate::parser::require_usable): either no line
    /// matched a header grammar, or none of the matched headers carried a
    /// timestamp that could be normalized.
    #[error("No usable messages found{}: {reason}", path.as_ref().map(|p| format!(" in {}", p.display())).unwrap_or_default())]
    NoMessages {
        /// Why the transcript was rejected
        reason: &'static str,
        /// The file path, if available
        path: Option<PathBuf>,
    },

    /// An output format or file extension was not recognized.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// What was being selected (e.g., "output")
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<std::string::FromUtf8Error> for ChatpulseError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatpulseError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

impl ChatpulseError {
    /// Creates a "no usable messages" error.
    pub fn no_messages(reason: &'static str, path: Option<PathBuf>) -> Self {
        ChatpulseError::NoMessages { reason, path }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatpulseError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Creates a UTF-8 error for a transcript being loaded.
    pub fn transcript_encoding(path: &std::path::Path, source: std::string::FromUtf8Error) -> Self {
        ChatpulseError::Utf8 {
            context: format!("transcript {}", path.display()),
            source,
        }
    }

    /// Returns `true` if this is an I/O error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatpulseError::Io(_))
    }

    /// Returns `true` if the transcript had no usable messages.
    pub fn is_no_messages(&self) -> bool {
        matches!(self, ChatpulseError::NoMessages { .. })
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatpulseError::InvalidFormat { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_io_error_display() {
        let err = ChatpulseError::from(io::Error::new(io::ErrorKind::NotFound, "chat.txt"));
        assert!(err.to_string().starts_with("IO error"));
        assert!(err.is_io());
    }

    #[test]
    fn test_no_messages_with_path() {
        let err = ChatpulseError::no_messages(
            "no line matched a header",
            Some(PathBuf::from("/tmp/chat.txt")),
        );
        let msg = err.to_string();
        assert!(msg.contains("/tmp/chat.txt"));
        assert!(msg.contains("no line matched a header"));
        assert!(err.is_no_messages());
    }

    #[test]
    fn test_no_messages_without_path() {
        let err = ChatpulseError::no_messages("empty transcript", None);
        assert_eq!(err.to_string(), "No usable messages found: empty transcript");
    }

    #[test]
    fn test_invalid_format_display() {
        let err = ChatpulseError::invalid_format("output", "unknown extension '.txt'");
        assert_eq!(
            err.to_string(),
            "Invalid output format: unknown extension '.txt'"
        );
        assert!(err.is_invalid_format());
        assert!(!err.is_io());
    }

    #[test]
    fn test_utf8_error_source_chain() {
        let bad = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
        let err = ChatpulseError::transcript_encoding(std::path::Path::new("chat.txt"), bad);
        assert!(err.to_string().contains("transcript chat.txt"));
        assert!(err.source().is_some());
    }
}
