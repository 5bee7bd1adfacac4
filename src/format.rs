//! Output format selection for the enriched message table.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() -> chatpulse::Result<()> {
//! use chatpulse::format::{OutputFormat, to_format_string};
//! use chatpulse::parser::TranscriptParser;
//!
//! let messages = TranscriptParser::new().parse_str("1/1/2024, 9:00 - Bob: hi");
//!
//! let format = OutputFormat::from_path("chat_table.jsonl")?;
//! assert_eq!(format, OutputFormat::Jsonl);
//!
//! let jsonl = to_format_string(&messages, format)?;
//! assert_eq!(jsonl.lines().count(), 1);
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ChatpulseError;
use crate::message::EnrichedMessage;

/// Table format for the enriched messages.
///
/// ```rust
/// use chatpulse::format::OutputFormat;
///
/// let format: OutputFormat = "ndjson".parse().unwrap();
/// assert_eq!(format, OutputFormat::Jsonl);
/// assert_eq!(format.extension(), "jsonl");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// Semicolon-delimited table with a header row (default)
    #[default]
    Csv,

    /// Pretty-printed JSON array
    Json,

    /// One JSON record per line
    Jsonl,
}

impl OutputFormat {
    /// File extension, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
        }
    }

    /// Every supported format.
    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Csv, OutputFormat::Json, OutputFormat::Jsonl]
    }

    /// Cargo feature that enables the writer for this format.
    pub fn feature(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv-output",
            OutputFormat::Json | OutputFormat::Jsonl => "json-output",
        }
    }

    /// Looks up a format by name or extension, case-insensitively.
    fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "csv" => Some(OutputFormat::Csv),
            "json" => Some(OutputFormat::Json),
            "jsonl" | "ndjson" => Some(OutputFormat::Jsonl),
            _ => None,
        }
    }

    /// Infers the format from a file extension.
    ///
    /// ```rust
    /// use chatpulse::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::from_path("out/table.JSON").unwrap(), OutputFormat::Json);
    /// assert!(OutputFormat::from_path("table").is_err());
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ChatpulseError> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("");

        Self::from_name(ext).ok_or_else(|| {
            ChatpulseError::invalid_format(
                "output",
                format!("cannot infer a table format from extension '{ext}'"),
            )
        })
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.extension().to_ascii_uppercase())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
            .ok_or_else(|| format!("unknown format '{s}' (expected csv, json, jsonl or ndjson)"))
    }
}

/// Writes the enriched table to `path`.
///
/// Fails with [`ChatpulseError::InvalidFormat`] when the writer for
/// `format` was compiled out.
#[allow(unused_variables)]
pub fn write_to_format(
    messages: &[EnrichedMessage],
    path: &str,
    format: OutputFormat,
) -> Result<(), ChatpulseError> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::write_csv(messages, path),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::write_json(messages, path),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::write_jsonl(messages, path),
        #[allow(unreachable_patterns)]
        _ => Err(writer_disabled(format)),
    }
}

/// Renders the enriched table in memory.
#[allow(unused_variables)]
pub fn to_format_string(
    messages: &[EnrichedMessage],
    format: OutputFormat,
) -> Result<String, ChatpulseError> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::to_csv(messages),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::to_json(messages),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::to_jsonl(messages),
        #[allow(unreachable_patterns)]
        _ => Err(writer_disabled(format)),
    }
}

#[allow(dead_code)]
fn writer_disabled(format: OutputFormat) -> ChatpulseError {
    ChatpulseError::invalid_format(
        "output",
        format!("{format} tables need the '{}' feature", format.feature()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!("csv".parse::<OutputFormat>(), Ok(OutputFormat::Csv));
        assert_eq!("Json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("NDJSON".parse::<OutputFormat>(), Ok(OutputFormat::Jsonl));

        let err = "xlsx".parse::<OutputFormat>().unwrap_err();
        assert!(err.contains("xlsx"));
    }

    #[test]
    fn test_display_is_upper_extension() {
        for format in OutputFormat::all() {
            assert_eq!(format.to_string(), format.extension().to_uppercase());
        }
    }

    #[test]
    fn test_from_path() {
        assert_eq!(OutputFormat::from_path("chat_table.csv").unwrap(), OutputFormat::Csv);
        assert_eq!(OutputFormat::from_path("a.b/c.ndjson").unwrap(), OutputFormat::Jsonl);

        let err = OutputFormat::from_path("chat_table.txt").unwrap_err();
        assert!(err.is_invalid_format());
        assert!(OutputFormat::from_path("no_extension").is_err());
    }

    #[test]
    fn test_features() {
        assert_eq!(OutputFormat::Csv.feature(), "csv-output");
        assert_eq!(OutputFormat::Jsonl.feature(), "json-output");
        assert_eq!(OutputFormat::default(), OutputFormat::Csv);
    }

    #[cfg(all(feature = "csv-output", feature = "json-output"))]
    #[test]
    fn test_to_format_string_dispatch() {
        use crate::parser::TranscriptParser;

        let messages = TranscriptParser::new().parse_str("1/1/2024, 9:00 - Bob: hi");
        let csv = to_format_string(&messages, OutputFormat::Csv).unwrap();
        assert!(csv.starts_with("Date;Time;Author"));
        let json = to_format_string(&messages, OutputFormat::Json).unwrap();
        assert!(json.trim_start().starts_with('['));
        let jsonl = to_format_string(&messages, OutputFormat::Jsonl).unwrap();
        assert_eq!(jsonl.lines().count(), 1);
    }

    #[test]
    fn test_format_serde() {
        assert_eq!(serde_json::to_string(&OutputFormat::Jsonl).unwrap(), "\"jsonl\"");
        let parsed: OutputFormat = serde_json::from_str("\"csv\"").unwrap();
        assert_eq!(parsed, OutputFormat::Csv);
    }
}
