//! JSON output writer.

use std::fs::File;
use std::io::{BufWriter, Write};

use crate::error::Result;
use crate::message::EnrichedMessage;

/// Writes the enriched table to a JSON file as an array.
///
/// # Format
/// ```json
/// [
///   {"date": "1/1/2024", "time": "9:00", "author": "Bob", "body": "hi",
///    "timestamp": "2024-01-01T09:00:00", "date_only": "2024-01-01", ...}
/// ]
/// ```
pub fn write_json(messages: &[EnrichedMessage], output_path: &str) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, messages)?;
    writer.flush()?;
    Ok(())
}

/// Converts the enriched table to a JSON array string.
pub fn to_json(messages: &[EnrichedMessage]) -> Result<String> {
    Ok(serde_json::to_string_pretty(messages)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TranscriptConfig;
    use crate::message::RawMessage;
    use tempfile::NamedTempFile;

    fn sample() -> Vec<EnrichedMessage> {
        vec![EnrichedMessage::from_raw(
            RawMessage::new("12/5/2023", "6:49p.m.", "Alice", "Hello"),
            &TranscriptConfig::default(),
        )]
    }

    #[test]
    fn test_to_json_fields() {
        let json = to_json(&sample()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        let first = &parsed[0];
        assert_eq!(first["author"], "Alice");
        assert_eq!(first["timestamp"], "2023-05-12T18:49:00");
        assert_eq!(first["date_only"], "2023-05-12");
        assert_eq!(first["weekday_name"], "Friday");
        assert_eq!(first["is_media"], false);
    }

    #[test]
    fn test_write_json_round_trip() {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_str().unwrap();

        write_json(&sample(), path).unwrap();

        let content = std::fs::read_to_string(path).unwrap();
        let back: Vec<EnrichedMessage> = serde_json::from_str(&content).unwrap();
        assert_eq!(back, sample());
    }

    #[test]
    fn test_to_json_empty() {
        assert_eq!(to_json(&[]).unwrap(), "[]");
    }
}
