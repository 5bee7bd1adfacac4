//! JSON Lines (JSONL) output writer.

use std::fs::File;
use std::io::{BufWriter, Write};

use crate::error::Result;
use crate::message::EnrichedMessage;

/// Writes the enriched table as JSON Lines, one record per line.
pub fn write_jsonl(messages: &[EnrichedMessage], output_path: &str) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    write_lines(messages, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Converts the enriched table to a JSON Lines string.
pub fn to_jsonl(messages: &[EnrichedMessage]) -> Result<String> {
    let mut buffer = Vec::new();
    write_lines(messages, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_lines<W: Write>(messages: &[EnrichedMessage], writer: &mut W) -> Result<()> {
    for msg in messages {
        serde_json::to_writer(&mut *writer, msg)?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TranscriptConfig;
    use crate::message::RawMessage;
    use std::io::{BufRead, BufReader};
    use tempfile::NamedTempFile;

    fn sample() -> Vec<EnrichedMessage> {
        let config = TranscriptConfig::default();
        vec![
            EnrichedMessage::from_raw(RawMessage::new("1/1/2024", "9:00", "Alice", "Hello"), &config),
            EnrichedMessage::from_raw(
                RawMessage::new("1/1/2024", "9:01", "Bob", "multi\nline"),
                &config,
            ),
        ]
    }

    #[test]
    fn test_write_jsonl_basic() {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_str().unwrap();

        write_jsonl(&sample(), path).unwrap();

        let file = std::fs::File::open(path).unwrap();
        let lines: Vec<String> = BufReader::new(file).lines().map(|l| l.unwrap()).collect();
        assert_eq!(lines.len(), 2);

        let second: serde_json::Value = serde_json::from_str(&lines[1]).unwrap();
        assert_eq!(second["author"], "Bob");
        assert_eq!(second["body"], "multi\nline");
        assert_eq!(second["hour"], 9);
    }

    #[test]
    fn test_to_jsonl_no_array() {
        let out = to_jsonl(&sample()).unwrap();
        assert!(!out.starts_with('['));
        assert_eq!(out.lines().count(), 2);
        assert!(out.ends_with('\n'));
    }
}
