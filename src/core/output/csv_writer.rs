//! CSV output writer.

use std::fs::File;
use std::io::Write;

use crate::error::Result;
use crate::message::EnrichedMessage;

/// Column names, in order.
pub const CSV_HEADER: [&str; 11] = [
    "Date", "Time", "Author", "Message", "Timestamp", "DateOnly", "Year", "Month", "Hour",
    "Weekday", "IsMedia",
];

/// Writes the enriched table to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: see [`CSV_HEADER`]; missing derived fields are empty cells
/// - Timestamp: `%Y-%m-%d %H:%M:%S`
/// - Encoding: UTF-8
pub fn write_csv(messages: &[EnrichedMessage], output_path: &str) -> Result<()> {
    let file = File::create(output_path)?;
    write_records(messages, file)
}

/// Converts the enriched table to a CSV string.
pub fn to_csv(messages: &[EnrichedMessage]) -> Result<String> {
    let mut buffer = Vec::new();
    write_records(messages, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_records<W: Write>(messages: &[EnrichedMessage], out: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(out);

    writer.write_record(CSV_HEADER)?;
    for msg in messages {
        writer.write_record(build_record(msg))?;
    }

    writer.flush()?;
    Ok(())
}

/// Build CSV record for a single message.
fn build_record(msg: &EnrichedMessage) -> [String; 11] {
    fn opt<T: ToString>(value: Option<T>) -> String {
        value.map(|v| v.to_string()).unwrap_or_default()
    }

    [
        msg.raw.date.clone(),
        msg.raw.time.clone(),
        msg.raw.author.clone(),
        msg.raw.body.clone(),
        opt(msg
            .timestamp
            .map(|ts| ts.format("%Y-%m-%d %H:%M:%S"))),
        opt(msg.date_only),
        opt(msg.year),
        opt(msg.month_name.as_deref()),
        opt(msg.hour),
        opt(msg.weekday_name.as_deref()),
        msg.is_media.to_string(),
    ]
}
