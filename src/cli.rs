//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`render_report`] - the plain-text report printed by the binary

use std::fmt::Write as _;

use clap::Parser;

use crate::config::{SummaryConfig, TranscriptConfig};
use crate::core::ChatSummary;
use crate::format::OutputFormat;

/// Default path of the enriched table.
pub const DEFAULT_OUTPUT: &str = "chat_table.csv";

/// Turn an exported WhatsApp chat into an enriched message table and an
/// activity report.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatpulse")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatpulse chat.txt
    chatpulse chat.txt -o table.jsonl
    chatpulse chat.txt --summary summary.json --top 5
    chatpulse chat.txt --media-marker '<sticker omitted>'")]
pub struct Args {
    /// Path to the exported transcript (.txt)
    pub input: String,

    /// Path to the enriched table
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: String,

    /// Table format (csv, json, jsonl); inferred from the output extension if omitted
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Write the summary statistics as JSON to this path
    #[arg(long, value_name = "PATH")]
    pub summary: Option<String>,

    /// Length of the author, hour, date and media top lists
    #[arg(long, value_name = "N", default_value_t = 10)]
    pub top: usize,

    /// Number of emojis in the emoji ranking
    #[arg(long, value_name = "N", default_value_t = 6)]
    pub emojis: usize,

    /// Messages kept per author in the summary
    #[arg(long, value_name = "N", default_value_t = 50)]
    pub recent: usize,

    /// Count each emoji separately instead of whole runs like "🔥🔥"
    #[arg(long)]
    pub split_emoji_runs: bool,

    /// Extra text marking a media placeholder (repeatable)
    #[arg(long = "media-marker", value_name = "TEXT")]
    pub media_markers: Vec<String>,
}

impl Args {
    /// Table format: explicit flag, else output extension, else CSV.
    pub fn table_format(&self) -> OutputFormat {
        self.format
            .or_else(|| OutputFormat::from_path(&self.output).ok())
            .unwrap_or_default()
    }

    /// Parser configuration from the flags.
    pub fn transcript_config(&self) -> TranscriptConfig {
        self.media_markers.iter().fold(
            TranscriptConfig::new().with_split_emoji_runs(self.split_emoji_runs),
            |config, marker| config.with_media_marker(marker.clone()),
        )
    }

    /// Summary configuration from the flags.
    pub fn summary_config(&self) -> SummaryConfig {
        SummaryConfig::new()
            .with_top_n(self.top)
            .with_top_emojis(self.emojis)
            .with_recent_per_author(self.recent)
    }
}

/// Renders the human-readable activity report.
pub fn render_report(summary: &ChatSummary) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "📊 Messages:  {}", summary.total_messages);
    let _ = writeln!(
        out,
        "🕒 Dated:     {} ({:.1}%)",
        summary.timestamped_messages,
        summary.timestamp_coverage()
    );

    section(&mut out, "👥 Messages per author", &summary.author_counts);
    section(&mut out, "📅 Activity by weekday", &summary.weekday_counts);
    section(&mut out, "🗓️  Messages per month", &summary.month_counts);
    section(&mut out, "📆 Messages per year", &summary.year_counts);
    section(&mut out, "⏰ Busiest hours", &summary.hour_counts);
    section(&mut out, "🔥 Busiest dates", &summary.date_counts);
    section(&mut out, "📎 Media per author", &summary.media_by_author);

    if let Some(emoji_summary) = &summary.emoji_summary {
        let _ = writeln!(out, "\n😀 Top emojis");
        for line in emoji_summary.lines() {
            let _ = writeln!(out, "   {line}");
        }
    }

    out
}

fn section<K: std::fmt::Display>(out: &mut String, title: &str, rows: &[(K, usize)]) {
    if rows.is_empty() {
        return;
    }
    let _ = writeln!(out, "\n{title}");
    for (key, count) in rows {
        let _ = writeln!(out, "   {key:<20} {count}");
    }
}
