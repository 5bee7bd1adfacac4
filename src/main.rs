//! # chatpulse CLI
//!
//! Command-line interface for the chatpulse library.

use std::fs;
use std::path::Path;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use chatpulse::ChatpulseError;
use chatpulse::cli::{Args, render_report};
use chatpulse::core::ChatSummary;
use chatpulse::format::write_to_format;
use chatpulse::parser::{TranscriptParser, require_usable};

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), ChatpulseError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();
    let table_format = args.table_format();

    println!("📦 chatpulse v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input);
    println!("💾 Output:  {}", args.output);
    println!("📄 Format:  {}", table_format);
    println!();

    // Step 1: Parse + enrich
    println!("⏳ Parsing transcript...");
    let parse_start = Instant::now();
    let parser = TranscriptParser::with_config(args.transcript_config());
    let input = Path::new(&args.input);
    let messages = parser.parse(input)?;
    require_usable(&messages, Some(input))?;
    println!(
        "   Found {} messages ({:.2}s)",
        messages.len(),
        parse_start.elapsed().as_secs_f64()
    );

    // Step 2: Write the enriched table
    println!("💾 Writing {}...", table_format);
    write_to_format(&messages, &args.output, table_format)?;

    // Step 3: Summarize
    let summary = ChatSummary::from_messages(
        &messages,
        &args.summary_config(),
        parser.config().split_emoji_runs,
    );

    if let Some(path) = &args.summary {
        let json = serde_json::to_string_pretty(&summary)?;
        fs::write(path, json)?;
        info!(path = %path, "wrote summary");
        println!("🧾 Summary: {}", path);
    }

    println!();
    print!("{}", render_report(&summary));

    println!();
    println!(
        "✅ Done in {:.2}s! Table saved to {}",
        total_start.elapsed().as_secs_f64(),
        args.output
    );

    Ok(())
}
