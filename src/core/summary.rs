//! Activity statistics over an enriched transcript.
//!
//! [`ChatSummary`] holds the groupings a report or chart needs: messages per
//! author, per weekday, month, year, hour and date, media per author, the
//! most used emojis and the latest messages of each author.
//!
//! Records without a timestamp still count toward `total_messages`,
//! `author_counts`, `media_by_author` and the emoji tallies, but are left
//! out of every time-based grouping.

use std::collections::HashMap;
use std::hash::Hash;

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::SummaryConfig;
use crate::core::emoji::tally_messages;
use crate::message::EnrichedMessage;

/// Weekday names in calendar order, Monday first.
pub const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Month names in calendar order.
pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Aggregated statistics for one transcript.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatSummary {
    pub total_messages: usize,

    /// Messages with a normalized timestamp.
    pub timestamped_messages: usize,

    /// Messages per author, highest first.
    pub author_counts: Vec<(String, usize)>,

    /// The first `top_n` authors of `author_counts`.
    pub top_authors: Vec<String>,

    /// Monday..Sunday, zero-filled.
    pub weekday_counts: Vec<(String, usize)>,

    /// All twelve months, highest count first.
    pub month_counts: Vec<(String, usize)>,

    /// Ascending by year.
    pub year_counts: Vec<(i32, usize)>,

    /// Busiest hours of the day.
    pub hour_counts: Vec<(u32, usize)>,

    /// Busiest calendar dates.
    pub date_counts: Vec<(NaiveDate, usize)>,

    /// Media messages per author, highest first; authors without media are omitted.
    pub media_by_author: Vec<(String, usize)>,

    pub top_emojis: Vec<(String, usize)>,

    /// Lines like `😂 -> 12 msgs (4.0%)`; `None` when no emoji was found.
    pub emoji_summary: Option<String>,

    /// Latest messages per author, authors in order of first appearance.
    pub recent_by_author: Vec<(String, Vec<EnrichedMessage>)>,
}

impl ChatSummary {
    /// Computes every grouping in one pass over `messages` plus sorting.
    pub fn from_messages(
        messages: &[EnrichedMessage],
        config: &SummaryConfig,
        split_emoji_runs: bool,
    ) -> Self {
        let total_messages = messages.len();
        let timestamped = || messages.iter().filter(|m| m.has_timestamp());

        let author_counts = count_desc(messages.iter().map(|m| m.author().to_string()));
        let top_authors = author_counts
            .iter()
            .take(config.top_n)
            .map(|(author, _)| author.clone())
            .collect();

        let weekday_counts = count_in_order(
            &WEEKDAYS,
            timestamped().filter_map(|m| m.weekday_name.as_deref()),
        );

        let mut month_counts = count_in_order(
            &MONTHS,
            timestamped().filter_map(|m| m.month_name.as_deref()),
        );
        month_counts.sort_by(|a, b| b.1.cmp(&a.1));

        let mut year_counts = count_desc(timestamped().filter_map(|m| m.year));
        year_counts.sort_by_key(|&(year, _)| year);

        let mut hour_counts = count_desc(timestamped().filter_map(|m| m.hour));
        hour_counts.truncate(config.top_n);

        let mut date_counts = count_desc(timestamped().filter_map(|m| m.date_only));
        date_counts.truncate(config.top_n);

        let mut media_by_author = count_desc(
            messages
                .iter()
                .filter(|m| m.is_media)
                .map(|m| m.author().to_string()),
        );
        media_by_author.truncate(config.top_n);

        let tally = tally_messages(messages, split_emoji_runs);
        let top_emojis: Vec<(String, usize)> = tally
            .most_common(config.top_emojis)
            .into_iter()
            .map(|(emoji, count)| (emoji.to_string(), count))
            .collect();

        let emoji_summary = if tally.is_empty() {
            None
        } else {
            let lines: Vec<String> = tally
                .most_common(config.emoji_summary_len)
                .into_iter()
                .map(|(emoji, count)| {
                    let pct = if total_messages > 0 {
                        count as f64 / total_messages as f64 * 100.0
                    } else {
                        0.0
                    };
                    format!("{emoji} -> {count} msgs ({pct:.1}%)")
                })
                .collect();
            Some(lines.join("\n"))
        };

        let recent_by_author = recent_by_author(messages, config.recent_per_author);

        Self {
            total_messages,
            timestamped_messages: timestamped().count(),
            author_counts,
            top_authors,
            weekday_counts,
            month_counts,
            year_counts,
            hour_counts,
            date_counts,
            media_by_author,
            top_emojis,
            emoji_summary,
            recent_by_author,
        }
    }

    /// Share of messages that carry a timestamp, in percent.
    pub fn timestamp_coverage(&self) -> f64 {
        if self.total_messages == 0 {
            return 0.0;
        }
        self.timestamped_messages as f64 / self.total_messages as f64 * 100.0
    }
}

/// Counts keys, highest count first. Ties keep first-appearance order.
fn count_desc<K, I>(keys: I) -> Vec<(K, usize)>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = K>,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut counts: Vec<(K, usize)> = Vec::new();

    for key in keys {
        if let Some(&i) = index.get(&key) {
            counts[i].1 += 1;
            continue;
        }
        index.insert(key.clone(), counts.len());
        counts.push((key, 1));
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Counts names against a fixed ordering, zero-filling the missing ones.
fn count_in_order<'a, I>(order: &[&str], names: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: Vec<(String, usize)> = order.iter().map(|n| ((*n).to_string(), 0)).collect();
    for name in names {
        if let Some(slot) = counts.iter_mut().find(|(n, _)| n == name) {
            slot.1 += 1;
        }
    }
    counts
}

fn recent_by_author(messages: &[EnrichedMessage], keep: usize) -> Vec<(String, Vec<EnrichedMessage>)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut grouped: Vec<(String, Vec<EnrichedMessage>)> = Vec::new();

    for msg in messages {
        let slot = *index.entry(msg.author()).or_insert_with(|| {
            grouped.push((msg.author().to_string(), Vec::new()));
            grouped.len() - 1
        });
        grouped[slot].1.push(msg.clone());
    }

    for (_, msgs) in &mut grouped {
        let excess = msgs.len().saturating_sub(keep);
        msgs.drain(..excess);
    }

    grouped
}
