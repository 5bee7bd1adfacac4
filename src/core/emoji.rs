//! Emoji extraction and tallying.
//!
//! Emojis are found as maximal runs of code points in a fixed set of
//! Unicode blocks. Skin-tone modifiers (U+1F3FB..=U+1F3FF) are removed
//! before counting, so `👍🏽` and `👍🏿` both count as `👍`.
//!
//! A run without separators (`🔥🔥`) is one token by default. Set
//! [`TranscriptConfig::split_emoji_runs`](crate::config::TranscriptConfig::split_emoji_runs)
//! to count each emoji separately; a regional-indicator pair still counts
//! as one flag.

use std::collections::HashMap;
use std::collections::hash_map;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::message::EnrichedMessage;

static EMOJI_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        "[",
        r"\x{1F600}-\x{1F64F}", // emoticons
        r"\x{1F300}-\x{1F5FF}", // symbols & pictographs
        r"\x{1F680}-\x{1F6FF}", // transport & map
        r"\x{1F1E0}-\x{1F1FF}", // flags
        r"\x{2700}-\x{27BF}",   // dingbats
        r"\x{1F900}-\x{1F9FF}", // supplemental symbols and pictographs
        "]+",
    ))
    .expect("valid emoji regex")
});

fn is_skin_tone(c: char) -> bool {
    ('\u{1F3FB}'..='\u{1F3FF}').contains(&c)
}

fn is_regional_indicator(c: char) -> bool {
    ('\u{1F1E6}'..='\u{1F1FF}').contains(&c)
}

/// Splits a canonical run into single emojis.
///
/// Each code point stands alone, except that two consecutive regional
/// indicators form one flag (`🇲🇽`).
fn split_run(run: &str) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut chars = run.chars().peekable();

    while let Some(c) = chars.next() {
        let mut piece = c.to_string();
        if is_regional_indicator(c) {
            if let Some(next) = chars.next_if(|&n| is_regional_indicator(n)) {
                piece.push(next);
            }
        }
        pieces.push(piece);
    }
    pieces
}

/// Returns every maximal emoji run in `text`, in order.
///
/// # Example
///
/// ```rust
/// use chatpulse::core::extract_emojis;
///
/// assert_eq!(extract_emojis("hi 😀 there 🔥🔥!"), vec!["😀", "🔥🔥"]);
/// assert!(extract_emojis("no emoji here").is_empty());
/// ```
pub fn extract_emojis(text: &str) -> Vec<&str> {
    EMOJI_RUN.find_iter(text).map(|m| m.as_str()).collect()
}

/// Removes skin-tone modifiers from an emoji token.
pub fn canonical_emoji(token: &str) -> String {
    token.chars().filter(|&c| !is_skin_tone(c)).collect()
}

/// Occurrence counts per canonical emoji.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EmojiTally {
    counts: HashMap<String, usize>,
}

impl EmojiTally {
    /// Creates an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts every emoji found in `text`.
    ///
    /// Tokens that are nothing but skin-tone modifiers are dropped.
    pub fn add_text(&mut self, text: &str, split_runs: bool) {
        for token in extract_emojis(text) {
            let canonical = canonical_emoji(token);
            if split_runs {
                for piece in split_run(&canonical) {
                    self.add(piece);
                }
            } else if !canonical.is_empty() {
                self.add(canonical);
            }
        }
    }

    /// Adds one occurrence of `emoji`.
    pub fn add(&mut self, emoji: String) {
        *self.counts.entry(emoji).or_insert(0) += 1;
    }

    /// Count for `emoji`, zero if never seen.
    pub fn get(&self, emoji: &str) -> usize {
        self.counts.get(emoji).copied().unwrap_or(0)
    }

    /// Number of distinct emojis.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Iterates over `(emoji, count)` in arbitrary order.
    pub fn iter(&self) -> hash_map::Iter<'_, String, usize> {
        self.counts.iter()
    }

    /// The `n` most frequent emojis, highest count first.
    ///
    /// Equal counts are ordered by the emoji string so the result is stable.
    pub fn most_common(&self, n: usize) -> Vec<(&str, usize)> {
        let mut entries: Vec<(&str, usize)> = self
            .counts
            .iter()
            .map(|(emoji, &count)| (emoji.as_str(), count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries.truncate(n);
        entries
    }
}

impl<'a> IntoIterator for &'a EmojiTally {
    type Item = (&'a String, &'a usize);
    type IntoIter = hash_map::Iter<'a, String, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Tallies emojis over a sequence of message bodies.
///
/// # Example
///
/// ```rust
/// use chatpulse::core::count_emojis;
///
/// let tally = count_emojis(["👍🏽 nice", "👍🏿", "plain"], false);
/// assert_eq!(tally.get("👍"), 2);
/// assert_eq!(tally.len(), 1);
/// ```
pub fn count_emojis<'a, I>(bodies: I, split_runs: bool) -> EmojiTally
where
    I: IntoIterator<Item = &'a str>,
{
    let mut tally = EmojiTally::new();
    for body in bodies {
        tally.add_text(body, split_runs);
    }
    tally
}

/// Tallies emojis over the bodies of enriched messages.
pub fn tally_messages(messages: &[EnrichedMessage], split_runs: bool) -> EmojiTally {
    count_emojis(messages.iter().map(EnrichedMessage::body), split_runs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_runs() {
        assert_eq!(extract_emojis("😀"), vec!["😀"]);
        assert_eq!(extract_emojis("a😀b😂c"), vec!["😀", "😂"]);
        assert_eq!(extract_emojis("😀😂"), vec!["😀😂"]);
        assert_eq!(extract_emojis("✂ dingbat"), vec!["✂"]);
        assert_eq!(extract_emojis("🇲🇽"), vec!["🇲🇽"]);
        assert_eq!(extract_emojis("🤣"), vec!["🤣"]);
    }

    #[test]
    fn test_outside_ranges_ignored() {
        // U+2764 HEAVY BLACK HEART is a dingbat, U+2600 SUN is not in any range
        assert_eq!(extract_emojis("\u{2764}"), vec!["\u{2764}"]);
        assert!(extract_emojis("\u{2600}").is_empty());
        assert!(extract_emojis("héllo wörld").is_empty());
    }

    #[test]
    fn test_skin_tone_variants_collapse() {
        let tally = count_emojis(["👋🏻 hi", "bye 👋🏾"], false);
        assert_eq!(tally.get("👋"), 2);
        assert_eq!(tally.len(), 1);
    }

    #[test]
    fn test_runs_tallied_whole() {
        let tally = count_emojis(["🔥🔥🔥"], false);
        assert_eq!(tally.get("🔥🔥🔥"), 1);
        assert_eq!(tally.get("🔥"), 0);
    }

    #[test]
    fn test_runs_split() {
        let tally = count_emojis(["🔥🔥🔥", "😀🏽🔥"], true);
        assert_eq!(tally.get("🔥"), 4);
        assert_eq!(tally.get("😀"), 1);
        assert_eq!(tally.total(), 5);
    }

    #[test]
    fn test_split_keeps_flags_whole() {
        let tally = count_emojis(["🇲🇽🇦🇷", "vamos 🇲🇽🔥"], true);
        assert_eq!(tally.get("🇲🇽"), 2);
        assert_eq!(tally.get("🇦🇷"), 1);
        assert_eq!(tally.get("🔥"), 1);
        assert_eq!(tally.get("🇲"), 0);

        // An unpaired indicator stays on its own
        assert_eq!(split_run("🇲🇽🇦"), vec!["🇲🇽", "🇦"]);
    }

    #[test]
    fn test_modifier_only_token_dropped() {
        let tally = count_emojis(["\u{1F3FD}"], false);
        assert!(tally.is_empty());
    }

    #[test]
    fn test_no_matches_contribute_nothing() {
        let tally = count_emojis(["", "plain text", "   "], false);
        assert!(tally.is_empty());
        assert_eq!(tally.total(), 0);
    }

    #[test]
    fn test_most_common_order() {
        let tally = count_emojis(["😂 😂 😂", "😀 😀", "🔥 🔥", "🎉"], false);
        let top = tally.most_common(3);
        assert_eq!(top[0], ("😂", 3));
        // Ties broken by the emoji string
        assert_eq!(top[1].1, 2);
        assert_eq!(top[2].1, 2);
        assert!(top[1].0 < top[2].0);
        assert_eq!(tally.most_common(10).len(), 4);
    }
}
