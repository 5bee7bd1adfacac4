//! Property-based tests for chatpulse.
//!
//! These tests generate random inputs to find edge cases.

use proptest::prelude::*;

use chatpulse::core::{canonical_emoji, count_emojis, extract_emojis};
use chatpulse::parsing::{LineKind, classify_line, to_24_hour};
use chatpulse::prelude::*;

/// A transcript line that is never a header
fn arb_continuation() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "still typing".to_string(),
        "Привет мир".to_string(),
        "see you at 9:00".to_string(),
        "- bullet".to_string(),
        "🎉🔥💀 emoji".to_string(),
        "1/1/2024 was a Monday".to_string(),
        "key: value".to_string(),
    ])
}

/// (author, body) pairs from fixed pools (fast, no regex strategies)
fn arb_entry() -> impl Strategy<Value = (String, String)> {
    (
        prop::sample::select(vec![
            "Alice".to_string(),
            "Bob".to_string(),
            "Иван".to_string(),
            "+1 555 0100".to_string(),
        ]),
        prop::sample::select(vec![
            "Hello".to_string(),
            "How are you?".to_string(),
            "<Media omitted>".to_string(),
            "url: https://example.com".to_string(),
            "👍🏽👍".to_string(),
        ]),
    )
}

fn skin_tone() -> impl Strategy<Value = char> {
    prop::sample::select(vec!['\u{1F3FB}', '\u{1F3FC}', '\u{1F3FD}', '\u{1F3FE}', '\u{1F3FF}'])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // ============================================
    // TIME NORMALIZATION PROPERTIES
    // ============================================

    /// Every 24-hour token is zero-padded and otherwise unchanged
    #[test]
    fn plain_time_is_padded(hour in 0u32..24, minute in 0u32..60) {
        let converted = to_24_hour(&format!("{hour}:{minute:02}")).unwrap();
        prop_assert_eq!(converted, format!("{hour:02}:{minute:02}"));
    }

    /// Every 12-hour token maps into 0..24 and keeps its minutes
    #[test]
    fn meridiem_time_in_range(hour in 1u32..=12, minute in 0u32..60, pm in any::<bool>()) {
        let marker = if pm { "p. m." } else { "a. m." };
        let converted = to_24_hour(&format!("{hour}:{minute:02} {marker}")).unwrap();

        let (h, m) = converted.split_once(':').unwrap();
        let h: u32 = h.parse().unwrap();
        prop_assert!(h < 24);
        prop_assert_eq!(h >= 12, pm);
        prop_assert_eq!(m.parse::<u32>().unwrap(), minute);
    }

    // ============================================
    // CLASSIFICATION AND MERGE PROPERTIES
    // ============================================

    /// Classification never panics on arbitrary input
    #[test]
    fn classify_never_panics(line in any::<String>()) {
        let _ = classify_line(&line);
    }

    /// Parsing never panics and yields at most one record per line
    #[test]
    fn parse_never_panics(text in any::<String>()) {
        let messages = TranscriptParser::new().parse_str(&text);
        prop_assert!(messages.len() <= text.lines().count());
    }

    /// Continuation lines never create records and are kept in order
    #[test]
    fn continuations_merge_into_previous(
        (author, body) in arb_entry(),
        extra in prop::collection::vec(arb_continuation(), 0..6),
    ) {
        for line in &extra {
            prop_assert_eq!(classify_line(line), LineKind::Continuation);
        }

        let mut text = format!("1/1/2024, 9:00 - {author}: {body}");
        for line in &extra {
            text.push('\n');
            text.push_str(line);
        }

        let messages = TranscriptParser::new().parse_str(&text);
        prop_assert_eq!(messages.len(), 1);
        prop_assert_eq!(messages[0].author(), author.as_str());

        let mut expected = body.clone();
        for line in &extra {
            expected.push('\n');
            expected.push_str(line);
        }
        prop_assert_eq!(messages[0].body(), expected.as_str());
    }

    /// One record per header, in input order, with non-decreasing timestamps
    #[test]
    fn headers_preserve_order(entries in prop::collection::vec(arb_entry(), 0..30)) {
        let text: Vec<String> = entries
            .iter()
            .enumerate()
            .map(|(i, (author, body))| {
                let minutes = i * 7;
                format!("1/1/2024, {}:{:02} - {author}: {body}", minutes / 60, minutes % 60)
            })
            .collect();

        let messages = TranscriptParser::new().parse_str(&text.join("\n"));
        prop_assert_eq!(messages.len(), entries.len());

        for (msg, (author, body)) in messages.iter().zip(&entries) {
            prop_assert_eq!(msg.author(), author.as_str());
            prop_assert_eq!(msg.body(), body.as_str());
            prop_assert!(msg.timestamp.is_some());
        }
        for pair in messages.windows(2) {
            prop_assert!(pair[0].timestamp <= pair[1].timestamp);
        }
    }

    // ============================================
    // EMOJI PROPERTIES
    // ============================================

    /// Skin-tone variants always count under the base emoji
    #[test]
    fn skin_tones_collapse(tones in prop::collection::vec(skin_tone(), 1..8)) {
        let bodies: Vec<String> = tones.iter().map(|t| format!("ok 👍{t}")).collect();
        let tally = count_emojis(bodies.iter().map(String::as_str), false);
        prop_assert_eq!(tally.get("👍"), tones.len());
        prop_assert_eq!(tally.len(), 1);
    }

    /// Canonical tokens never contain a skin-tone modifier
    #[test]
    fn canonical_has_no_modifier(text in any::<String>()) {
        for token in extract_emojis(&text) {
            let canonical = canonical_emoji(token);
            let has_modifier = canonical.chars().any(|c| ('\u{1F3FB}'..='\u{1F3FF}').contains(&c));
            prop_assert!(!has_modifier, "modifier left in {:?}", canonical);
        }
    }

    /// Splitting runs never reduces the number of counted emojis
    #[test]
    fn split_counts_at_least_whole(text in any::<String>()) {
        let whole = count_emojis([text.as_str()], false).total();
        let split = count_emojis([text.as_str()], true).total();
        prop_assert!(split >= whole);
    }
}
