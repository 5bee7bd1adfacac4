//! Header-line grammars and line classification.
//!
//! A transcript line is either a header that starts a new message or a
//! continuation of the previous one. Three header grammars are recognized
//! and tried in a fixed order; the first match wins.

use std::sync::LazyLock;

use regex::Regex;

/// Header grammar variants, in matching priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderGrammar {
    /// 12-hour time, comma after the date.
    /// Example: `12/5/2023, 6:49 p. m. - Alice: Hello`
    CommaMeridiem,
    /// 12-hour time, no comma after the date.
    /// Example: `12/5/2023 6:49 p. m. - Alice: Hello`
    SpaceMeridiem,
    /// Bare 24-hour time, comma after the date.
    /// Example: `1/1/2024, 9:00 - Bob: Hello`
    CommaPlain,
}

impl HeaderGrammar {
    /// Returns the regex pattern for this grammar.
    ///
    /// Groups: date, time, author (lazy, up to the first `": "`), message.
    pub fn pattern(self) -> &'static str {
        match self {
            HeaderGrammar::CommaMeridiem => {
                r"(?i)^(\d{1,2}/\d{1,2}/\d{4}), (\d{1,2}:\d{2}\s*[ap]\.\s*m\.) - (.*?): (.*)$"
            }
            HeaderGrammar::SpaceMeridiem => {
                r"(?i)^(\d{1,2}/\d{1,2}/\d{4}) (\d{1,2}:\d{2}\s*[ap]\.\s*m\.) - (.*?): (.*)$"
            }
            HeaderGrammar::CommaPlain => {
                r"(?i)^(\d{1,2}/\d{1,2}/\d{4}), (\d{1,2}:\d{2}) - (.*?): (.*)$"
            }
        }
    }

    /// Returns all grammars in priority order.
    pub fn all() -> &'static [HeaderGrammar] {
        &[
            HeaderGrammar::CommaMeridiem,
            HeaderGrammar::SpaceMeridiem,
            HeaderGrammar::CommaPlain,
        ]
    }
}

/// Compiled grammar, paired with its variant.
struct GrammarMatcher {
    grammar: HeaderGrammar,
    regex: Regex,
}

static MATCHERS: LazyLock<Vec<GrammarMatcher>> = LazyLock::new(|| {
    HeaderGrammar::all()
        .iter()
        .map(|&grammar| GrammarMatcher {
            grammar,
            regex: Regex::new(grammar.pattern()).expect("header grammar is a valid regex"),
        })
        .collect()
});

/// Fields captured from a header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderFields<'a> {
    /// Grammar that matched.
    pub grammar: HeaderGrammar,
    pub date: &'a str,
    /// Time token after [`clean_time_token`].
    pub time: String,
    pub author: &'a str,
    /// Start of the message body; may be empty.
    pub message: &'a str,
}

/// Result of classifying one transcript line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// The line starts a new message.
    Header(HeaderFields<'a>),
    /// The line belongs to the previous message.
    Continuation,
}

/// Removes every whitespace character from a time token.
///
/// Exports put a narrow no-break space (U+202F) or a no-break space (U+00A0)
/// between the minutes and the meridiem marker, and locales differ on the
/// spacing inside it (`p. m.` vs `p.m.`). All of these collapse to `6:49p.m.`.
pub fn clean_time_token(time: &str) -> String {
    time.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Classifies a single, already-trimmed transcript line.
///
/// # Example
///
/// ```rust
/// use chatpulse::parsing::{LineKind, classify_line};
///
/// match classify_line("12/5/2023, 6:49 p. m. - Alice: Hello") {
///     LineKind::Header(h) => {
///         assert_eq!(h.date, "12/5/2023");
///         assert_eq!(h.time, "6:49p.m.");
///         assert_eq!(h.author, "Alice");
///         assert_eq!(h.message, "Hello");
///     }
///     LineKind::Continuation => unreachable!(),
/// }
///
/// assert_eq!(classify_line("just some text"), LineKind::Continuation);
/// ```
pub fn classify_line(line: &str) -> LineKind<'_> {
    for matcher in MATCHERS.iter() {
        let Some(caps) = matcher.regex.captures(line) else {
            continue;
        };

        let field = |i: usize| caps.get(i).map_or("", |m| m.as_str());

        return LineKind::Header(HeaderFields {
            grammar: matcher.grammar,
            date: field(1),
            time: clean_time_token(field(2)),
            author: field(3),
            message: field(4),
        });
    }

    LineKind::Continuation
}
