//! Emphasis of filter matches inside a title

use regex::RegexBuilder;
use serde::Serialize;

/// One piece of a highlighted title
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    /// Text of the piece
    pub text: String,
    /// Whether the piece matched the filter
    pub emphasized: bool,
}

impl Segment {
    fn new(text: &str, emphasized: bool) -> Self {
        Self {
            text: text.to_string(),
            emphasized,
        }
    }
}

/// Backslash-escape `- / \ ^ $ * + ? . ( ) | [ ] { }` so the filter is
/// matched literally
#[must_use]
pub fn escape_pattern(filter: &str) -> String {
    let mut escaped = String::with_capacity(filter.len() * 2);
    for ch in filter.chars() {
        if matches!(
            ch,
            '-' | '/' | '\\' | '^' | '$' | '*' | '+' | '?' | '.' | '(' | ')' | '|' | '[' | ']'
                | '{' | '}'
        ) {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// Split `title` into plain and emphasized segments around every
/// case-insensitive occurrence of `filter`.
///
/// Empty segments are dropped. An empty filter, or one that never matches,
/// yields a single plain segment equal to the title.
#[must_use]
pub fn highlight(title: &str, filter: &str) -> Vec<Segment> {
    let plain = || {
        if title.is_empty() {
            Vec::new()
        } else {
            vec![Segment::new(title, false)]
        }
    };
    if filter.is_empty() {
        return plain();
    }

    let Ok(pattern) = RegexBuilder::new(&escape_pattern(filter))
        .case_insensitive(true)
        .build()
    else {
        return plain();
    };

    let mut segments = Vec::new();
    let mut last = 0;
    for found in pattern.find_iter(title) {
        if found.start() > last {
            segments.push(Segment::new(&title[last..found.start()], false));
        }
        if !found.as_str().is_empty() {
            segments.push(Segment::new(found.as_str(), true));
        }
        last = found.end();
    }
    if last < title.len() {
        segments.push(Segment::new(&title[last..], false));
    }
    segments
}
