//! Query highlighting for display names
//!
//! Finds the first case-insensitive occurrence of the query in a name and
//! splits the name around it. Only the first occurrence is marked.

use std::ops::Range;

/// A display string split for emphasis rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlighted<'a> {
    /// No match (or empty query); render the text as-is
    Plain(&'a str),
    /// The text split around the first match
    Match {
        /// Text preceding the match
        before: &'a str,
        /// The matched slice, in its original casing
        matched: &'a str,
        /// Text following the match
        after: &'a str,
    },
}

impl<'a> Highlighted<'a> {
    /// Reassemble the original text
    #[must_use]
    pub fn to_plain(&self) -> String {
        match self {
            Self::Plain(text) => (*text).to_string(),
            Self::Match {
                before,
                matched,
                after,
            } => format!("{before}{matched}{after}"),
        }
    }

    /// The matched slice, if any
    #[must_use]
    pub const fn matched(&self) -> Option<&'a str> {
        match self {
            Self::Plain(_) => None,
            Self::Match { matched, .. } => Some(*matched),
        }
    }
}

/// Split `text` around the first case-insensitive occurrence of `query`
///
/// # Examples
///
/// ```
/// use charpick::search::{Highlighted, highlight};
///
/// assert_eq!(
///     highlight("Rick Sanchez", "ick"),
///     Highlighted::Match { before: "R", matched: "ick", after: " Sanchez" }
/// );
/// assert_eq!(highlight("Morty", ""), Highlighted::Plain("Morty"));
/// ```
#[must_use]
pub fn highlight<'a>(text: &'a str, query: &str) -> Highlighted<'a> {
    match find_case_insensitive(text, query) {
        Some(range) => Highlighted::Match {
            before: &text[..range.start],
            matched: &text[range.clone()],
            after: &text[range.end..],
        },
        None => Highlighted::Plain(text),
    }
}

/// Byte range of the first case-insensitive occurrence of `needle`
///
/// Characters are compared one at a time through their lowercase mapping,
/// so the returned range always lies on character boundaries of `haystack`.
/// An empty needle never matches.
#[must_use]
pub fn find_case_insensitive(haystack: &str, needle: &str) -> Option<Range<usize>> {
    if needle.is_empty() {
        return None;
    }

    for (start, _) in haystack.char_indices() {
        let mut end = start;
        let mut hay = haystack[start..].chars();
        let mut matched = true;

        for wanted in needle.chars() {
            match hay.next() {
                Some(found) if chars_eq_ignore_case(found, wanted) => end += found.len_utf8(),
                _ => {
                    matched = false;
                    break;
                }
            }
        }

        if matched {
            return Some(start..end);
        }
    }

    None
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}
