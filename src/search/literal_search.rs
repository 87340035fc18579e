//! Literal scanning primitives
//!
//! Exact-substring search plus the small cursor steps the benchmark
//! patterns are built from. Nothing here interprets pattern syntax, so any
//! identifier text is matched literally.

use crate::search::SearchMatch;

/// Find the first occurrence of `pattern` starting at or after `start_pos`.
///
/// Returns `None` for an empty pattern or a `start_pos` that is out of range
/// or not on a character boundary.
pub fn find_literal(text: &str, pattern: &str, start_pos: usize) -> Option<SearchMatch> {
    if pattern.is_empty() {
        return None;
    }
    let haystack = text.get(start_pos..)?;
    let found = haystack.find(pattern)?;
    let match_start = start_pos + found;
    Some(SearchMatch {
        range: match_start..match_start + pattern.len(),
    })
}

/// Advance past any whitespace at `pos`
pub fn skip_whitespace(text: &str, pos: usize) -> usize {
    match text.get(pos..) {
        Some(rest) => {
            let trimmed = rest.trim_start_matches(char::is_whitespace);
            pos + (rest.len() - trimmed.len())
        }
        None => pos,
    }
}

/// If `literal` occurs exactly at `pos`, return the offset just past it
pub fn expect_literal(text: &str, pos: usize, literal: &str) -> Option<usize> {
    text.get(pos..)?
        .starts_with(literal)
        .then_some(pos + literal.len())
}

/// Offset of the character following the one at `pos`
pub fn next_char_boundary(text: &str, pos: usize) -> usize {
    text.get(pos..)
        .and_then(|rest| rest.chars().next())
        .map_or(text.len(), |c| pos + c.len_utf8())
}
