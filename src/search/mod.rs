//! Benchmark pattern search
//!
//! Locates the two textual sites that identify a benchmark in a source
//! buffer:
//! - the definition: whitespace, the name, `(`, `benchmark::State`, `&`
//! - the registration: `BENCHMARK(`, the name, `)`
//!
//! Whitespace is optional between tokens. Both are found by literal scanning
//! so names are never interpreted as patterns. The include-directive check
//! is a fixed expression and goes through monster-regex.

use crate::error::{AnnotateError, ErrorType};
use literal_search::{expect_literal, find_literal, next_char_boundary, skip_whitespace};
use monster_regex::{parse_rift_format, Regex};
use std::ops::Range;

pub mod literal_search;

/// Macro that registers a benchmark function
pub const REGISTRATION_MACRO: &str = "BENCHMARK";

/// Expression recognizing `#include <C++>` in any spacing or capitalization of the `c`
pub const INCLUDE_DIRECTIVE_PATTERN: &str = r"#\s*include\s*<\s*[Cc]\+\+\s*>";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchMatch {
    /// Range in bytes (absolute buffer offsets)
    pub range: Range<usize>,
}

/// Both occurrences of one benchmark name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkMatch<'a> {
    pub name: &'a str,
    /// Start of the definition pattern, i.e. the whitespace before the name
    pub definition_offset: usize,
    /// Start of the registration pattern, i.e. the `B` of `BENCHMARK`
    pub registration_offset: usize,
    /// Exact span of the name inside the definition
    pub definition_name: Range<usize>,
    /// Exact span of the name inside the registration
    pub registration_name: Range<usize>,
}

/// Locate the definition and the registration of `name`.
///
/// Returns `None` unless both are present.
pub fn locate<'a>(text: &str, name: &'a str) -> Option<BenchmarkMatch<'a>> {
    let (definition_offset, definition_name) = find_definition(text, name)?;
    let (registration_offset, registration_name) = find_registration(text, name)?;
    Some(BenchmarkMatch {
        name,
        definition_offset,
        registration_offset,
        definition_name,
        registration_name,
    })
}

/// First definition of `name`: returns the pattern start and the name span
pub fn find_definition(text: &str, name: &str) -> Option<(usize, Range<usize>)> {
    let mut from = 0;
    while let Some(m) = find_literal(text, name, from) {
        let at = m.range.start;
        if let Some(ws) = text[..at].chars().next_back() {
            if ws.is_whitespace() && has_state_parameter(text, m.range.end) {
                return Some((at - ws.len_utf8(), m.range));
            }
        }
        from = next_char_boundary(text, at);
    }
    None
}

/// `( benchmark :: State &` with optional whitespace between tokens
fn has_state_parameter(text: &str, pos: usize) -> bool {
    let mut pos = pos;
    for token in ["(", "benchmark", "::", "State", "&"] {
        pos = skip_whitespace(text, pos);
        match expect_literal(text, pos, token) {
            Some(next) => pos = next,
            None => return false,
        }
    }
    true
}

/// First registration of `name`: returns the pattern start and the name span
pub fn find_registration(text: &str, name: &str) -> Option<(usize, Range<usize>)> {
    if name.is_empty() {
        return None;
    }
    let mut from = 0;
    while let Some(m) = find_literal(text, REGISTRATION_MACRO, from) {
        if let Some(name_span) = registration_argument(text, m.range.end, name) {
            return Some((m.range.start, name_span));
        }
        from = m.range.start + 1;
    }
    None
}

fn registration_argument(text: &str, pos: usize, name: &str) -> Option<Range<usize>> {
    let pos = skip_whitespace(text, pos);
    let pos = expect_literal(text, pos, "(")?;
    let name_start = skip_whitespace(text, pos);
    let name_end = expect_literal(text, name_start, name)?;
    let pos = skip_whitespace(text, name_end);
    expect_literal(text, pos, ")")?;
    Some(name_start..name_end)
}

/// Compile an expression given in `pattern/flags` form (flags optional)
pub fn compile_regex(query: &str) -> Result<Regex, AnnotateError> {
    let query = if query.ends_with('/') {
        std::borrow::Cow::Borrowed(query)
    } else {
        std::borrow::Cow::Owned(format!("{}/", query))
    };

    let (pattern, flags) = parse_rift_format(&query).map_err(|e| {
        AnnotateError::new(ErrorType::Pattern, "REGEX_PARSE_ERROR", format!("{:?}", e))
    })?;

    Regex::new(&pattern, flags).map_err(|e| {
        AnnotateError::new(
            ErrorType::Pattern,
            "REGEX_COMPILE_ERROR",
            format!("{:?}", e),
        )
    })
}

/// Compiled form of the `#include <C++>` directive search
pub struct IncludeDirective {
    re: Regex,
}

impl IncludeDirective {
    pub fn compile() -> Result<Self, AnnotateError> {
        Ok(Self {
            re: compile_regex(INCLUDE_DIRECTIVE_PATTERN)?,
        })
    }

    /// First directive in the buffer
    pub fn find(&self, text: &str) -> Option<SearchMatch> {
        self.re.find(text).map(|m| SearchMatch {
            range: m.start..m.end,
        })
    }
}

impl std::fmt::Debug for IncludeDirective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("IncludeDirective")
            .field(&INCLUDE_DIRECTIVE_PATTERN)
            .finish()
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
