//! Decoration building
//!
//! Turns a buffer and the benchmark names reported for it into highlight
//! ranges. Every benchmark found in full contributes exactly three ranges,
//! in rank order:
//! 1. a gutter marker over the lines from its definition to its registration
//! 2. an inline marker on the name at the definition
//! 3. an inline marker on the name at the registration

use crate::color::{Palette, StyleClass};
use crate::position::{LineColumn, LineIndex};
use crate::search::{locate, IncludeDirective};
use crate::settings::AnnotatorOptions;
use std::sync::Arc;

pub mod sync;

pub use sync::{sync, RangeSink, Synchronizer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeKind {
    /// Whole-line marker drawn in the gutter
    Gutter,
    /// Character span inside a line
    Inline,
}

/// One highlight instruction, in 1-based editor coordinates.
///
/// The end column is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecorationRange {
    pub start_line: usize,
    pub start_column: usize,
    pub end_line: usize,
    pub end_column: usize,
    pub style: StyleClass,
    pub kind: RangeKind,
}

impl DecorationRange {
    /// Gutter marker covering every line from `first_line` to `last_line`
    pub fn gutter(first_line: usize, last_line: usize, style: StyleClass) -> Self {
        Self {
            start_line: first_line.min(last_line),
            start_column: 1,
            end_line: first_line.max(last_line),
            end_column: 1,
            style,
            kind: RangeKind::Gutter,
        }
    }

    pub fn inline(start: LineColumn, end: LineColumn, style: StyleClass) -> Self {
        Self {
            start_line: start.line,
            start_column: start.column,
            end_line: end.line,
            end_column: end.column,
            style,
            kind: RangeKind::Inline,
        }
    }

    pub fn start(&self) -> LineColumn {
        LineColumn::new(self.start_line, self.start_column)
    }

    pub fn end(&self) -> LineColumn {
        LineColumn::new(self.end_line, self.end_column)
    }

    /// Whether this range touches the 1-based `line`
    pub fn covers_line(&self, line: usize) -> bool {
        (self.start_line..=self.end_line).contains(&line)
    }
}

/// The batch of ranges currently applied to one buffer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecorationSet {
    /// Bumped every time a new batch supersedes the previous one
    pub generation: u64,
    pub ranges: Vec<DecorationRange>,
}

impl DecorationSet {
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

/// Builds decoration batches for one configuration
#[derive(Debug, Clone)]
pub struct DecorationBuilder {
    sentinel: String,
    palette: Palette,
    max_buffer_len: usize,
    include_directive: Option<Arc<IncludeDirective>>,
}

impl DecorationBuilder {
    /// Builder without the include-directive pass
    pub fn new(options: &AnnotatorOptions) -> Self {
        Self {
            sentinel: options.sentinel.clone(),
            palette: options.palette(),
            max_buffer_len: options.max_buffer_len,
            include_directive: None,
        }
    }

    /// Enable or disable the extra `#include <C++>` marker
    #[must_use]
    pub fn with_include_directive(mut self, enabled: bool) -> Self {
        self.include_directive = if enabled {
            match IncludeDirective::compile() {
                Ok(include) => Some(Arc::new(include)),
                Err(err) => {
                    tracing::warn!(%err, "include directive pattern failed to compile");
                    None
                }
            }
        } else {
            None
        };
        self
    }

    pub fn marks_include_directive(&self) -> bool {
        self.include_directive.is_some()
    }

    /// Names that take part in ranking, in list order
    pub fn active_names<'n, S: AsRef<str>>(&self, identifiers: &'n [S]) -> Vec<&'n str> {
        identifiers
            .iter()
            .map(AsRef::as_ref)
            .filter(|name| *name != self.sentinel)
            .collect()
    }

    pub fn build<S: AsRef<str>>(&self, text: &str, identifiers: &[S]) -> Vec<DecorationRange> {
        let char_len = text.chars().count();
        if char_len > self.max_buffer_len {
            tracing::warn!(
                len = char_len,
                max = self.max_buffer_len,
                "buffer too large to annotate"
            );
            return Vec::new();
        }

        let names = self.active_names(identifiers);
        let total = names.len();
        let index = LineIndex::new(text);
        let mut ranges = Vec::with_capacity(total * 3 + 1);

        for (rank, name) in names.into_iter().enumerate() {
            let Some(found) = locate(text, name) else {
                tracing::trace!(name = name, "benchmark not found in buffer");
                continue;
            };
            let style = self.palette.pick(rank, total);
            let definition = index.line_column(found.definition_name.start);
            let registration = index.line_column(found.registration_name.start);

            ranges.push(DecorationRange::gutter(
                definition.line,
                registration.line,
                style,
            ));
            ranges.push(DecorationRange::inline(
                definition,
                index.line_column(found.definition_name.end),
                style,
            ));
            ranges.push(DecorationRange::inline(
                registration,
                index.line_column(found.registration_name.end),
                style,
            ));
        }

        if let Some(m) = self
            .include_directive
            .as_ref()
            .and_then(|include| include.find(text))
        {
            ranges.push(DecorationRange::inline(
                index.line_column(m.range.start),
                index.line_column(m.range.end),
                StyleClass::Special,
            ));
        }

        ranges
    }
}

/// Build with default options and no include-directive pass
pub fn build<S: AsRef<str>>(text: &str, identifiers: &[S]) -> Vec<DecorationRange> {
    DecorationBuilder::new(&AnnotatorOptions::default()).build(text, identifiers)
}
