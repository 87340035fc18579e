//! Position translation
//!
//! Converts byte offsets into the 1-based line/column coordinates used by
//! editing surfaces. Columns count characters, not bytes.

/// Line and column position in a buffer, both 1-based
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineColumn {
    pub line: usize,
    pub column: usize,
}

impl LineColumn {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl From<(usize, usize)> for LineColumn {
    fn from(value: (usize, usize)) -> Self {
        Self {
            line: value.0,
            column: value.1,
        }
    }
}

/// Translate `offset` in `text` without building an index.
///
/// Offsets past the end clamp to the end; offsets inside a multi-byte
/// character resolve to that character.
pub fn to_line_column(text: &str, offset: usize) -> LineColumn {
    let offset = floor_char_boundary(text, offset);
    let before = &text[..offset];
    let line = before.bytes().filter(|&b| b == b'\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    LineColumn {
        line,
        column: text[line_start..offset].chars().count() + 1,
    }
}

fn floor_char_boundary(text: &str, offset: usize) -> usize {
    let mut offset = offset.min(text.len());
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

/// Precomputed line starts of one text snapshot
pub struct LineIndex<'a> {
    text: &'a str,
    /// Byte offset of the first byte of every line; always starts with 0
    line_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(
            text.bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'\n')
                .map(|(i, _)| i + 1),
        );
        Self { text, line_starts }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Byte offset where the 0-based `line_idx` begins
    pub fn line_start(&self, line_idx: usize) -> Option<usize> {
        self.line_starts.get(line_idx).copied()
    }

    /// 0-based index of the line containing `offset`
    pub fn line_at(&self, offset: usize) -> usize {
        // line_starts[0] == 0, so the partition point is at least 1
        self.line_starts.partition_point(|&start| start <= offset) - 1
    }

    /// Same result as [`to_line_column`], via binary search
    pub fn line_column(&self, offset: usize) -> LineColumn {
        let offset = floor_char_boundary(self.text, offset);
        let line_idx = self.line_at(offset);
        let start = self.line_starts[line_idx];
        LineColumn {
            line: line_idx + 1,
            column: self.text[start..offset].chars().count() + 1,
        }
    }
}

impl std::fmt::Debug for LineIndex<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineIndex")
            .field("lines", &self.line_count())
            .finish()
    }
}
