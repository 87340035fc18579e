//! Source buffers
//! Immutable text snapshots, one per editor tab

use crate::error::{AnnotateError, ErrorType, Result};
use std::path::Path;
use std::sync::Arc;

/// One snapshot of a buffer's text.
///
/// Edits never mutate a snapshot; the editing surface replaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceBuffer {
    /// Which of the parallel buffers this is
    pub index: usize,
    pub text: Arc<str>,
}

impl SourceBuffer {
    pub fn new(index: usize, text: impl Into<Arc<str>>) -> Self {
        Self {
            index,
            text: text.into(),
        }
    }

    /// Snapshot of the same buffer with new text
    #[must_use]
    pub fn with_text(&self, text: impl Into<Arc<str>>) -> Self {
        Self::new(self.index, text)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in characters
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Read each path into a buffer indexed by its position
pub fn load_sources<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<SourceBuffer>> {
    if paths.is_empty() {
        return Err(AnnotateError::new(
            ErrorType::Io,
            "NO_SOURCES",
            "At least one source file is required",
        ));
    }
    paths
        .iter()
        .enumerate()
        .map(|(index, path)| {
            let path = path.as_ref();
            let text = std::fs::read_to_string(path).map_err(|e| {
                AnnotateError::new(
                    ErrorType::Io,
                    "READ_ERROR",
                    format!("{}: {e}", path.display()),
                )
            })?;
            Ok(SourceBuffer::new(index, text))
        })
        .collect()
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
