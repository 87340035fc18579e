//! bench-annotate - locates benchmark definitions in source buffers and
//! keeps their highlight decorations in sync with edits

pub mod color;
pub mod decoration;
pub mod editor;
pub mod error;
pub mod position;
pub mod search;
pub mod settings;
pub mod source;
pub mod term;

#[cfg(test)]
pub mod test_utils;

pub use color::{pick_style, Palette, StyleClass};
pub use decoration::{build, DecorationBuilder, DecorationRange, DecorationSet, RangeKind};
pub use error::{AnnotateError, Result};
pub use position::{to_line_column, LineColumn};
pub use search::{locate, BenchmarkMatch};
