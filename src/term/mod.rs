//! Terminal rendering
//!
//! A `RangeSink` that prints an annotated buffer: a colored gutter bar on
//! every line covered by a benchmark, and each inline span in its style
//! color. Output goes to any `Write`, so it can target stdout or a test
//! buffer.

use crate::color::{Color, StyleClass};
use crate::decoration::{DecorationRange, RangeKind, RangeSink};
use crate::error::{AnnotateError, ErrorType, Result};
use crossterm::queue;
use crossterm::style::{Print, ResetColor, SetForegroundColor};
use std::io::Write;

/// Terminal size information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub rows: u16,
    pub cols: u16,
}

const GUTTER_MARK: &str = "▌";

fn render_error(e: std::io::Error) -> AnnotateError {
    AnnotateError::new(ErrorType::Renderer, "RENDER_ERROR", e.to_string())
}

/// Renders decorated text with crossterm escape sequences
pub struct TerminalSink<W: Write> {
    out: W,
    ranges: Vec<DecorationRange>,
    size: Option<Size>,
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            ranges: Vec::new(),
            size: None,
        }
    }

    pub fn ranges(&self) -> &[DecorationRange] {
        &self.ranges
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Write `text` with the applied decorations
    pub fn render(&mut self, title: Option<&str>, text: &str) -> Result<()> {
        if let Some(title) = title {
            queue!(self.out, Print(format!("── {title}\n"))).map_err(render_error)?;
        }

        let line_count = text.split('\n').count();
        let number_width = line_count.to_string().len();
        // Gutter bar, number, separator
        let prefix_width = 1 + number_width + 3;
        let max_content = self
            .size
            .map(|size| usize::from(size.cols).saturating_sub(prefix_width));

        for (idx, line) in text.split('\n').enumerate() {
            let line_no = idx + 1;
            if line_no == line_count && line.is_empty() && line_count > 1 {
                break;
            }
            self.render_line(line_no, line, number_width, max_content)?;
        }
        self.out.flush().map_err(render_error)
    }

    fn render_line(
        &mut self,
        line_no: usize,
        line: &str,
        number_width: usize,
        max_content: Option<usize>,
    ) -> Result<()> {
        let gutter = self
            .ranges
            .iter()
            .find(|r| r.kind == RangeKind::Gutter && r.covers_line(line_no))
            .map(|r| r.style);

        let written = match gutter {
            Some(style) => queue!(
                self.out,
                SetForegroundColor(style.color().to_crossterm()),
                Print(GUTTER_MARK),
                ResetColor
            ),
            None => queue!(self.out, Print(" ")),
        };
        written.map_err(render_error)?;
        queue!(self.out, Print(format!("{line_no:>number_width$} │ ")))
            .map_err(render_error)?;

        let line = line.strip_suffix('\r').unwrap_or(line);
        let mut current: Option<Color> = None;
        let mut segment = String::new();
        for (col_idx, ch) in line.chars().enumerate() {
            if max_content.is_some_and(|max| col_idx >= max) {
                break;
            }
            let color = self.inline_style_at(line_no, col_idx + 1).map(StyleClass::color);
            if color != current {
                self.flush_segment(&mut segment, current)?;
                current = color;
            }
            segment.push(ch);
        }
        self.flush_segment(&mut segment, current)?;
        queue!(self.out, Print("\n")).map_err(render_error)
    }

    /// Last inline range wins where spans overlap
    fn inline_style_at(&self, line: usize, column: usize) -> Option<StyleClass> {
        self.ranges
            .iter()
            .rev()
            .filter(|r| r.kind == RangeKind::Inline && r.covers_line(line))
            .find(|r| {
                let starts_before = r.start_line < line || r.start_column <= column;
                let ends_after = r.end_line > line || column < r.end_column;
                starts_before && ends_after
            })
            .map(|r| r.style)
    }

    fn flush_segment(&mut self, segment: &mut String, color: Option<Color>) -> Result<()> {
        if segment.is_empty() {
            return Ok(());
        }
        let written = match color {
            Some(color) => queue!(
                self.out,
                SetForegroundColor(color.to_crossterm()),
                Print(segment.as_str()),
                ResetColor
            ),
            None => queue!(self.out, Print(segment.as_str())),
        };
        written.map_err(render_error)?;
        segment.clear();
        Ok(())
    }
}

impl<W: Write> RangeSink for TerminalSink<W> {
    fn apply(&mut self, ranges: &[DecorationRange]) {
        self.ranges = ranges.to_vec();
    }

    fn layout(&mut self, size: Size) {
        self.size = Some(size);
    }
}
