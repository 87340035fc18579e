//! Test utilities
//! Shared testing helpers and mocks

use crate::decoration::{DecorationRange, RangeSink};
use crate::term::Size;

/// Mock rendering layer for testing
/// Records every batch and resize it receives
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub batches: Vec<Vec<DecorationRange>>,
    pub layouts: Vec<Size>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// The batch most recently applied, if any
    pub fn current(&self) -> Option<&[DecorationRange]> {
        self.batches.last().map(Vec::as_slice)
    }

    pub fn apply_calls(&self) -> usize {
        self.batches.len()
    }
}

impl RangeSink for RecordingSink {
    fn apply(&mut self, ranges: &[DecorationRange]) {
        self.batches.push(ranges.to_vec());
    }

    fn layout(&mut self, size: Size) {
        self.layouts.push(size);
    }
}

/// Source with one benchmark per name, each defined and registered
pub fn benchmark_source(names: &[&str]) -> String {
    let mut text = String::from("#include <benchmark/benchmark.h>\n");
    for name in names {
        text.push_str(&format!(
            "\nstatic void {name}(benchmark::State& state) {{\n  for (auto _ : state) {{}}\n}}\nBENCHMARK({name});\n"
        ));
    }
    text
}
