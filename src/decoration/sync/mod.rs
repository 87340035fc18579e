//! Decoration synchronization
//!
//! Keeps exactly one live decoration set per buffer. A new batch always
//! replaces the previous one in a single `apply` call, so a sink never sees
//! a mixture of old and new ranges.

use super::{DecorationBuilder, DecorationRange, DecorationSet};
use crate::settings::AnnotatorOptions;
use crate::source::SourceBuffer;
use crate::term::Size;
use std::sync::Arc;

/// Rendering layer that displays decorations
pub trait RangeSink {
    /// Replace everything previously applied with `ranges`
    fn apply(&mut self, ranges: &[DecorationRange]);

    /// The hosting element changed size
    fn layout(&mut self, _size: Size) {}
}

/// Supersede `previous` with `ranges`
pub fn sync(previous: DecorationSet, ranges: Vec<DecorationRange>) -> DecorationSet {
    DecorationSet {
        generation: previous.generation + 1,
        ranges,
    }
}

/// Rebuilds and applies decorations for one buffer as its inputs change
pub struct Synchronizer<S> {
    buffer: SourceBuffer,
    identifiers: Arc<[String]>,
    builder: DecorationBuilder,
    live: DecorationSet,
    /// Text changed since the last completed build
    dirty: bool,
    /// Identifier list replaced since the last completed build
    names_changed: bool,
    sink: Option<S>,
}

impl<S: RangeSink> Synchronizer<S> {
    pub fn new(buffer: SourceBuffer, options: &AnnotatorOptions, include_directive: bool) -> Self {
        Self {
            buffer,
            identifiers: Arc::from(Vec::new()),
            builder: DecorationBuilder::new(options).with_include_directive(include_directive),
            live: DecorationSet::default(),
            dirty: false,
            names_changed: false,
            sink: None,
        }
    }

    pub fn buffer(&self) -> &SourceBuffer {
        &self.buffer
    }

    pub fn identifiers(&self) -> &Arc<[String]> {
        &self.identifiers
    }

    /// The currently applied set
    pub fn live(&self) -> &DecorationSet {
        &self.live
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn is_mounted(&self) -> bool {
        self.sink.is_some()
    }

    pub fn sink(&self) -> Option<&S> {
        self.sink.as_ref()
    }

    pub fn sink_mut(&mut self) -> Option<&mut S> {
        self.sink.as_mut()
    }

    /// Attach the rendering layer and apply the current decorations
    pub fn mount(&mut self, sink: S) {
        self.sink = Some(sink);
        self.rebuild();
    }

    /// Withdraw the live set and hand the rendering layer back
    pub fn unmount(&mut self) -> Option<S> {
        let mut sink = self.sink.take()?;
        self.live = sync(std::mem::take(&mut self.live), Vec::new());
        sink.apply(&self.live.ranges);
        Some(sink)
    }

    pub fn on_buffer_changed(&mut self, text: impl Into<Arc<str>>) {
        self.buffer = self.buffer.with_text(text);
        self.dirty = true;
        self.rebuild();
    }

    /// Only a different list (not an equal copy of the same list) triggers a rebuild
    pub fn on_identifiers_changed(&mut self, identifiers: Arc<[String]>) {
        if Arc::ptr_eq(&self.identifiers, &identifiers) {
            return;
        }
        self.identifiers = identifiers;
        self.names_changed = true;
        self.rebuild();
    }

    pub fn on_resize(&mut self, size: Size) {
        if let Some(sink) = self.sink.as_mut() {
            sink.layout(size);
        }
    }

    /// Rebuild only if something changed since the last build.
    ///
    /// Returns whether a new set was applied.
    pub fn refresh(&mut self) -> bool {
        if self.dirty || self.names_changed {
            self.rebuild()
        } else {
            false
        }
    }

    fn rebuild(&mut self) -> bool {
        let Some(sink) = self.sink.as_mut() else {
            tracing::debug!(buffer = self.buffer.index, "no sink mounted, deferring build");
            return false;
        };

        let ranges = self.builder.build(self.buffer.text(), &self.identifiers[..]);
        self.live = sync(std::mem::take(&mut self.live), ranges);
        sink.apply(&self.live.ranges);
        self.dirty = false;
        self.names_changed = false;

        tracing::debug!(
            buffer = self.buffer.index,
            generation = self.live.generation,
            ranges = self.live.len(),
            "applied decorations"
        );
        true
    }
}
