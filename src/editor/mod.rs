//! Editor shells
//!
//! Thin hosts around the decoration engine. `SingleEditor` owns one buffer
//! and may mark the experimental include; `TabbedEditor` owns several
//! buffers, one live decoration set each, and never runs the include pass.

use crate::decoration::{RangeSink, Synchronizer};
use crate::error::{AnnotateError, ErrorType, Result};
use crate::settings::AnnotatorOptions;
use crate::source::SourceBuffer;
use crate::term::Size;
use std::sync::Arc;

/// Host for a single source buffer
pub struct SingleEditor<S> {
    sync: Synchronizer<S>,
}

impl<S: RangeSink> SingleEditor<S> {
    pub fn new(text: impl Into<Arc<str>>, options: &AnnotatorOptions) -> Self {
        Self {
            sync: Synchronizer::new(
                SourceBuffer::new(0, text),
                options,
                options.include_highlight,
            ),
        }
    }

    pub fn synchronizer(&self) -> &Synchronizer<S> {
        &self.sync
    }

    pub fn text(&self) -> &str {
        self.sync.buffer().text()
    }

    pub fn sink_mut(&mut self) -> Option<&mut S> {
        self.sync.sink_mut()
    }

    pub fn mount(&mut self, sink: S) {
        self.sync.mount(sink);
    }

    pub fn unmount(&mut self) -> Option<S> {
        self.sync.unmount()
    }

    pub fn on_buffer_changed(&mut self, text: impl Into<Arc<str>>) {
        self.sync.on_buffer_changed(text);
    }

    pub fn on_identifiers_changed(&mut self, identifiers: Arc<[String]>) {
        self.sync.on_identifiers_changed(identifiers);
    }

    pub fn on_resize(&mut self, size: Size) {
        self.sync.on_resize(size);
    }

    pub fn refresh(&mut self) -> bool {
        self.sync.refresh()
    }
}

/// Host for N parallel buffers shown as tabs
pub struct TabbedEditor<S> {
    tabs: Vec<Synchronizer<S>>,
}

impl<S: RangeSink> TabbedEditor<S> {
    /// Requires at least one buffer
    pub fn new<T: Into<Arc<str>>>(
        texts: impl IntoIterator<Item = T>,
        options: &AnnotatorOptions,
    ) -> Result<Self> {
        let tabs: Vec<_> = texts
            .into_iter()
            .enumerate()
            .map(|(index, text)| Synchronizer::new(SourceBuffer::new(index, text), options, false))
            .collect();
        if tabs.is_empty() {
            return Err(AnnotateError::new(
                ErrorType::Internal,
                "NO_TABS",
                "A tabbed editor needs at least one buffer",
            ));
        }
        Ok(Self { tabs })
    }

    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    pub fn tab(&self, index: usize) -> Option<&Synchronizer<S>> {
        self.tabs.get(index)
    }

    pub fn tab_mut(&mut self, index: usize) -> Option<&mut Synchronizer<S>> {
        self.tabs.get_mut(index)
    }

    pub fn tabs(&self) -> impl Iterator<Item = &Synchronizer<S>> {
        self.tabs.iter()
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.tabs.len() {
            Ok(())
        } else {
            Err(AnnotateError::new(
                ErrorType::Internal,
                "TAB_OUT_OF_RANGE",
                format!("Tab {index} does not exist ({} tabs)", self.tabs.len()),
            ))
        }
    }

    /// Mount one sink per tab, created on demand from the tab index
    pub fn mount_with(&mut self, mut make_sink: impl FnMut(usize) -> S) {
        for (index, tab) in self.tabs.iter_mut().enumerate() {
            tab.mount(make_sink(index));
        }
    }

    /// Unmount every tab, returning the sinks in tab order
    pub fn unmount(&mut self) -> Vec<S> {
        self.tabs.iter_mut().filter_map(Synchronizer::unmount).collect()
    }

    pub fn on_buffer_changed(&mut self, index: usize, text: impl Into<Arc<str>>) -> Result<()> {
        self.check_index(index)?;
        self.tabs[index].on_buffer_changed(text);
        Ok(())
    }

    /// Every tab is decorated from the same list
    pub fn on_identifiers_changed(&mut self, identifiers: Arc<[String]>) {
        for tab in &mut self.tabs {
            tab.on_identifiers_changed(Arc::clone(&identifiers));
        }
    }

    pub fn on_resize(&mut self, size: Size) {
        for tab in &mut self.tabs {
            tab.on_resize(size);
        }
    }

    /// Returns how many tabs applied a new set
    pub fn refresh(&mut self) -> usize {
        self.tabs
            .iter_mut()
            .map(Synchronizer::refresh)
            .filter(|applied| *applied)
            .count()
    }
}
