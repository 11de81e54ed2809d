//! Owning map from host window identity to its layout record.

use std::collections::BTreeMap;

use crate::layout::WindowRecord;

/// One-to-one association between host windows and their [`WindowRecord`]s.
///
/// Attachment happens once, at window creation; lookup runs on every draw
/// call to classify the window (content, parameter window, or unrecognized).
#[derive(Debug, Clone)]
pub struct WindowRegistry<W: Copy + Eq + Ord> {
    records: BTreeMap<W, WindowRecord>,
}

impl<W: Copy + Eq + Ord> Default for WindowRegistry<W> {
    fn default() -> Self {
        Self {
            records: BTreeMap::new(),
        }
    }
}

impl<W: Copy + Eq + Ord + std::fmt::Debug> WindowRegistry<W> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Associate `record` with `window`. Each window is attached exactly once
    /// at creation; a second attach replaces the record and is logged.
    pub fn attach(&mut self, window: W, record: WindowRecord) {
        if let Some(previous) = self.records.insert(window, record) {
            tracing::warn!(?window, ?previous, "window record replaced");
        }
    }

    pub fn lookup(&self, window: W) -> Option<WindowRecord> {
        self.records.get(&window).copied()
    }

    /// Drop the record for a closed window.
    pub fn detach(&mut self, window: W) -> Option<WindowRecord> {
        self.records.remove(&window)
    }

    pub fn ids(&self) -> Vec<W> {
        self.records.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
