//! Per-view text slots.

use crate::view::View;
use std::collections::BTreeMap;

/// Authoritative text for every slotted view, plus the downloadable report.
///
/// Slots are never removed. Content is opaque: no validation happens here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BufferStore {
    slots: BTreeMap<View, String>,
    report: String,
}

impl BufferStore {
    /// Empty result slots, Source pre-seeded with `source`.
    pub fn with_source(source: impl Into<String>) -> Self {
        let mut store = Self::default();
        store.store(View::Source, source);
        store
    }

    /// Overwrite the slot for `view`. The dashboard trigger maps to its leaf.
    pub fn store(&mut self, view: View, text: impl Into<String>) {
        self.slots.insert(view.resolve(), text.into());
    }

    /// Stored text for `view`, or `""` if never written.
    pub fn load(&self, view: View) -> &str {
        self.slots
            .get(&view.resolve())
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn set_report(&mut self, text: impl Into<String>) {
        self.report = text.into();
    }

    pub fn report(&self) -> &str {
        &self.report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unwritten_slot_is_empty() {
        let store = BufferStore::default();
        for view in View::SLOTTED {
            assert_eq!(store.load(view), "");
        }
        assert_eq!(store.report(), "");
    }

    #[test]
    fn store_overwrites() {
        let mut store = BufferStore::with_source("max: x;");
        assert_eq!(store.load(View::Source), "max: x;");
        store.store(View::Source, "");
        assert_eq!(store.load(View::Source), "");
    }

    #[test]
    fn result_trigger_writes_objective_slot() {
        let mut store = BufferStore::default();
        store.store(View::Result, "42");
        assert_eq!(store.load(View::Objective), "42");
    }
}
