//! Address fragment history.
//!
//! Every navigation selection pushes a `#<section>` entry, mirroring how a
//! browser records in-page anchors. Entries are never replaced.

use super::section::SectionId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FragmentHistory {
    entries: Vec<SectionId>,
}

impl FragmentHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push `#<id>` as the newest entry.
    pub fn push(&mut self, id: SectionId) {
        self.entries.push(id);
    }

    /// Section of the newest entry, if any.
    pub fn current(&self) -> Option<SectionId> {
        self.entries.last().copied()
    }

    /// Current address fragment, empty when nothing was selected yet.
    pub fn fragment(&self) -> String {
        self.current().map(SectionId::fragment).unwrap_or_default()
    }

    /// Drop the newest entry and return the one that becomes current.
    pub fn back(&mut self) -> Option<SectionId> {
        self.entries.pop()?;
        self.current()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[SectionId] {
        &self.entries
    }
}
