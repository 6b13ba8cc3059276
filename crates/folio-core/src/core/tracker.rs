//! Scroll-driven active section tracking.
//!
//! Maps a continuous scroll offset to the section currently "in view". A
//! section becomes active slightly before its top edge reaches the top of the
//! viewport: the offset is probed `lookahead` units further down.

use log::debug;

use super::registry::SectionRegistry;
use super::section::SectionId;

/// Default lookahead added to the scroll offset before probing.
pub const DEFAULT_LOOKAHEAD: u32 = 100;

/// Bottom-most section whose top is at or above `offset + lookahead`.
///
/// Anchors must be in document order. Returns `None` when the probe is above
/// every anchor.
pub fn active_section(
    offset: u32,
    lookahead: u32,
    anchors: impl DoubleEndedIterator<Item = (SectionId, u32)>,
) -> Option<SectionId> {
    let probe = offset.saturating_add(lookahead);
    anchors
        .rev()
        .find(|&(_, top)| top <= probe)
        .map(|(id, _)| id)
}

/// Tracks the active section across scroll events.
#[derive(Debug, Clone)]
pub struct SectionTracker {
    active: SectionId,
    lookahead: u32,
    /// Offset of the last recomputation.
    last_offset: Option<u32>,
    /// Offset observed since the last settle, if any.
    pending: Option<u32>,
}

impl Default for SectionTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionTracker {
    pub fn new() -> Self {
        Self::with_lookahead(DEFAULT_LOOKAHEAD)
    }

    pub fn with_lookahead(lookahead: u32) -> Self {
        Self {
            active: SectionId::Home,
            lookahead,
            last_offset: None,
            pending: None,
        }
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    pub fn lookahead(&self) -> u32 {
        self.lookahead
    }

    /// Offset that is compared against section tops.
    pub fn probe(&self, offset: u32) -> u32 {
        offset.saturating_add(self.lookahead)
    }

    /// Recompute the active section for `offset`.
    ///
    /// Returns the new section when it changed. When no registered section
    /// qualifies the previous value is kept.
    pub fn recompute(&mut self, offset: u32, registry: &SectionRegistry) -> Option<SectionId> {
        self.last_offset = Some(offset);
        self.pending = None;

        let next = active_section(offset, self.lookahead, registry.anchors())?;
        if next == self.active {
            return None;
        }

        debug!(
            "active section {} -> {} at offset {}",
            self.active, next, offset
        );
        self.active = next;
        Some(next)
    }

    /// Record a scroll offset without recomputing.
    ///
    /// Several observations within one frame collapse into a single
    /// recomputation on [`settle`](Self::settle).
    pub fn observe(&mut self, offset: u32) {
        if self.last_offset == Some(offset) {
            self.pending = None;
        } else {
            self.pending = Some(offset);
        }
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Recompute once for the latest observed offset, if any.
    pub fn settle(&mut self, registry: &SectionRegistry) -> Option<SectionId> {
        let offset = self.pending.take()?;
        self.recompute(offset, registry)
    }

    /// Force the next settle to recompute, e.g. after the layout was
    /// re-measured and anchors moved.
    pub fn invalidate(&mut self) {
        if let Some(offset) = self.last_offset.take() {
            self.pending.get_or_insert(offset);
        }
    }
}
