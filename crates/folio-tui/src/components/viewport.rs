//! Scroll position of the document.
//!
//! Manual scrolling (keys, mouse wheel) moves immediately. Navigation
//! requests go through [`Scroller`] and ease toward their target over
//! several ticks.

use folio_core::core::navigation::Scroller;

use crate::layout::scroll::EASING_DIVISOR;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Viewport {
    offset: u32,
    target: u32,
    height: u32,
    content_height: u32,
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    /// First visible document row.
    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_animating(&self) -> bool {
        self.offset != self.target
    }

    pub fn max_offset(&self) -> u32 {
        self.content_height.saturating_sub(self.height)
    }

    /// Update visible and total heights, clamping the position.
    pub fn set_bounds(&mut self, height: u32, content_height: u32) {
        self.height = height;
        self.content_height = content_height;
        let max = self.max_offset();
        self.offset = self.offset.min(max);
        self.target = self.target.min(max);
    }

    /// Scroll immediately, cancelling any animation.
    pub fn scroll_by(&mut self, rows: i32) {
        let next = if rows.is_negative() {
            self.offset.saturating_sub(rows.unsigned_abs())
        } else {
            self.offset.saturating_add(rows.unsigned_abs())
        };
        self.jump_to(next);
    }

    /// Move to `offset` without animation.
    pub fn jump_to(&mut self, offset: u32) {
        self.offset = offset.min(self.max_offset());
        self.target = self.offset;
    }

    /// Advance the animation by one frame. Returns `true` if the offset moved.
    pub fn step(&mut self) -> bool {
        if !self.is_animating() {
            return false;
        }
        let distance = self.offset.abs_diff(self.target);
        let delta = (distance / EASING_DIVISOR).max(1);
        if self.offset < self.target {
            self.offset += delta;
        } else {
            self.offset -= delta;
        }
        true
    }

    /// Rows of a document of `len` lines that are currently visible.
    pub fn visible_range(&self, len: usize) -> std::ops::Range<usize> {
        let start = (self.offset as usize).min(len);
        let end = start.saturating_add(self.height as usize).min(len);
        start..end
    }
}

impl Scroller for Viewport {
    fn scroll_into_view(&mut self, top: u32) {
        self.target = top.min(self.max_offset());
    }
}
