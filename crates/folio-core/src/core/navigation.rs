//! Navigation drawer and overlay visibility.
//!
//! Wide viewports show a pinned sidebar that can be collapsed to a floating
//! open button. Narrow viewports show a persistent top bar and a full-screen
//! overlay. Each class keeps its own open flag, so crossing the breakpoint
//! restores whatever that class last showed.

use log::debug;

use super::history::FragmentHistory;
use super::registry::SectionRegistry;
use super::section::SectionId;

/// Widths below this are treated as mobile.
pub const DEFAULT_BREAKPOINT: u32 = 100;

/// Viewport class derived from the current width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportClass {
    Mobile,
    Desktop,
}

impl ViewportClass {
    pub fn from_width(width: u32, breakpoint: u32) -> Self {
        if width < breakpoint {
            ViewportClass::Mobile
        } else {
            ViewportClass::Desktop
        }
    }

    pub fn is_mobile(self) -> bool {
        self == ViewportClass::Mobile
    }
}

/// Something that can bring a document offset into view.
pub trait Scroller {
    /// Smoothly scroll so that `top` becomes the first visible offset.
    fn scroll_into_view(&mut self, top: u32);

    /// Back to the top of the document.
    fn scroll_to_top(&mut self) {
        self.scroll_into_view(0);
    }
}

/// What the presentation layer should draw for navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavPresentation {
    /// Desktop, drawer pinned with a close control.
    Sidebar,
    /// Desktop, drawer collapsed to a floating open control.
    CollapsedButton,
    /// Mobile top bar, with the full-screen overlay when open.
    TopBar { overlay_open: bool },
}

/// Outcome of a section selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub section: SectionId,
    /// Anchor the scroll was issued for, `None` when it was skipped.
    pub scrolled_to: Option<u32>,
    /// Whether the mobile overlay was collapsed by this selection.
    pub overlay_closed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationController {
    desktop_open: bool,
    mobile_open: bool,
}

impl Default for NavigationController {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationController {
    pub fn new() -> Self {
        Self {
            desktop_open: true,
            mobile_open: false,
        }
    }

    pub fn is_open(&self, class: ViewportClass) -> bool {
        match class {
            ViewportClass::Desktop => self.desktop_open,
            ViewportClass::Mobile => self.mobile_open,
        }
    }

    fn flag_mut(&mut self, class: ViewportClass) -> &mut bool {
        match class {
            ViewportClass::Desktop => &mut self.desktop_open,
            ViewportClass::Mobile => &mut self.mobile_open,
        }
    }

    pub fn toggle(&mut self, class: ViewportClass) {
        let flag = self.flag_mut(class);
        *flag = !*flag;
    }

    pub fn open(&mut self, class: ViewportClass) {
        *self.flag_mut(class) = true;
    }

    pub fn close(&mut self, class: ViewportClass) {
        *self.flag_mut(class) = false;
    }

    /// Navigate to a section.
    ///
    /// Scrolls to the registered anchor (skipped silently when the section is
    /// not registered), collapses the overlay on mobile and pushes the
    /// fragment. The active section is left to the tracker.
    pub fn select_section(
        &mut self,
        id: SectionId,
        class: ViewportClass,
        registry: &SectionRegistry,
        scroller: &mut dyn Scroller,
        history: &mut FragmentHistory,
    ) -> Selection {
        let scrolled_to = registry.top_of(id);
        match scrolled_to {
            Some(top) => scroller.scroll_into_view(top),
            None => debug!("no anchor registered for {}, skipping scroll", id),
        }

        let overlay_closed = class.is_mobile() && self.mobile_open;
        if class.is_mobile() {
            self.mobile_open = false;
        }

        history.push(id);

        Selection {
            section: id,
            scrolled_to,
            overlay_closed,
        }
    }

    pub fn presentation(&self, class: ViewportClass) -> NavPresentation {
        match class {
            ViewportClass::Desktop if self.desktop_open => NavPresentation::Sidebar,
            ViewportClass::Desktop => NavPresentation::CollapsedButton,
            ViewportClass::Mobile => NavPresentation::TopBar {
                overlay_open: self.mobile_open,
            },
        }
    }

    /// Content sections are hidden behind the open mobile overlay.
    pub fn content_visible(&self, class: ViewportClass) -> bool {
        !(class.is_mobile() && self.mobile_open)
    }
}
