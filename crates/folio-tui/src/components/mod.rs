//! UI Components for folio-tui.
//!
//! This module provides reusable UI components with a common interface.

use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::Rect;

mod contact_form;
mod document;
mod drawer;
mod floating;
mod help_overlay;
mod status_bar;
pub mod styles;
mod viewport;

pub use contact_form::{ContactFormEditor, FormOutcome};
pub use document::Document;
pub use drawer::Drawer;
pub use floating::{BackToTop, NoticeToast};
pub use help_overlay::HelpOverlay;
pub use status_bar::StatusBar;
pub use viewport::Viewport;

/// Common trait for all UI components.
pub trait Component {
    /// Draw the component within the given area.
    /// Takes `&mut self` to support stateful widgets like ListState.
    fn draw(&mut self, frame: &mut Frame, area: Rect, focused: bool);

    /// Handle keyboard input. Returns true if the event was consumed.
    fn handle_key(&mut self, key: KeyEvent) -> bool;
}
