//! Application actions for event-driven architecture.
//!
//! Implements Flux-like unidirectional data flow:
//! Event → AppAction → App State → Component Re-render

use std::time::Duration;

use folio_core::core::section::SectionId;

/// Application-level actions.
///
/// Event subscriptions, key handling and background tasks all emit actions;
/// the App processes them and updates state.
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    /// Quit the application
    Quit,

    /// Navigate to a section (scroll, collapse mobile overlay, push fragment)
    SelectSection(SectionId),

    /// Toggle the drawer (desktop) or overlay (mobile) for the current width
    ToggleNavigation,

    /// Close the drawer or overlay for the current width
    CloseNavigation,

    /// Scroll the document immediately by a number of rows
    ScrollBy(i32),

    /// Smooth scroll back to the top of the document
    ScrollToTop,

    /// Jump to the end of the document
    ScrollToEnd,

    /// Terminal was resized to (columns, rows)
    Resize(u16, u16),

    /// Time has passed since the previous tick
    Tick(Duration),

    /// Validate the contact form and send it in the background
    SubmitContact,

    /// Contact submission finished; error message on failure
    ContactSettled(Result<(), String>),

    /// Hide the current notice
    DismissNotice,

    /// Return to the previous fragment without recording a new one
    HistoryBack,
}
