//! Shared style definitions for TUI components.
//!
//! This module provides consistent styling across the drawer, document,
//! form and overlays.

use folio_core::contact::NoticeSeverity;
use ratatui::style::{Color, Modifier, Style};

// === Border Styles ===

/// Border style for focused components.
pub const BORDER_FOCUSED: Style = Style::new().fg(Color::Cyan);

/// Border style for unfocused components.
pub const BORDER_UNFOCUSED: Style = Style::new().fg(Color::DarkGray);

/// Get border style based on focus state.
#[inline]
pub fn border_style(focused: bool) -> Style {
    if focused {
        BORDER_FOCUSED
    } else {
        BORDER_UNFOCUSED
    }
}

// === Section Styles ===

/// Style for section headings in the document.
pub fn heading_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Style for the active entry in the drawer.
pub fn active_item_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Style for the highlighted (not yet chosen) entry in the overlay.
pub fn cursor_item_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Marker drawn before the active drawer entry.
pub const ACTIVE_MARKER: &str = "▶ ";

// === Text Styles ===

/// Style for dimmed/hint text.
pub const TEXT_DIM: Style = Style::new().fg(Color::DarkGray);

/// Style for warning/loading text.
pub const TEXT_WARNING: Style = Style::new().fg(Color::Yellow);

/// Style for links.
pub const TEXT_LINK: Style = Style::new().fg(Color::Blue);

/// Style for bold white text.
pub fn text_bold_white() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

/// Style for labels in key/value listings.
pub fn label_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

// === Input Styles ===

/// Style for the focused form field label.
pub fn focused_label_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Style for cursor indicator.
pub fn cursor_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::SLOW_BLINK)
}

/// Style for input text.
pub fn input_text_style() -> Style {
    Style::default().fg(Color::White)
}

/// Style for the submit button.
pub fn button_style(focused: bool, enabled: bool) -> Style {
    if !enabled {
        TEXT_DIM
    } else if focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    }
}

// === Notice Styles ===

/// Accent color for a notice.
pub fn notice_color(severity: NoticeSeverity) -> Color {
    match severity {
        NoticeSeverity::Success => Color::Green,
        NoticeSeverity::Error => Color::Red,
        NoticeSeverity::Info => Color::Blue,
    }
}
