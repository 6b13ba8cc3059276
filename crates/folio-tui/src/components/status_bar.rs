//! Status bar component.
//!
//! Displays keybindings, the current fragment and status messages at the
//! bottom of the screen.

use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::Component;

/// Key binding display item.
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub key: &'static str,
    pub action: &'static str,
}

impl KeyBinding {
    pub const fn new(key: &'static str, action: &'static str) -> Self {
        Self { key, action }
    }
}

/// Status bar showing keybindings, the current fragment and messages.
pub struct StatusBar {
    message: String,
    bindings: Vec<KeyBinding>,
    /// URL-style fragment of the last navigation, e.g. `#about`
    fragment: String,
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusBar {
    /// Create a new status bar with default keybindings.
    pub fn new() -> Self {
        Self {
            message: String::new(),
            bindings: Self::browse_bindings(),
            fragment: String::new(),
        }
    }

    /// Set a status message.
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    pub fn set_fragment(&mut self, fragment: impl Into<String>) {
        self.fragment = fragment.into();
    }

    /// Switch between browsing and form editing bindings.
    pub fn set_editing(&mut self, editing: bool) {
        self.bindings = if editing {
            Self::editing_bindings()
        } else {
            Self::browse_bindings()
        };
    }

    fn browse_bindings() -> Vec<KeyBinding> {
        vec![
            KeyBinding::new("1-4", "Section"),
            KeyBinding::new("↑↓", "Scroll"),
            KeyBinding::new("m", "Menu"),
            KeyBinding::new("c", "Contact"),
            KeyBinding::new("?", "Help"),
            KeyBinding::new("q", "Quit"),
        ]
    }

    fn editing_bindings() -> Vec<KeyBinding> {
        vec![
            KeyBinding::new("Tab", "Field"),
            KeyBinding::new("Ctrl+S", "Send"),
            KeyBinding::new("Esc", "Done"),
        ]
    }
}

impl Component for StatusBar {
    fn draw(&mut self, frame: &mut Frame, area: Rect, _focused: bool) {
        let mut spans: Vec<Span> = Vec::new();

        // Add keybindings
        for (i, binding) in self.bindings.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
            }
            spans.push(Span::styled(
                format!(" {} ", binding.key),
                Style::default().fg(Color::Yellow),
            ));
            spans.push(Span::raw(binding.action));
        }

        if !self.fragment.is_empty() {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
            spans.push(Span::styled(
                self.fragment.clone(),
                Style::default().fg(Color::Cyan),
            ));
        }

        // Add message if present
        if !self.message.is_empty() {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
            spans.push(Span::styled(
                self.message.clone(),
                Style::default().fg(Color::Green),
            ));
        }

        let paragraph = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );

        frame.render_widget(paragraph, area);
    }

    fn handle_key(&mut self, _key: KeyEvent) -> bool {
        // Status bar doesn't handle keys
        false
    }
}
