//! Contact form editor.
//!
//! Renders the form as document lines inside the contact section and routes
//! keys to the focused field while editing.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use folio_core::contact::{ContactForm, FormField};
use folio_core::utils::text::wrap_paragraphs;
use ratatui::text::{Line, Span};

use super::styles;
use crate::layout::form::{LABEL_WIDTH, MESSAGE_MIN_ROWS};

/// Element of the form that receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Field(FormField),
    Submit,
}

impl FormFocus {
    pub fn next(self) -> Self {
        match self {
            FormFocus::Field(FormField::Message) => FormFocus::Submit,
            FormFocus::Field(field) => FormFocus::Field(field.next()),
            FormFocus::Submit => FormFocus::Field(FormField::Name),
        }
    }

    pub fn previous(self) -> Self {
        match self {
            FormFocus::Field(FormField::Name) => FormFocus::Submit,
            FormFocus::Field(field) => FormFocus::Field(field.previous()),
            FormFocus::Submit => FormFocus::Field(FormField::Message),
        }
    }
}

/// Result of a key press while editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormOutcome {
    /// Key edited the form or moved focus
    Consumed,
    /// User asked to send the form
    Submit,
    /// User left the form
    Leave,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormEditor {
    focus: Option<FormFocus>,
}

impl ContactFormEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_editing(&self) -> bool {
        self.focus.is_some()
    }

    pub fn focus(&self) -> Option<FormFocus> {
        self.focus
    }

    /// Start editing at the first field.
    pub fn begin(&mut self) {
        self.focus = Some(FormFocus::Field(FormField::Name));
    }

    pub fn end(&mut self) {
        self.focus = None;
    }

    pub fn handle_key(&mut self, key: KeyEvent, form: &mut ContactForm) -> FormOutcome {
        let Some(focus) = self.focus else {
            return FormOutcome::Leave;
        };

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('s') => FormOutcome::Submit,
                _ => FormOutcome::Consumed,
            };
        }

        match key.code {
            KeyCode::Esc => {
                self.end();
                return FormOutcome::Leave;
            }
            KeyCode::Tab | KeyCode::Down => self.focus = Some(focus.next()),
            KeyCode::BackTab | KeyCode::Up => self.focus = Some(focus.previous()),
            KeyCode::Enter => match focus {
                FormFocus::Submit => return FormOutcome::Submit,
                FormFocus::Field(field) if field.is_multiline() => {
                    form.field_mut(field).push('\n');
                }
                FormFocus::Field(_) => self.focus = Some(focus.next()),
            },
            KeyCode::Backspace => {
                if let FormFocus::Field(field) = focus {
                    form.field_mut(field).pop();
                }
            }
            KeyCode::Char(c) => {
                if let FormFocus::Field(field) = focus {
                    form.field_mut(field).push(c);
                }
            }
            _ => {}
        }
        FormOutcome::Consumed
    }

    /// Document lines for the form at the given width.
    pub fn lines(&self, form: &ContactForm, in_flight: bool, width: usize) -> Vec<Line<'static>> {
        let value_width = width.saturating_sub(LABEL_WIDTH + 3).max(1);
        let mut lines = vec![Line::from(Span::styled(
            "Send a message",
            styles::text_bold_white(),
        ))];

        for field in FormField::ALL {
            let focused = self.focus() == Some(FormFocus::Field(field));
            let label_style = if focused {
                styles::focused_label_style()
            } else {
                styles::label_style()
            };

            let mut rows = wrap_paragraphs(form.field(field), value_width);
            if field.is_multiline() {
                while rows.len() < MESSAGE_MIN_ROWS {
                    rows.push(String::new());
                }
            }

            let last = rows.len() - 1;
            for (i, row) in rows.into_iter().enumerate() {
                let label = if i == 0 { field.label() } else { "" };
                let mut spans = vec![
                    Span::styled(format!("{:<width$}", label, width = LABEL_WIDTH), label_style),
                    Span::styled(" ┃ ", styles::TEXT_DIM),
                    Span::styled(row, styles::input_text_style()),
                ];
                if focused && i == last {
                    spans.push(Span::styled("▏", styles::cursor_style()));
                }
                lines.push(Line::from(spans));
            }
        }

        lines.push(Line::from(""));
        let button = if in_flight {
            "[ Sending... ]"
        } else {
            "[ Send Message ]"
        };
        let focused = self.focus() == Some(FormFocus::Submit);
        lines.push(Line::from(vec![
            Span::raw(" ".repeat(LABEL_WIDTH + 3)),
            Span::styled(button, styles::button_style(focused, !in_flight)),
        ]));

        let hint = if self.is_editing() {
            "Tab next field · Enter on button or Ctrl+S to send · Esc to stop editing"
        } else {
            "Press c to write a message"
        };
        lines.push(Line::from(Span::styled(hint, styles::TEXT_DIM)));
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(editor: &mut ContactFormEditor, form: &mut ContactForm, code: KeyCode) -> FormOutcome {
        editor.handle_key(KeyEvent::new(code, KeyModifiers::NONE), form)
    }

    fn type_text(editor: &mut ContactFormEditor, form: &mut ContactForm, text: &str) {
        for c in text.chars() {
            press(editor, form, KeyCode::Char(c));
        }
    }

    fn text_of(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_typing_fills_focused_field() {
        let mut editor = ContactFormEditor::new();
        let mut form = ContactForm::new();
        editor.begin();

        type_text(&mut editor, &mut form, "Ada");
        press(&mut editor, &mut form, KeyCode::Enter);
        type_text(&mut editor, &mut form, "ada@example.com");
        press(&mut editor, &mut form, KeyCode::Backspace);

        assert_eq!(form.field(FormField::Name), "Ada");
        assert_eq!(form.field(FormField::Email), "ada@example.co");
        assert_eq!(editor.focus(), Some(FormFocus::Field(FormField::Email)));
    }

    #[test]
    fn test_enter_in_message_inserts_newline() {
        let mut editor = ContactFormEditor::new();
        let mut form = ContactForm::new();
        editor.begin();
        for _ in 0..3 {
            press(&mut editor, &mut form, KeyCode::Tab);
        }
        type_text(&mut editor, &mut form, "a");
        press(&mut editor, &mut form, KeyCode::Enter);
        type_text(&mut editor, &mut form, "b");
        assert_eq!(form.field(FormField::Message), "a\nb");
    }

    #[test]
    fn test_submit_from_button_and_shortcut() {
        let mut editor = ContactFormEditor::new();
        let mut form = ContactForm::new();
        editor.begin();

        let ctrl_s = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert_eq!(editor.handle_key(ctrl_s, &mut form), FormOutcome::Submit);
        assert!(form.is_blank());

        press(&mut editor, &mut form, KeyCode::BackTab);
        assert_eq!(editor.focus(), Some(FormFocus::Submit));
        assert_eq!(
            press(&mut editor, &mut form, KeyCode::Enter),
            FormOutcome::Submit
        );
    }

    #[test]
    fn test_escape_leaves_form() {
        let mut editor = ContactFormEditor::new();
        let mut form = ContactForm::new();
        editor.begin();
        assert_eq!(press(&mut editor, &mut form, KeyCode::Esc), FormOutcome::Leave);
        assert!(!editor.is_editing());
    }

    #[test]
    fn test_focus_cycle_wraps() {
        let mut focus = FormFocus::Field(FormField::Name);
        for _ in 0..5 {
            focus = focus.next();
        }
        assert_eq!(focus, FormFocus::Field(FormField::Name));
        assert_eq!(focus.previous(), FormFocus::Submit);
    }

    #[test]
    fn test_lines_show_values_and_button_state() {
        let editor = ContactFormEditor::new();
        let mut form = ContactForm::new();
        form.set(FormField::Subject, "Hello");

        let idle: Vec<String> = editor.lines(&form, false, 60).iter().map(text_of).collect();
        assert!(idle.iter().any(|l| l.contains("Hello")));
        assert!(idle.iter().any(|l| l.contains("[ Send Message ]")));

        let busy: Vec<String> = editor.lines(&form, true, 60).iter().map(text_of).collect();
        assert!(busy.iter().any(|l| l.contains("[ Sending... ]")));
    }

    #[test]
    fn test_message_reserves_rows() {
        let editor = ContactFormEditor::new();
        let form = ContactForm::new();
        let lines = editor.lines(&form, false, 60);
        // heading, name, email, subject, 3 message rows, blank, button, hint
        assert_eq!(lines.len(), 1 + 3 + MESSAGE_MIN_ROWS + 3);
    }
}
