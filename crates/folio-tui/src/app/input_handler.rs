//! Keyboard input handling for the application.
//!
//! Processes key events and delegates to appropriate handlers based on
//! current application state (help, form editing, mobile overlay, browsing).

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use folio_core::core::section::SectionId;

use crate::action::AppAction;
use crate::components::{Component, FormOutcome};

use super::App;

impl App {
    /// Handle keyboard input with delegated responsibility.
    pub(crate) fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        // 1. Ctrl+C always quits
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // 2. Overlay handling (highest priority)
        if self.handle_help_keys(code) {
            return;
        }

        // 3. Form editing captures everything else
        if self.editor.is_editing() {
            self.handle_form_key(KeyEvent::new(code, modifiers));
            return;
        }

        // 4. Mobile overlay menu
        if !self.navigation.content_visible(self.viewport_class())
            && self.handle_menu_keys(code, modifiers)
        {
            return;
        }

        // 5. Global keybindings
        self.handle_global_keys(code);
    }

    /// Returns true if the key was handled by the help overlay.
    fn handle_help_keys(&mut self, code: KeyCode) -> bool {
        if !self.show_help {
            return false;
        }
        if matches!(code, KeyCode::Char('?') | KeyCode::Esc) {
            self.show_help = false;
        }
        true
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        match self.editor.handle_key(key, self.contact.form_mut()) {
            FormOutcome::Submit => {
                let _ = self.action_tx.send(AppAction::SubmitContact);
            }
            FormOutcome::Leave => {
                self.status_bar.set_editing(false);
            }
            FormOutcome::Consumed => {}
        }
    }

    /// Keys for the open mobile overlay. Returns true if handled.
    fn handle_menu_keys(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        if self.drawer.handle_key(KeyEvent::new(code, modifiers)) {
            return true;
        }
        match code {
            KeyCode::Enter => {
                let _ = self
                    .action_tx
                    .send(AppAction::SelectSection(self.drawer.cursor()));
                true
            }
            KeyCode::Esc => {
                let _ = self.action_tx.send(AppAction::CloseNavigation);
                true
            }
            _ => false,
        }
    }

    fn handle_global_keys(&mut self, code: KeyCode) {
        let action = match code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => AppAction::Quit,
            KeyCode::Char('?') => {
                self.show_help = true;
                return;
            }
            KeyCode::Char('m') | KeyCode::Tab => AppAction::ToggleNavigation,
            KeyCode::Char(c @ '1'..='4') => {
                let index = c as usize - '1' as usize;
                match SectionId::from_index(index) {
                    Some(id) => AppAction::SelectSection(id),
                    None => return,
                }
            }
            KeyCode::Char('n') | KeyCode::Char(']') => {
                AppAction::SelectSection(self.tracker.active().next())
            }
            KeyCode::Char('p') | KeyCode::Char('[') => {
                AppAction::SelectSection(self.tracker.active().previous())
            }
            KeyCode::Up | KeyCode::Char('k') => AppAction::ScrollBy(-1),
            KeyCode::Down | KeyCode::Char('j') => AppAction::ScrollBy(1),
            KeyCode::PageUp => AppAction::ScrollBy(-(self.page_rows() as i32)),
            KeyCode::PageDown | KeyCode::Char(' ') => AppAction::ScrollBy(self.page_rows() as i32),
            KeyCode::Home | KeyCode::Char('g') | KeyCode::Char('t') => AppAction::ScrollToTop,
            KeyCode::End | KeyCode::Char('G') => AppAction::ScrollToEnd,
            KeyCode::Backspace | KeyCode::Char('b') => AppAction::HistoryBack,
            KeyCode::Char('x') => AppAction::DismissNotice,
            KeyCode::Char('c') => {
                self.begin_contact_form();
                return;
            }
            _ => return,
        };
        let _ = self.action_tx.send(action);
    }

    fn page_rows(&self) -> u32 {
        self.viewport.height().saturating_sub(1).max(1)
    }

    /// Navigate to the contact section and focus the first field.
    fn begin_contact_form(&mut self) {
        self.editor.begin();
        self.status_bar.set_editing(true);
        let _ = self
            .action_tx
            .send(AppAction::SelectSection(SectionId::Contact));
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers};
    use folio_core::contact::FormField;
    use folio_core::core::navigation::ViewportClass;
    use folio_core::core::section::SectionId;

    use super::super::tests::{DESKTOP, MOBILE, app, finish_scroll};
    use crate::app::App;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(code, KeyModifiers::NONE);
        app.process_actions();
    }

    #[test]
    fn test_quit_keys() {
        let mut first = app(DESKTOP);
        press(&mut first, KeyCode::Char('q'));
        assert!(first.should_quit);

        let mut second = app(DESKTOP);
        second.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(second.should_quit);
    }

    #[test]
    fn test_number_keys_select_sections() {
        let mut app = app(DESKTOP);
        press(&mut app, KeyCode::Char('3'));
        finish_scroll(&mut app);
        assert_eq!(app.tracker.active(), SectionId::Projects);
        assert_eq!(app.history.fragment(), "#projects");
    }

    #[test]
    fn test_next_and_previous_section() {
        let mut app = app(DESKTOP);
        press(&mut app, KeyCode::Char('n'));
        finish_scroll(&mut app);
        assert_eq!(app.tracker.active(), SectionId::About);

        press(&mut app, KeyCode::Char('p'));
        finish_scroll(&mut app);
        assert_eq!(app.tracker.active(), SectionId::Home);
    }

    #[test]
    fn test_help_overlay_swallows_keys() {
        let mut app = app(DESKTOP);
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        press(&mut app, KeyCode::Esc);
        assert!(!app.show_help);
    }

    #[test]
    fn test_mobile_menu_keys() {
        let mut app = app(MOBILE);
        press(&mut app, KeyCode::Char('m'));
        assert!(app.navigation.is_open(ViewportClass::Mobile));

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.drawer.cursor(), SectionId::Projects);

        press(&mut app, KeyCode::Enter);
        assert!(!app.navigation.is_open(ViewportClass::Mobile));
        finish_scroll(&mut app);
        assert_eq!(app.tracker.active(), SectionId::Projects);
    }

    #[test]
    fn test_escape_closes_mobile_menu_before_quitting() {
        let mut app = app(MOBILE);
        press(&mut app, KeyCode::Char('m'));
        press(&mut app, KeyCode::Esc);
        assert!(!app.navigation.is_open(ViewportClass::Mobile));
        assert!(!app.should_quit);
    }

    #[test]
    fn test_contact_key_starts_editing() {
        let mut app = app(DESKTOP);
        press(&mut app, KeyCode::Char('c'));
        assert!(app.editor.is_editing());
        assert_eq!(app.history.fragment(), "#contact");

        for c in "Ada".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        // 'q' is text while editing
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.contact.form().field(FormField::Name), "Adaq");

        press(&mut app, KeyCode::Esc);
        assert!(!app.editor.is_editing());
    }

    #[test]
    fn test_manual_scroll_keys() {
        let mut app = app(DESKTOP);
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.viewport.offset(), 2);
        press(&mut app, KeyCode::Char('g'));
        finish_scroll(&mut app);
        assert_eq!(app.viewport.offset(), 0);
        press(&mut app, KeyCode::Char('G'));
        assert_eq!(app.viewport.offset(), app.viewport.max_offset());
    }
}
