//! Application action handling.
//!
//! Processes AppAction events and updates application state accordingly.

use folio_core::core::navigation::Scroller;
use ratatui::layout::Size;

use crate::action::AppAction;

use super::App;

impl App {
    /// Handle an application action.
    pub(crate) fn handle_action(&mut self, action: AppAction) {
        match action {
            AppAction::Quit => {
                self.should_quit = true;
            }
            AppAction::SelectSection(id) => {
                self.select_section(id);
            }
            AppAction::ToggleNavigation => {
                let class = self.viewport_class();
                self.navigation.toggle(class);
                self.drawer.reset_cursor();
            }
            AppAction::CloseNavigation => {
                let class = self.viewport_class();
                self.navigation.close(class);
            }
            AppAction::ScrollBy(rows) => {
                self.viewport.scroll_by(rows);
                self.tracker.observe(self.viewport.offset());
            }
            AppAction::ScrollToTop => {
                self.viewport.scroll_to_top();
            }
            AppAction::ScrollToEnd => {
                self.viewport.jump_to(self.viewport.max_offset());
                self.tracker.observe(self.viewport.offset());
            }
            AppAction::Resize(width, height) => {
                self.screen = Size { width, height };
                self.relayout();
            }
            AppAction::Tick(elapsed) => {
                if self.viewport.step() {
                    self.tracker.observe(self.viewport.offset());
                }
                if self
                    .notice
                    .as_mut()
                    .is_some_and(|notice| !notice.tick(elapsed))
                {
                    self.notice = None;
                }
            }
            AppAction::SubmitContact => {
                self.submit_contact();
            }
            AppAction::ContactSettled(result) => {
                self.handle_contact_settled(result);
            }
            AppAction::DismissNotice => {
                self.notice = None;
            }
            AppAction::HistoryBack => {
                self.navigate_back();
            }
        }
    }
}
