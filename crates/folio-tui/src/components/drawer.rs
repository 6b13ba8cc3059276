//! Navigation drawer component.
//!
//! Draws whichever navigation the controller asks for: the pinned desktop
//! sidebar, the floating open button when it is collapsed, or the mobile top
//! bar with its full-screen overlay.

use crossterm::event::{KeyCode, KeyEvent};
use folio_core::core::profile::Profile;
use folio_core::core::section::SectionId;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};

use super::{Component, styles};
use crate::layout::controls::{OPEN_BUTTON_HEIGHT, OPEN_BUTTON_WIDTH};

/// Section menu shared by the sidebar and the overlay.
pub struct Drawer {
    name: String,
    role: String,
    initial: Option<char>,
    footer: String,
    /// Section highlighted by the tracker
    active: SectionId,
    /// Entry under the keyboard cursor (overlay only)
    cursor: SectionId,
    list_state: ListState,
}

impl Drawer {
    pub fn new(profile: &Profile) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            name: profile.name.clone(),
            role: profile.role.clone(),
            initial: profile.initial(),
            footer: profile.copyright_line(),
            active: SectionId::Home,
            cursor: SectionId::Home,
            list_state,
        }
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    pub fn set_active(&mut self, id: SectionId) {
        self.active = id;
        self.list_state.select(Some(id.index()));
    }

    /// Entry the overlay would open on Enter.
    pub fn cursor(&self) -> SectionId {
        self.cursor
    }

    /// Put the overlay cursor on the active section.
    pub fn reset_cursor(&mut self) {
        self.cursor = self.active;
    }

    fn items(&self, with_cursor: bool) -> Vec<ListItem<'static>> {
        SectionId::ALL
            .iter()
            .enumerate()
            .map(|(i, &id)| {
                let is_active = id == self.active;
                let style = if is_active {
                    styles::active_item_style()
                } else if with_cursor && id == self.cursor {
                    styles::cursor_item_style()
                } else {
                    styles::input_text_style()
                };
                let prefix = if is_active { styles::ACTIVE_MARKER } else { "  " };
                ListItem::new(Line::from(vec![
                    Span::raw(prefix),
                    Span::styled(format!("{} {} {}", i + 1, id.icon(), id.label()), style),
                ]))
            })
            .collect()
    }

    fn profile_header(&self) -> Vec<Line<'static>> {
        let initial = self.initial.map(|c| format!("[ {} ] ", c)).unwrap_or_default();
        vec![
            Line::from(Span::styled(
                format!("{}{}", initial, self.name),
                styles::text_bold_white(),
            )),
            Line::from(Span::styled(self.role.clone(), styles::TEXT_DIM)),
        ]
    }

    /// Floating control shown while the desktop drawer is collapsed.
    pub fn draw_open_button(&self, frame: &mut Frame, content: Rect) {
        let area = Rect {
            x: content.x,
            y: content.y,
            width: OPEN_BUTTON_WIDTH.min(content.width),
            height: OPEN_BUTTON_HEIGHT.min(content.height),
        };
        frame.render_widget(Clear, area);
        frame.render_widget(
            Paragraph::new(" ☰ m")
                .style(styles::cursor_item_style())
                .block(Block::default().borders(Borders::ALL).border_style(styles::BORDER_FOCUSED)),
            area,
        );
    }

    /// Persistent mobile top bar.
    pub fn draw_top_bar(&self, frame: &mut Frame, area: Rect, overlay_open: bool) {
        let toggle = if overlay_open { "✕ close (m)" } else { "☰ menu (m)" };
        let line = Line::from(vec![
            Span::styled(format!(" {} ", self.name), styles::text_bold_white()),
            Span::styled("│ ", styles::TEXT_DIM),
            Span::styled(
                format!("{} {} ", self.active.icon(), self.active.label()),
                styles::heading_style(),
            ),
            Span::styled("│ ", styles::TEXT_DIM),
            Span::styled(toggle, styles::TEXT_WARNING),
        ]);
        frame.render_widget(
            Paragraph::new(line).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(styles::BORDER_UNFOCUSED),
            ),
            area,
        );
    }

    /// Full-screen mobile overlay; hides the document.
    pub fn draw_overlay(&self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Clear, area);
        let block = Block::default()
            .title(" Menu ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(styles::BORDER_FOCUSED);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [header, list, footer] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .areas(inner);

        frame.render_widget(
            Paragraph::new(self.profile_header()).alignment(Alignment::Center),
            header,
        );
        frame.render_widget(List::new(self.items(true)), list);
        frame.render_widget(
            Paragraph::new(vec![
                Line::from(Span::styled("↑↓ choose · Enter go · m close", styles::TEXT_DIM)),
                Line::from(Span::styled(self.footer.clone(), styles::TEXT_DIM)),
            ])
            .alignment(Alignment::Center),
            footer,
        );
    }
}

impl Component for Drawer {
    /// Pinned desktop sidebar.
    fn draw(&mut self, frame: &mut Frame, area: Rect, focused: bool) {
        let block = Block::default()
            .title(" Navigation ")
            .borders(Borders::ALL)
            .border_style(styles::border_style(focused));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [header, list, footer] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .areas(inner);

        frame.render_widget(Paragraph::new(self.profile_header()), header);
        frame.render_stateful_widget(List::new(self.items(false)), list, &mut self.list_state);
        frame.render_widget(
            Paragraph::new(vec![
                Line::from(Span::styled("« m to collapse", styles::TEXT_DIM)),
                Line::from(Span::styled(self.footer.clone(), styles::TEXT_DIM)),
            ]),
            footer,
        );
    }

    /// Moves the overlay cursor.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor = self.cursor.previous();
                true
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.cursor = self.cursor.next();
                true
            }
            KeyCode::Home => {
                self.cursor = SectionId::Home;
                true
            }
            KeyCode::End => {
                self.cursor = SectionId::Contact;
                true
            }
            _ => false,
        }
    }
}
