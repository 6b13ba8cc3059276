//! Application state and logic for the TUI.
//!
//! This module contains the core application state and the main run loop.
//! All portfolio decisions are delegated to folio-core; the App owns that
//! state and feeds it terminal events.
//!
//! ## Module Structure
//! - `mod.rs`: App struct definition, initialization, layout and rendering
//! - `action_handler.rs`: AppAction event processing
//! - `submit_handler.rs`: Background contact submission with tokio tasks
//! - `input_handler.rs`: Keyboard event processing

mod action_handler;
mod input_handler;
mod submit_handler;

use std::io::Stdout;

use folio_core::contact::{ContactController, Notice};
use folio_core::core::history::FragmentHistory;
use folio_core::core::navigation::{
    NavPresentation, NavigationController, Scroller, ViewportClass,
};
use folio_core::core::profile::Profile;
use folio_core::core::registry::SectionRegistry;
use folio_core::core::section::SectionId;
use folio_core::core::tracker::SectionTracker;
use folio_core::storage::config::{Config, LayoutConfig};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect, Size},
};
use tokio::sync::mpsc;

use crate::action::AppAction;
use crate::components::{
    BackToTop, Component, ContactFormEditor, Document, Drawer, HelpOverlay, NoticeToast,
    StatusBar, Viewport,
};
use crate::event::{Event, EventHandler, SubscriptionId, Subscriptions};
use crate::layout::main::{STATUS_BAR_HEIGHT, TICK_RATE_MS, TOP_BAR_HEIGHT};
use crate::layout::scroll::BACK_TO_TOP_ROWS;
use crate::service::{RelayStatus, SharedRelay, init_relay};

/// Screen regions for the current navigation presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Regions {
    pub nav: Option<Rect>,
    pub top_bar: Option<Rect>,
    pub content: Rect,
    pub status: Rect,
}

/// The main application state.
pub struct App {
    /// Whether the application should quit
    pub should_quit: bool,
    pub(crate) layout: LayoutConfig,
    pub(crate) profile: Profile,
    /// Terminal size in cells
    pub(crate) screen: Size,
    /// Section anchors measured from the current document
    pub(crate) registry: SectionRegistry,
    pub(crate) tracker: SectionTracker,
    pub(crate) navigation: NavigationController,
    pub(crate) history: FragmentHistory,
    pub(crate) viewport: Viewport,
    pub(crate) document: Document,
    pub(crate) contact: ContactController,
    pub(crate) editor: ContactFormEditor,
    pub(crate) notice: Option<Notice>,
    pub(crate) drawer: Drawer,
    pub(crate) status_bar: StatusBar,
    /// Relay for contact submissions (Arc-wrapped for async sharing)
    pub(crate) relay: Option<SharedRelay>,
    pub(crate) relay_status: RelayStatus,
    /// Action sender for async operations
    pub(crate) action_tx: mpsc::UnboundedSender<AppAction>,
    /// Action receiver for processing
    action_rx: mpsc::UnboundedReceiver<AppAction>,
    pub(crate) subscriptions: Subscriptions,
    subscription_ids: Vec<SubscriptionId>,
    /// Whether to show help overlay
    pub(crate) show_help: bool,
    /// Section requested at launch, applied after the first layout
    pending_section: Option<SectionId>,
}

impl App {
    /// Create a new application instance.
    pub fn new(config: Config, initial_section: Option<SectionId>, screen: Size) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let (relay, relay_status) = init_relay(&config);

        let Config {
            layout, profile, ..
        } = config;

        let mut status_bar = StatusBar::new();
        match &relay_status {
            RelayStatus::Ready(endpoint) => log::info!("contact relay at {}", endpoint),
            RelayStatus::Unavailable(reason) => {
                status_bar.set_message(format!("Contact form offline: {}", reason));
            }
        }

        let mut app = Self {
            should_quit: false,
            tracker: SectionTracker::with_lookahead(layout.lookahead_rows),
            contact: ContactController::new(profile.recipient()),
            drawer: Drawer::new(&profile),
            layout,
            profile,
            screen,
            registry: SectionRegistry::new(),
            navigation: NavigationController::new(),
            history: FragmentHistory::new(),
            viewport: Viewport::new(),
            document: Document::default(),
            editor: ContactFormEditor::new(),
            notice: None,
            status_bar,
            relay,
            relay_status,
            action_tx,
            action_rx,
            subscriptions: Subscriptions::new(),
            subscription_ids: Vec::new(),
            show_help: false,
            pending_section: initial_section,
        };
        app.subscribe_events();
        app.relayout();
        app
    }

    /// Register the handlers that turn terminal events into actions.
    fn subscribe_events(&mut self) {
        let scroll = self.subscriptions.subscribe(|event| match event {
            Event::Scroll(rows) => Some(AppAction::ScrollBy(*rows)),
            _ => None,
        });
        let resize = self.subscriptions.subscribe(|event| match event {
            Event::Resize(w, h) => Some(AppAction::Resize(*w, *h)),
            _ => None,
        });
        let tick = self.subscriptions.subscribe(|event| match event {
            Event::Tick(elapsed) => Some(AppAction::Tick(*elapsed)),
            _ => None,
        });
        self.subscription_ids = vec![scroll, resize, tick];
    }

    /// Remove the handlers registered by `subscribe_events`.
    pub(crate) fn unsubscribe_events(&mut self) {
        for id in self.subscription_ids.drain(..) {
            self.subscriptions.unsubscribe(id);
        }
        if !self.subscriptions.is_empty() {
            log::warn!("{} event subscriptions left after teardown", self.subscriptions.len());
        }
    }

    /// Run the main application loop.
    pub async fn run_async(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> std::io::Result<()> {
        let mut event_handler = EventHandler::new(TICK_RATE_MS);

        while !self.should_quit {
            // Process any pending actions
            self.process_actions();
            self.relayout();
            self.settle_tracker();

            // Draw the UI
            terminal.draw(|frame| self.draw(frame))?;

            // Handle events
            let event = event_handler.next()?;
            if let Event::Key(key) = &event {
                self.handle_key(key.code, key.modifiers);
            }
            for action in self.subscriptions.dispatch(&event) {
                self.handle_action(action);
            }
        }

        self.unsubscribe_events();
        Ok(())
    }

    /// Process pending actions from the action queue.
    pub(crate) fn process_actions(&mut self) {
        while let Ok(action) = self.action_rx.try_recv() {
            self.handle_action(action);
        }
    }

    /// Apply the latest observed scroll offset to the tracker.
    pub(crate) fn settle_tracker(&mut self) {
        if let Some(active) = self.tracker.settle(&self.registry) {
            self.drawer.set_active(active);
        }
    }

    pub(crate) fn viewport_class(&self) -> ViewportClass {
        ViewportClass::from_width(self.screen.width as u32, self.layout.breakpoint)
    }

    pub(crate) fn regions(&self, area: Rect) -> Regions {
        let [body, status] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(STATUS_BAR_HEIGHT)])
                .areas(area);

        match self.navigation.presentation(self.viewport_class()) {
            NavPresentation::Sidebar => {
                let [nav, content] = Layout::horizontal([
                    Constraint::Length(self.layout.drawer_width),
                    Constraint::Min(0),
                ])
                .areas(body);
                Regions {
                    nav: Some(nav),
                    top_bar: None,
                    content,
                    status,
                }
            }
            NavPresentation::CollapsedButton => Regions {
                nav: None,
                top_bar: None,
                content: body,
                status,
            },
            NavPresentation::TopBar { .. } => {
                let [bar, content] =
                    Layout::vertical([Constraint::Length(TOP_BAR_HEIGHT), Constraint::Min(0)])
                        .areas(body);
                Regions {
                    nav: None,
                    top_bar: Some(bar),
                    content,
                    status,
                }
            }
        }
    }

    /// Re-measure the document for the current screen and form state.
    ///
    /// Section anchors are registered even while the mobile overlay hides
    /// the document.
    pub(crate) fn relayout(&mut self) {
        let area = Rect::new(0, 0, self.screen.width, self.screen.height);
        let content = self.regions(area).content;
        let width = content.width.saturating_sub(2) as usize;
        let height = content.height.saturating_sub(2);

        let form_lines = self
            .editor
            .lines(self.contact.form(), self.contact.is_in_flight(), width);
        self.document = Document::build(&self.profile, width, height as usize, form_lines);
        self.viewport.set_bounds(height as u32, self.document.height());
        self.tracker.observe(self.viewport.offset());

        let registry = self.document.registry();
        if registry != self.registry {
            self.registry = registry;
            self.tracker.invalidate();
        }

        if let Some(id) = self.pending_section.take() {
            self.select_section(id);
            self.viewport.jump_to(self.viewport.target());
            self.tracker.observe(self.viewport.offset());
        }
    }

    /// Navigate to a section through the navigation controller.
    pub(crate) fn select_section(&mut self, id: SectionId) {
        let class = self.viewport_class();
        let selection = self.navigation.select_section(
            id,
            class,
            &self.registry,
            &mut self.viewport,
            &mut self.history,
        );
        if selection.overlay_closed {
            self.drawer.reset_cursor();
        }
        self.status_bar.set_fragment(self.history.fragment());
    }

    /// Browser-style back: scroll to the previous fragment's section.
    pub(crate) fn navigate_back(&mut self) {
        if self.history.is_empty() {
            return;
        }
        let target = self
            .history
            .back()
            .and_then(|id| self.registry.top_of(id))
            .unwrap_or(0);
        self.viewport.scroll_into_view(target);
        self.status_bar.set_fragment(self.history.fragment());
    }

    // =========================================================================
    // Drawing
    // =========================================================================

    /// Draw the UI.
    pub(crate) fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let regions = self.regions(area);
        let class = self.viewport_class();
        let presentation = self.navigation.presentation(class);

        if let Some(nav) = regions.nav {
            self.drawer.draw(frame, nav, false);
        }
        if let (Some(bar), NavPresentation::TopBar { overlay_open }) =
            (regions.top_bar, presentation)
        {
            self.drawer.draw_top_bar(frame, bar, overlay_open);
        }

        if self.navigation.content_visible(class) {
            let active = self.tracker.active();
            let title = format!("{} {}", active.icon(), active.label());
            self.document
                .render(frame, regions.content, &self.viewport, &title);
            if self.viewport.offset() > BACK_TO_TOP_ROWS {
                BackToTop::render(frame, regions.content);
            }
        } else {
            self.drawer.draw_overlay(frame, regions.content);
        }

        if presentation == NavPresentation::CollapsedButton {
            self.drawer.draw_open_button(frame, regions.content);
        }

        // Draw status bar
        self.status_bar.draw(frame, regions.status, false);

        if let Some(notice) = &self.notice {
            NoticeToast::render(frame, regions.content, notice);
        }

        // Draw help overlay if visible
        if self.show_help {
            HelpOverlay::render(frame, area);
        }
    }
}
