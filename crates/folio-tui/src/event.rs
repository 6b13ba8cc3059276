//! Event handling for the TUI application.
//!
//! [`EventHandler`] polls crossterm for keyboard, mouse and resize events.
//! [`Subscriptions`] lets parts of the application register handlers that
//! turn those raw events into [`AppAction`]s.

use std::time::{Duration, Instant};

use crossterm::event::{
    self, Event as CrosstermEvent, KeyEvent, KeyEventKind, MouseEvent, MouseEventKind,
};

use crate::action::AppAction;
use crate::layout::scroll::WHEEL_ROWS;

/// Terminal events that the application can handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Keyboard input event
    Key(KeyEvent),
    /// Mouse wheel, in rows (positive is down)
    Scroll(i32),
    /// Terminal resize event
    Resize(u16, u16),
    /// Periodic tick carrying the time since the previous one
    Tick(Duration),
}

/// Event handler that polls for terminal events.
pub struct EventHandler {
    /// Tick rate for periodic updates
    tick_rate: Duration,
    last_tick: Instant,
}

impl EventHandler {
    /// Create a new event handler with the specified tick rate.
    pub fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
            last_tick: Instant::now(),
        }
    }

    /// Wait for the next event.
    ///
    /// Returns a tick when nothing arrives within the tick rate.
    pub fn next(&mut self) -> std::io::Result<Event> {
        let timeout = self.tick_rate.saturating_sub(self.last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                CrosstermEvent::Key(key) if key.kind != KeyEventKind::Release => {
                    return Ok(Event::Key(key));
                }
                CrosstermEvent::Mouse(mouse) => {
                    if let Some(rows) = wheel_rows(&mouse) {
                        return Ok(Event::Scroll(rows));
                    }
                }
                CrosstermEvent::Resize(w, h) => return Ok(Event::Resize(w, h)),
                _ => {}
            }
        }
        Ok(self.tick())
    }

    fn tick(&mut self) -> Event {
        let elapsed = self.last_tick.elapsed();
        self.last_tick = Instant::now();
        Event::Tick(elapsed)
    }
}

fn wheel_rows(mouse: &MouseEvent) -> Option<i32> {
    match mouse.kind {
        MouseEventKind::ScrollDown => Some(WHEEL_ROWS),
        MouseEventKind::ScrollUp => Some(-WHEEL_ROWS),
        _ => None,
    }
}

/// Handle returned by [`Subscriptions::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Handler = Box<dyn FnMut(&Event) -> Option<AppAction>>;

/// Registry of event handlers.
///
/// Handlers run on the UI thread in subscription order. Each one may map an
/// event to an action or ignore it.
#[derive(Default)]
pub struct Subscriptions {
    next_id: u64,
    handlers: Vec<(SubscriptionId, Handler)>,
}

impl Subscriptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: FnMut(&Event) -> Option<AppAction> + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.handlers.push((id, Box::new(handler)));
        id
    }

    /// Remove a handler. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(handler_id, _)| *handler_id != id);
        self.handlers.len() != before
    }

    /// Run every handler against `event` and collect the resulting actions.
    pub fn dispatch(&mut self, event: &Event) -> Vec<AppAction> {
        self.handlers
            .iter_mut()
            .filter_map(|(_, handler)| handler(event))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn scroll_handler(event: &Event) -> Option<AppAction> {
        match event {
            Event::Scroll(rows) => Some(AppAction::ScrollBy(*rows)),
            _ => None,
        }
    }

    #[test]
    fn test_dispatch_maps_events() {
        let mut subs = Subscriptions::new();
        subs.subscribe(scroll_handler);
        subs.subscribe(|event| match event {
            Event::Resize(w, h) => Some(AppAction::Resize(*w, *h)),
            _ => None,
        });

        assert_eq!(subs.dispatch(&Event::Scroll(3)), vec![AppAction::ScrollBy(3)]);
        assert_eq!(
            subs.dispatch(&Event::Resize(80, 24)),
            vec![AppAction::Resize(80, 24)]
        );
        let key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        assert!(subs.dispatch(&Event::Key(key)).is_empty());
    }

    #[test]
    fn test_unsubscribe() {
        let mut subs = Subscriptions::new();
        let id = subs.subscribe(scroll_handler);
        assert_eq!(subs.len(), 1);

        assert!(subs.unsubscribe(id));
        assert!(!subs.unsubscribe(id));
        assert!(subs.dispatch(&Event::Scroll(1)).is_empty());
    }

    #[test]
    fn test_ids_are_unique() {
        let mut subs = Subscriptions::new();
        let a = subs.subscribe(scroll_handler);
        let b = subs.subscribe(scroll_handler);
        assert_ne!(a, b);

        subs.unsubscribe(a);
        assert_eq!(subs.dispatch(&Event::Scroll(1)).len(), 1);
    }

    #[test]
    fn test_unsubscribe_every_handler_empties_registry() {
        let mut subs = Subscriptions::new();
        let ids = [subs.subscribe(scroll_handler), subs.subscribe(scroll_handler)];
        for id in ids {
            assert!(subs.unsubscribe(id));
        }
        assert!(subs.is_empty());
    }

    #[test]
    fn test_stateful_handler() {
        let mut subs = Subscriptions::new();
        let mut seen = 0u32;
        subs.subscribe(move |event| {
            if let Event::Tick(_) = event {
                seen += 1;
                if seen == 2 {
                    return Some(AppAction::DismissNotice);
                }
            }
            None
        });

        let tick = Event::Tick(Duration::from_millis(50));
        assert!(subs.dispatch(&tick).is_empty());
        assert_eq!(subs.dispatch(&tick), vec![AppAction::DismissNotice]);
    }
}
