//! Event handling for the demo TUI.

use std::time::Instant;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Continue,
    Quit,
    NeedsRedraw,
}

/// Handle a terminal event.
pub fn handle_event(app: &mut App, event: Event, now: Instant) -> EventResult {
    match event {
        Event::Key(key) => handle_key_event(app, key, now),
        Event::Resize(_, _) => EventResult::NeedsRedraw,
        _ => EventResult::Continue,
    }
}

fn handle_key_event(app: &mut App, key: KeyEvent, now: Instant) -> EventResult {
    if let (KeyCode::Char('c'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
        return EventResult::Quit;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => EventResult::Quit,
        KeyCode::Char('s') | KeyCode::Enter => {
            app.start_rotation(now);
            EventResult::NeedsRedraw
        }
        KeyCode::Char('x') => {
            app.stop_rotation(now);
            EventResult::NeedsRedraw
        }
        KeyCode::Char('c') | KeyCode::Tab => {
            app.cycle_category(now);
            EventResult::NeedsRedraw
        }
        KeyCode::Char('+') | KeyCode::Char('=') => {
            app.lengthen_interval();
            EventResult::NeedsRedraw
        }
        KeyCode::Char('-') => {
            app.shorten_interval();
            EventResult::NeedsRedraw
        }
        KeyCode::Char('b') => {
            app.toggle_bold();
            EventResult::NeedsRedraw
        }
        _ => EventResult::Continue,
    }
}
