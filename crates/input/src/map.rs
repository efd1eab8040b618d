//! Key mapping from terminal events to input events.

use crate::types::InputEvent;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map any terminal event.
///
/// Key releases are ignored (terminals that report them would otherwise
/// deliver every key twice).
pub fn map_event(event: &Event) -> InputEvent {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => map_key(*key),
        Event::Resize(width, height) => InputEvent::Resize {
            width: *width,
            height: *height,
        },
        _ => InputEvent::Ignored,
    }
}

/// Map a key press.
pub fn map_key(key: KeyEvent) -> InputEvent {
    if should_quit(key) {
        return InputEvent::Quit;
    }

    match key.code {
        KeyCode::Char(' ')
        | KeyCode::Up
        | KeyCode::Char('w')
        | KeyCode::Char('W')
        | KeyCode::Char('k')
        | KeyCode::Char('K') => InputEvent::Jump,
        _ => InputEvent::Key,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q')
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
