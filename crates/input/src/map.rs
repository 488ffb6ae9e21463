//! Key mapping from terminal events to logical keys.

use crate::types::Key;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a terminal key code to its logical key.
pub fn map_key_code(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Up => Some(Key::UP),
        KeyCode::Down => Some(Key::DOWN),
        KeyCode::Left => Some(Key::LEFT),
        KeyCode::Right => Some(Key::RIGHT),
        KeyCode::Esc => Some(Key::ESCAPE),
        KeyCode::Enter => Some(Key::ENTER),
        KeyCode::Char(c) => Key::from_char(c),
        _ => None,
    }
}

/// Map a key event, ignoring Ctrl/Alt chords.
pub fn map_key_event(key: KeyEvent) -> Option<Key> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }
    map_key_code(key.code)
}

/// Ctrl+C closes the game window.
pub fn is_close_request(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
