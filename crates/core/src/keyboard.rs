//! Keyboard state tables with single-press edge detection
//!
//! The platform writes the `current` table while draining events. Games read
//! it with [`KeyboardState::is_down`] or [`KeyboardState::is_pressed_once`].
//!
//! `is_pressed_once` updates that key's `previous` slot as part of the query.
//! A second call for the same key in the same frame therefore never sees the
//! edge; query each key at most once per frame when the edge matters.

use arrayvec::ArrayVec;

use crate::types::{Key, KEY_SLOTS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardState {
    current: [bool; KEY_SLOTS],
    previous: [bool; KEY_SLOTS],
}

impl Default for KeyboardState {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyboardState {
    pub fn new() -> Self {
        Self {
            current: [false; KEY_SLOTS],
            previous: [false; KEY_SLOTS],
        }
    }

    /// Record a key transition. Called by platform adapters.
    pub fn set_key(&mut self, key: Key, down: bool) {
        self.current[key.slot()] = down;
    }

    pub fn is_down(&self, key: Key) -> bool {
        self.current[key.slot()]
    }

    /// True on the first query after the key went down.
    pub fn is_pressed_once(&mut self, key: Key) -> bool {
        let slot = key.slot();
        let current = self.current[slot];
        let last = self.previous[slot];
        self.previous[slot] = current;
        current && !last
    }

    /// Reset both tables.
    pub fn clear_all(&mut self) {
        self.current = [false; KEY_SLOTS];
        self.previous = [false; KEY_SLOTS];
    }

    /// Slots currently held down, in ascending order.
    pub fn held_slots(&self) -> ArrayVec<u8, KEY_SLOTS> {
        let mut out = ArrayVec::new();
        for (slot, &down) in self.current.iter().enumerate() {
            if down {
                out.push(slot as u8);
            }
        }
        out
    }
}
