//! Held-key tracking for terminal environments.
//!
//! Supports terminals that do not emit key release events by using a timeout:
//! a key with no press or repeat for longer than the timeout counts as released.

use std::time::{Duration, Instant};

use arrayvec::ArrayVec;

use crate::types::{Key, KEY_RELEASE_TIMEOUT_MS};

/// Maximum number of keys tracked as held at once.
pub const MAX_HELD_KEYS: usize = 16;

#[derive(Debug, Clone)]
pub struct KeyHoldTracker {
    held: ArrayVec<(Key, Instant), MAX_HELD_KEYS>,
    key_release_timeout: Duration,
    releases_reported: bool,
}

impl KeyHoldTracker {
    pub fn new() -> Self {
        Self::with_key_release_timeout_ms(KEY_RELEASE_TIMEOUT_MS)
    }

    pub fn with_key_release_timeout_ms(timeout_ms: u32) -> Self {
        Self {
            held: ArrayVec::new(),
            key_release_timeout: Duration::from_millis(u64::from(timeout_ms)),
            releases_reported: false,
        }
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout.as_millis() as u32
    }

    /// Once the terminal has sent a real release event, stop auto-releasing.
    pub fn releases_reported(&self) -> bool {
        self.releases_reported
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.iter().any(|(k, _)| *k == key)
    }

    pub fn held_count(&self) -> usize {
        self.held.len()
    }

    /// Record a press or repeat at `now`. Returns `true` if the key was not
    /// already held.
    pub fn press(&mut self, key: Key, now: Instant) -> bool {
        if let Some(entry) = self.held.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = now;
            return false;
        }
        if self.held.is_full() {
            // Oldest entry makes room.
            self.held.remove(0);
        }
        self.held.push((key, now));
        true
    }

    /// Record a real release event. Returns `true` if the key was held.
    pub fn release(&mut self, key: Key) -> bool {
        self.releases_reported = true;
        match self.held.iter().position(|(k, _)| *k == key) {
            Some(i) => {
                self.held.remove(i);
                true
            }
            None => false,
        }
    }

    /// Drop keys that have not been refreshed within the timeout and return
    /// them. Does nothing once release events have been seen.
    pub fn expire(&mut self, now: Instant) -> ArrayVec<Key, MAX_HELD_KEYS> {
        let mut expired = ArrayVec::new();
        if self.releases_reported {
            return expired;
        }
        let timeout = self.key_release_timeout;
        self.held.retain(|(key, last)| {
            if now.saturating_duration_since(*last) > timeout {
                expired.push(*key);
                false
            } else {
                true
            }
        });
        expired
    }

    pub fn reset(&mut self) {
        self.held.clear();
    }
}

impl Default for KeyHoldTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_reports_new_keys_only() {
        let mut t = KeyHoldTracker::new();
        let now = Instant::now();
        assert!(t.press(Key::SPACE, now));
        assert!(!t.press(Key::SPACE, now));
        assert!(t.is_held(Key::SPACE));
        assert_eq!(t.held_count(), 1);
    }

    #[test]
    fn test_auto_release_triggers_after_timeout_without_key_release_events() {
        let mut t = KeyHoldTracker::with_key_release_timeout_ms(50);
        let start = Instant::now();
        t.press(Key::LEFT, start);

        assert!(t.expire(start + Duration::from_millis(50)).is_empty());
        let expired = t.expire(start + Duration::from_millis(51));
        assert_eq!(expired.as_slice(), &[Key::LEFT]);
        assert!(!t.is_held(Key::LEFT));
    }

    #[test]
    fn test_repeat_extends_hold() {
        let mut t = KeyHoldTracker::with_key_release_timeout_ms(50);
        let start = Instant::now();
        t.press(Key::LEFT, start);
        t.press(Key::LEFT, start + Duration::from_millis(40));

        assert!(t.expire(start + Duration::from_millis(80)).is_empty());
        assert!(t.is_held(Key::LEFT));
    }

    #[test]
    fn test_other_key_does_not_extend_timeout() {
        let mut t = KeyHoldTracker::with_key_release_timeout_ms(50);
        let start = Instant::now();
        t.press(Key::LEFT, start);
        t.press(Key::UP, start + Duration::from_millis(40));

        let expired = t.expire(start + Duration::from_millis(60));
        assert_eq!(expired.as_slice(), &[Key::LEFT]);
        assert!(t.is_held(Key::UP));
    }

    #[test]
    fn test_real_release_disables_timeout() {
        let mut t = KeyHoldTracker::with_key_release_timeout_ms(50);
        let start = Instant::now();
        t.press(Key::A, start);
        assert!(t.release(Key::A));
        assert!(!t.release(Key::A));

        t.press(Key::D, start);
        assert!(t.expire(start + Duration::from_secs(10)).is_empty());
        assert!(t.is_held(Key::D));
    }

    #[test]
    fn test_full_tracker_evicts_oldest() {
        let mut t = KeyHoldTracker::new();
        let now = Instant::now();
        for c in 0..MAX_HELD_KEYS as u32 + 1 {
            t.press(Key(0x61 + c), now);
        }
        assert_eq!(t.held_count(), MAX_HELD_KEYS);
        assert!(!t.is_held(Key(0x61)));
    }

    #[test]
    fn test_default_key_release_timeout_is_non_zero() {
        assert!(KeyHoldTracker::new().key_release_timeout_ms() > 0);
    }
}
