// Key repeat and debounce policy
//
// Terminals differ in what they report for a held key: some send a stream
// of presses, some add releases, many send no releases at all. The handler
// turns that into a per-key decision of whether an action should fire:
// - one-shot keys (Enter, Esc, view switches) fire once per press
// - navigation keys fire on press and then repeat while held

use crossterm::event::KeyCode;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Minimum gap between two firings of a one-shot key when no release
/// event arrives in between
const ONE_SHOT_DEBOUNCE: Duration = Duration::from_millis(150);

/// How a key behaves when pressed/held
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyBehavior {
    /// Fire once per press
    OneShot,
    /// Fire on press, then every `interval` once `delay` has passed
    Repeat { delay: Duration, interval: Duration },
}

impl KeyBehavior {
    /// Card focus movement
    pub fn navigation() -> Self {
        Self::Repeat {
            delay: Duration::from_millis(400),
            interval: Duration::from_millis(60),
        }
    }

    /// Page scrolling
    pub fn paging() -> Self {
        Self::Repeat {
            delay: Duration::from_millis(300),
            interval: Duration::from_millis(40),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Held {
    since: Instant,
    last_fired: Instant,
}

/// Per-key press state and behavior table
#[derive(Debug, Default)]
pub struct InputHandler {
    held: HashMap<KeyCode, Held>,
    behaviors: HashMap<KeyCode, KeyBehavior>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn configure(&mut self, keys: &[KeyCode], behavior: KeyBehavior) {
        for key in keys {
            self.behaviors.insert(*key, behavior);
        }
    }

    fn behavior(&self, key: KeyCode) -> KeyBehavior {
        self.behaviors
            .get(&key)
            .copied()
            .unwrap_or(KeyBehavior::OneShot)
    }

    /// Record a press; returns true if the key's action should fire now
    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        self.press_at(key, Instant::now())
    }

    fn press_at(&mut self, key: KeyCode, now: Instant) -> bool {
        let behavior = self.behavior(key);

        let Some(held) = self.held.get_mut(&key) else {
            self.held.insert(
                key,
                Held {
                    since: now,
                    last_fired: now,
                },
            );
            return true;
        };

        let fire = match behavior {
            KeyBehavior::OneShot => now.duration_since(held.last_fired) >= ONE_SHOT_DEBOUNCE,
            KeyBehavior::Repeat { delay, interval } => {
                now.duration_since(held.since) >= delay
                    && now.duration_since(held.last_fired) >= interval
            }
        };
        if fire {
            held.last_fired = now;
        }
        fire
    }

    pub fn handle_key_release(&mut self, key: KeyCode) {
        self.held.remove(&key);
    }

    /// Key table for the deck views
    pub fn with_default_config() -> Self {
        let mut handler = Self::new();

        handler.configure(
            &[
                KeyCode::Up,
                KeyCode::Down,
                KeyCode::Left,
                KeyCode::Right,
                KeyCode::Char('h'),
                KeyCode::Char('j'),
                KeyCode::Char('k'),
                KeyCode::Char('l'),
            ],
            KeyBehavior::navigation(),
        );
        handler.configure(
            &[KeyCode::PageUp, KeyCode::PageDown],
            KeyBehavior::paging(),
        );
        // Everything else (Enter, Esc, q, t, p, r, y, ?, F-keys) is one-shot

        handler
    }
}
