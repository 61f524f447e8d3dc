// Key debounce and hold-to-repeat
//
// Terminals differ on whether they send Release events. Action keys fire
// once per press (with a short debounce for terminals that never release);
// navigation keys fire on press and then repeat while held.

use crossterm::event::KeyCode;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Minimum gap between two triggers of a held action key
const ACTION_DEBOUNCE: Duration = Duration::from_millis(150);

/// How a key behaves while held
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyBehavior {
    /// Fire once per press
    StateChange,
    /// Fire on press, then every `repeat_interval` after `initial_delay`
    Repeatable {
        initial_delay: Duration,
        repeat_interval: Duration,
    },
}

impl KeyBehavior {
    /// Card highlight, slider, pager
    pub fn navigation() -> Self {
        Self::Repeatable {
            initial_delay: Duration::from_millis(400),
            repeat_interval: Duration::from_millis(60),
        }
    }
}

#[derive(Debug, Default)]
struct KeyState {
    pressed_at: Option<Instant>,
    last_triggered: Option<Instant>,
}

pub struct InputHandler {
    states: HashMap<KeyCode, KeyState>,
    behaviors: HashMap<KeyCode, KeyBehavior>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            states: HashMap::new(),
            behaviors: HashMap::new(),
        }
    }

    pub fn configure_keys(&mut self, keys: &[KeyCode], behavior: KeyBehavior) {
        for key in keys {
            self.behaviors.insert(*key, behavior);
        }
    }

    /// Returns true if the press should trigger its action
    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        self.press_at(key, Instant::now())
    }

    pub(crate) fn press_at(&mut self, key: KeyCode, now: Instant) -> bool {
        let behavior = self
            .behaviors
            .get(&key)
            .copied()
            .unwrap_or(KeyBehavior::StateChange);
        let state = self.states.entry(key).or_default();

        let (Some(pressed_at), Some(last)) = (state.pressed_at, state.last_triggered) else {
            state.pressed_at = Some(now);
            state.last_triggered = Some(now);
            return true;
        };

        let fire = match behavior {
            KeyBehavior::StateChange => now.duration_since(last) >= ACTION_DEBOUNCE,
            KeyBehavior::Repeatable {
                initial_delay,
                repeat_interval,
            } => {
                now.duration_since(pressed_at) >= initial_delay
                    && now.duration_since(last) >= repeat_interval
            }
        };
        if fire {
            state.last_triggered = Some(now);
        }
        fire
    }

    pub fn handle_key_release(&mut self, key: KeyCode) {
        self.states.remove(&key);
    }

    pub fn with_default_config() -> Self {
        let mut handler = Self::new();
        handler.configure_keys(
            &[
                KeyCode::Up,
                KeyCode::Down,
                KeyCode::Left,
                KeyCode::Right,
                KeyCode::Char('j'),
                KeyCode::Char('k'),
                KeyCode::Char('h'),
                KeyCode::Char('l'),
            ],
            KeyBehavior::navigation(),
        );
        handler
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::with_default_config()
    }
}
