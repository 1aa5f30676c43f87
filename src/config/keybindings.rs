//! Keyboard bindings configuration.

use crate::model::KeyAction;
use crossterm::event::KeyEvent;
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Provides default vim-style bindings. Lookup is exact on key code plus
/// modifiers, so `G` and `g` can bind differently if ever needed.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        use crossterm::event::{KeyCode, KeyModifiers};

        let mut bindings = HashMap::new();

        // Vim-style movement
        bindings.insert(
            KeyEvent::new(KeyCode::Char('k'), KeyModifiers::NONE),
            KeyAction::MoveUp,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE),
            KeyAction::MoveDown,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('h'), KeyModifiers::NONE),
            KeyAction::PrevValue,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('l'), KeyModifiers::NONE),
            KeyAction::NextValue,
        );

        // Arrow keys
        bindings.insert(
            KeyEvent::new(KeyCode::Up, KeyModifiers::NONE),
            KeyAction::MoveUp,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Down, KeyModifiers::NONE),
            KeyAction::MoveDown,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Left, KeyModifiers::NONE),
            KeyAction::PrevValue,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Right, KeyModifiers::NONE),
            KeyAction::NextValue,
        );

        // Context action and navigation
        bindings.insert(
            KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
            KeyAction::Activate,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
            KeyAction::Back,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('b'), KeyModifiers::NONE),
            KeyAction::Back,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('v'), KeyModifiers::NONE),
            KeyAction::GoToSaved,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE),
            KeyAction::GoToResults,
        );

        // Deal interaction
        bindings.insert(
            KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE),
            KeyAction::ToggleSave,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('s'), KeyModifiers::NONE),
            KeyAction::ToggleSort,
        );

        // Quit
        bindings.insert(
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE),
            KeyAction::Quit,
        );

        Self { bindings }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn default_bindings_cover_core_actions() {
        let bindings = KeyBindings::default();

        let cases = [
            (KeyCode::Char('q'), KeyAction::Quit),
            (KeyCode::Char('j'), KeyAction::MoveDown),
            (KeyCode::Char('k'), KeyAction::MoveUp),
            (KeyCode::Enter, KeyAction::Activate),
            (KeyCode::Esc, KeyAction::Back),
            (KeyCode::Char(' '), KeyAction::ToggleSave),
            (KeyCode::Char('s'), KeyAction::ToggleSort),
            (KeyCode::Char('v'), KeyAction::GoToSaved),
            (KeyCode::Char('r'), KeyAction::GoToResults),
        ];

        for (code, expected) in cases {
            let event = KeyEvent::new(code, KeyModifiers::NONE);
            assert_eq!(bindings.get(event), Some(expected), "binding for {code:?}");
        }
    }

    #[test]
    fn arrow_keys_mirror_vim_movement() {
        let bindings = KeyBindings::default();
        assert_eq!(
            bindings.get(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE)),
            Some(KeyAction::MoveUp)
        );
        assert_eq!(
            bindings.get(KeyEvent::new(KeyCode::Left, KeyModifiers::NONE)),
            Some(KeyAction::PrevValue)
        );
    }

    #[test]
    fn unbound_keys_return_none() {
        let bindings = KeyBindings::default();
        let event = KeyEvent::new(KeyCode::Char('z'), KeyModifiers::NONE);
        assert_eq!(bindings.get(event), None);
    }
}
