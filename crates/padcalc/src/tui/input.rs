//! Keyboard input handling
//!
//! Maps crossterm key events to keypad actions. Only keys with a keypad
//! counterpart do anything; there is no free text editing.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::KeypadAction;

/// What a key event asks the app to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Press a keypad button
    Keypad(KeypadAction),
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code,
            modifiers,
            kind,
            ..
        } = event;

        if kind == KeyEventKind::Release {
            return KeyAction::None;
        }

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char('q' | 'Q') => KeyAction::Quit,
            KeyCode::Char(c) => {
                KeypadAction::from_char(c).map_or(KeyAction::None, KeyAction::Keypad)
            }
            KeyCode::Enter => KeyAction::Keypad(KeypadAction::Equals),
            KeyCode::Esc | KeyCode::Delete | KeyCode::Backspace => {
                KeyAction::Keypad(KeypadAction::Clear)
            }
            _ => KeyAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Digit, Operation};

    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn key_event_ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    fn handle(code: KeyCode) -> KeyAction {
        InputHandler::new().handle_key(key_event(code))
    }

    #[test]
    fn test_digits_map_to_keypad() {
        for d in Digit::all() {
            assert_eq!(
                handle(KeyCode::Char(d.as_char())),
                KeyAction::Keypad(KeypadAction::Digit(d))
            );
        }
    }

    #[test]
    fn test_operators_map_to_keypad() {
        for op in Operation::ALL {
            assert_eq!(
                handle(KeyCode::Char(op.symbol())),
                KeyAction::Keypad(KeypadAction::Operator(op))
            );
        }
        assert_eq!(
            handle(KeyCode::Char('x')),
            KeyAction::Keypad(KeypadAction::Operator(Operation::Multiply))
        );
    }

    #[test]
    fn test_equals_and_enter_evaluate() {
        assert_eq!(handle(KeyCode::Char('=')), KeyAction::Keypad(KeypadAction::Equals));
        assert_eq!(handle(KeyCode::Enter), KeyAction::Keypad(KeypadAction::Equals));
    }

    #[test]
    fn test_clear_keys() {
        for code in [KeyCode::Esc, KeyCode::Delete, KeyCode::Backspace, KeyCode::Char('c')] {
            assert_eq!(handle(code), KeyAction::Keypad(KeypadAction::Clear));
        }
    }

    #[test]
    fn test_decimal_key() {
        assert_eq!(handle(KeyCode::Char('.')), KeyAction::Keypad(KeypadAction::Decimal));
    }

    #[test]
    fn test_quit_keys() {
        let handler = InputHandler::new();
        assert_eq!(handle(KeyCode::Char('q')), KeyAction::Quit);
        assert_eq!(handler.handle_key(key_event_ctrl(KeyCode::Char('c'))), KeyAction::Quit);
        assert_eq!(handler.handle_key(key_event_ctrl(KeyCode::Char('q'))), KeyAction::Quit);
    }

    #[test]
    fn test_ignored_keys() {
        let handler = InputHandler::new();
        assert_eq!(handle(KeyCode::Char('%')), KeyAction::None);
        assert_eq!(handle(KeyCode::Char('(')), KeyAction::None);
        assert_eq!(handle(KeyCode::Left), KeyAction::None);
        assert_eq!(handler.handle_key(key_event_ctrl(KeyCode::Char('l'))), KeyAction::None);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut event = key_event(KeyCode::Char('5'));
        event.kind = KeyEventKind::Release;
        assert_eq!(InputHandler::new().handle_key(event), KeyAction::None);
    }
}
