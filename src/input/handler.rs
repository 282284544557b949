use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::InputEvent;
use crate::game::Heading;

/// Maps raw key events to game input. Keys with no game meaning map to
/// `None`.
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> Option<InputEvent> {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(InputEvent::Quit);
        }

        match key.code {
            // Movement - Arrow keys
            KeyCode::Up => Some(InputEvent::Turn(Heading::Up)),
            KeyCode::Down => Some(InputEvent::Turn(Heading::Down)),
            KeyCode::Left => Some(InputEvent::Turn(Heading::Left)),
            KeyCode::Right => Some(InputEvent::Turn(Heading::Right)),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => Some(InputEvent::Turn(Heading::Up)),
            KeyCode::Char('s') | KeyCode::Char('S') => Some(InputEvent::Turn(Heading::Down)),
            KeyCode::Char('a') | KeyCode::Char('A') => Some(InputEvent::Turn(Heading::Left)),
            KeyCode::Char('d') | KeyCode::Char('D') => Some(InputEvent::Turn(Heading::Right)),

            // Quit
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(InputEvent::Quit),

            _ => None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys() {
        let handler = InputHandler::new();

        let up = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
        assert_eq!(
            handler.handle_key_event(up),
            Some(InputEvent::Turn(Heading::Up))
        );

        let down = KeyEvent::new(KeyCode::Down, KeyModifiers::NONE);
        assert_eq!(
            handler.handle_key_event(down),
            Some(InputEvent::Turn(Heading::Down))
        );

        let left = KeyEvent::new(KeyCode::Left, KeyModifiers::NONE);
        assert_eq!(
            handler.handle_key_event(left),
            Some(InputEvent::Turn(Heading::Left))
        );

        let right = KeyEvent::new(KeyCode::Right, KeyModifiers::NONE);
        assert_eq!(
            handler.handle_key_event(right),
            Some(InputEvent::Turn(Heading::Right))
        );
    }

    #[test]
    fn test_wasd_keys() {
        let handler = InputHandler::new();

        let w = KeyEvent::new(KeyCode::Char('w'), KeyModifiers::NONE);
        assert_eq!(
            handler.handle_key_event(w),
            Some(InputEvent::Turn(Heading::Up))
        );

        let a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        assert_eq!(
            handler.handle_key_event(a),
            Some(InputEvent::Turn(Heading::Left))
        );

        let s = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::NONE);
        assert_eq!(
            handler.handle_key_event(s),
            Some(InputEvent::Turn(Heading::Down))
        );

        let d = KeyEvent::new(KeyCode::Char('d'), KeyModifiers::NONE);
        assert_eq!(
            handler.handle_key_event(d),
            Some(InputEvent::Turn(Heading::Right))
        );
    }

    #[test]
    fn test_wasd_uppercase() {
        let handler = InputHandler::new();

        let w_upper = KeyEvent::new(KeyCode::Char('W'), KeyModifiers::SHIFT);
        assert_eq!(
            handler.handle_key_event(w_upper),
            Some(InputEvent::Turn(Heading::Up))
        );
    }

    #[test]
    fn test_quit_keys() {
        let handler = InputHandler::new();

        let q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(q), Some(InputEvent::Quit));

        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(esc), Some(InputEvent::Quit));

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handler.handle_key_event(ctrl_c), Some(InputEvent::Quit));
    }

    #[test]
    fn test_unknown_key() {
        let handler = InputHandler::new();

        let x = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(x), None);
    }
}
