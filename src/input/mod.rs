//! Player input: event model, key mapping, and the terminal source.

pub mod handler;
pub mod terminal;

use anyhow::Result;

use crate::game::Heading;

pub use handler::InputHandler;
pub use terminal::TerminalInput;

/// One player intent, as seen by the game loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Request to change heading at the next advance.
    Turn(Heading),
    /// Terminate the game.
    Quit,
}

/// Non-blocking input collaborator: each poll drains every event that
/// accumulated since the previous poll. An empty result just means no
/// input this frame.
pub trait InputSource {
    fn poll_events(&mut self) -> Result<Vec<InputEvent>>;
}
