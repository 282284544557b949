use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use super::{InputEvent, InputHandler, InputSource};

/// Drains pending crossterm events without blocking. Requires the
/// terminal to be in raw mode (the renderer enables it).
pub struct TerminalInput {
    handler: InputHandler,
}

impl TerminalInput {
    pub fn new() -> Self {
        Self {
            handler: InputHandler::new(),
        }
    }
}

impl Default for TerminalInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for TerminalInput {
    fn poll_events(&mut self) -> Result<Vec<InputEvent>> {
        let mut events = Vec::new();

        while event::poll(Duration::ZERO).context("failed to poll terminal events")? {
            let Event::Key(key) = event::read().context("failed to read terminal event")? else {
                continue;
            };
            // Only key presses count, not releases or repeats-on-release.
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if let Some(input) = self.handler.handle_key_event(key) {
                events.push(input);
            }
        }

        Ok(events)
    }
}
