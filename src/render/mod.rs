//! Drawing contract for the game loop, plus the terminal implementation.

pub mod terminal;

use anyhow::Result;

use crate::game::Cell;

pub use terminal::TerminalRenderer;

/// A color as a fixed RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const BOARD_BACKGROUND: Rgb = Rgb(0, 0, 0);
pub const SNAKE_COLOR: Rgb = Rgb(0, 255, 0);
pub const APPLE_COLOR: Rgb = Rgb(255, 0, 0);
pub const BORDER_COLOR: Rgb = Rgb(93, 216, 228);

/// What the game loop needs from a display. Calls are buffered until
/// [`Renderer::present`].
pub trait Renderer {
    /// Paint one cell with a fill color and a border color.
    fn draw_cell(&mut self, cell: Cell, fill: Rgb, border: Rgb) -> Result<()>;

    /// Erase one cell back to the background color.
    fn clear_cell(&mut self, cell: Cell, background: Rgb) -> Result<()>;

    /// Erase the whole board to the background color.
    fn clear_board(&mut self, background: Rgb) -> Result<()>;

    /// Flush everything drawn since the last present to the display.
    fn present(&mut self) -> Result<()>;
}
