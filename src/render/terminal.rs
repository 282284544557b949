use std::io::{stdout, Stdout, Write};

use anyhow::{Context, Result};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute, queue,
    style::{Color, Print, SetBackgroundColor, SetForegroundColor},
    terminal::{
        disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};

use super::{Renderer, Rgb};
use crate::game::Cell;

/// Width of one grid cell in terminal columns. Terminal rows are roughly
/// twice as tall as columns are wide, so two columns per cell keeps the
/// board close to square.
const CELL_COLUMNS: u16 = 2;

/// Shade character that lets the border color show through behind the
/// fill, giving each cell an outlined look.
const CELL_TEXTURE: &str = "▓▓";

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb {
            r: rgb.0,
            g: rgb.1,
            b: rgb.2,
        }
    }
}

/// Paints grid cells directly with queued crossterm commands on a
/// raw-mode alternate screen. The terminal is restored on drop.
pub struct TerminalRenderer {
    out: Stdout,
}

impl TerminalRenderer {
    pub fn new() -> Result<Self> {
        enable_raw_mode().context("failed to enable raw mode")?;
        let mut out = stdout();
        execute!(out, EnterAlternateScreen, Hide)
            .context("failed to enter alternate screen")?;
        Ok(Self { out })
    }

    fn paint(&mut self, cell: Cell, texture: &str, fg: Rgb, bg: Rgb) -> Result<()> {
        let column = cell.x as u16 * CELL_COLUMNS;
        let row = cell.y as u16;
        queue!(
            self.out,
            MoveTo(column, row),
            SetForegroundColor(fg.into()),
            SetBackgroundColor(bg.into()),
            Print(texture),
        )
        .context("failed to queue cell draw")
    }
}

impl Renderer for TerminalRenderer {
    fn draw_cell(&mut self, cell: Cell, fill: Rgb, border: Rgb) -> Result<()> {
        self.paint(cell, CELL_TEXTURE, fill, border)
    }

    fn clear_cell(&mut self, cell: Cell, background: Rgb) -> Result<()> {
        self.paint(cell, "  ", background, background)
    }

    fn clear_board(&mut self, background: Rgb) -> Result<()> {
        queue!(
            self.out,
            SetBackgroundColor(background.into()),
            Clear(ClearType::All),
        )
        .context("failed to queue board clear")
    }

    fn present(&mut self) -> Result<()> {
        self.out.flush().context("failed to flush frame")
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        // Best effort: leave the user's terminal usable even if teardown
        // commands fail.
        let _ = execute!(self.out, Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}
