use serde::{Deserialize, Serialize};

use super::grid::Grid;

/// Fixed parameters of a game session: 32x24 cells at 20 ticks/s. These
/// are constants of the game, not runtime options.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board dimensions in cells.
    pub grid: Grid,
    /// Target frame rate of the game loop.
    pub ticks_per_second: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid: Grid::default(),
            ticks_per_second: 20,
        }
    }
}

impl GameConfig {
    /// A small board for tests.
    pub fn small() -> Self {
        Self {
            grid: Grid::new(10, 10),
            ..Default::default()
        }
    }
}
