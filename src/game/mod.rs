//! The game core: grid geometry, the snake and food entities, and the
//! frame loop that orchestrates them. Free of any terminal or timing
//! dependency; I/O happens through the collaborator traits in
//! [`crate::input`], [`crate::render`], and [`crate::clock`].

pub mod config;
pub mod engine;
pub mod food;
pub mod grid;
pub mod heading;
pub mod snake;

// Re-export commonly used types
pub use config::GameConfig;
pub use engine::{FrameReport, GameLoop};
pub use food::Food;
pub use grid::{Cell, Grid, CELL_SIZE, GRID_HEIGHT, GRID_WIDTH, SCREEN_HEIGHT, SCREEN_WIDTH};
pub use heading::Heading;
pub use snake::Snake;
