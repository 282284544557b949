//! Snake on a toroidal grid: the head wraps across board edges, the body
//! grows by one cell per frame after eating, and biting yourself resets
//! the snake to the center instead of ending the game.
//!
//! - Game logic lives in [`game`] and knows nothing about terminals.
//! - [`input`], [`render`], and [`clock`] define the collaborator traits
//!   the loop drives, plus their crossterm / wall-clock implementations.
//! - [`metrics`] keeps in-memory statistics for the exit summary.

pub mod clock;
pub mod game;
pub mod input;
pub mod metrics;
pub mod render;
