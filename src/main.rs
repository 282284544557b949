use anyhow::Result;
use clap::Parser;

use torus_snake::clock::FrameClock;
use torus_snake::game::{GameConfig, GameLoop};
use torus_snake::input::TerminalInput;
use torus_snake::render::TerminalRenderer;

/// Snake on a toroidal grid. Arrow keys or WASD to steer, q / Esc /
/// Ctrl+C to quit. The board and speed are fixed; there is nothing to
/// configure.
#[derive(Parser)]
#[command(name = "torus-snake", version, about)]
struct Cli;

fn main() -> Result<()> {
    Cli::parse();

    let renderer = TerminalRenderer::new()?;
    let mut game = GameLoop::new(
        GameConfig::default(),
        renderer,
        TerminalInput::new(),
        FrameClock::new(),
    );

    let outcome = game.run();
    let summary = game.stats().summary();
    // Give the terminal back (alternate screen, raw mode) before printing.
    drop(game);

    outcome?;
    println!("{summary}");
    Ok(())
}
