use anyhow::Result;
use rand::rngs::ThreadRng;

use super::config::GameConfig;
use super::food::Food;
use super::snake::Snake;
use crate::clock::Clock;
use crate::input::{InputEvent, InputSource};
use crate::metrics::SessionStats;
use crate::render::{Renderer, APPLE_COLOR, BOARD_BACKGROUND, BORDER_COLOR, SNAKE_COLOR};

/// What happened during one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameReport {
    /// The head landed on the apple; the snake grew and the apple moved.
    pub ate_food: bool,
    /// The head bit the body; the snake was reset and the board cleared.
    pub collided: bool,
    /// The player quit; the loop is done.
    pub quit: bool,
}

/// Orchestrates one game: owns the snake, the food, and the session
/// statistics, and drives the input / render / clock collaborators from a
/// single thread. Self-collision and quitting are ordinary frame
/// outcomes, not errors; `Err` only surfaces collaborator failures.
pub struct GameLoop<R, I, C> {
    config: GameConfig,
    snake: Snake,
    food: Food,
    rng: ThreadRng,
    stats: SessionStats,
    renderer: R,
    input: I,
    clock: C,
}

impl<R: Renderer, I: InputSource, C: Clock> GameLoop<R, I, C> {
    pub fn new(config: GameConfig, renderer: R, input: I, clock: C) -> Self {
        let mut rng = rand::thread_rng();
        let snake = Snake::new(config.grid);
        let food = Food::spawn_avoiding(config.grid, &mut rng, |cell| snake.occupies(cell));

        Self {
            config,
            snake,
            food,
            rng,
            stats: SessionStats::new(),
            renderer,
            input,
            clock,
        }
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Run frames at the configured rate until the player quits.
    pub fn run(&mut self) -> Result<()> {
        loop {
            let events = self.input.poll_events()?;
            if self.frame(&events)?.quit {
                return Ok(());
            }
            self.clock.tick(self.config.ticks_per_second);
        }
    }

    /// One frame: buffer turns, commit, advance, resolve eating, resolve
    /// self-collision, render. A quit event ends the frame immediately;
    /// nothing after it runs.
    pub fn frame(&mut self, events: &[InputEvent]) -> Result<FrameReport> {
        let mut report = FrameReport::default();

        for &event in events {
            match event {
                InputEvent::Turn(heading) => self.snake.turn(heading),
                InputEvent::Quit => {
                    report.quit = true;
                    return Ok(report);
                }
            }
        }

        self.snake.commit_pending_heading();
        self.snake.advance(self.config.grid);

        if self.snake.head() == self.food.position() {
            self.snake.grow();
            let snake = &self.snake;
            self.food
                .relocate_avoiding(self.config.grid, &mut self.rng, |cell| snake.occupies(cell));
            self.stats.on_apple(self.snake.target_length());
            report.ate_food = true;
        }

        if self.snake.is_self_colliding() {
            let length = self.snake.len();
            self.snake.reset(self.config.grid, &mut self.rng);
            self.stats.on_reset(length);
            self.renderer.clear_board(BOARD_BACKGROUND)?;
            report.collided = true;
        }

        self.render_frame()?;
        Ok(report)
    }

    fn render_frame(&mut self) -> Result<()> {
        // Erase the vacated tail before drawing: the apple (or the head,
        // after a wrap) may have moved onto that very cell this frame.
        if let Some(vacated) = self.snake.last_vacated() {
            self.renderer.clear_cell(vacated, BOARD_BACKGROUND)?;
        }

        self.renderer
            .draw_cell(self.food.position(), APPLE_COLOR, BORDER_COLOR)?;
        for cell in self.snake.occupied_cells() {
            self.renderer.draw_cell(cell, SNAKE_COLOR, BORDER_COLOR)?;
        }

        self.renderer.present()
    }
}
