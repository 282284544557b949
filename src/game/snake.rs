use std::collections::VecDeque;

use rand::Rng;

use super::grid::{Cell, Grid};
use super::heading::Heading;

/// The snake: an ordered body (head first), a heading, and the length the
/// body grows toward after eating. The snake exclusively owns its body;
/// other components only query it through [`Snake::occupies`].
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Cell>,
    heading: Heading,
    pending_heading: Option<Heading>,
    target_length: usize,
    last_vacated: Option<Cell>,
}

impl Snake {
    /// Spawn a length-1 snake at the board center, heading down.
    pub fn new(grid: Grid) -> Self {
        Self {
            body: VecDeque::from([grid.center()]),
            heading: Heading::Down,
            pending_heading: None,
            target_length: 1,
            last_vacated: None,
        }
    }

    pub fn head(&self) -> Cell {
        // Invariant: the body is never empty.
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn target_length(&self) -> usize {
        self.target_length
    }

    /// The cell vacated by the most recent [`Snake::advance`], if the tail
    /// was trimmed. Only the renderer cares, to erase the stale cell.
    pub fn last_vacated(&self) -> Option<Cell> {
        self.last_vacated
    }

    pub fn occupied_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.body.iter().copied()
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Buffer a turn request for the next advance. A request that would
    /// reverse the current heading 180 degrees is silently ignored, since
    /// it would always register as an immediate self-collision. Later
    /// accepted requests within the same frame overwrite earlier ones.
    pub fn turn(&mut self, requested: Heading) {
        if requested != self.heading.opposite() {
            self.pending_heading = Some(requested);
        }
    }

    /// Consume the buffered turn request, if any. Called exactly once per
    /// frame, before [`Snake::advance`].
    pub fn commit_pending_heading(&mut self) {
        if let Some(heading) = self.pending_heading.take() {
            self.heading = heading;
        }
    }

    /// Move one cell along the current heading, wrapping at the board
    /// edges. Prepends the new head; trims at most one tail cell, only
    /// when the body would exceed its target length. Never shrinks below
    /// one cell.
    pub fn advance(&mut self, grid: Grid) {
        let new_head = grid.wrap(self.head(), self.heading);
        self.body.push_front(new_head);

        self.last_vacated = if self.body.len() > self.target_length {
            self.body.pop_back()
        } else {
            None
        };
    }

    /// Whether the head coincides with any non-head body cell. Only
    /// meaningful right after [`Snake::advance`].
    pub fn is_self_colliding(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|&cell| cell == head)
    }

    /// Raise the target length by one; the body catches up by one cell per
    /// advance.
    pub fn grow(&mut self) {
        self.target_length += 1;
    }

    /// Return to the spawn state: length 1 at the board center, with a
    /// uniformly random heading (a reversal relative to the old heading is
    /// allowed on purpose; at length 1 it cannot conflict with anything).
    pub fn reset(&mut self, grid: Grid, rng: &mut impl Rng) {
        self.body.clear();
        self.body.push_front(grid.center());
        self.heading = Heading::ALL[rng.gen_range(0..Heading::ALL.len())];
        self.pending_heading = None;
        self.target_length = 1;
        self.last_vacated = None;
    }
}
