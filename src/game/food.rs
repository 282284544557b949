use rand::Rng;

use super::grid::{Cell, Grid};

/// The apple: a single cell, never on top of the snake.
#[derive(Debug, Clone, Copy)]
pub struct Food {
    position: Cell,
}

impl Food {
    /// Spawn at a random interior cell not covered by `is_occupied`.
    pub fn spawn_avoiding(
        grid: Grid,
        rng: &mut impl Rng,
        is_occupied: impl Fn(Cell) -> bool,
    ) -> Self {
        let mut food = Self {
            position: grid.center(),
        };
        food.relocate_avoiding(grid, rng, is_occupied);
        food
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    /// Re-roll the position until it lands on a free interior cell.
    /// Unbounded rejection sampling: the snake never comes close to
    /// covering the interior, so termination is not a practical concern.
    pub fn relocate_avoiding(
        &mut self,
        grid: Grid,
        rng: &mut impl Rng,
        is_occupied: impl Fn(Cell) -> bool,
    ) {
        loop {
            let candidate = grid.random_cell(rng);
            if !is_occupied(candidate) {
                self.position = candidate;
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_spawn_avoids_occupied_cells() {
        let grid = Grid::default();
        let mut rng = StdRng::seed_from_u64(1);
        let blocked = Cell::new(16, 12);

        for _ in 0..500 {
            let food = Food::spawn_avoiding(grid, &mut rng, |cell| cell == blocked);
            assert_ne!(food.position(), blocked);
            assert!(grid.contains(food.position()));
        }
    }

    #[test]
    fn test_relocate_never_lands_on_occupied_set() {
        // Block most of a tiny interior; the one free cell must always win.
        let grid = Grid::new(4, 4);
        let mut rng = StdRng::seed_from_u64(2);
        let free = Cell::new(2, 2);
        let mut food = Food::spawn_avoiding(grid, &mut rng, |cell| cell != free);

        for _ in 0..20 {
            food.relocate_avoiding(grid, &mut rng, |cell| cell != free);
            assert_eq!(food.position(), free);
        }
    }

    #[test]
    fn test_relocate_stays_in_interior() {
        let grid = Grid::default();
        let mut rng = StdRng::seed_from_u64(3);
        let mut food = Food::spawn_avoiding(grid, &mut rng, |_| false);

        for _ in 0..200 {
            food.relocate_avoiding(grid, &mut rng, |_| false);
            let pos = food.position();
            assert!(pos.x >= 1 && pos.x < grid.width);
            assert!(pos.y >= 1 && pos.y < grid.height);
        }
    }
}
