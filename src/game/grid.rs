use rand::Rng;
use serde::{Deserialize, Serialize};

use super::heading::Heading;

/// Fixed window size in pixels.
pub const SCREEN_WIDTH: i32 = 640;
pub const SCREEN_HEIGHT: i32 = 480;
/// Side length of one square cell in pixels.
pub const CELL_SIZE: i32 = 20;
/// Board dimensions in cells.
pub const GRID_WIDTH: i32 = SCREEN_WIDTH / CELL_SIZE;
pub const GRID_HEIGHT: i32 = SCREEN_HEIGHT / CELL_SIZE;

/// One discrete grid position in board coordinates (cells, not pixels).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Board dimensions in cells. Stateless: holds no game state, only the
/// toroidal coordinate arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
        }
    }
}

impl Grid {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// The cell the snake spawns on.
    pub fn center(&self) -> Cell {
        Cell::new(self.width / 2, self.height / 2)
    }

    /// One step from `cell` along `heading`, wrapping toroidally: exiting
    /// one edge re-enters on the opposite edge of the same row/column.
    /// `rem_euclid` keeps both coordinates in `[0, dim)`.
    pub fn wrap(&self, cell: Cell, heading: Heading) -> Cell {
        let (dx, dy) = heading.delta();
        Cell::new(
            (cell.x + dx).rem_euclid(self.width),
            (cell.y + dy).rem_euclid(self.height),
        )
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.width && cell.y >= 0 && cell.y < self.height
    }

    /// Uniformly random cell in the interior `[1, width) x [1, height)`,
    /// the range food may be placed in.
    pub fn random_cell(&self, rng: &mut impl Rng) -> Cell {
        Cell::new(rng.gen_range(1..self.width), rng.gen_range(1..self.height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_derived_dimensions() {
        assert_eq!(GRID_WIDTH, 32);
        assert_eq!(GRID_HEIGHT, 24);
        assert_eq!(Grid::default().center(), Cell::new(16, 12));
    }

    #[test]
    fn test_wrap_interior_step() {
        let grid = Grid::default();
        let cell = Cell::new(5, 5);
        assert_eq!(grid.wrap(cell, Heading::Up), Cell::new(5, 4));
        assert_eq!(grid.wrap(cell, Heading::Down), Cell::new(5, 6));
        assert_eq!(grid.wrap(cell, Heading::Left), Cell::new(4, 5));
        assert_eq!(grid.wrap(cell, Heading::Right), Cell::new(6, 5));
    }

    #[test]
    fn test_wrap_reenters_opposite_edge() {
        let grid = Grid::default();
        assert_eq!(grid.wrap(Cell::new(0, 5), Heading::Left), Cell::new(31, 5));
        assert_eq!(grid.wrap(Cell::new(31, 5), Heading::Right), Cell::new(0, 5));
        assert_eq!(grid.wrap(Cell::new(7, 0), Heading::Up), Cell::new(7, 23));
        assert_eq!(grid.wrap(Cell::new(7, 23), Heading::Down), Cell::new(7, 0));
    }

    #[test]
    fn test_wrap_stays_in_bounds_everywhere() {
        let grid = Grid::new(6, 4);
        for x in 0..grid.width {
            for y in 0..grid.height {
                for heading in Heading::ALL {
                    let next = grid.wrap(Cell::new(x, y), heading);
                    assert!(grid.contains(next), "{next:?} out of bounds");
                }
            }
        }
    }

    #[test]
    fn test_random_cell_stays_in_interior() {
        let grid = Grid::default();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let cell = grid.random_cell(&mut rng);
            assert!(cell.x >= 1 && cell.x < grid.width);
            assert!(cell.y >= 1 && cell.y < grid.height);
        }
    }
}
