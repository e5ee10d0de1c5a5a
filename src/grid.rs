use rand::Rng;
use serde::Deserialize;

use crate::direction::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Deserialize)]
pub struct Cell {
    pub col: i32,
    pub row: i32,
}

impl Cell {
    #[must_use]
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Returns the neighbouring cell one step towards `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        match direction {
            Direction::Up => Self::new(self.col, self.row - 1),
            Direction::Down => Self::new(self.col, self.row + 1),
            Direction::Left => Self::new(self.col - 1, self.row),
            Direction::Right => Self::new(self.col + 1, self.row),
        }
    }
}

/// Static playfield geometry.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSpace {
    width: u16,
    height: u16,
    cell_size: u16,
}

impl GridSpace {
    #[must_use]
    pub fn new(width: u16, height: u16, cell_size: u16) -> Self {
        debug_assert!(width > 0 && height > 0);
        Self {
            width,
            height,
            cell_size,
        }
    }

    /// Playfield width in cells.
    #[must_use]
    pub fn width(self) -> u16 {
        self.width
    }

    /// Playfield height in cells.
    #[must_use]
    pub fn height(self) -> u16 {
        self.height
    }

    /// Horizontal size of one cell in terminal columns.
    #[must_use]
    pub fn cell_size(self) -> u16 {
        self.cell_size
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn capacity(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    /// Returns true when `cell` lies inside the playfield.
    #[must_use]
    pub fn in_bounds(self, cell: Cell) -> bool {
        cell.col >= 0
            && cell.row >= 0
            && cell.col < i32::from(self.width)
            && cell.row < i32::from(self.height)
    }

    /// Samples a uniformly random in-bounds cell.
    pub fn random_cell<R: Rng + ?Sized>(self, rng: &mut R) -> Cell {
        Cell {
            col: rng.gen_range(0..i32::from(self.width)),
            row: rng.gen_range(0..i32::from(self.height)),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::{Cell, GridSpace};
    use crate::direction::Direction;

    #[test]
    fn bounds_are_half_open() {
        let grid = GridSpace::new(24, 24, 2);

        assert!(grid.in_bounds(Cell::new(0, 0)));
        assert!(grid.in_bounds(Cell::new(23, 23)));
        assert!(!grid.in_bounds(Cell::new(24, 4)));
        assert!(!grid.in_bounds(Cell::new(4, 24)));
        assert!(!grid.in_bounds(Cell::new(-1, 4)));
        assert!(!grid.in_bounds(Cell::new(4, -1)));
    }

    #[test]
    fn capacity_is_width_times_height() {
        assert_eq!(GridSpace::new(24, 24, 2).capacity(), 576);
        assert_eq!(GridSpace::new(10, 3, 1).capacity(), 30);
    }

    #[test]
    fn step_moves_one_cell() {
        let origin = Cell::new(4, 4);

        assert_eq!(origin.step(Direction::Up), Cell::new(4, 3));
        assert_eq!(origin.step(Direction::Down), Cell::new(4, 5));
        assert_eq!(origin.step(Direction::Left), Cell::new(3, 4));
        assert_eq!(origin.step(Direction::Right), Cell::new(5, 4));
    }

    #[test]
    fn random_cells_stay_in_bounds() {
        let grid = GridSpace::new(7, 3, 1);
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..500 {
            assert!(grid.in_bounds(grid.random_cell(&mut rng)));
        }
    }
}
