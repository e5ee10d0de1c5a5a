use rand::Rng;

use crate::grid::{Cell, GridSpace};
use crate::snake::SnakeBody;

/// Population bounds for the food pool.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct FoodLimits {
    /// Smallest initial batch.
    pub min_initial: usize,
    /// Largest initial batch.
    pub max_initial: usize,
    /// Hard cap on simultaneously active food.
    pub max_total: usize,
}

/// Active food cells in insertion order.
///
/// Cells are unique and never overlap the snake at the moment they are
/// added. Size stays within `[0, limits.max_total]`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct FoodPool {
    cells: Vec<Cell>,
    limits: FoodLimits,
}

impl FoodPool {
    #[must_use]
    pub fn new(limits: FoodLimits) -> Self {
        Self {
            cells: Vec::with_capacity(limits.max_total),
            limits,
        }
    }

    /// Clears the pool and spawns a random batch of
    /// `min_initial..=max_initial` items.
    pub fn spawn_initial_batch<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        grid: GridSpace,
        snake: &SnakeBody,
    ) {
        self.cells.clear();

        let count = rng.gen_range(self.limits.min_initial..=self.limits.max_initial);
        for _ in 0..count {
            let _ = self.spawn_one(rng, grid, snake);
        }
    }

    /// Spawns one food item on a free cell.
    ///
    /// Returns `None` at spawn saturation. Candidates are rejection-sampled
    /// over the whole grid; the loop only runs while at least one cell is free
    /// of both snake and food, which guarantees it terminates.
    pub fn spawn_one<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        grid: GridSpace,
        snake: &SnakeBody,
    ) -> Option<Cell> {
        if self.is_saturated() {
            return None;
        }

        if snake.len() + self.cells.len() >= grid.capacity() {
            return None;
        }

        let cell = loop {
            let candidate = grid.random_cell(rng);
            if !self.contains(candidate) && !snake.occupies(candidate) {
                break candidate;
            }
        };

        self.cells.push(cell);
        Some(cell)
    }

    /// Places food on a specific cell.
    ///
    /// Returns false if the cell already holds food or part of `snake`, or the
    /// pool is saturated.
    pub fn place(&mut self, cell: Cell, snake: &SnakeBody) -> bool {
        if self.is_saturated() || self.contains(cell) || snake.occupies(cell) {
            return false;
        }

        self.cells.push(cell);
        true
    }

    /// Removes the first food item on `head`, if any.
    pub fn try_consume(&mut self, head: Cell) -> bool {
        match self.cells.iter().position(|cell| *cell == head) {
            Some(index) => {
                self.cells.remove(index);
                true
            }
            None => false,
        }
    }

    /// Returns true when no more food may be added.
    #[must_use]
    pub fn is_saturated(&self) -> bool {
        self.cells.len() >= self.limits.max_total
    }

    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }
}
