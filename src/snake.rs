use std::collections::VecDeque;

use crate::direction::Direction;
use crate::grid::Cell;

/// Number of segments a fresh snake starts with.
pub const INITIAL_SNAKE_LENGTH: usize = 3;

/// Ordered snake segments, head first.
///
/// Length never exceeds `capacity`, the number of cells in the grid.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SnakeBody {
    body: VecDeque<Cell>,
    capacity: usize,
    vacated: Option<Cell>,
}

impl SnakeBody {
    /// Creates a straight snake with its head at `head`, trailing away from
    /// `heading`.
    #[must_use]
    pub fn new(head: Cell, heading: Direction, length: usize, capacity: usize) -> Self {
        debug_assert!(length >= 1 && length <= capacity);

        let mut body = VecDeque::with_capacity(length);
        let mut segment = head;
        for _ in 0..length {
            body.push_back(segment);
            segment = segment.step(heading.opposite());
        }

        Self {
            body,
            capacity,
            vacated: None,
        }
    }

    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Cell>, capacity: usize) -> Self {
        debug_assert!(!segments.is_empty() && segments.len() <= capacity);

        Self {
            body: VecDeque::from(segments),
            capacity,
            vacated: None,
        }
    }

    /// Moves the whole body one cell towards `heading`.
    ///
    /// The head takes the new cell and every other segment takes its
    /// predecessor's pre-move cell. The old tail cell is kept so `grow` can
    /// re-attach it on the same tick.
    pub fn advance(&mut self, heading: Direction) {
        let next_head = self.head().step(heading);

        self.body.push_front(next_head);
        self.vacated = self.body.pop_back();
    }

    /// Lengthens the snake by re-attaching the cell vacated by the last move.
    ///
    /// Returns false when there is nothing to re-attach or the body already
    /// fills the grid.
    pub fn grow(&mut self) -> bool {
        if self.body.len() >= self.capacity {
            return false;
        }

        match self.vacated.take() {
            Some(tail) => {
                self.body.push_back(tail);
                true
            }
            None => false,
        }
    }

    /// Returns the current head cell.
    #[must_use]
    pub fn head(&self) -> Cell {
        self.body[0]
    }

    /// Returns true if any segment occupies `cell`.
    #[must_use]
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Returns true if the head overlaps any non-head segment.
    #[must_use]
    pub fn head_overlaps_body(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|segment| *segment == head)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }
}
