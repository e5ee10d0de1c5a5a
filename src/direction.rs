/// Canonical movement directions for the snake.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four headings, in a fixed order.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Heading every game starts with.
pub const INITIAL_HEADING: Direction = Direction::Right;

/// Returns whether a direction change is legal (no immediate 180° turns).
#[must_use]
pub fn direction_change_is_valid(committed: Direction, next: Direction) -> bool {
    next != committed.opposite()
}

/// Committed heading plus the pending heading for the next move.
///
/// Requests are validated against the heading last committed to a move, not
/// against the pending one, so two quick turns inside one tick can never
/// fold the head back onto the neck.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct DirectionIntent {
    committed: Direction,
    pending: Direction,
}

impl Default for DirectionIntent {
    fn default() -> Self {
        Self::new(INITIAL_HEADING)
    }
}

impl DirectionIntent {
    #[must_use]
    pub fn new(heading: Direction) -> Self {
        Self {
            committed: heading,
            pending: heading,
        }
    }

    /// Records `next` as the heading for the next move.
    ///
    /// Reversals are dropped silently. The return value only reports whether
    /// the request was taken; last accepted request before a tick wins.
    pub fn request_change(&mut self, next: Direction) -> bool {
        if !direction_change_is_valid(self.committed, next) {
            return false;
        }

        self.pending = next;
        true
    }

    /// Promotes the pending heading and returns it for the upcoming move.
    pub fn commit(&mut self) -> Direction {
        self.committed = self.pending;
        self.committed
    }

    #[must_use]
    pub fn committed(&self) -> Direction {
        self.committed
    }

    #[must_use]
    pub fn pending(&self) -> Direction {
        self.pending
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::{Direction, DirectionIntent, direction_change_is_valid};

    #[test]
    fn opposite_direction_is_correct() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn reversal_is_never_valid() {
        for direction in Direction::ALL {
            assert!(!direction_change_is_valid(direction, direction.opposite()));
            assert!(direction_change_is_valid(direction, direction));
        }

        assert!(direction_change_is_valid(Direction::Up, Direction::Left));
        assert!(direction_change_is_valid(Direction::Up, Direction::Right));
    }

    #[test]
    fn intent_starts_heading_right() {
        let intent = DirectionIntent::default();

        assert_eq!(intent.committed(), Direction::Right);
        assert_eq!(intent.pending(), Direction::Right);
    }

    #[test]
    fn reversal_request_is_ignored() {
        let mut intent = DirectionIntent::default();

        assert!(!intent.request_change(Direction::Left));
        assert_eq!(intent.commit(), Direction::Right);
    }

    #[test]
    fn last_request_before_commit_wins() {
        let mut intent = DirectionIntent::default();

        assert!(intent.request_change(Direction::Up));
        assert!(intent.request_change(Direction::Down));

        assert_eq!(intent.commit(), Direction::Down);
    }

    #[test]
    fn guard_uses_committed_heading_not_pending() {
        let mut intent = DirectionIntent::default();

        // Up is pending, but Left still reverses the committed Right.
        assert!(intent.request_change(Direction::Up));
        assert!(!intent.request_change(Direction::Left));
        assert_eq!(intent.pending(), Direction::Up);

        assert_eq!(intent.commit(), Direction::Up);
        assert!(intent.request_change(Direction::Left));
        assert_eq!(intent.commit(), Direction::Left);
    }

    #[test]
    fn reset_restores_initial_heading() {
        let mut intent = DirectionIntent::default();
        intent.request_change(Direction::Down);
        intent.commit();

        intent.reset();

        assert_eq!(intent, DirectionIntent::default());
    }
}
