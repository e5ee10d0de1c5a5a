use crate::grid::GridSpace;
use crate::snake::SnakeBody;

/// Why a run ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

/// Checks the post-move body against the playfield and itself.
///
/// Boundary is tested first; either hit alone ends the game.
#[must_use]
pub fn check(body: &SnakeBody, grid: GridSpace) -> Option<DeathReason> {
    if !grid.in_bounds(body.head()) {
        return Some(DeathReason::WallCollision);
    }

    if body.head_overlaps_body() {
        return Some(DeathReason::SelfCollision);
    }

    None
}
