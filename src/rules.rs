use crate::config::GridSize;
use crate::food::Food;
use crate::input::Direction;
use crate::snake::{Position, Snake};

/// Verdict for one proposed head move.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum MoveOutcome {
    WallCollision,
    SelfCollision,
    Moved { head: Position, ate_food: bool },
}

/// Evaluates moving the snake head one cell towards `heading`.
///
/// The body check runs against the snake as it is before the move, tail
/// included. Stepping into the current tail cell is a collision even though
/// the tail would leave that cell on a non-eating move.
#[must_use]
pub fn evaluate_move(
    bounds: GridSize,
    snake: &Snake,
    heading: Direction,
    food: &Food,
) -> MoveOutcome {
    let head = snake.next_head(heading);

    if !bounds.contains(head) {
        return MoveOutcome::WallCollision;
    }

    if snake.occupies(head) {
        return MoveOutcome::SelfCollision;
    }

    MoveOutcome::Moved {
        head,
        ate_food: head == food.position,
    }
}
