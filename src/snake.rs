use std::collections::VecDeque;

use crate::config::{GridSize, INITIAL_SNAKE_LENGTH};
use crate::input::{Direction, direction_change_is_valid};

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns the neighbouring position one step towards `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Snake body and heading state.
///
/// Segments are stored tail first, head last. The body never holds duplicate
/// cells: callers only advance into cells that passed the collision rules.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    direction: Direction,
    next_direction: Direction,
}

impl Snake {
    /// Creates the starting snake: three cells in a row ending at the grid
    /// centre, heading right.
    #[must_use]
    pub fn initial(bounds: GridSize) -> Self {
        let center = bounds.center();
        let length = INITIAL_SNAKE_LENGTH as i32;
        let body = (0..length)
            .map(|offset| Position {
                x: center.x - (length - 1) + offset,
                y: center.y,
            })
            .collect();

        Self {
            body,
            direction: Direction::Right,
            next_direction: Direction::Right,
        }
    }

    /// Creates a snake from explicit body segments (tail first, head last).
    ///
    /// # Panics
    ///
    /// Panics when `segments` is empty.
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, direction: Direction) -> Self {
        let snake = Self {
            body: VecDeque::from(segments),
            direction,
            next_direction: direction,
        };
        assert!(!snake.is_empty(), "snake needs at least one segment");

        snake
    }

    /// Appends `new_head`; the tail is dropped unless `grow` is set.
    pub fn advance(&mut self, new_head: Position, grow: bool) {
        debug_assert!(!self.occupies(new_head));

        self.body.push_back(new_head);
        if !grow {
            self.body.pop_front();
        }
    }

    /// Buffers the heading for the next tick.
    ///
    /// A direction that reverses the buffered heading is rejected; the
    /// return value tells whether the direction was accepted.
    pub fn buffer_direction(&mut self, direction: Direction) -> bool {
        if !direction_change_is_valid(self.next_direction, direction) {
            return false;
        }

        self.next_direction = direction;
        true
    }

    /// Promotes the buffered heading to the active one and returns it.
    pub fn commit_direction(&mut self) -> Direction {
        self.direction = self.next_direction;
        self.direction
    }

    /// Returns the head position after one step towards `direction`.
    #[must_use]
    pub fn next_head(&self, direction: Direction) -> Position {
        self.head().step(direction)
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .back()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the heading applied on the last tick.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the heading that the next tick will apply.
    #[must_use]
    pub fn next_direction(&self) -> Direction {
        self.next_direction
    }

    /// Iterates over body segments from tail to head.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}
