use std::collections::VecDeque;

use serde::Serialize;

use crate::axis::Axis;
use crate::config::GridSize;
use crate::input::Direction;

/// Grid position in cell coordinates, border cells included.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns true when the position lies strictly inside the border.
    #[must_use]
    pub fn is_interior(self, grid: GridSize) -> bool {
        (GridSize::INTERIOR_MIN..=grid.interior_max_x()).contains(&self.x)
            && (GridSize::INTERIOR_MIN..=grid.interior_max_y()).contains(&self.y)
    }
}

/// Head position tracked as one wraparound axis per dimension.
///
/// Moving off one interior edge lands on the opposite interior edge; the
/// border is never reached.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Cursor {
    horizontal: Axis,
    vertical: Axis,
}

impl Cursor {
    /// Creates a cursor on the first interior cell, `(1, 1)`.
    #[must_use]
    pub fn new(grid: GridSize) -> Self {
        Self {
            horizontal: Axis::new(GridSize::INTERIOR_MIN, grid.interior_max_x()),
            vertical: Axis::new(GridSize::INTERIOR_MIN, grid.interior_max_y()),
        }
    }

    /// Creates a cursor at `position`, clamped into the interior.
    #[must_use]
    pub fn at(grid: GridSize, position: Position) -> Self {
        Self {
            horizontal: Axis::starting_at(
                GridSize::INTERIOR_MIN,
                grid.interior_max_x(),
                position.x,
            ),
            vertical: Axis::starting_at(
                GridSize::INTERIOR_MIN,
                grid.interior_max_y(),
                position.y,
            ),
        }
    }

    /// Moves one cell in `direction`.
    pub fn step(&mut self, direction: Direction) {
        match direction {
            Direction::Up => self.vertical.retreat(),
            Direction::Down => self.vertical.advance(),
            Direction::Right => self.horizontal.advance(),
            Direction::Left => self.horizontal.retreat(),
        };
    }

    #[must_use]
    pub fn position(&self) -> Position {
        Position {
            x: self.horizontal.current(),
            y: self.vertical.current(),
        }
    }
}

/// Trailing snake segments, newest (closest to the head) first.
///
/// The head itself is not part of the body; it is tracked by [`Cursor`].
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Body {
    segments: VecDeque<Position>,
}

impl Body {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a body from explicit segments (front is next to the head).
    #[must_use]
    pub fn from_segments(segments: Vec<Position>) -> Self {
        Self {
            segments: VecDeque::from(segments),
        }
    }

    /// Moves every segment one slot toward the tail, filling the front with
    /// `vacated_head`. Returns the dropped tail segment.
    ///
    /// An empty body is left untouched.
    pub fn shift(&mut self, vacated_head: Position) -> Option<Position> {
        if self.segments.is_empty() {
            return None;
        }

        let dropped = self.segments.pop_back();
        self.segments.push_front(vacated_head);
        dropped
    }

    /// Appends `position` as the new tail end.
    pub fn grow(&mut self, position: Position) {
        self.segments.push_back(position);
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.segments.contains(&position)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Iterates over segments from the head end to the tail end.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.segments.iter()
    }
}
