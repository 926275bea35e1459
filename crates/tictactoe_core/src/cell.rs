//! Board cells and their neighbor links.

use crate::geometry::Rect;
use crate::mark::Mark;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// One of the eight neighbor directions.
///
/// "Top" and "bottom" refer to screen space: the bottom neighbor sits in
/// the next row down, which has a smaller Y coordinate.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Direction {
    /// Previous row, same column.
    Top,
    /// Next row, same column.
    Bottom,
    /// Same row, previous column.
    Left,
    /// Same row, next column.
    Right,
    /// Previous row, previous column.
    TopLeft,
    /// Previous row, next column.
    TopRight,
    /// Next row, previous column.
    BottomLeft,
    /// Next row, next column.
    BottomRight,
}

impl Direction {
    /// Grid offset as `(dx, dy)`, where `dy = 1` is one row down.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Top => (0, -1),
            Direction::Bottom => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::TopLeft => (-1, -1),
            Direction::TopRight => (1, -1),
            Direction::BottomLeft => (-1, 1),
            Direction::BottomRight => (1, 1),
        }
    }

    /// The direction pointing back.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Top => Direction::Bottom,
            Direction::Bottom => Direction::Top,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::TopLeft => Direction::BottomRight,
            Direction::TopRight => Direction::BottomLeft,
            Direction::BottomLeft => Direction::TopRight,
            Direction::BottomRight => Direction::TopLeft,
        }
    }

    /// Slot of this direction in a cell's link table.
    pub(crate) const fn slot(self) -> usize {
        self as usize
    }
}

/// Neighbor links of one cell, as indices into the owning board.
pub(crate) type Links = [Option<usize>; 8];

/// A single addressable position on the board.
///
/// Cells are created by [`Board::build`](crate::Board::build) and never move.
/// Links to neighbors are board indices, so a cell is only meaningful
/// together with the board that owns it.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    index: usize,
    x: usize,
    y: usize,
    bounds: Rect,
    value: Option<Mark>,
    links: Links,
}

impl Cell {
    pub(crate) fn new(index: usize, x: usize, y: usize, bounds: Rect, links: Links) -> Self {
        Self {
            index,
            x,
            y,
            bounds,
            value: None,
            links,
        }
    }

    /// Places `mark` if the cell is empty.
    ///
    /// Returns `false` and leaves the cell untouched if it already holds a
    /// mark. This is the only way a cell's value changes outside of a board
    /// reset.
    pub fn try_set(&mut self, mark: Mark) -> bool {
        if self.value.is_some() {
            return false;
        }
        trace!(index = self.index, %mark, "Cell set");
        self.value = Some(mark);
        true
    }

    pub(crate) fn clear(&mut self) {
        self.value = None;
    }

    /// Current mark, if any.
    pub fn value(&self) -> Option<Mark> {
        self.value
    }

    /// Whether the cell holds no mark.
    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    /// Cell rectangle in board space.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Rectangle a mark is drawn in, `margin` inside the cell edges.
    pub fn mark_bounds(&self, margin: f64) -> Rect {
        self.bounds.inset(margin)
    }

    /// Position in row-major storage order.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Grid coordinate `(x, y)`; `y = 0` is the top row.
    pub fn coord(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    /// Index of the neighbor in `dir`, or `None` at the board edge.
    pub fn neighbor(&self, dir: Direction) -> Option<usize> {
        self.links[dir.slot()]
    }

    /// Neighbor in the previous row.
    pub fn top(&self) -> Option<usize> {
        self.neighbor(Direction::Top)
    }

    /// Neighbor in the next row.
    pub fn bottom(&self) -> Option<usize> {
        self.neighbor(Direction::Bottom)
    }

    /// Neighbor in the previous column.
    pub fn left(&self) -> Option<usize> {
        self.neighbor(Direction::Left)
    }

    /// Neighbor in the next column.
    pub fn right(&self) -> Option<usize> {
        self.neighbor(Direction::Right)
    }

    /// Up-left diagonal neighbor.
    pub fn top_left(&self) -> Option<usize> {
        self.neighbor(Direction::TopLeft)
    }

    /// Up-right diagonal neighbor.
    pub fn top_right(&self) -> Option<usize> {
        self.neighbor(Direction::TopRight)
    }

    /// Down-left diagonal neighbor.
    pub fn bottom_left(&self) -> Option<usize> {
        self.neighbor(Direction::BottomLeft)
    }

    /// Down-right diagonal neighbor.
    pub fn bottom_right(&self) -> Option<usize> {
        self.neighbor(Direction::BottomRight)
    }
}
