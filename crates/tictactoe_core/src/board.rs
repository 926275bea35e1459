//! The board: an arena of linked cells built once from window geometry.

use crate::cell::{Cell, Direction, Links};
use crate::error::{BoardError, MIN_ORDER};
use crate::geometry::{Point, Rect, Segment};
use crate::mark::Mark;
use std::fmt;
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Grid order of a classic game.
pub const DEFAULT_ORDER: usize = 3;

/// An `n × n` grid of cells stored in row-major order.
///
/// Row 0 is the top row. Moving to a higher row index moves down the
/// screen, which means lower Y values in board space. Every neighbor link
/// and every line walk relies on this orientation.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    order: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Builds an `order × order` board filling the given area.
    ///
    /// The area `width × height` anchored at `origin` is shrunk by `margin`
    /// on every side and split into equal cells. Cell sizes are floored to
    /// whole units so rows and columns line up exactly. Cell `(0, 0)` sits
    /// in the top-left corner at `(origin.x + margin, origin.y + height - margin)`.
    ///
    /// Degenerate geometry is not rejected: a margin larger than half the
    /// area yields empty or inverted cells that no point will hit.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::GridOrder`] if `order` is below 3.
    #[instrument]
    pub fn build(
        origin: Point,
        width: f64,
        height: f64,
        order: usize,
        margin: f64,
    ) -> Result<Self, BoardError> {
        if order < MIN_ORDER {
            return Err(BoardError::GridOrder { order });
        }

        let n = order as f64;
        let cell_width = ((width - margin * 2.0) / n).floor();
        let cell_height = ((height - margin * 2.0) / n).floor();
        let top_left = origin.offset(margin, height - margin);

        let mut cells = Vec::with_capacity(order * order);
        for y in 0..order {
            for x in 0..order {
                let start = top_left.offset(cell_width * x as f64, -cell_height * y as f64);
                let end = start.offset(cell_width, -cell_height);
                cells.push(Cell::new(
                    y * order + x,
                    x,
                    y,
                    Rect::new(start, end),
                    wire(x, y, order),
                ));
            }
        }

        debug!(order, cell_width, cell_height, "Board built");
        Ok(Self { order, cells })
    }

    /// Grid order `n`.
    pub fn order(&self) -> usize {
        self.order
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cell at storage index `index`.
    pub fn get(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// Cell at grid coordinate `(x, y)`.
    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        if x >= self.order || y >= self.order {
            return None;
        }
        self.cells.get(y * self.order + x)
    }

    /// Follows one neighbor link of `cell`.
    pub fn neighbor(&self, cell: &Cell, dir: Direction) -> Option<&Cell> {
        cell.neighbor(dir).and_then(|i| self.cells.get(i))
    }

    /// Returns the first cell, in storage order, strictly containing `point`.
    ///
    /// Points on a shared edge belong to no cell.
    pub fn hit_test(&self, point: Point) -> Option<&Cell> {
        self.cells.iter().find(|c| c.bounds().contains(point))
    }

    /// Places `mark` in the cell at `index`.
    ///
    /// Returns `false` if the cell is occupied or `index` is out of range;
    /// the board is unchanged in both cases.
    pub fn try_set(&mut self, index: usize, mark: Mark) -> bool {
        self.cells
            .get_mut(index)
            .is_some_and(|cell| cell.try_set(mark))
    }

    /// Clears every mark. Bounds and links are kept.
    #[instrument(skip(self), fields(order = self.order))]
    pub fn reset(&mut self) {
        self.cells.iter_mut().for_each(Cell::clear);
        debug!("Board reset");
    }

    /// Whether every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Internal separator lines: `n - 1` vertical then `n - 1` horizontal.
    pub fn grid_lines(&self) -> Vec<Segment> {
        let (Some(first), Some(last)) = (self.cells.first(), self.cells.last()) else {
            return Vec::new();
        };
        let top = first.bounds().start.y;
        let bottom = last.bounds().end.y;
        let left = first.bounds().start.x;
        let right = last.bounds().end.x;

        let vertical = self.cells[1..self.order].iter().map(|c| {
            let x = c.bounds().start.x;
            Segment::new(Point::new(x, top), Point::new(x, bottom))
        });
        let horizontal = self
            .cells
            .iter()
            .step_by(self.order)
            .skip(1)
            .map(|c| {
                let y = c.bounds().start.y;
                Segment::new(Point::new(left, y), Point::new(right, y))
            });

        vertical.chain(horizontal).collect()
    }

    #[cfg(test)]
    pub(crate) fn truncate(&mut self, len: usize) {
        self.cells.truncate(len);
    }
}

/// Computes the neighbor links of `(x, y)` on an `order × order` grid.
fn wire(x: usize, y: usize, order: usize) -> Links {
    let mut links = [None; 8];
    for dir in Direction::iter() {
        let (dx, dy) = dir.offset();
        let nx = x.checked_add_signed(dx).filter(|&v| v < order);
        let ny = y.checked_add_signed(dy).filter(|&v| v < order);
        if let (Some(nx), Some(ny)) = (nx, ny) {
            links[dir.slot()] = Some(ny * order + nx);
        }
    }
    links
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = vec!["-"; self.order].join("+");
        for (y, row) in self.cells.chunks(self.order).enumerate() {
            if y > 0 {
                writeln!(f)?;
                writeln!(f, "{separator}")?;
            }
            let symbols: Vec<String> = row
                .iter()
                .map(|c| c.value().map_or_else(|| " ".to_string(), |m| m.to_string()))
                .collect();
            write!(f, "{}", symbols.join("|"))?;
        }
        Ok(())
    }
}
