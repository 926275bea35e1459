//! Line detection by walking neighbor links.

use super::{Line, Orientation};
use crate::board::Board;
use crate::cell::{Cell, Direction};
use std::iter;
use tracing::instrument;

/// Finds the first completed line in scan order.
///
/// Scan order is every row top to bottom, then every column left to right,
/// then the main diagonal from `(0, 0)`, then the anti-diagonal from
/// `(n - 1, 0)`.
#[instrument(skip(board), fields(order = board.order()))]
pub fn find_line(board: &Board) -> Option<Line> {
    let n = board.order();

    let rows = (0..n)
        .filter_map(|y| board.cell(0, y))
        .map(|c| (c, Direction::Right, Orientation::Row));
    let columns = (0..n)
        .filter_map(|x| board.cell(x, 0))
        .map(|c| (c, Direction::Bottom, Orientation::Column));
    let diagonals = [
        board
            .cell(0, 0)
            .map(|c| (c, Direction::BottomRight, Orientation::DiagonalMain)),
        board
            .cell(n.saturating_sub(1), 0)
            .map(|c| (c, Direction::BottomLeft, Orientation::DiagonalAnti)),
    ]
    .into_iter()
    .flatten();

    rows.chain(columns)
        .chain(diagonals)
        .find_map(|(start, dir, orientation)| line_from(board, start, dir, orientation))
}

/// Cells reached from `start` by following `dir`, at most `n` of them.
fn walk<'a>(
    board: &'a Board,
    start: &'a Cell,
    dir: Direction,
) -> impl Iterator<Item = &'a Cell> {
    iter::successors(Some(start), move |c| board.neighbor(c, dir)).take(board.order())
}

/// Number of consecutive cells from `start` holding `start`'s mark.
///
/// Zero when `start` is empty; an empty or foreign cell ends the run.
pub fn run_length(board: &Board, start: &Cell, dir: Direction) -> usize {
    let Some(kind) = start.value() else {
        return 0;
    };
    walk(board, start, dir)
        .take_while(|c| c.value() == Some(kind))
        .count()
}

fn line_from(
    board: &Board,
    start: &Cell,
    dir: Direction,
    orientation: Orientation,
) -> Option<Line> {
    let mark = start.value()?;
    if run_length(board, start, dir) < board.order() {
        return None;
    }
    Some(Line {
        mark,
        orientation,
        cells: walk(board, start, dir).map(Cell::index).collect(),
    })
}
