//! Win detection.
//!
//! Pure functions over a [`Board`]. Lines are found by walking neighbor
//! links from each line start and counting same-kind marks, so the same
//! code handles any grid order.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::find_line;

use crate::board::Board;
use crate::error::BoardError;
use crate::geometry::{Point, Segment};
use crate::mark::Mark;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Direction a completed line runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Left to right along one row.
    #[display("row")]
    Row,
    /// Top to bottom along one column.
    #[display("column")]
    Column,
    /// Top-left to bottom-right.
    #[display("main diagonal")]
    DiagonalMain,
    /// Top-right to bottom-left.
    #[display("anti-diagonal")]
    DiagonalAnti,
}

/// A completed run of `n` same-kind marks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    /// Kind that owns the line.
    pub mark: Mark,
    /// Which way the line runs.
    pub orientation: Orientation,
    /// Board indices of the line's cells, in walk order.
    pub cells: Vec<usize>,
}

impl Line {
    /// Strike-through segment across the line, for the renderer.
    ///
    /// Returns `None` if the line's cells are not on `board`.
    pub fn stroke(&self, board: &Board) -> Option<Segment> {
        let first = board.get(*self.cells.first()?)?.bounds();
        let last = board.get(*self.cells.last()?)?.bounds();
        let segment = match self.orientation {
            Orientation::Row => {
                let y = first.center().y;
                Segment::new(Point::new(first.start.x, y), Point::new(last.end.x, y))
            }
            Orientation::Column => {
                let x = first.center().x;
                Segment::new(Point::new(x, first.start.y), Point::new(x, last.end.y))
            }
            Orientation::DiagonalMain => Segment::new(first.start, last.end),
            Orientation::DiagonalAnti => Segment::new(first.top_right(), last.bottom_left()),
        };
        Some(segment)
    }
}

/// Outcome of evaluating a board.
///
/// Displays as the banner shown to players; `None` displays as nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Display, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum WinResult {
    /// No line yet and empty cells remain.
    #[default]
    #[display("")]
    None,
    /// A player completed a line.
    #[display("PLAYER {} WINS!", _0.mark.player_number())]
    Line(Line),
    /// The board is full with no line.
    #[display("TIE!")]
    Draw,
}

impl WinResult {
    /// Whether the round is over.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, WinResult::None)
    }

    /// Winning mark, if any.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            WinResult::Line(line) => Some(line.mark),
            WinResult::None | WinResult::Draw => None,
        }
    }
}

/// Evaluates `board`: rows, then columns, then the main diagonal, then the
/// anti-diagonal, then draw. The first match wins.
///
/// # Errors
///
/// Returns [`BoardError::MalformedGrid`] if the board does not hold exactly
/// `n²` cells for its order `n`.
#[instrument(skip(board), fields(order = board.order()))]
pub fn evaluate(board: &Board) -> Result<WinResult, BoardError> {
    let order = board.order();
    let cells = board.cells().len();
    if cells != order * order {
        return Err(BoardError::MalformedGrid { order, cells });
    }

    if let Some(line) = find_line(board) {
        info!(mark = %line.mark, orientation = %line.orientation, "Line completed");
        return Ok(WinResult::Line(line));
    }

    if is_full(board) {
        info!("Board full, draw");
        return Ok(WinResult::Draw);
    }

    debug!("No result yet");
    Ok(WinResult::None)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::geometry::Point;

    /// Builds a board of `order` and places `(x, y, mark)` entries.
    pub(crate) fn board_with(order: usize, marks: &[(usize, usize, Mark)]) -> Board {
        let size = 100.0 * order as f64;
        let mut board = Board::build(Point::default(), size, size, order, 0.0).unwrap();
        for &(x, y, mark) in marks {
            assert!(board.try_set(y * order + x, mark));
        }
        board
    }

    fn expect_line(result: WinResult) -> Line {
        match result {
            WinResult::Line(line) => line,
            other => panic!("expected a line, got {other:?}"),
        }
    }

    use crate::mark::Mark::{Circle as O, Cross as X};

    #[test]
    fn test_row_win() {
        let board = board_with(3, &[(0, 0, X), (1, 0, X), (2, 0, X)]);
        let line = expect_line(evaluate(&board).unwrap());
        assert_eq!(line.mark, X);
        assert_eq!(line.orientation, Orientation::Row);
        assert_eq!(line.cells, [0, 1, 2]);
    }

    #[test]
    fn test_column_win() {
        let board = board_with(3, &[(1, 0, O), (1, 1, O), (1, 2, O)]);
        let line = expect_line(evaluate(&board).unwrap());
        assert_eq!(line.mark, O);
        assert_eq!(line.orientation, Orientation::Column);
        assert_eq!(line.cells, [1, 4, 7]);
    }

    #[test]
    fn test_main_diagonal_win() {
        let board = board_with(3, &[(0, 0, X), (1, 1, X), (2, 2, X)]);
        let line = expect_line(evaluate(&board).unwrap());
        assert_eq!(line.orientation, Orientation::DiagonalMain);
        assert_eq!(line.cells, [0, 4, 8]);
    }

    #[test]
    fn test_anti_diagonal_win() {
        let board = board_with(3, &[(2, 0, O), (1, 1, O), (0, 2, O)]);
        let line = expect_line(evaluate(&board).unwrap());
        assert_eq!(line.mark, O);
        assert_eq!(line.orientation, Orientation::DiagonalAnti);
        assert_eq!(line.cells, [2, 4, 6]);
    }

    #[test]
    #[rustfmt::skip]
    fn test_draw() {
        // X O X / X O O / O X X
        let board = board_with(
            3,
            &[
                (0, 0, X), (1, 0, O), (2, 0, X),
                (0, 1, X), (1, 1, O), (2, 1, O),
                (0, 2, O), (1, 2, X), (2, 2, X),
            ],
        );
        assert_eq!(evaluate(&board), Ok(WinResult::Draw));
    }

    #[test]
    fn test_partial_board_is_none() {
        let board = board_with(3, &[(0, 0, X), (1, 1, O), (2, 0, X)]);
        assert_eq!(evaluate(&board), Ok(WinResult::None));
    }

    #[test]
    fn test_empty_and_reset_board_is_none() {
        let mut board = board_with(3, &[(0, 0, X), (1, 0, X), (2, 0, X)]);
        assert!(evaluate(&board).unwrap().is_terminal());
        board.reset();
        assert_eq!(evaluate(&board), Ok(WinResult::None));
    }

    #[test]
    fn test_row_beats_column_and_diagonal() {
        // Row 0 is all X, column 0 is all X, main diagonal is all X.
        let board = board_with(
            3,
            &[(0, 0, X), (1, 0, X), (2, 0, X), (0, 1, X), (0, 2, X), (1, 1, X), (2, 2, X)],
        );
        let line = expect_line(evaluate(&board).unwrap());
        assert_eq!(line.orientation, Orientation::Row);
    }

    #[test]
    fn test_column_beats_diagonal() {
        let board = board_with(3, &[(2, 0, O), (2, 1, O), (2, 2, O), (1, 1, O), (0, 2, O)]);
        let line = expect_line(evaluate(&board).unwrap());
        assert_eq!(line.orientation, Orientation::Column);
        assert_eq!(line.cells, [2, 5, 8]);
    }

    #[test]
    #[rustfmt::skip]
    fn test_win_on_full_board_is_not_draw() {
        // X X X / O O X / X O O
        let board = board_with(
            3,
            &[
                (0, 0, X), (1, 0, X), (2, 0, X),
                (0, 1, O), (1, 1, O), (2, 1, X),
                (0, 2, X), (1, 2, O), (2, 2, O),
            ],
        );
        assert_eq!(evaluate(&board).unwrap().winner(), Some(X));
    }

    #[test]
    fn test_larger_order_needs_full_run() {
        let mut board = board_with(4, &[(0, 1, O), (1, 1, O), (2, 1, O)]);
        assert_eq!(evaluate(&board), Ok(WinResult::None));
        assert!(board.try_set(7, O));
        let line = expect_line(evaluate(&board).unwrap());
        assert_eq!(line.cells, [4, 5, 6, 7]);
    }

    #[test]
    fn test_anti_diagonal_order_five() {
        let marks: Vec<_> = (0..5).map(|i| (4 - i, i, X)).collect();
        let board = board_with(5, &marks);
        let line = expect_line(evaluate(&board).unwrap());
        assert_eq!(line.orientation, Orientation::DiagonalAnti);
        assert_eq!(line.cells, [4, 8, 12, 16, 20]);
    }

    #[test]
    fn test_malformed_grid_is_rejected() {
        let mut board = board_with(3, &[]);
        board.truncate(8);
        assert_eq!(
            evaluate(&board),
            Err(BoardError::MalformedGrid { order: 3, cells: 8 })
        );
    }

    #[test]
    fn test_banner_text() {
        let board = board_with(3, &[(2, 0, O), (1, 1, O), (0, 2, O)]);
        assert_eq!(evaluate(&board).unwrap().to_string(), "PLAYER 2 WINS!");
        assert_eq!(WinResult::Draw.to_string(), "TIE!");
        assert_eq!(WinResult::None.to_string(), "");
    }

    #[test]
    fn test_strokes() {
        let row = board_with(3, &[(0, 1, X), (1, 1, X), (2, 1, X)]);
        let line = expect_line(evaluate(&row).unwrap());
        let stroke = line.stroke(&row).unwrap();
        assert_eq!(stroke.from, Point::new(0.0, 150.0));
        assert_eq!(stroke.to, Point::new(300.0, 150.0));

        let anti = board_with(3, &[(2, 0, O), (1, 1, O), (0, 2, O)]);
        let line = expect_line(evaluate(&anti).unwrap());
        let stroke = line.stroke(&anti).unwrap();
        assert_eq!(stroke.from, Point::new(300.0, 300.0));
        assert_eq!(stroke.to, Point::new(0.0, 0.0));

        let column = board_with(3, &[(0, 0, X), (0, 1, X), (0, 2, X)]);
        let line = expect_line(evaluate(&column).unwrap());
        let stroke = line.stroke(&column).unwrap();
        assert_eq!(stroke.from, Point::new(50.0, 300.0));
        assert_eq!(stroke.to, Point::new(50.0, 0.0));
    }
}
