//! Draw detection.

use super::win::find_line;
use crate::board::Board;
use tracing::instrument;

/// Checks if every cell holds a mark.
#[instrument(skip(board), fields(order = board.order()))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// A full board with no completed line.
#[instrument(skip(board), fields(order = board.order()))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && find_line(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::super::tests::board_with;
    use super::*;
    use crate::mark::Mark::{Circle as O, Cross as X};

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&board_with(3, &[])));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = board_with(3, &[(1, 1, X)]);
        assert!(!is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    #[rustfmt::skip]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let board = board_with(
            3,
            &[
                (0, 0, X), (1, 0, O), (2, 0, X),
                (0, 1, O), (1, 1, X), (2, 1, X),
                (0, 2, O), (1, 2, X), (2, 2, O),
            ],
        );
        assert!(is_draw(&board));
    }

    #[test]
    #[rustfmt::skip]
    fn test_not_draw_if_winner() {
        let board = board_with(
            3,
            &[
                (0, 0, X), (1, 0, X), (2, 0, X),
                (0, 1, O), (1, 1, O), (2, 1, X),
                (0, 2, O), (1, 2, X), (2, 2, O),
            ],
        );
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
