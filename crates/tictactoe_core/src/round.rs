//! Click-driven round controller.
//!
//! Ties a [`Board`], a [`TurnDecider`] and a [`ScoreKeeper`] together the
//! way the input loop uses them: one call per pointer click, run to
//! completion before the next frame.

use crate::board::Board;
use crate::error::BoardError;
use crate::geometry::Point;
use crate::mark::Mark;
use crate::rules::{self, WinResult};
use crate::score::ScoreKeeper;
use crate::turn::TurnDecider;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// What a single click did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ClickOutcome {
    /// The board was in a finished state and has been cleared.
    Reset,
    /// The click landed outside every cell.
    Missed,
    /// The clicked cell already holds a mark; the turn is not consumed.
    Occupied {
        /// Index of the clicked cell.
        index: usize,
    },
    /// A mark was placed.
    Placed {
        /// Index of the cell that received the mark.
        index: usize,
        /// The mark placed.
        mark: Mark,
        /// Board evaluation after the placement.
        result: WinResult,
    },
}

/// One game table: the board, whose turn it is, and the running score.
#[derive(Debug, Clone)]
pub struct Round {
    board: Board,
    decider: TurnDecider,
    score: ScoreKeeper,
    result: WinResult,
}

impl Round {
    /// Creates a round on an empty board.
    #[instrument(skip(board), fields(order = board.order()))]
    pub fn new(board: Board, decider: TurnDecider) -> Self {
        Self {
            board,
            decider,
            score: ScoreKeeper::new(),
            result: WinResult::None,
        }
    }

    /// Handles one pointer click at `point`.
    ///
    /// A click on a finished board only resets it. Otherwise the click is
    /// hit-tested; on an empty cell the pending mark is placed and the board
    /// re-evaluated, and a finished result is added to the score.
    ///
    /// # Errors
    ///
    /// Propagates [`BoardError`] from evaluation.
    #[instrument(skip(self), fields(to_move = %self.decider.peek()))]
    pub fn handle_click(&mut self, point: Point) -> Result<ClickOutcome, BoardError> {
        if self.result.is_terminal() {
            self.board.reset();
            self.result = WinResult::None;
            debug!("Finished board cleared");
            return Ok(ClickOutcome::Reset);
        }

        let Some(index) = self.board.hit_test(point).map(|c| c.index()) else {
            debug!("Click outside the grid");
            return Ok(ClickOutcome::Missed);
        };

        let mark = self.decider.peek();
        if !self.board.try_set(index, mark) {
            warn!(index, "Cell already occupied");
            return Ok(ClickOutcome::Occupied { index });
        }
        let placed = self.decider.next();
        debug_assert_eq!(placed, mark);
        debug!(index, %mark, "Mark placed");

        let result = rules::evaluate(&self.board)?;
        if result.is_terminal() {
            info!(banner = %result, "Round finished");
            self.score.record(&result);
        }
        self.result = result.clone();

        Ok(ClickOutcome::Placed {
            index,
            mark,
            result,
        })
    }

    /// The board being played.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Running score.
    pub fn score(&self) -> &ScoreKeeper {
        &self.score
    }

    /// Mark the next successful placement will use.
    pub fn to_move(&self) -> Mark {
        self.decider.peek()
    }

    /// Result of the last evaluation.
    pub fn result(&self) -> &WinResult {
        &self.result
    }
}
