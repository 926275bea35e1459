//! Board model for a two-player mark-placement game.
//!
//! The board is an arena of linked cells built once from window geometry.
//! The rendering layer feeds pointer coordinates in through
//! [`Board::hit_test`] (or [`Round::handle_click`]) and reads cell bounds,
//! marks and the [`WinResult`] back out. Nothing here draws.
//!
//! ```
//! use tictactoe_core::{Board, Mark, Point, TurnDecider, rules};
//!
//! let mut board = Board::build(Point::new(0.0, 0.0), 800.0, 600.0, 3, 45.0)?;
//! let mut turns = TurnDecider::new(Mark::Cross);
//! let index = board.hit_test(Point::new(400.0, 300.0)).map(|c| c.index());
//! assert_eq!(index, Some(4));
//! assert!(board.try_set(4, turns.next()));
//! assert!(!rules::evaluate(&board)?.is_terminal());
//! # Ok::<(), tictactoe_core::BoardError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod cell;
mod error;
mod geometry;
mod mark;
mod round;
mod score;
mod turn;

pub mod rules;

pub use board::{Board, DEFAULT_ORDER};
pub use cell::{Cell, Direction};
pub use error::{BoardError, MIN_ORDER};
pub use geometry::{Point, Rect, Segment};
pub use mark::Mark;
pub use round::{ClickOutcome, Round};
pub use rules::{Line, Orientation, WinResult};
pub use score::ScoreKeeper;
pub use turn::TurnDecider;
