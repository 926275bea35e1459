//! Tic-tac-toe terminal driver.
//!
//! Loads a [`GameConfig`], builds a [`Round`] from it and plays clicks read
//! from a line-oriented input. All game logic lives in [`tictactoe_core`].
//!
//! # Example
//!
//! ```
//! use tictactoe::{GameConfig, OutputFormat, play};
//!
//! # fn example() -> anyhow::Result<()> {
//! let mut round = GameConfig::default().new_round()?;
//! let mut out = Vec::new();
//! play(&mut round, "400 300\n".as_bytes(), &mut out, OutputFormat::Text)?;
//! assert!(String::from_utf8(out)?.contains("O to move"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod driver;

pub use config::{ConfigError, GameConfig};
pub use driver::{
    CellLayout, ClickParseError, Layout, OutputFormat, layout, parse_click, play, write_layout,
};

pub use tictactoe_core::{
    Board, BoardError, Cell, ClickOutcome, Direction, Line, Mark, Orientation, Point, Rect,
    Round, ScoreKeeper, Segment, TurnDecider, WinResult, rules,
};
