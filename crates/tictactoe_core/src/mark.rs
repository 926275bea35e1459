//! Player marks.

use crate::error::BoardError;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The value a player places in a cell.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Mark {
    /// Player 1, moves first by default.
    #[display("X")]
    Cross,
    /// Player 2.
    #[display("O")]
    Circle,
}

impl Mark {
    /// Raw kind code for circles.
    pub const CIRCLE_KIND: u8 = 0;
    /// Raw kind code for crosses.
    pub const CROSS_KIND: u8 = 1;

    /// Returns the other kind.
    pub fn opponent(self) -> Self {
        match self {
            Mark::Cross => Mark::Circle,
            Mark::Circle => Mark::Cross,
        }
    }

    /// Player number shown in the win banner.
    pub fn player_number(self) -> u8 {
        match self {
            Mark::Cross => 1,
            Mark::Circle => 2,
        }
    }

    /// Parses a configuration name (`"cross"` or `"circle"`, any case).
    #[instrument]
    pub fn parse(name: &str) -> Result<Self, BoardError> {
        name.trim()
            .parse::<Mark>()
            .map_err(|_| BoardError::InvalidMark {
                value: name.to_string(),
            })
    }
}

impl TryFrom<u8> for Mark {
    type Error = BoardError;

    fn try_from(kind: u8) -> Result<Self, Self::Error> {
        match kind {
            Mark::CIRCLE_KIND => Ok(Mark::Circle),
            Mark::CROSS_KIND => Ok(Mark::Cross),
            other => Err(BoardError::InvalidMark {
                value: other.to_string(),
            }),
        }
    }
}
