//! Configuration errors for board construction and evaluation.

use derive_more::{Display, Error};

/// Smallest grid order the line rules are defined for.
pub const MIN_ORDER: usize = 3;

/// Fatal configuration error.
///
/// Raised when a board or turn decider cannot be built from the given
/// parameters, or when a board handed to the win detector does not have
/// the topology it claims. None of these are retried.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// A mark kind outside the two valid kinds was supplied.
    #[display("invalid mark kind: {value:?}")]
    InvalidMark {
        /// The rejected input, as given.
        value: String,
    },

    /// The requested grid order is too small for line detection.
    #[display("grid order {order} is below the minimum of 3")]
    GridOrder {
        /// The rejected order.
        order: usize,
    },

    /// The cell count does not match the declared grid order.
    #[display(
        "malformed grid: expected a {order} by {order} grid, but total grid size was {cells}"
    )]
    MalformedGrid {
        /// Declared grid order.
        order: usize,
        /// Actual number of cells.
        cells: usize,
    },
}
