//! Turn alternation.

use crate::error::BoardError;
use crate::mark::Mark;
use tracing::{instrument, trace};

/// Hands out the mark for each successful placement, alternating kinds.
///
/// Callers only advance the decider when a placement actually lands; a
/// click on an occupied cell does not consume the turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnDecider {
    next: Mark,
}

impl TurnDecider {
    /// Creates a decider whose first [`next`](Self::next) returns `first`.
    #[instrument]
    pub fn new(first: Mark) -> Self {
        Self { next: first }
    }

    /// Creates a decider from a raw kind code.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidMark`] if `kind` is neither kind code.
    #[instrument]
    pub fn from_kind(kind: u8) -> Result<Self, BoardError> {
        Ok(Self::new(Mark::try_from(kind)?))
    }

    /// Creates a decider from a configuration name such as `"cross"`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidMark`] for any other name.
    #[instrument]
    pub fn from_name(name: &str) -> Result<Self, BoardError> {
        Ok(Self::new(Mark::parse(name)?))
    }

    /// Returns the pending mark and flips to the other kind.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Mark {
        let current = self.next;
        self.next = current.opponent();
        trace!(placed = %current, pending = %self.next, "Turn advanced");
        current
    }

    /// Returns the pending mark without advancing.
    pub fn peek(&self) -> Mark {
        self.next
    }
}

impl Default for TurnDecider {
    fn default() -> Self {
        Self::new(Mark::Cross)
    }
}
