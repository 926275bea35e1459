//! Running tally of finished rounds.

use crate::mark::Mark;
use crate::rules::WinResult;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Counts wins per mark and draws across rounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreKeeper {
    cross: u32,
    circle: u32,
    draws: u32,
}

impl ScoreKeeper {
    /// Creates an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a terminal result. `WinResult::None` is ignored.
    #[instrument(skip(self))]
    pub fn record(&mut self, result: &WinResult) {
        match result {
            WinResult::Line(line) => match line.mark {
                Mark::Cross => self.cross += 1,
                Mark::Circle => self.circle += 1,
            },
            WinResult::Draw => self.draws += 1,
            WinResult::None => return,
        }
        debug!(cross = self.cross, circle = self.circle, draws = self.draws, "Score updated");
    }

    /// Rounds won by `mark`.
    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::Cross => self.cross,
            Mark::Circle => self.circle,
        }
    }

    /// Drawn rounds.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Finished rounds of any outcome.
    pub fn games(&self) -> u32 {
        self.cross + self.circle + self.draws
    }
}

impl std::fmt::Display for ScoreKeeper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "PLAYER 1: {}  PLAYER 2: {}  TIES: {}",
            self.cross, self.circle, self.draws
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{Line, Orientation};

    fn win(mark: Mark) -> WinResult {
        WinResult::Line(Line {
            mark,
            orientation: Orientation::Row,
            cells: vec![0, 1, 2],
        })
    }

    #[test]
    fn test_record_outcomes() {
        let mut score = ScoreKeeper::new();
        score.record(&win(Mark::Cross));
        score.record(&win(Mark::Cross));
        score.record(&win(Mark::Circle));
        score.record(&WinResult::Draw);
        score.record(&WinResult::None);

        assert_eq!(score.wins(Mark::Cross), 2);
        assert_eq!(score.wins(Mark::Circle), 1);
        assert_eq!(score.draws(), 1);
        assert_eq!(score.games(), 4);
    }

    #[test]
    fn test_display() {
        let mut score = ScoreKeeper::new();
        score.record(&win(Mark::Circle));
        assert_eq!(score.to_string(), "PLAYER 1: 0  PLAYER 2: 1  TIES: 0");
    }
}
