use core::ops::Index;
use serde::{Deserialize, Serialize};

use crate::*;

/// The rules engine for one score pad.
///
/// Owns the four rows and the penalty counter, validates every transition,
/// and derives the lock, game-over, and score values on demand. Operations
/// are synchronous and deterministic; once the game is over only [`reset`]
/// accepts input.
///
/// [`reset`]: ScoreEngine::reset
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEngine {
    rows: [RowState; 4],
    penalties: u8,
}

impl ScoreEngine {
    pub fn new() -> Self {
        Self {
            rows: RowColor::ALL.map(RowState::new),
            penalties: 0,
        }
    }

    /// Snapshot restore path; `rows` and `penalties` must already be
    /// validated.
    pub(crate) fn from_parts(rows: [RowState; 4], penalties: u8) -> Self {
        Self { rows, penalties }
    }

    pub fn row(&self, color: RowColor) -> &RowState {
        &self.rows[color.index()]
    }

    pub fn penalties(&self) -> u8 {
        self.penalties
    }

    pub fn penalty_points(&self) -> Points {
        Points::from(self.penalties) * PENALTY_POINTS
    }

    pub fn is_row_locked(&self, color: RowColor) -> bool {
        self.row(color).is_locked()
    }

    pub fn locked_rows(&self) -> u8 {
        self.rows.iter().filter(|row| row.is_locked()).count() as u8
    }

    /// The game ends at the fourth penalty or the second locked row.
    pub fn is_over(&self) -> bool {
        self.penalties >= MAX_PENALTIES || self.locked_rows() >= 2
    }

    /// Sum of the four row scores minus the penalty points. May be negative,
    /// there is no floor.
    pub fn score(&self) -> Points {
        let row_total: Points = self.rows.iter().map(RowState::points).sum();
        row_total - self.penalty_points()
    }

    pub fn can_mark(&self, color: RowColor, value: Value) -> bool {
        !self.is_over() && self.row(color).can_mark(value)
    }

    pub fn can_unmark(&self, color: RowColor, value: Value) -> bool {
        !self.is_over() && self.row(color).can_unmark(value)
    }

    pub fn mark(&mut self, color: RowColor, value: Value) -> Result<MarkOutcome> {
        self.check_active()?;

        let row = &mut self.rows[color.index()];
        row.mark(value)?;

        if !row.is_locked() {
            return Ok(MarkOutcome::Marked);
        }

        log::debug!("{color:?} row locked at {} marks", row.mark_count());
        if self.is_over() {
            log::debug!("game over, two rows locked");
            Ok(MarkOutcome::GameOver)
        } else {
            Ok(MarkOutcome::RowLocked)
        }
    }

    pub fn unmark(&mut self, color: RowColor, value: Value) -> Result<UnmarkOutcome> {
        self.check_active()?;

        let row = &mut self.rows[color.index()];
        let was_locked = row.is_locked();
        row.unmark(value)?;

        Ok(if was_locked {
            log::debug!("{color:?} row reopened");
            UnmarkOutcome::RowReopened
        } else {
            UnmarkOutcome::Unmarked
        })
    }

    /// Records a missed throw. Silently does nothing at the cap or once the
    /// game is over.
    pub fn add_penalty(&mut self) -> PenaltyOutcome {
        if self.is_over() || self.penalties >= MAX_PENALTIES {
            return PenaltyOutcome::NoChange;
        }

        self.penalties += 1;
        if self.penalties >= MAX_PENALTIES {
            log::debug!("game over, {MAX_PENALTIES} penalties");
            PenaltyOutcome::GameOver
        } else {
            PenaltyOutcome::Added
        }
    }

    /// Returns the pad to its initial snapshot. Idempotent.
    pub fn reset(&mut self) {
        log::debug!("pad reset");
        for row in &mut self.rows {
            row.clear();
        }
        self.penalties = 0;
    }

    fn check_active(&self) -> Result<()> {
        if self.is_over() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}

impl Default for ScoreEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<RowColor> for ScoreEngine {
    type Output = RowState;

    fn index(&self, color: RowColor) -> &Self::Output {
        self.row(color)
    }
}
