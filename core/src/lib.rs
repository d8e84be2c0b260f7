#![no_std]

extern crate alloc;

pub use engine::*;
pub use error::*;
pub use row::*;
pub use snapshot::*;
pub use types::*;

mod engine;
mod error;
mod row;
mod snapshot;
mod types;

/// Outcome of a successful mark.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MarkOutcome {
    Marked,
    /// The terminal value was taken and the row closed.
    RowLocked,
    /// The row closed and it was the second locked row.
    GameOver,
}

impl MarkOutcome {
    pub const fn locks_row(self) -> bool {
        matches!(self, Self::RowLocked | Self::GameOver)
    }

    pub const fn ends_game(self) -> bool {
        matches!(self, Self::GameOver)
    }
}

/// Outcome of a successful unmark.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum UnmarkOutcome {
    Unmarked,
    /// The terminal value was retracted, dropping both of its marks and
    /// reopening the row.
    RowReopened,
}

/// Outcome of recording a penalty.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PenaltyOutcome {
    /// Already at the cap or the game is over.
    NoChange,
    Added,
    /// The fourth penalty ended the game.
    GameOver,
}

impl PenaltyOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Added => true,
            Self::GameOver => true,
        }
    }
}
