use serde::{Deserialize, Serialize};

/// Value of a single cell on the pad, always within `MIN_VALUE..=MAX_VALUE`.
pub type Value = u8;

/// Number of marks in a row, counting the terminal value's double mark.
pub type MarkCount = u8;

/// Score type. Penalties can push the total below zero.
pub type Points = i32;

pub const MIN_VALUE: Value = 2;
pub const MAX_VALUE: Value = 12;

/// Marks required in a row before its terminal value may be taken.
pub const LOCK_THRESHOLD: MarkCount = 5;

/// Penalties collected before the game ends.
pub const MAX_PENALTIES: u8 = 4;

/// Points subtracted per penalty.
pub const PENALTY_POINTS: Points = 5;

/// Cumulative points per mark count, as printed on the pad. Not a closed
/// formula, the table must match exactly.
const POINTS_TABLE: [Points; 13] = [0, 1, 3, 6, 10, 15, 21, 28, 36, 45, 55, 66, 78];

/// Points a single row is worth at `count` marks; counts past the table
/// (impossible through legal play) are worth nothing.
pub const fn row_points(count: MarkCount) -> Points {
    if (count as usize) < POINTS_TABLE.len() {
        POINTS_TABLE[count as usize]
    } else {
        0
    }
}

/// The four rows of the pad. Red and Yellow run 2 up to 12, Green and Blue
/// run 12 down to 2.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RowColor {
    Red,
    Yellow,
    Green,
    Blue,
}

impl RowColor {
    pub const ALL: [RowColor; 4] = [Self::Red, Self::Yellow, Self::Green, Self::Blue];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn is_ascending(self) -> bool {
        matches!(self, Self::Red | Self::Yellow)
    }

    /// Last reachable value in the row's direction of progression; taking it
    /// locks the row.
    pub const fn terminal(self) -> Value {
        if self.is_ascending() {
            MAX_VALUE
        } else {
            MIN_VALUE
        }
    }

    /// Whether `to` comes strictly after `from` in this row's progression.
    pub const fn advances(self, from: Value, to: Value) -> bool {
        if self.is_ascending() {
            to > from
        } else {
            to < from
        }
    }

    /// Cell values in the order the row displays them.
    pub fn values(self) -> impl Iterator<Item = Value> {
        let ascending = self.is_ascending();
        (0..=MAX_VALUE - MIN_VALUE).map(move |offset| {
            if ascending {
                MIN_VALUE + offset
            } else {
                MAX_VALUE - offset
            }
        })
    }
}
