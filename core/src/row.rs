use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

/// Marks recorded in one colored row.
///
/// `marks` holds distinct values, strictly ordered in the row's direction of
/// progression, so the extremal mark is always the last element. The terminal
/// value's second mark is derived rather than stored:
/// `mark_count = marks.len() + 1` once the terminal value is present. A row
/// is locked exactly while its terminal value is marked.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowState {
    color: RowColor,
    marks: SmallVec<[Value; 11]>,
}

impl RowState {
    pub fn new(color: RowColor) -> Self {
        Self {
            color,
            marks: SmallVec::new(),
        }
    }

    /// Rebuilds a row from a distinct mark sequence, rejecting anything the
    /// engine could not have produced itself.
    pub fn from_marks(color: RowColor, marks: &[Value]) -> Result<Self> {
        let terminal = color.terminal();
        let mut prev: Option<Value> = None;

        for (pos, &value) in marks.iter().enumerate() {
            if !(MIN_VALUE..=MAX_VALUE).contains(&value) {
                return Err(GameError::CorruptState);
            }
            // the terminal value is only ever the final mark
            if value == terminal && pos + 1 != marks.len() {
                return Err(GameError::CorruptState);
            }
            if let Some(prev) = prev {
                if !color.advances(prev, value) {
                    return Err(GameError::CorruptState);
                }
            }
            prev = Some(value);
        }

        let row = Self {
            color,
            marks: SmallVec::from_slice(marks),
        };
        if row.terminal_marked() && row.marks.len() < LOCK_THRESHOLD as usize + 1 {
            return Err(GameError::CorruptState);
        }
        Ok(row)
    }

    pub const fn color(&self) -> RowColor {
        self.color
    }

    /// Distinct marked values in progression order. The terminal value, when
    /// present, appears once here even though it counts twice.
    pub fn marks(&self) -> &[Value] {
        &self.marks
    }

    pub fn terminal_marked(&self) -> bool {
        self.marks.last() == Some(&self.color.terminal())
    }

    /// The terminal value can only be taken over five prior marks, so its
    /// presence alone decides the lock.
    pub fn is_locked(&self) -> bool {
        self.terminal_marked()
    }

    /// Total marks, counting the terminal value's double mark.
    pub fn mark_count(&self) -> MarkCount {
        self.marks.len() as MarkCount + self.terminal_marked() as MarkCount
    }

    pub fn points(&self) -> Points {
        row_points(self.mark_count())
    }

    pub fn contains(&self, value: Value) -> bool {
        self.marks.contains(&value)
    }

    pub fn can_mark(&self, value: Value) -> bool {
        if !(MIN_VALUE..=MAX_VALUE).contains(&value) || self.is_locked() {
            return false;
        }
        if let Some(&last) = self.marks.last() {
            if !self.color.advances(last, value) {
                return false;
            }
        }
        // the terminal value needs five marks on the row before it
        value != self.color.terminal() || self.mark_count() >= LOCK_THRESHOLD
    }

    /// Only the extremal mark may be retracted, which keeps every reachable
    /// sequence a prefix of a legal game. The terminal value is always
    /// extremal and retracting it drops both of its marks.
    pub fn can_unmark(&self, value: Value) -> bool {
        self.marks.last() == Some(&value)
    }

    pub fn mark(&mut self, value: Value) -> Result<()> {
        if !self.can_mark(value) {
            return Err(GameError::InvalidMove);
        }
        // strictly past the previous extremal, so pushing keeps the order
        self.marks.push(value);
        Ok(())
    }

    pub fn unmark(&mut self, value: Value) -> Result<()> {
        if !self.can_unmark(value) {
            return Err(GameError::InvalidMove);
        }
        self.marks.pop();
        Ok(())
    }

    pub fn clear(&mut self) {
        self.marks.clear();
    }
}
