use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Flat persisted image of a pad, the shape a UI keeps in local storage.
///
/// Each row is its raw number sequence in progression order, with the
/// terminal value appearing literally twice once taken. Snapshots cross a
/// trust boundary, so restoring one re-checks every pad invariant and fails
/// with [`GameError::CorruptState`] instead of trusting the record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PadSnapshot {
    /// Raw mark sequences, indexed by [`RowColor::index`].
    pub rows: [Vec<Value>; 4],
    /// Per-row locked flags; must agree with the marks.
    pub locked: [bool; 4],
    pub penalties: u8,
}

impl PadSnapshot {
    pub fn from_engine(engine: &ScoreEngine) -> Self {
        let rows = RowColor::ALL.map(|color| {
            let row = engine.row(color);
            let mut raw: Vec<Value> = row.marks().to_vec();
            if row.terminal_marked() {
                // the double mark is stored literally
                raw.push(color.terminal());
            }
            raw
        });
        let locked = RowColor::ALL.map(|color| engine.is_row_locked(color));
        Self {
            rows,
            locked,
            penalties: engine.penalties(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.restore_rows()?;
        Ok(())
    }

    /// JSON image of the snapshot, as a UI would persist it.
    pub fn to_json(&self) -> String {
        // serializing a plain value type cannot fail
        serde_json::to_string(self).unwrap()
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let snapshot: Self = serde_json::from_str(raw).map_err(|_| GameError::CorruptState)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    fn restore_rows(&self) -> Result<[RowState; 4]> {
        if self.penalties > MAX_PENALTIES {
            return Err(GameError::CorruptState);
        }

        let mut rows = RowColor::ALL.map(RowState::new);
        for color in RowColor::ALL {
            rows[color.index()] = restore_row(
                color,
                &self.rows[color.index()],
                self.locked[color.index()],
            )?;
        }
        Ok(rows)
    }
}

fn restore_row(color: RowColor, raw: &[Value], locked: bool) -> Result<RowState> {
    let terminal = color.terminal();
    let distinct = match raw.iter().filter(|&&value| value == terminal).count() {
        0 => raw,
        // the terminal value is stored exactly twice, as the tail
        2 if raw.ends_with(&[terminal, terminal]) => &raw[..raw.len() - 1],
        _ => return Err(GameError::CorruptState),
    };

    let row = RowState::from_marks(color, distinct)?;
    if locked != row.is_locked() {
        return Err(GameError::CorruptState);
    }
    Ok(row)
}

impl ScoreEngine {
    pub fn snapshot(&self) -> PadSnapshot {
        PadSnapshot::from_engine(self)
    }

    pub fn from_snapshot(snapshot: &PadSnapshot) -> Result<Self> {
        Ok(Self::from_parts(
            snapshot.restore_rows()?,
            snapshot.penalties,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use RowColor::*;

    fn played_engine() -> ScoreEngine {
        let mut engine = ScoreEngine::new();
        for value in [2, 3, 4, 5, 6, 12] {
            engine.mark(Red, value).unwrap();
        }
        engine.mark(Yellow, 5).unwrap();
        for value in [12, 9, 7] {
            engine.mark(Green, value).unwrap();
        }
        engine.add_penalty();
        engine.add_penalty();
        engine
    }

    #[test]
    fn snapshot_doubles_the_terminal_entry() {
        let snapshot = played_engine().snapshot();

        assert_eq!(snapshot.rows[Red.index()], vec![2, 3, 4, 5, 6, 12, 12]);
        assert_eq!(snapshot.locked, [true, false, false, false]);
        assert_eq!(snapshot.penalties, 2);
    }

    #[test]
    fn round_trip_preserves_every_reachable_state() {
        for engine in [ScoreEngine::new(), played_engine()] {
            let restored = ScoreEngine::from_snapshot(&engine.snapshot()).unwrap();
            assert_eq!(restored, engine);
            assert_eq!(restored.score(), engine.score());
        }
    }

    #[test]
    fn json_round_trip_matches_the_engine() {
        let engine = played_engine();
        let json = engine.snapshot().to_json();

        let snapshot = PadSnapshot::from_json(&json).unwrap();
        let restored = ScoreEngine::from_snapshot(&snapshot).unwrap();

        assert_eq!(restored, engine);
    }

    #[test]
    fn restoring_a_finished_game_keeps_it_over() {
        let mut engine = ScoreEngine::new();
        for _ in 0..4 {
            engine.add_penalty();
        }

        let restored = ScoreEngine::from_snapshot(&engine.snapshot()).unwrap();
        assert!(restored.is_over());
    }

    #[test]
    fn rejects_excess_penalties() {
        let mut snapshot = ScoreEngine::new().snapshot();
        snapshot.penalties = MAX_PENALTIES + 1;

        assert_eq!(snapshot.validate(), Err(GameError::CorruptState));
    }

    #[test]
    fn rejects_a_single_terminal_entry() {
        let mut snapshot = played_engine().snapshot();
        snapshot.rows[Red.index()].pop();

        assert_eq!(
            ScoreEngine::from_snapshot(&snapshot),
            Err(GameError::CorruptState)
        );
    }

    #[test]
    fn rejects_a_lying_locked_flag() {
        let mut snapshot = played_engine().snapshot();
        snapshot.locked[Yellow.index()] = true;
        assert_eq!(snapshot.validate(), Err(GameError::CorruptState));

        let mut snapshot = played_engine().snapshot();
        snapshot.locked[Red.index()] = false;
        assert_eq!(snapshot.validate(), Err(GameError::CorruptState));
    }

    #[test]
    fn rejects_misordered_or_out_of_range_values() {
        let mut snapshot = ScoreEngine::new().snapshot();
        snapshot.rows[Blue.index()] = vec![4, 9];
        assert_eq!(snapshot.validate(), Err(GameError::CorruptState));

        let mut snapshot = ScoreEngine::new().snapshot();
        snapshot.rows[Yellow.index()] = vec![2, 13];
        assert_eq!(snapshot.validate(), Err(GameError::CorruptState));
    }

    #[test]
    fn rejects_a_terminal_taken_below_the_threshold() {
        let mut snapshot = ScoreEngine::new().snapshot();
        snapshot.rows[Red.index()] = vec![2, 3, 12, 12];
        snapshot.locked[Red.index()] = true;

        assert_eq!(snapshot.validate(), Err(GameError::CorruptState));
    }

    #[test]
    fn rejects_malformed_json() {
        assert_eq!(
            PadSnapshot::from_json("not a snapshot"),
            Err(GameError::CorruptState)
        );
    }
}
