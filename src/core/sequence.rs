use std::collections::BTreeMap;

use crate::algorithms::labeling::GridLabeler;
use crate::core::alphabet::State;

/// One long-format input row: a bivariate observation for one subject at one
/// discrete time index.
#[derive(Debug, Clone)]
pub struct Observation {
    pub subject: String,
    pub time: u32,
    pub v1: f64,
    pub v2: f64,
}

impl Observation {
    pub fn new(subject: impl Into<String>, time: u32, v1: f64, v2: f64) -> Self {
        Self {
            subject: subject.into(),
            time,
            v1,
            v2,
        }
    }
}

/// An ordered categorical state sequence for one subject/dyad.
///
/// Created once by [`assemble`] (or directly from parsed states) and never
/// mutated afterwards; consumed by the optimal-matching engine.
#[derive(Debug, Clone, PartialEq)]
pub struct StateSequence {
    pub id: String,
    pub states: Vec<State>,
}

impl StateSequence {
    pub fn new(id: impl Into<String>, states: Vec<State>) -> Self {
        Self {
            id: id.into(),
            states,
        }
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// True when every element is the missing sentinel.
    pub fn is_all_missing(&self) -> bool {
        self.states.iter().all(|s| *s == State::Missing)
    }
}

/// Reshape long-format observations into one fixed-length state sequence per
/// subject (long-to-wide).
///
/// Rows are grouped by subject and ordered by time index. Every sequence
/// spans the same global time range `[min_time, max_time]` observed anywhere
/// in the input; a (subject, time) cell with no row, or with a non-finite
/// operand, becomes [`State::Missing`]. Duplicate (subject, time) rows keep
/// the last occurrence.
///
/// Subjects are returned in sorted-id order so downstream indices are stable
/// across runs.
pub fn assemble(rows: &[Observation], labeler: &GridLabeler) -> Vec<StateSequence> {
    if rows.is_empty() {
        return Vec::new();
    }

    let t_min = rows.iter().map(|r| r.time).min().unwrap_or(0);
    let t_max = rows.iter().map(|r| r.time).max().unwrap_or(0);
    let span = (t_max - t_min + 1) as usize;

    // BTreeMap keeps subjects in sorted-id order.
    let mut by_subject: BTreeMap<&str, Vec<State>> = BTreeMap::new();
    for row in rows {
        let states = by_subject
            .entry(row.subject.as_str())
            .or_insert_with(|| vec![State::Missing; span]);
        states[(row.time - t_min) as usize] = labeler.label(row.v1, row.v2);
    }

    by_subject
        .into_iter()
        .map(|(id, states)| StateSequence::new(id, states))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labeler() -> GridLabeler {
        GridLabeler::new(1.0, 2.0, 3.0).unwrap()
    }

    #[test]
    fn test_assemble_orders_and_pads() {
        // s2 is observed only at t=2; t=1 and t=3 must pad to Missing.
        let rows = vec![
            Observation::new("s1", 3, 0.5, 0.5),
            Observation::new("s1", 1, 0.5, 0.5),
            Observation::new("s1", 2, 0.5, 0.5),
            Observation::new("s2", 2, 3.5, 3.5),
        ];
        let seqs = assemble(&rows, &labeler());

        assert_eq!(seqs.len(), 2);
        assert_eq!(seqs[0].id, "s1");
        assert_eq!(seqs[1].id, "s2");
        // Fixed length across the run
        assert_eq!(seqs[0].len(), 3);
        assert_eq!(seqs[1].len(), 3);

        assert_eq!(seqs[0].states, vec![State::Obs(0); 3]); // cell (0,0) = A
        assert_eq!(
            seqs[1].states,
            vec![State::Missing, State::Obs(15), State::Missing] // cell (3,3) = P
        );
    }

    #[test]
    fn test_assemble_nan_becomes_missing() {
        let rows = vec![
            Observation::new("s1", 0, f64::NAN, 0.5),
            Observation::new("s1", 1, 0.5, 0.5),
        ];
        let seqs = assemble(&rows, &labeler());
        assert_eq!(seqs[0].states[0], State::Missing);
        assert_eq!(seqs[0].states[1], State::Obs(0));
    }

    #[test]
    fn test_assemble_empty() {
        assert!(assemble(&[], &labeler()).is_empty());
    }

    #[test]
    fn test_all_missing() {
        let s = StateSequence::new("x", vec![State::Missing; 4]);
        assert!(s.is_all_missing());
        let s = StateSequence::new("y", vec![State::Missing, State::Obs(0)]);
        assert!(!s.is_all_missing());
    }
}
