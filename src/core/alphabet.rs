/// One element of a categorical state sequence.
///
/// `Obs` carries an index into the run's [`StateAlphabet`]. `Missing` is a
/// sentinel distinct from every alphabet symbol; it is only priceable when
/// the cost matrix carries a missing-state cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    Obs(u8),
    Missing,
}

impl State {
    /// Render the state using an alphabet's labels; `Missing` renders as `*`.
    pub fn label(&self, alphabet: &StateAlphabet) -> String {
        match self {
            State::Obs(i) => alphabet.label(*i as usize).to_string(),
            State::Missing => "*".to_string(),
        }
    }
}

/// The finite symbol set of an analysis run, fixed once defined.
///
/// Symbols are addressed by index; labels exist for reporting and for
/// resolving caller-supplied label strings back to indices.
#[derive(Debug, Clone)]
pub struct StateAlphabet {
    labels: Vec<String>,
}

impl StateAlphabet {
    /// Build an alphabet from symbol labels. Labels must be unique.
    pub fn new(labels: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        debug_assert!(
            {
                let mut seen = std::collections::HashSet::new();
                labels.iter().all(|l| seen.insert(l))
            },
            "alphabet labels must be unique"
        );
        Self { labels }
    }

    /// The 16-cell grid alphabet `A`..`P` used for 4x4 dyadic grid states.
    ///
    /// Cell `(row, col)`, with the row from the first variable's bin and the
    /// col from the second's, maps to index `row * 4 + col`: `A` is (0,0), `P` is
    /// (3,3).
    pub fn grid16() -> Self {
        Self::new(('A'..='P').map(|c| c.to_string()))
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Label for symbol index `i`. Panics if out of range (programmer error).
    pub fn label(&self, i: usize) -> &str {
        &self.labels[i]
    }

    /// Resolve a label back to its symbol index.
    pub fn index_of(&self, label: &str) -> Option<u8> {
        self.labels.iter().position(|l| l == label).map(|i| i as u8)
    }

    /// Parse a compact single-character sequence string like `"AABC"`.
    ///
    /// `*` parses as `Missing`. Returns `None` on the first character that is
    /// not a single-character label of this alphabet.
    pub fn parse_states(&self, s: &str) -> Option<Vec<State>> {
        s.chars()
            .map(|c| {
                if c == '*' {
                    Some(State::Missing)
                } else {
                    self.index_of(&c.to_string()).map(State::Obs)
                }
            })
            .collect()
    }
}
