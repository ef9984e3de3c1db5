use crate::core::alphabet::StateAlphabet;
use crate::core::error::{CostDiagnostic, SeqError};

/// Tolerance for symmetry and triangle-inequality checks.
const EPS: f64 = 1e-12;

/// Substitution-cost matrix over a state alphabet, plus an optional
/// missing-state cost.
///
/// Constructed once per run and read-only thereafter. Two construction modes:
/// [`CostMatrix::constant`] (every off-diagonal entry a fixed scalar, the
/// classic constant-cost scheme) and [`CostMatrix::from_rows`] (a complete
/// caller-supplied matrix, e.g. precomputed Manhattan distances between grid
/// cells).
///
/// Validation happens at construction: square, symmetric, zero diagonal,
/// non-negative. A matrix that fails any check is rejected as
/// [`SeqError::MalformedCostMatrix`] before any distance computation starts.
#[derive(Debug, Clone)]
pub struct CostMatrix {
    alphabet: StateAlphabet,
    /// Row-major k-by-k substitution costs.
    costs: Vec<f64>,
    /// Cost charged when exactly one operand is the missing sentinel.
    missing_cost: Option<f64>,
}

impl CostMatrix {
    /// Constant-cost matrix: every off-diagonal entry equals `cost`.
    pub fn constant(alphabet: StateAlphabet, cost: f64) -> Result<Self, SeqError> {
        if !cost.is_finite() || cost < 0.0 {
            return Err(SeqError::MalformedCostMatrix(format!(
                "constant cost must be finite and non-negative, got {cost}"
            )));
        }
        let k = alphabet.len();
        let mut costs = vec![cost; k * k];
        for i in 0..k {
            costs[i * k + i] = 0.0;
        }
        Ok(Self {
            alphabet,
            costs,
            missing_cost: None,
        })
    }

    /// Explicit matrix: `rows` must be a k-by-k symmetric matrix with zero
    /// diagonal and non-negative entries, k matching the alphabet size.
    pub fn from_rows(alphabet: StateAlphabet, rows: &[Vec<f64>]) -> Result<Self, SeqError> {
        let k = alphabet.len();
        if rows.len() != k {
            return Err(SeqError::MalformedCostMatrix(format!(
                "expected {k} rows for a {k}-symbol alphabet, got {}",
                rows.len()
            )));
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != k {
                return Err(SeqError::MalformedCostMatrix(format!(
                    "row {i} has {} entries, expected {k}",
                    row.len()
                )));
            }
        }
        for (i, row) in rows.iter().enumerate() {
            for (j, &v) in row.iter().enumerate() {
                if !v.is_finite() || v < 0.0 {
                    return Err(SeqError::MalformedCostMatrix(format!(
                        "entry ({i}, {j}) is {v}: costs must be finite and non-negative"
                    )));
                }
                if i == j && v != 0.0 {
                    return Err(SeqError::MalformedCostMatrix(format!(
                        "diagonal entry ({i}, {i}) is {v}, must be 0"
                    )));
                }
                if (v - rows[j][i]).abs() > EPS {
                    return Err(SeqError::MalformedCostMatrix(format!(
                        "asymmetric: ({i}, {j}) = {v} but ({j}, {i}) = {}",
                        rows[j][i]
                    )));
                }
            }
        }

        let mut costs = vec![0.0; k * k];
        for (i, row) in rows.iter().enumerate() {
            costs[i * k..(i + 1) * k].copy_from_slice(row);
        }
        Ok(Self {
            alphabet,
            costs,
            missing_cost: None,
        })
    }

    /// Set the cost charged when exactly one operand is [`crate::State::Missing`].
    pub fn with_missing_cost(mut self, cost: f64) -> Self {
        self.missing_cost = Some(cost);
        self
    }

    /// Set the missing cost to the conventional half the maximum
    /// off-diagonal substitution cost.
    pub fn with_default_missing_cost(mut self) -> Self {
        self.missing_cost = Some(self.max_off_diagonal() / 2.0);
        self
    }

    pub fn alphabet(&self) -> &StateAlphabet {
        &self.alphabet
    }

    pub fn size(&self) -> usize {
        self.alphabet.len()
    }

    pub fn missing_cost(&self) -> Option<f64> {
        self.missing_cost
    }

    /// Substitution cost between two observed symbol indices.
    #[inline]
    pub fn cost(&self, a: u8, b: u8) -> f64 {
        self.costs[a as usize * self.size() + b as usize]
    }

    /// Largest off-diagonal substitution cost (0 for a 0- or 1-symbol alphabet).
    pub fn max_off_diagonal(&self) -> f64 {
        let k = self.size();
        let mut max = 0.0_f64;
        for i in 0..k {
            for j in 0..k {
                if i != j {
                    max = max.max(self.costs[i * k + j]);
                }
            }
        }
        max
    }

    /// Fail fast on a symbol index outside the alphabet.
    pub(crate) fn check_symbol(&self, idx: u8, seq_id: &str) -> Result<(), SeqError> {
        if (idx as usize) < self.size() {
            Ok(())
        } else {
            Err(SeqError::AlphabetMismatch {
                sequence: seq_id.to_string(),
                symbol: format!("#{idx}"),
            })
        }
    }

    /// Non-fatal checks against a given indel cost.
    ///
    /// Surfaces (never fixes) substitution costs that exceed twice the indel
    /// cost (a delete + insert is always cheaper, so such an entry can never
    /// lie on an optimal path) and triangle-inequality violations, which
    /// mean the resulting sequence distances need not be a proper metric.
    pub fn diagnostics(&self, indel: f64) -> Vec<CostDiagnostic> {
        let k = self.size();
        let mut out = Vec::new();

        for i in 0..k {
            for j in (i + 1)..k {
                let c = self.costs[i * k + j];
                if c > 2.0 * indel + EPS {
                    out.push(CostDiagnostic::DegenerateSubstitutionCost {
                        a: self.alphabet.label(i).to_string(),
                        b: self.alphabet.label(j).to_string(),
                        cost: c,
                        indel,
                    });
                }
            }
        }

        for i in 0..k {
            for j in 0..k {
                for l in 0..k {
                    if i == j || j == l || i == l {
                        continue;
                    }
                    if self.costs[i * k + l] > self.costs[i * k + j] + self.costs[j * k + l] + EPS {
                        out.push(CostDiagnostic::TriangleInequalityViolation {
                            a: self.alphabet.label(i).to_string(),
                            b: self.alphabet.label(j).to_string(),
                            c: self.alphabet.label(l).to_string(),
                        });
                    }
                }
            }
        }

        out
    }
}
