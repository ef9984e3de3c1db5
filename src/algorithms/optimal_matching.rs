use crate::core::alphabet::State;
use crate::core::distance_matrix::DistanceMatrix;
use crate::core::error::{CostDiagnostic, SeqError};
use crate::core::sequence::StateSequence;
use crate::metrics::cost_matrix::CostMatrix;

/// Minimum number of sequences before dispatching to the parallel pairwise
/// pass. Below this, thread-dispatch overhead exceeds parallelism gains.
#[cfg(feature = "parallel")]
const MIN_PARALLEL_SEQS: usize = 32;

/// Configuration for optimal-matching distance computation.
#[derive(Debug, Clone)]
pub struct OmConfig {
    /// Cost charged per insertion or deletion.
    pub indel: f64,
}

impl OmConfig {
    pub fn new(indel: f64) -> Self {
        Self { indel }
    }
}

impl Default for OmConfig {
    /// The conventional pairing with constant substitution cost 2.
    fn default() -> Self {
        Self { indel: 1.0 }
    }
}

/// Result of a full pairwise optimal-matching pass.
#[derive(Debug, Clone)]
pub struct PairwiseResult {
    /// Symmetric n-by-n distance matrix, zero diagonal.
    pub distances: DistanceMatrix,
    /// Subject identifier per matrix row, in input order.
    pub ids: Vec<String>,
    /// Non-fatal cost-specification findings (degenerate substitution costs,
    /// triangle-inequality violations). Empty for a well-specified matrix.
    pub diagnostics: Vec<CostDiagnostic>,
}

/// Verify that every state of `seq` is priceable under `cost`.
///
/// Fails fast with [`SeqError::AlphabetMismatch`] naming the offending
/// symbol: an observed index outside the alphabet, or a missing sentinel
/// when no missing cost is configured.
fn validate_sequence(seq: &StateSequence, cost: &CostMatrix) -> Result<(), SeqError> {
    for &s in &seq.states {
        match s {
            State::Obs(idx) => cost.check_symbol(idx, &seq.id)?,
            State::Missing => {
                if cost.missing_cost().is_none() {
                    return Err(SeqError::AlphabetMismatch {
                        sequence: seq.id.clone(),
                        symbol: "*".to_string(),
                    });
                }
            }
        }
    }
    Ok(())
}

/// Substitution cost for two already-validated states.
#[inline]
fn sub(cost: &CostMatrix, a: State, b: State) -> f64 {
    match (a, b) {
        (State::Obs(x), State::Obs(y)) => cost.cost(x, y),
        (State::Missing, State::Missing) => 0.0,
        // validate_sequence guarantees the missing cost is present
        _ => cost.missing_cost().unwrap_or(f64::INFINITY),
    }
}

/// Gap (insertion/deletion) cost for one already-validated state.
#[inline]
fn gap(cost: &CostMatrix, s: State, indel: f64) -> f64 {
    match s {
        State::Obs(_) => indel,
        State::Missing => cost.missing_cost().unwrap_or(f64::INFINITY),
    }
}

/// Wagner-Fischer dynamic program over validated sequences.
///
/// Two rolling rows of length `len_b + 1`:
/// `cell(i, j) = min(cell(i-1, j) + gap(a[i-1]),
///                   cell(i, j-1) + gap(b[j-1]),
///                   cell(i-1, j-1) + sub(a[i-1], b[j-1]))`
///
/// Unequal lengths need no special-casing; the recurrence degrades to pure
/// indel runs. An empty sequence costs the other length times the gap cost.
fn om_validated(a: &[State], b: &[State], cost: &CostMatrix, indel: f64) -> f64 {
    let (la, lb) = (a.len(), b.len());

    let mut prev = vec![0.0_f64; lb + 1];
    for j in 1..=lb {
        prev[j] = prev[j - 1] + gap(cost, b[j - 1], indel);
    }
    let mut curr = vec![0.0_f64; lb + 1];

    for i in 1..=la {
        let gap_a = gap(cost, a[i - 1], indel);
        curr[0] = prev[0] + gap_a;
        for j in 1..=lb {
            let del = prev[j] + gap_a;
            let ins = curr[j - 1] + gap(cost, b[j - 1], indel);
            let subst = prev[j - 1] + sub(cost, a[i - 1], b[j - 1]);
            curr[j] = del.min(ins).min(subst);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[lb]
}

/// Optimal-matching (generalized edit) distance between two sequences.
///
/// Minimum total cost to transform `a` into `b` via insertions, deletions
/// (each priced by `indel`) and substitutions (priced by `cost`). Symmetric
/// and zero iff the sequences are identical whenever the cost matrix is
/// symmetric with zero diagonal, which construction enforces.
///
/// # Arguments
/// * `a`, `b` - Sequences over the cost matrix's alphabet (lengths may differ)
/// * `cost` - Substitution-cost matrix, optionally carrying a missing cost
/// * `indel` - Scalar insertion/deletion cost
pub fn om_distance(
    a: &StateSequence,
    b: &StateSequence,
    cost: &CostMatrix,
    indel: f64,
) -> Result<f64, SeqError> {
    validate_sequence(a, cost)?;
    validate_sequence(b, cost)?;
    Ok(om_validated(&a.states, &b.states, cost, indel))
}

/// Full pairwise distance matrix over a set of sequences.
///
/// Every sequence is validated against the cost matrix before the first
/// dynamic-programming cell is computed; no partial results on failure.
/// The upper triangle is computed and mirrored. Cost diagnostics are
/// evaluated once and carried in the result.
///
/// With the `parallel` feature and at least `MIN_PARALLEL_SEQS` sequences,
/// upper-triangle rows are computed on the rayon pool; the cost matrix is
/// the only shared input (read-only) and each cell is written exactly once.
pub fn pairwise(
    sequences: &[StateSequence],
    cost: &CostMatrix,
    config: &OmConfig,
) -> Result<PairwiseResult, SeqError> {
    for seq in sequences {
        validate_sequence(seq, cost)?;
    }

    let diagnostics = cost.diagnostics(config.indel);
    let n = sequences.len();
    let mut distances = DistanceMatrix::zeros(n);

    #[cfg(feature = "parallel")]
    if n >= MIN_PARALLEL_SEQS {
        use rayon::prelude::*;
        let rows: Vec<Vec<f64>> = (0..n)
            .into_par_iter()
            .map(|i| {
                ((i + 1)..n)
                    .map(|j| {
                        om_validated(
                            &sequences[i].states,
                            &sequences[j].states,
                            cost,
                            config.indel,
                        )
                    })
                    .collect()
            })
            .collect();
        for (i, row) in rows.into_iter().enumerate() {
            for (off, d) in row.into_iter().enumerate() {
                distances.set_sym(i, i + 1 + off, d);
            }
        }
        return Ok(PairwiseResult {
            distances,
            ids: sequences.iter().map(|s| s.id.clone()).collect(),
            diagnostics,
        });
    }

    for i in 0..n {
        for j in (i + 1)..n {
            let d = om_validated(
                &sequences[i].states,
                &sequences[j].states,
                cost,
                config.indel,
            );
            distances.set_sym(i, j, d);
        }
    }

    Ok(PairwiseResult {
        distances,
        ids: sequences.iter().map(|s| s.id.clone()).collect(),
        diagnostics,
    })
}
