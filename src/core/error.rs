use thiserror::Error;

/// Errors surfaced to callers before any expensive computation runs.
///
/// All validation is fail-fast: a malformed cost matrix or an out-of-alphabet
/// symbol is rejected before the first dynamic-programming cell is filled,
/// and no partial results are ever returned.
#[derive(Debug, Error)]
pub enum SeqError {
    /// The substitution-cost matrix is not a valid cost structure.
    #[error("malformed cost matrix: {0}")]
    MalformedCostMatrix(String),

    /// A sequence contains a symbol the cost matrix cannot price.
    #[error("sequence {sequence:?} contains symbol {symbol:?} absent from the cost matrix alphabet")]
    AlphabetMismatch { sequence: String, symbol: String },

    /// Requested cluster count outside `[1, n]`.
    #[error("invalid cluster count {k}: must be in [1, {n}]")]
    InvalidClusterCount { k: usize, n: usize },

    /// Cut-points for grid labeling are not strictly ascending.
    #[error("cut-points must be strictly ascending and finite: ({0}, {1}, {2})")]
    InvalidCutPoints(f64, f64, f64),
}

/// Non-fatal findings about a cost specification.
///
/// These never abort a run; they are carried in the pairwise result so the
/// caller can decide whether the cost matrix is ill-specified.
#[derive(Debug, Clone, PartialEq)]
pub enum CostDiagnostic {
    /// `cost(a, b) > 2 * indel`: the optimal alignment path can always do a
    /// delete + insert instead, so this substitution cost is never used.
    DegenerateSubstitutionCost { a: String, b: String, cost: f64, indel: f64 },

    /// `cost(a, c) > cost(a, b) + cost(b, c)`: the matrix is not a proper
    /// metric, so the resulting distances need not satisfy the triangle
    /// inequality either.
    TriangleInequalityViolation { a: String, b: String, c: String },
}
