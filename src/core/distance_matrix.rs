/// Symmetric n-by-n pairwise distance matrix with flat row-major storage.
///
/// Produced by the optimal-matching engine (upper triangle computed, then
/// mirrored) and consumed by the Ward clusterer. Write-once: nothing mutates
/// it after the pairwise pass fills it.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    n: usize,
    values: Vec<f64>,
}

impl DistanceMatrix {
    /// Create an n-by-n matrix of zeros.
    pub fn zeros(n: usize) -> Self {
        Self {
            n,
            values: vec![0.0; n * n],
        }
    }

    /// Build from explicit rows. Panics on ragged or asymmetric input
    /// (programmer error; caller-facing validation lives in the cost matrix,
    /// not here; this type only ever holds engine output or test fixtures).
    pub fn from_rows(rows: &[Vec<f64>]) -> Self {
        let n = rows.len();
        let mut m = Self::zeros(n);
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), n, "distance matrix rows must have length n");
            for (j, &v) in row.iter().enumerate() {
                m.values[i * n + j] = v;
            }
        }
        for i in 0..n {
            for j in (i + 1)..n {
                debug_assert!(
                    (m.get(i, j) - m.get(j, i)).abs() < 1e-12,
                    "distance matrix must be symmetric"
                );
            }
        }
        m
    }

    pub fn n(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.n + j]
    }

    /// Set both `(i, j)` and `(j, i)`.
    #[inline]
    pub fn set_sym(&mut self, i: usize, j: usize, v: f64) {
        self.values[i * self.n + j] = v;
        self.values[j * self.n + i] = v;
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.values[i * self.n..(i + 1) * self.n]
    }
}
