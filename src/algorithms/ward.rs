use crate::core::distance_matrix::DistanceMatrix;
use crate::core::error::SeqError;

/// One agglomeration step.
///
/// Node ids follow the usual convention: leaves are `0..n`, and the merge at
/// step `t` creates internal node `n + t`.
#[derive(Debug, Clone, PartialEq)]
pub struct Merge {
    pub left: usize,
    pub right: usize,
    /// Ward dissimilarity at which the two clusters merged.
    pub height: f64,
    /// Number of leaves under the new node.
    pub size: usize,
}

/// Binary merge tree over n subjects with a height per internal node.
#[derive(Debug, Clone, PartialEq)]
pub struct Dendrogram {
    n: usize,
    merges: Vec<Merge>,
}

/// Mapping from subject index to one of k cluster labels.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterAssignment {
    /// `labels[i]` is the cluster (in `1..=k`) of subject `i`. Labels are
    /// numbered by each cluster's smallest member index.
    pub labels: Vec<usize>,
    pub k: usize,
}

/// Agglomerative clustering with Ward's minimum-variance linkage.
///
/// Operates on the distance matrix alone via the Lance-Williams update (raw
/// coordinates are unavailable):
///
/// `d(k, i+j) = ((n_i + n_k) d(k,i) + (n_j + n_k) d(k,j) - n_k d(i,j))
///             / (n_i + n_j + n_k)`
///
/// applied to the supplied dissimilarities as-is (the `ward.D` convention;
/// square the inputs first for `ward.D2`). O(n^3): n-1 agglomeration steps,
/// each scanning the active pairs for the minimum.
///
/// Deterministic: ties on the minimal dissimilarity break toward the
/// lexicographically smallest `(i, j)` active-slot pair, which the row-major
/// scan with strict `<` yields naturally. Given a fixed distance matrix the
/// output is bit-identical across runs.
pub fn ward_linkage(dist: &DistanceMatrix) -> Dendrogram {
    let n = dist.n();
    if n == 0 {
        return Dendrogram { n, merges: Vec::new() };
    }

    // Working copy of the dissimilarities, updated in place per merge.
    let mut d: Vec<f64> = (0..n * n).map(|idx| dist.get(idx / n, idx % n)).collect();
    let mut active = vec![true; n];
    let mut size = vec![1usize; n];
    // Current dendrogram node occupying each slot.
    let mut node_id: Vec<usize> = (0..n).collect();

    let mut merges = Vec::with_capacity(n.saturating_sub(1));

    for step in 0..n.saturating_sub(1) {
        // Minimal active pair, row-major scan, strict < for the tie-break.
        let mut best = (0usize, 0usize, f64::INFINITY);
        for i in 0..n {
            if !active[i] {
                continue;
            }
            for j in (i + 1)..n {
                if active[j] && d[i * n + j] < best.2 {
                    best = (i, j, d[i * n + j]);
                }
            }
        }
        let (i, j, height) = best;

        let (ni, nj) = (size[i] as f64, size[j] as f64);
        for k in 0..n {
            if !active[k] || k == i || k == j {
                continue;
            }
            let nk = size[k] as f64;
            let updated = ((ni + nk) * d[i * n + k] + (nj + nk) * d[j * n + k]
                - nk * height)
                / (ni + nj + nk);
            d[i * n + k] = updated;
            d[k * n + i] = updated;
        }

        merges.push(Merge {
            left: node_id[i],
            right: node_id[j],
            height,
            size: size[i] + size[j],
        });
        size[i] += size[j];
        active[j] = false;
        node_id[i] = n + step;
    }

    Dendrogram { n, merges }
}

impl Dendrogram {
    /// Number of leaves.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Merges in agglomeration order (heights are non-decreasing; Ward
    /// linkage is reducible, so no inversions occur).
    pub fn merges(&self) -> &[Merge] {
        &self.merges
    }

    /// Cut the tree into exactly `k` non-empty clusters by removing the
    /// `k - 1` highest merges.
    ///
    /// Labels run `1..=k`, numbered by each cluster's smallest member index,
    /// so repeated cuts of the same tree are identical.
    ///
    /// Fails with [`SeqError::InvalidClusterCount`] when `k < 1 || k > n`.
    pub fn cut(&self, k: usize) -> Result<ClusterAssignment, SeqError> {
        let n = self.n;
        if k < 1 || k > n {
            return Err(SeqError::InvalidClusterCount { k, n });
        }

        // Apply the first n - k merges; the remaining k - 1 (highest) are cut.
        let kept = n - k;
        let mut parent: Vec<usize> = (0..n + kept).collect();
        for (step, m) in self.merges.iter().take(kept).enumerate() {
            parent[m.left] = n + step;
            parent[m.right] = n + step;
        }

        let root_of = |mut x: usize| {
            while parent[x] != x {
                x = parent[x];
            }
            x
        };

        // Number clusters 1..=k in order of first (smallest) member.
        let mut label_of_root = std::collections::HashMap::new();
        let mut labels = vec![0usize; n];
        let mut next = 1usize;
        for (leaf, label) in labels.iter_mut().enumerate() {
            let root = root_of(leaf);
            *label = *label_of_root.entry(root).or_insert_with(|| {
                let l = next;
                next += 1;
                l
            });
        }
        debug_assert_eq!(next - 1, k, "cut must produce exactly k clusters");

        Ok(ClusterAssignment { labels, k })
    }
}
