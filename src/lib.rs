pub mod algorithms;
pub mod core;
pub mod metrics;

pub use crate::algorithms::labeling::{GridLabeler, STATE_COLORS};
pub use crate::algorithms::optimal_matching::{om_distance, pairwise, OmConfig, PairwiseResult};
pub use crate::algorithms::ward::{ward_linkage, ClusterAssignment, Dendrogram, Merge};
pub use crate::core::alphabet::{State, StateAlphabet};
pub use crate::core::distance_matrix::DistanceMatrix;
pub use crate::core::error::{CostDiagnostic, SeqError};
pub use crate::core::sequence::{assemble, Observation, StateSequence};
pub use crate::metrics::cost_matrix::CostMatrix;

/// High-level facade for the sequence-distance pipeline: one cost
/// specification, applied to scalar distances, the full pairwise matrix, and
/// clustering.
///
/// # Examples
///
/// ```
/// use seqdist_rs::{CostMatrix, OmConfig, OmEngine, StateAlphabet, StateSequence};
///
/// let alphabet = StateAlphabet::new(["A", "B", "C", "D"]);
/// let cost = CostMatrix::constant(alphabet.clone(), 2.0).unwrap();
/// let engine = OmEngine::new(cost, OmConfig::new(1.0));
///
/// let seqs: Vec<StateSequence> = ["AABB", "AABC", "DDDD"]
///     .iter()
///     .enumerate()
///     .map(|(i, s)| StateSequence::new(format!("s{i}"), alphabet.parse_states(s).unwrap()))
///     .collect();
///
/// let result = engine.pairwise(&seqs).unwrap();
/// let clusters = engine.cluster(&result.distances).cut(2).unwrap();
/// assert_eq!(clusters.labels, vec![1, 1, 2]);
/// ```
#[derive(Debug, Clone)]
pub struct OmEngine {
    cost: CostMatrix,
    config: OmConfig,
}

impl OmEngine {
    /// Create an engine from a validated cost matrix and indel configuration.
    pub fn new(cost: CostMatrix, config: OmConfig) -> Self {
        Self { cost, config }
    }

    pub fn cost(&self) -> &CostMatrix {
        &self.cost
    }

    pub fn config(&self) -> &OmConfig {
        &self.config
    }

    /// Optimal-matching distance between two sequences.
    pub fn distance(&self, a: &StateSequence, b: &StateSequence) -> Result<f64, SeqError> {
        om_distance(a, b, &self.cost, self.config.indel)
    }

    /// Full pairwise distance matrix with cost diagnostics.
    pub fn pairwise(&self, sequences: &[StateSequence]) -> Result<PairwiseResult, SeqError> {
        pairwise(sequences, &self.cost, &self.config)
    }

    /// Ward-linkage dendrogram over a pairwise distance matrix.
    pub fn cluster(&self, distances: &DistanceMatrix) -> Dendrogram {
        ward_linkage(distances)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_end_to_end_pipeline() {
        // Raw long-format dyadic observations for four subjects: two dyads
        // that sit in the low-low corner, two in the high-high corner.
        let labeler = GridLabeler::new(2.0, 4.0, 6.0).unwrap();
        let mut rows = Vec::new();
        for t in 0..6 {
            rows.push(Observation::new("d1", t, 1.0, 1.0));
            rows.push(Observation::new("d2", t, 1.2, 0.8));
            rows.push(Observation::new("d3", t, 7.0, 7.0));
            rows.push(Observation::new("d4", t, 6.5, 7.5));
        }
        // Perturb one time step per group so the sequences differ within dyads
        rows.push(Observation::new("d2", 2, 1.0, 5.0));
        rows.push(Observation::new("d4", 3, 7.0, 1.0));

        let seqs = assemble(&rows, &labeler);
        assert_eq!(seqs.len(), 4);
        assert_eq!(seqs[0].len(), 6);

        let cost = CostMatrix::constant(StateAlphabet::grid16(), 2.0)
            .unwrap()
            .with_default_missing_cost();
        let engine = OmEngine::new(cost, OmConfig::new(1.0));

        let result = engine.pairwise(&seqs).unwrap();
        // Constant cost 2 with indel 1 is well-specified: no diagnostics
        assert!(result.diagnostics.is_empty());

        let clusters = engine.cluster(&result.distances).cut(2).unwrap();
        assert_eq!(clusters.labels, vec![1, 1, 2, 2]);
    }
}
