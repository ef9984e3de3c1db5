use std::collections::BTreeMap;
use std::fs;

use seqdist_rs::{
    ward_linkage, CostMatrix, OmConfig, OmEngine, SeqError, StateAlphabet, StateSequence,
};
use serde::Deserialize;

#[derive(Deserialize)]
struct GoldenData {
    alphabet: Vec<String>,
    constant_cost: f64,
    indel: f64,
    /// Subject id -> compact state string; BTreeMap keeps subject order stable.
    sequences: BTreeMap<String, String>,
    distances: Vec<Vec<f64>>,
    /// Expected heights of the first merges (agglomeration order).
    merge_heights: Vec<f64>,
    k: usize,
    labels: Vec<usize>,
}

const EPSILON: f64 = 1e-9;

fn load_golden(filename: &str) -> GoldenData {
    let path = format!("tests/golden_data/{filename}");
    let data = fs::read_to_string(&path)
        .unwrap_or_else(|_| panic!("Golden data file not found: {path}"));
    serde_json::from_str(&data).unwrap()
}

fn build_engine(g: &GoldenData) -> (OmEngine, Vec<StateSequence>) {
    let alphabet = StateAlphabet::new(g.alphabet.clone());
    let cost = CostMatrix::constant(alphabet.clone(), g.constant_cost).unwrap();
    let seqs = g
        .sequences
        .iter()
        .map(|(id, s)| StateSequence::new(id.clone(), alphabet.parse_states(s).unwrap()))
        .collect();
    (OmEngine::new(cost, OmConfig::new(g.indel)), seqs)
}

#[test]
fn test_pairwise_distances_match_golden() {
    let g = load_golden("grid_sequences.json");
    let (engine, seqs) = build_engine(&g);

    let result = engine.pairwise(&seqs).unwrap();
    let n = result.distances.n();
    assert_eq!(n, g.distances.len(), "distance matrix size mismatch");

    for i in 0..n {
        for j in 0..n {
            // Constant integer costs: distances are exact
            assert_eq!(
                result.distances.get(i, j),
                g.distances[i][j],
                "distance ({i}, {j}) mismatch for {} vs {}",
                result.ids[i],
                result.ids[j]
            );
        }
    }

    // Constant cost 2 paired with indel 1 is a well-specified scheme
    assert!(result.diagnostics.is_empty());
}

#[test]
fn test_ward_merges_and_cut_match_golden() {
    let g = load_golden("grid_sequences.json");
    let (engine, seqs) = build_engine(&g);

    let result = engine.pairwise(&seqs).unwrap();
    let dend = engine.cluster(&result.distances);
    assert_eq!(dend.merges().len(), seqs.len() - 1);

    for (i, (merge, expected)) in dend.merges().iter().zip(&g.merge_heights).enumerate() {
        assert!(
            (merge.height - expected).abs() < EPSILON,
            "merge {i} height mismatch: got {}, expected {expected}",
            merge.height
        );
    }

    let assignment = dend.cut(g.k).unwrap();
    assert_eq!(assignment.labels, g.labels);
}

#[test]
fn test_clustering_is_deterministic_across_runs() {
    let g = load_golden("grid_sequences.json");
    let (engine, seqs) = build_engine(&g);

    let first = {
        let r = engine.pairwise(&seqs).unwrap();
        ward_linkage(&r.distances).cut(g.k).unwrap()
    };
    let second = {
        let r = engine.pairwise(&seqs).unwrap();
        ward_linkage(&r.distances).cut(g.k).unwrap()
    };
    assert_eq!(first, second, "same input must cluster identically");
}

#[test]
fn test_cut_extremes_over_golden_distances() {
    let g = load_golden("grid_sequences.json");
    let (engine, seqs) = build_engine(&g);
    let n = seqs.len();

    let dend = ward_linkage(&engine.pairwise(&seqs).unwrap().distances);

    let singletons = dend.cut(n).unwrap();
    assert_eq!(singletons.labels, (1..=n).collect::<Vec<_>>());

    let one = dend.cut(1).unwrap();
    assert!(one.labels.iter().all(|&l| l == 1));

    assert!(matches!(
        dend.cut(0),
        Err(SeqError::InvalidClusterCount { .. })
    ));
    assert!(matches!(
        dend.cut(n + 1),
        Err(SeqError::InvalidClusterCount { .. })
    ));
}

#[test]
fn test_malformed_cost_matrix_rejected_before_distances() {
    // A 3x4 matrix must be rejected at construction, before any distance work
    let alphabet = StateAlphabet::new(["A", "B", "C"]);
    let rows = vec![
        vec![0.0, 1.0, 1.0, 1.0],
        vec![1.0, 0.0, 1.0, 1.0],
        vec![1.0, 1.0, 0.0, 1.0],
    ];
    assert!(matches!(
        CostMatrix::from_rows(alphabet, &rows),
        Err(SeqError::MalformedCostMatrix(_))
    ));
}
