use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use seqdist_rs::{
    om_distance, pairwise, ward_linkage, CostMatrix, OmConfig, State, StateAlphabet, StateSequence,
};

/// Deterministic pseudo-random sequence over the 16-state grid alphabet.
fn synthetic_sequence(id: usize, len: usize) -> StateSequence {
    let states = (0..len)
        .map(|t| {
            // Simple LCG keyed by (id, t)
            let x = (id as u64)
                .wrapping_mul(6364136223846793005)
                .wrapping_add(t as u64)
                .wrapping_mul(1442695040888963407);
            State::Obs(((x >> 33) % 16) as u8)
        })
        .collect();
    StateSequence::new(format!("s{id}"), states)
}

fn grid_cost() -> CostMatrix {
    CostMatrix::constant(StateAlphabet::grid16(), 2.0).unwrap()
}

fn bench_om_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("om_distance");
    let cost = grid_cost();
    for len in [50, 200, 1_000] {
        let a = synthetic_sequence(1, len);
        let b = synthetic_sequence(2, len);
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |bch, _| {
            bch.iter(|| om_distance(black_box(&a), black_box(&b), &cost, 1.0).unwrap())
        });
    }
    group.finish();
}

fn bench_pairwise(c: &mut Criterion) {
    let mut group = c.benchmark_group("pairwise");
    group.sample_size(10);
    let cost = grid_cost();
    let config = OmConfig::new(1.0);
    for n in [20, 60, 120] {
        let seqs: Vec<StateSequence> = (0..n).map(|i| synthetic_sequence(i, 100)).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bch, _| {
            bch.iter(|| pairwise(black_box(&seqs), &cost, &config).unwrap())
        });
    }
    group.finish();
}

fn bench_ward_linkage(c: &mut Criterion) {
    let mut group = c.benchmark_group("ward_linkage");
    let cost = grid_cost();
    let config = OmConfig::new(1.0);
    for n in [30, 100, 200] {
        let seqs: Vec<StateSequence> = (0..n).map(|i| synthetic_sequence(i, 40)).collect();
        let dist = pairwise(&seqs, &cost, &config).unwrap().distances;
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bch, _| {
            bch.iter(|| ward_linkage(black_box(&dist)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_om_distance, bench_pairwise, bench_ward_linkage);
criterion_main!(benches);
