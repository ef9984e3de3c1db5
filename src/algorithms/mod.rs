pub mod labeling;
pub mod optimal_matching;
pub mod ward;
