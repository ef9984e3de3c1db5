pub mod alphabet;
pub mod distance_matrix;
pub mod error;
pub mod sequence;
