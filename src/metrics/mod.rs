pub mod cost_matrix;
