pub mod matrix;
pub mod config;
pub mod bench;
pub mod report;

pub use matrix::Matrix;
pub use matrix::mul::{matmul_cache_friendly, matmul_naive};
