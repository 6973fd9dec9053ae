//! Row-wise aggregate benchmark over a small random table.
//!
//! Three strategies compute the same statistics (sum, mean, sample standard
//! deviation and `ln(1 + x)`) and are timed against each other: a serial eager
//! transform, the eager transform fanned out over a rayon pool, and a deferred
//! Polars `LazyFrame` plan.

pub mod dataset;
pub mod eager;
pub mod error;
pub mod lazy;
pub mod parallel;
pub mod report;
pub mod runner;

pub use dataset::{
    column_name, generate_dataset, generate_table, Dataset, BASE_COLUMNS, DEFAULT_ITERATIONS,
    DEFAULT_ROWS,
};
pub use eager::{transform_eager, transform_eager_with, RowStats};
pub use error::{Error, Result};
pub use lazy::{LazyMode, LazyPlan, EXCLUDED_COLUMNS};
pub use parallel::{transform_parallel, transform_parallel_with};
pub use report::{Phase, PhaseTiming, Report};
pub use runner::{run_benchmark, run_eager_loop, run_lazy_loop, time_phase};

#[derive(Debug, Clone)]
pub struct BenchOptions {
    pub rows: usize,
    /// Number of generated base columns; the eager statistics read all of them.
    pub columns: usize,
    pub iterations: usize,
    /// Worker pool size for the parallel phase. `None` uses every logical CPU.
    pub threads: Option<usize>,
    pub lazy_mode: LazyMode,
}

impl Default for BenchOptions {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            columns: BASE_COLUMNS,
            iterations: DEFAULT_ITERATIONS,
            threads: None,
            lazy_mode: LazyMode::Deferred,
        }
    }
}
