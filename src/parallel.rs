use crate::dataset::BASE_COLUMNS;
use crate::eager::transform_eager_with;
use crate::error::{Error, Result};
use log::debug;
use polars::prelude::*;
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;

/// Run the eager transform `count` times on a worker pool.
pub fn transform_parallel(
    df: &DataFrame,
    count: usize,
    threads: Option<usize>,
) -> Result<Vec<DataFrame>> {
    transform_parallel_with(df, count, threads, BASE_COLUMNS)
}

/// Each task transforms its own deep copy of `df`; copies are made before dispatch
/// and count toward the call's time.
///
/// The pool is built for this call only and torn down when it returns, so its setup
/// cost lands inside whatever interval the caller is timing. `threads = None` uses
/// every logical CPU. The first failing task fails the whole call.
pub fn transform_parallel_with(
    df: &DataFrame,
    count: usize,
    threads: Option<usize>,
    base_columns: usize,
) -> Result<Vec<DataFrame>> {
    let n_threads = match threads {
        Some(0) => {
            return Err(Error::InvalidInput("threads must be >= 1".to_string()));
        }
        Some(n) => n,
        None => num_cpus::get().max(1),
    };

    let pool = ThreadPoolBuilder::new()
        .num_threads(n_threads)
        .build()
        .map_err(|e| Error::ThreadPool(format!("failed to build thread pool: {e}")))?;
    debug!("dispatching {count} eager transforms to {n_threads} workers");

    let copies: Vec<DataFrame> = (0..count).map(|_| df.deep_clone()).collect();

    // Indexed collect keeps dispatch order.
    pool.install(|| {
        copies
            .into_par_iter()
            .enumerate()
            .map(|(task, frame)| {
                transform_eager_with(&frame, base_columns).map_err(|e| Error::WorkerFailure {
                    task,
                    source: Box::new(e),
                })
            })
            .collect::<Result<Vec<_>>>()
    })
}
