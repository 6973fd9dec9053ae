use crate::dataset::{generate_dataset, Dataset};
use crate::eager::transform_eager_with;
use crate::error::{Error, Result};
use crate::lazy::{LazyMode, LazyPlan};
use crate::parallel::transform_parallel_with;
use crate::report::{PhaseTiming, Report, EAGER_LABEL, LAZY_LABEL, PARALLEL_LABEL};
use crate::BenchOptions;
use log::{debug, info};
use polars::prelude::*;
use std::time::Instant;

/// Run `f` under a wall-clock timer.
pub fn time_phase<T, F>(label: &str, f: F) -> Result<(T, PhaseTiming)>
where
    F: FnOnce() -> Result<T>,
{
    info!("{label}: starting");
    let start = Instant::now();
    let out = f()?;
    let seconds = start.elapsed().as_secs_f64();
    info!("{label}: {seconds:.3}s");
    Ok((out, PhaseTiming::new(label, seconds)))
}

/// Serial eager loop; each pass transforms the previous pass's output.
pub fn run_eager_loop(df: DataFrame, iterations: usize, base_columns: usize) -> Result<DataFrame> {
    let mut table = df;
    for _ in 0..iterations {
        table = transform_eager_with(&table, base_columns)?;
    }
    Ok(table)
}

/// Serial lazy loop; the returned plan holds every iteration's projections.
pub fn run_lazy_loop(plan: LazyPlan, iterations: usize, mode: LazyMode) -> Result<LazyPlan> {
    let mut plan = plan;
    for i in 0..iterations {
        plan = plan.transform(i)?;
        if mode == LazyMode::Collect {
            plan.clone().collect()?;
        }
    }
    Ok(plan)
}

/// Generate the dataset, time the three strategies, and build the report.
///
/// The parallel phase starts from the table the eager loop produced. Nothing is
/// reported unless all three phases succeed.
pub fn run_benchmark(opts: &BenchOptions) -> Result<Report> {
    if opts.iterations == 0 {
        return Err(Error::InvalidInput("iterations must be >= 1".to_string()));
    }
    let Dataset { eager, lazy } = generate_dataset(opts.rows, opts.columns)?;
    debug!(
        "generated {} rows x {} columns, {} iterations per phase",
        opts.rows, opts.columns, opts.iterations
    );

    let (eager_out, eager_time) = time_phase(EAGER_LABEL, || {
        run_eager_loop(eager, opts.iterations, opts.columns)
    })?;

    let (parallel_out, parallel_time) = time_phase(PARALLEL_LABEL, || {
        transform_parallel_with(&eager_out, opts.iterations, opts.threads, opts.columns)
    })?;
    debug!("parallel phase returned {} frames", parallel_out.len());

    let (plan, lazy_time) = time_phase(LAZY_LABEL, || {
        run_lazy_loop(lazy, opts.iterations, opts.lazy_mode)
    })?;
    debug!(
        "lazy plan depth {} producing {} columns",
        plan.depth(),
        plan.columns().len()
    );

    Ok(Report::new([eager_time, parallel_time, lazy_time]))
}
