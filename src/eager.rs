//! Eager row-wise statistics over the base columns of a table.

use crate::dataset::{column_name, BASE_COLUMNS};
use crate::error::{Error, Result};
use polars::prelude::*;

pub const SUM_COLUMN: &str = "col_sum";
pub const MEAN_COLUMN: &str = "col_mean";
pub const STD_COLUMN: &str = "col_std";
pub const LOG_COLUMN: &str = "col_log";

/// Per-row aggregates of one slice of base values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowStats {
    pub sum: f64,
    pub mean: f64,
    /// Sample standard deviation (ddof = 1).
    pub std: f64,
}

impl RowStats {
    /// Two-pass statistics. Callers guarantee `values.len() >= 2`.
    pub fn from_values(values: &[f64]) -> Self {
        let n = values.len() as f64;
        let sum: f64 = values.iter().sum();
        let mean = sum / n;
        let sq: f64 = values.iter().map(|v| (v - mean) * (v - mean)).sum();
        Self {
            sum,
            mean,
            std: (sq / (n - 1.0)).sqrt(),
        }
    }
}

/// Apply the eager transform over the standard ten base columns.
pub fn transform_eager(df: &DataFrame) -> Result<DataFrame> {
    transform_eager_with(df, BASE_COLUMNS)
}

/// Returns a copy of `df` with `col_sum`, `col_mean`, `col_std` and `col_log` set.
///
/// The aggregates read `col_0..col_{base_columns - 1}` only, so derived columns left
/// by an earlier pass never feed back into the statistics. Derived columns that already
/// exist keep their position and are overwritten; the input frame is not modified.
pub fn transform_eager_with(df: &DataFrame, base_columns: usize) -> Result<DataFrame> {
    if base_columns < 2 {
        return Err(Error::ComputationError(format!(
            "sample standard deviation needs at least 2 base columns, got {base_columns}"
        )));
    }

    let base = base_values(df, base_columns)?;
    let height = df.height();

    let mut sums = Vec::with_capacity(height);
    let mut means = Vec::with_capacity(height);
    let mut stds = Vec::with_capacity(height);
    let mut row = vec![0f64; base_columns];
    for r in 0..height {
        for (k, col) in base.iter().enumerate() {
            row[k] = col[r];
        }
        let stats = RowStats::from_values(&row);
        sums.push(stats.sum);
        means.push(stats.mean);
        stds.push(stats.std);
    }
    let logs: Vec<f64> = base[0].iter().map(|v| v.ln_1p()).collect();

    let derived = [
        Series::new(SUM_COLUMN.into(), sums),
        Series::new(MEAN_COLUMN.into(), means),
        Series::new(STD_COLUMN.into(), stds),
        Series::new(LOG_COLUMN.into(), logs),
    ];

    let mut columns: Vec<Column> = df.columns().to_vec();
    for series in derived {
        let existing = columns
            .iter()
            .position(|c| c.name().as_str() == series.name().as_str());
        match existing {
            Some(pos) => columns[pos] = series.into_column(),
            None => columns.push(series.into_column()),
        }
    }

    DataFrame::new_infer_height(columns).map_err(Error::Polars)
}

// Column-major f64 copies of the base columns; nulls become NaN.
fn base_values(df: &DataFrame, base_columns: usize) -> Result<Vec<Vec<f64>>> {
    (0..base_columns)
        .map(|k| {
            let name = column_name(k);
            let column = df.column(&name).map_err(|_| {
                Error::InvalidInput(format!(
                    "expected {base_columns} base columns, '{name}' is missing"
                ))
            })?;
            let series = column.as_materialized_series();
            if !series.dtype().is_primitive_numeric() {
                return Err(Error::InvalidInput(format!(
                    "base column '{name}' is not numeric ({})",
                    series.dtype()
                )));
            }
            let casted = series.cast(&DataType::Float64).map_err(Error::Polars)?;
            let values = casted
                .f64()
                .map_err(Error::Polars)?
                .into_iter()
                .map(|v| v.unwrap_or(f64::NAN))
                .collect();
            Ok(values)
        })
        .collect()
}
