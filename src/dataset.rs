use crate::error::{Error, Result};
use crate::lazy::LazyPlan;
use polars::prelude::*;
use rand::Rng;

pub const DEFAULT_ROWS: usize = 50;
pub const BASE_COLUMNS: usize = 10;
pub const DEFAULT_ITERATIONS: usize = 10_000;

// Cells are drawn uniformly from [VALUE_LOW, VALUE_HIGH).
const VALUE_LOW: i64 = 1;
const VALUE_HIGH: i64 = 100;

/// Name of the `idx`-th generated column (`col_0`, `col_1`, ...).
pub fn column_name(idx: usize) -> String {
    format!("col_{idx}")
}

/// The same random table in both representations the benchmark needs.
pub struct Dataset {
    pub eager: DataFrame,
    pub lazy: LazyPlan,
}

/// Build a `rows` x `columns` table of random `Int64` values.
///
/// No seed is fixed, so two calls produce different data.
pub fn generate_table(rows: usize, columns: usize) -> Result<DataFrame> {
    if rows == 0 {
        return Err(Error::InvalidInput("row count must be >= 1".to_string()));
    }
    if columns == 0 {
        return Err(Error::InvalidInput("column count must be >= 1".to_string()));
    }

    let mut rng = rand::rng();
    let cols = (0..columns)
        .map(|k| {
            let values: Vec<i64> = (0..rows)
                .map(|_| rng.random_range(VALUE_LOW..VALUE_HIGH))
                .collect();
            Series::new(column_name(k).into(), values).into_column()
        })
        .collect::<Vec<_>>();

    DataFrame::new_infer_height(cols).map_err(Error::Polars)
}

pub fn generate_dataset(rows: usize, columns: usize) -> Result<Dataset> {
    let eager = generate_table(rows, columns)?;
    let lazy = LazyPlan::from_frame(&eager);
    Ok(Dataset { eager, lazy })
}
