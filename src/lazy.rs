//! Deferred Polars plans for the row-wise transform.

use crate::error::{Error, Result};
use polars::lazy::dsl::{all, mean_horizontal, sum_horizontal};
use polars::prelude::*;

/// Columns left out of the horizontal aggregates.
///
/// Only the unsuffixed eager names are listed, so suffixed columns produced by earlier
/// iterations (`col_sum0`, `col_mean0`, ...) are aggregated by every later iteration.
pub const EXCLUDED_COLUMNS: [&str; 4] = ["col_sum", "col_mean", "col_std", "col_log"];

const LOG_SOURCE_COLUMN: &str = "col_0";

/// Whether the benchmark loop only builds plans or also executes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LazyMode {
    /// Build the plan each iteration without executing it.
    #[default]
    Deferred,
    /// Force `collect()` after every iteration.
    Collect,
}

/// A `LazyFrame` together with the names of the columns it will produce.
#[derive(Clone)]
pub struct LazyPlan {
    frame: LazyFrame,
    columns: Vec<String>,
    has_log_source: bool,
    // Last column the aggregates see; feeds `col_std{i}`.
    last_included: Option<String>,
    depth: usize,
}

impl LazyPlan {
    pub fn from_frame(df: &DataFrame) -> Self {
        let columns: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();
        let has_log_source = columns.iter().any(|c| c == LOG_SOURCE_COLUMN);
        let last_included = columns
            .iter()
            .rev()
            .find(|c| !EXCLUDED_COLUMNS.contains(&c.as_str()))
            .cloned();
        Self {
            frame: df.clone().lazy(),
            columns,
            has_log_source,
            last_included,
            depth: 0,
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of transform steps stacked on the source frame.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn frame(&self) -> &LazyFrame {
        &self.frame
    }

    /// Columns the next `transform` aggregates over. Walks the full column list.
    pub fn included_columns(&self) -> Vec<&str> {
        self.columns
            .iter()
            .map(String::as_str)
            .filter(|name| !EXCLUDED_COLUMNS.contains(name))
            .collect()
    }

    /// Extend the plan with `col_sum{i}`, `col_mean{i}`, `col_std{i}` and `col_log{i}`.
    ///
    /// Nothing is executed. The aggregate inputs are a wildcard minus `EXCLUDED_COLUMNS`,
    /// so every step adds expressions of the same size no matter how wide the plan is.
    /// `col_std{i}` is the column-wise standard deviation of the last included column,
    /// broadcast to every row. Iteration indices are expected to be distinct.
    pub fn transform(self, iteration: usize) -> Result<Self> {
        if !self.has_log_source {
            return Err(Error::InvalidInput(format!(
                "lazy transform needs a '{LOG_SOURCE_COLUMN}' column"
            )));
        }
        let last = match self.last_included {
            Some(name) => name,
            None => {
                return Err(Error::InvalidInput(
                    "no columns left to aggregate after exclusions".to_string(),
                ))
            }
        };
        let inputs = [all().exclude_cols(EXCLUDED_COLUMNS).as_expr()];

        let names = [
            format!("col_sum{iteration}"),
            format!("col_mean{iteration}"),
            format!("col_std{iteration}"),
            format!("col_log{iteration}"),
        ];
        let exprs = [
            sum_horizontal(&inputs, true)?.alias(names[0].as_str()),
            mean_horizontal(&inputs, true)?.alias(names[1].as_str()),
            col(last.as_str()).std(1).alias(names[2].as_str()),
            col(LOG_SOURCE_COLUMN).log1p().alias(names[3].as_str()),
        ];

        let frame = self.frame.with_columns(exprs);
        let last_included = Some(names[3].clone());
        let mut columns = self.columns;
        columns.extend(names);

        Ok(Self {
            frame,
            columns,
            has_log_source: true,
            last_included,
            depth: self.depth + 1,
        })
    }

    pub fn collect(self) -> Result<DataFrame> {
        self.frame.collect().map_err(Error::Polars)
    }
}
