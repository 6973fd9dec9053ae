use polars::prelude::*;
use polars_transform_bench::column_name;

pub const TOLERANCE: f64 = 1e-9;

/// Build a frame with `col_0..col_{n-1}` from row-major values.
pub fn frame_from_rows(rows: &[Vec<i64>]) -> DataFrame {
    let width = rows.first().map(|r| r.len()).unwrap_or(0);
    let cols = (0..width)
        .map(|k| {
            let values: Vec<i64> = rows.iter().map(|r| r[k]).collect();
            Series::new(column_name(k).into(), values).into_column()
        })
        .collect::<Vec<_>>();
    DataFrame::new_infer_height(cols).unwrap()
}

/// One row holding 1, 2, ..., 10.
pub fn sequence_frame() -> DataFrame {
    frame_from_rows(&[(1..=10).collect()])
}

pub fn f64_values(df: &DataFrame, name: &str) -> Vec<f64> {
    df.column(name)
        .unwrap()
        .as_materialized_series()
        .cast(&DataType::Float64)
        .unwrap()
        .f64()
        .unwrap()
        .into_iter()
        .map(|v| v.unwrap_or(f64::NAN))
        .collect()
}

pub fn assert_close(actual: f64, expected: f64, what: &str) {
    assert!(
        (actual - expected).abs() < TOLERANCE,
        "{what}: expected {expected}, got {actual}"
    );
}

/// Reference statistics computed straight from the base columns.
pub fn expected_row_stats(df: &DataFrame, row: usize, base: usize) -> (f64, f64, f64) {
    let values: Vec<f64> = (0..base)
        .map(|k| f64_values(df, &column_name(k))[row])
        .collect();
    let n = values.len() as f64;
    let sum: f64 = values.iter().sum();
    let mean = sum / n;
    let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
    (sum, mean, var.sqrt())
}

/// Check every derived column of an eager result against its base columns.
pub fn assert_eager_output(out: &DataFrame) {
    let sums = f64_values(out, "col_sum");
    let means = f64_values(out, "col_mean");
    let stds = f64_values(out, "col_std");
    let logs = f64_values(out, "col_log");
    let col0 = f64_values(out, "col_0");
    for row in 0..out.height() {
        let (sum, mean, std) = expected_row_stats(out, row, 10);
        assert_close(sums[row], sum, "col_sum");
        assert_close(means[row], mean, "col_mean");
        assert_close(means[row], sums[row] / 10.0, "col_mean vs col_sum");
        assert_close(stds[row], std, "col_std");
        assert_close(logs[row], (1.0 + col0[row]).ln(), "col_log");
    }
}
