//! Timing records and the speedup summary table.

use crate::error::{Error, Result};
use polars::prelude::*;
use serde_json::{json, Map, Value};
use std::fmt;

pub const EAGER_LABEL: &str = "Pandas";
pub const PARALLEL_LABEL: &str = "Pandas + joblib Parallel";
pub const LAZY_LABEL: &str = "Polars";

pub const LIBRARY_HEADER: &str = "Library";
pub const TIME_HEADER: &str = "Execution Time (s)";
pub const SPEEDUP_HEADERS: [&str; 3] = [
    "Speedup Factor (vs Pandas)",
    "Speedup Factor (vs Pandas + Joblib)",
    "Speedup Factor (vs Polars)",
];

/// The three measured strategies, in report row order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Eager,
    Parallel,
    Lazy,
}

impl Phase {
    pub const ALL: [Phase; 3] = [Phase::Eager, Phase::Parallel, Phase::Lazy];

    pub fn label(self) -> &'static str {
        match self {
            Phase::Eager => EAGER_LABEL,
            Phase::Parallel => PARALLEL_LABEL,
            Phase::Lazy => LAZY_LABEL,
        }
    }

    fn index(self) -> usize {
        match self {
            Phase::Eager => 0,
            Phase::Parallel => 1,
            Phase::Lazy => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PhaseTiming {
    pub label: String,
    pub seconds: f64,
}

impl PhaseTiming {
    pub fn new(label: impl Into<String>, seconds: f64) -> Self {
        Self {
            label: label.into(),
            seconds,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Report {
    timings: [PhaseTiming; 3],
}

impl Report {
    /// `timings` are in `Phase::ALL` order.
    pub fn new(timings: [PhaseTiming; 3]) -> Self {
        Self { timings }
    }

    pub fn timings(&self) -> &[PhaseTiming; 3] {
        &self.timings
    }

    pub fn seconds(&self, phase: Phase) -> f64 {
        self.timings[phase.index()].seconds
    }

    /// How many times faster `row` ran than `against`: `time(against) / time(row)`.
    /// The diagonal is exactly 1.0.
    pub fn speedup(&self, row: Phase, against: Phase) -> f64 {
        if row == against {
            return 1.0;
        }
        self.seconds(against) / self.seconds(row)
    }

    pub fn to_dataframe(&self) -> Result<DataFrame> {
        let labels: Vec<&str> = self.timings.iter().map(|t| t.label.as_str()).collect();
        let times: Vec<f64> = self.timings.iter().map(|t| t.seconds).collect();

        let mut cols = vec![
            Series::new(LIBRARY_HEADER.into(), labels).into_column(),
            Series::new(TIME_HEADER.into(), times).into_column(),
        ];
        for (against, header) in Phase::ALL.into_iter().zip(SPEEDUP_HEADERS) {
            let ratios: Vec<f64> = Phase::ALL
                .iter()
                .map(|&row| self.speedup(row, against))
                .collect();
            cols.push(Series::new(header.into(), ratios).into_column());
        }

        DataFrame::new_infer_height(cols).map_err(Error::Polars)
    }

    /// The report table as a JSON array, one object per row.
    pub fn to_json(&self) -> String {
        let rows = Phase::ALL
            .iter()
            .zip(&self.timings)
            .map(|(&row, timing)| {
                let mut obj = Map::new();
                obj.insert(LIBRARY_HEADER.to_string(), json!(timing.label));
                obj.insert(TIME_HEADER.to_string(), json!(timing.seconds));
                for (against, header) in Phase::ALL.into_iter().zip(SPEEDUP_HEADERS) {
                    obj.insert(header.to_string(), json!(self.speedup(row, against)));
                }
                Value::Object(obj)
            })
            .collect::<Vec<_>>();
        Value::Array(rows).to_string()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let df = self.to_dataframe().map_err(|_| fmt::Error)?;
        write!(f, "{df}")
    }
}
