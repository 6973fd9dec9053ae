use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Computation error: {0}")]
    ComputationError(String),

    #[error("Worker task {task} failed: {source}")]
    WorkerFailure {
        task: usize,
        #[source]
        source: Box<Error>,
    },

    #[error("Thread pool error: {0}")]
    ThreadPool(String),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),
}

pub type Result<T> = std::result::Result<T, Error>;
