//! Error types
//!
//! Two layers:
//! - [`SolverError`]: failures raised by a solver backend (factorization,
//!   solve, likelihood evaluation)
//! - [`BenchError`]: everything that can stop a benchmark run, including
//!   solver failures, report I/O and logger setup

use thiserror::Error;

/// Failure raised by a solver backend
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SolverError {
    /// Input vectors do not have the expected length
    #[error("dimension mismatch in {context}: expected {expected}, got {actual}")]
    DimensionMismatch {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A pivot of the factorization was not strictly positive
    #[error("covariance matrix is not positive definite (pivot {index} = {pivot})")]
    NotPositiveDefinite { index: usize, pivot: f64 },

    /// Likelihood requested before the model was set up
    #[error("model '{0}' must be set up before evaluating the likelihood")]
    NotSetUp(&'static str),
}

/// Failure that aborts a benchmark run
#[derive(Debug, Error)]
pub enum BenchError {
    #[error("solver '{solver}' failed at N = {size}: {source}")]
    Solver {
        solver: String,
        size: usize,
        #[source]
        source: SolverError,
    },

    #[error("report output failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("logger initialisation failed: {0}")]
    Logging(String),
}
