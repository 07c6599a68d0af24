//! Common utilities for integration tests

pub mod mock_solvers;
pub mod test_helpers;

// Re-export commonly used items
#[allow(unused_imports)]
pub use mock_solvers::{
    CallCounts, CountingSolver, FailingLikelihood, FailingSolver, MockLikelihood, StubSource,
};
#[allow(unused_imports)]
pub use test_helpers::{dense_covariance, dense_log_likelihood, relative_error, run_to_string};
