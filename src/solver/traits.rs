//! Solver traits
//!
//! # Design Philosophy
//!
//! The benchmark driver never knows which algorithm sits behind a solver.
//! It only sees two seams:
//! - `CovarianceSolver`: factorize a structured covariance, then solve
//!   against it any number of times
//! - `LikelihoodModel`: a process model that is constructed, set up, then
//!   asked for a Gaussian log-likelihood
//!
//! # Factorization ownership
//!
//! `compute` returns the factorization as an owned value and `solve`
//! borrows it. A solve can therefore never observe a factorization from a
//! different problem size, and the factorization is dropped as soon as the
//! driver moves on to the next size.

use nalgebra::DVector;

use crate::data::{CarmaParameters, KernelParameters};
use crate::error::SolverError;

// =================================================================================================
// Structured covariance solver
// =================================================================================================

/// Factorize-then-solve covariance solver
///
/// # Example
///
/// ```rust
/// use gp_scaling_bench::data::KernelParameters;
/// use gp_scaling_bench::solver::{CovarianceSolver, SemiseparableSolver};
///
/// let kernel = KernelParameters::new(vec![1.0], vec![1.5], vec![], vec![], vec![]);
/// let times = [0.0, 0.5, 1.0];
/// let sigma = [1.0, 1.0, 1.0];
///
/// let solver = SemiseparableSolver::new();
/// let factor = solver.compute(&kernel, &times, &sigma).unwrap();
/// let x = solver.solve(&factor, &[1.0, 0.0, -1.0]).unwrap();
/// assert_eq!(x.len(), 3);
/// ```
pub trait CovarianceSolver {
    /// Factorization state produced by [`compute`](Self::compute)
    type Factorization;

    /// Factorize `K = diag(uncertainties²) + k(|t_n - t_m|)`
    ///
    /// `times` must be sorted ascending.
    fn compute(
        &self,
        kernel: &KernelParameters,
        times: &[f64],
        uncertainties: &[f64],
    ) -> Result<Self::Factorization, SolverError>;

    /// Apply `K⁻¹` to `values`
    fn solve(
        &self,
        factorization: &Self::Factorization,
        values: &[f64],
    ) -> Result<DVector<f64>, SolverError>;

    /// Solver name
    fn name(&self) -> &str;
}

// =================================================================================================
// Process likelihood model
// =================================================================================================

/// Process model evaluated through a Gaussian log-likelihood
///
/// A model instance is built from its parameters, prepared once with
/// [`setup`](Self::setup), then evaluated against a dataset.
pub trait LikelihoodModel {
    /// Build an instance with the given process mean
    fn construct(mean: f64, parameters: &CarmaParameters) -> Self
    where
        Self: Sized;

    /// Precompute everything that depends only on the parameters
    fn setup(&mut self) -> Result<(), SolverError>;

    /// Log-likelihood of `values` observed at `times` with the given
    /// measurement uncertainties
    fn log_likelihood(
        &self,
        times: &[f64],
        values: &[f64],
        uncertainties: &[f64],
    ) -> Result<f64, SolverError>;

    /// Model name
    fn name(&self) -> &str;
}

// =================================================================================================
// Helpers
// =================================================================================================

/// Check that `actual` matches `expected`
pub(crate) fn check_len(
    context: &'static str,
    expected: usize,
    actual: usize,
) -> Result<(), SolverError> {
    if expected == actual {
        Ok(())
    } else {
        Err(SolverError::DimensionMismatch { context, expected, actual })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_len_ok() {
        assert!(check_len("compute", 4, 4).is_ok());
    }

    #[test]
    fn test_check_len_mismatch() {
        let err = check_len("solve", 4, 3).unwrap_err();
        assert_eq!(
            err,
            SolverError::DimensionMismatch { context: "solve", expected: 4, actual: 3 }
        );
    }
}
