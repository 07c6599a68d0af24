//! Reference solver backends
//!
//! This module contains concrete implementations of the solver traits
//! ([`CovarianceSolver`](crate::solver::CovarianceSolver) and
//! [`LikelihoodModel`](crate::solver::LikelihoodModel)).
//!
//! # Available Methods
//!
//! - **[`SemiseparableSolver`]**: `L D Lᵀ` factorization of a
//!   semiseparable covariance
//!   - Factorization: O(N·J²), solve: O(N·J)
//!   - Requires sorted times
//!
//! - **[`CarmaSolver`]**: CARMA(p, q) likelihood by Kalman filtering in
//!   the rotated (diagonal-transition) basis
//!   - Setup: one p×p eigenproblem
//!   - Likelihood: O(N·p²)
//!
//! Any other backend can be benchmarked by implementing the same traits;
//! the scaling driver does not depend on these types.

pub mod carma;
pub mod semiseparable;

// Re-exports for convenience
pub use carma::CarmaSolver;
pub use semiseparable::{SemiseparableFactor, SemiseparableSolver};
