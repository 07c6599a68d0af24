//! Gaussian-process solvers
//!
//! This module provides the traits the benchmark measures against and the
//! reference backends that implement them.
//!
//! # Core Concepts
//!
//! The benchmark separates WHAT is measured from HOW it is computed:
//!
//! 1. **Traits** (`traits`) - the measured operations
//!    - `CovarianceSolver`: `compute` a factorization, `solve` against it
//!    - `LikelihoodModel`: `construct`, `setup`, `log_likelihood`
//!
//! 2. **Methods** (`methods`) - the algorithms
//!    - `SemiseparableSolver`: structured covariance factorization
//!    - `CarmaSolver`: CARMA state-space likelihood
//!
//! This separation allows:
//! - Same driver for any backend
//! - Mock backends in tests
//! - Side-by-side comparison of backends at equal problem sizes
//!
//! # Workflow Diagram
//!
//! ```text
//! ┌──────────────────┐      ┌────────────────────┐
//! │ KernelParameters │      │ CarmaParameters    │
//! └────────┬─────────┘      └─────────┬──────────┘
//!          │                          │
//! ┌────────▼─────────┐      ┌─────────▼──────────┐
//! │ compute(t, σ)    │      │ construct(mean)    │
//! │  → Factorization │      │ setup()            │
//! └────────┬─────────┘      └─────────┬──────────┘
//!          │ &Factorization           │
//! ┌────────▼─────────┐      ┌─────────▼──────────┐
//! │ solve(y)         │      │ log_likelihood     │
//! │  → K⁻¹ y         │      │  (t, y, σ) → ℓ     │
//! └──────────────────┘      └────────────────────┘
//! ```
//!
//! # Error Handling
//!
//! Every operation returns `Result<T, SolverError>`. The driver does not
//! recover from solver errors: it wraps them with the solver name and the
//! problem size and stops the sweep.

// =================================================================================================
// Module Declarations
// =================================================================================================
mod traits;
mod methods;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use traits::{CovarianceSolver, LikelihoodModel};

pub use methods::{CarmaSolver, SemiseparableFactor, SemiseparableSolver};
