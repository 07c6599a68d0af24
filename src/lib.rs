//! gp-scaling-bench: Scaling Benchmark for Gaussian-Process Solvers
//!
//! Measures how the cost of Gaussian-process likelihood machinery grows
//! with the number of observations. Two workloads are timed at every
//! problem size `N = 64, 128, 256, … ≤ N_max`:
//!
//! 1. a semiseparable covariance solver (`compute` then `solve`)
//! 2. a CARMA state-space likelihood (construct, `setup`, `log_likelihood`)
//!
//! # Architecture
//!
//! The benchmark is built on two principles:
//!
//! 1. **Separation of Harness and Backends**
//!    - The harness decides what is measured and how often
//!    - Backends implement the measured operations behind traits
//!
//! 2. **Reproducibility**
//!    - Every input comes from one seeded random source
//!    - Parameters and data are drawn in a fixed order
//!
//! # Quick Start
//!
//! ```rust
//! use gp_scaling_bench::prelude::*;
//!
//! # fn main() -> Result<(), BenchError> {
//! // 1. Configure the run
//! let config = BenchmarkConfig::default()
//!     .with_nterms(3)
//!     .with_n_max(256)
//!     .with_niter(2);
//!
//! // 2. Run the sweep, reporting into memory
//! let mut reporter = TextReporter::new(Vec::new());
//! let results = run_benchmark::<_, CarmaSolver, _>(
//!     &config,
//!     SemiseparableSolver::new(),
//!     &mut reporter,
//! )?;
//!
//! // 3. Access results
//! assert_eq!(results.len(), 3);
//! println!("N = 256: {:.3e} s", results[2].combined_average());
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`data`]: random source, parameter synthesis, dataset generation
//! - [`solver`]: solver traits and reference backends
//! - [`bench`]: timer and scaling sweep
//! - [`output`]: text report
//! - [`config`]: run configuration and command line
//! - [`logging`]: log4rs initialisation
//! - [`error`]: error types

// Core modules
pub mod data;
pub mod solver;

pub mod bench;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //!
    //! use gp_scaling_bench::prelude::*;
    //! ```
    pub use crate::bench::{run_benchmark,
                           BenchmarkResult,
                           ProblemSizes,
                           ScalingDriver};
    pub use crate::config::BenchmarkConfig;
    pub use crate::data::{synthesize_parameters,
                          Dataset,
                          RandomSource,
                          SeededRandom};
    pub use crate::error::{BenchError, SolverError};
    pub use crate::output::{Reporter, TextReporter};
    pub use crate::solver::{CarmaSolver,
                            CovarianceSolver,
                            LikelihoodModel,
                            SemiseparableSolver};
}
