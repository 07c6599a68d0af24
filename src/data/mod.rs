//! Synthetic benchmark inputs
//!
//! - [`random`]: injectable random source
//! - [`parameters`]: kernel and CARMA coefficient synthesis
//! - [`dataset`]: sorted times, latent-signal values and uncertainties
//!
//! Everything here is generated once per run, before the scaling sweep,
//! and is read-only afterwards.
//!
//! # Example
//!
//! ```rust
//! use gp_scaling_bench::data::{Dataset, SeededRandom, synthesize_parameters};
//!
//! let mut source = SeededRandom::default();
//! let params = synthesize_parameters(3, &mut source);
//! let dataset = Dataset::generate(256, &mut source);
//!
//! assert_eq!(params.counts.n_real, 1);
//! assert_eq!(dataset.prefix(64).len(), 64);
//! ```

pub mod dataset;
pub mod parameters;
pub mod random;

pub use dataset::{Dataset, DatasetView};
pub use parameters::{
    synthesize_parameters,
    CarmaParameters,
    KernelParameters,
    SolverParameters,
    TermCounts,
};
pub use random::{RandomSource, SeededRandom, DEFAULT_SEED};
