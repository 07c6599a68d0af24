//! Scaling benchmark
//!
//! # Components
//!
//! - [`timer`]: microsecond wall-clock timestamps
//! - [`sweep`]: problem-size sequence, per-size measurement and results
//!
//! [`run_benchmark`] ties them to parameter synthesis, dataset generation
//! and reporting in the fixed order the benchmark requires:
//!
//! ```text
//! seed ─► parameters ─► term-count line ─► dataset(N_max) ─► sweep ─► result lines
//! ```
//!
//! # Example
//!
//! ```rust
//! use gp_scaling_bench::bench::run_benchmark;
//! use gp_scaling_bench::config::BenchmarkConfig;
//! use gp_scaling_bench::output::TextReporter;
//! use gp_scaling_bench::solver::{CarmaSolver, SemiseparableSolver};
//!
//! let config = BenchmarkConfig::default().with_n_max(128).with_niter(1);
//! let mut reporter = TextReporter::new(Vec::new());
//! run_benchmark::<_, CarmaSolver, _>(&config, SemiseparableSolver::new(), &mut reporter).unwrap();
//!
//! let text = String::from_utf8(reporter.into_inner()).unwrap();
//! assert_eq!(text.lines().count(), 3);
//! ```

pub mod sweep;
pub mod timer;

pub use sweep::{BenchmarkResult, DEFAULT_START_SIZE, ProblemSizes, ScalingDriver};
pub use timer::Timer;

use crate::config::BenchmarkConfig;
use crate::data::{Dataset, SeededRandom, synthesize_parameters};
use crate::error::BenchError;
use crate::output::Reporter;
use crate::solver::{CovarianceSolver, LikelihoodModel};

/// Run a complete benchmark and stream its report
///
/// The term-count line is written before the dataset is generated, so it
/// appears even when `N_max` is large.
///
/// # Errors
///
/// Fails on the first solver error or write error.
pub fn run_benchmark<S, M, R>(
    config: &BenchmarkConfig,
    solver: S,
    reporter: &mut R,
) -> Result<Vec<BenchmarkResult>, BenchError>
where
    S: CovarianceSolver,
    M: LikelihoodModel,
    R: Reporter + ?Sized,
{
    let mut source = SeededRandom::new(config.seed);

    let parameters = synthesize_parameters(config.nterms, &mut source);
    reporter.write_term_counts(&parameters.counts)?;

    log::info!("generating dataset of {} points", config.n_max);
    let dataset = Dataset::generate(config.n_max, &mut source);

    let driver: ScalingDriver<'_, S, M> =
        ScalingDriver::new(solver, &parameters, &dataset, config.niter)
            .with_start_size(config.start_size);

    driver.run(|result| {
        reporter.write_result(result)?;
        Ok(())
    })
}
