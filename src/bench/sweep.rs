//! Scaling sweep
//!
//! The driver visits problem sizes `N = start, 2·start, 4·start, … ≤ N_max`
//! and, for each size, times three blocks of `niter` repetitions on the
//! first `N` points of the dataset:
//!
//! 1. `compute` (factorization), summed
//! 2. `solve` against the factorization kept from block 1, summed
//! 3. construct + setup + likelihood of a fresh CARMA model, summed as one
//!    unit of work
//!
//! Factorizing once and solving `niter` times separates the two costs
//! while still averaging each over `niter` calls.

use std::marker::PhantomData;
use std::time::Duration;

use crate::bench::timer::Timer;
use crate::data::{Dataset, SolverParameters};
use crate::error::{BenchError, SolverError};
use crate::solver::{CovarianceSolver, LikelihoodModel};

/// Smallest problem size visited by the benchmark binary
pub const DEFAULT_START_SIZE: usize = 64;

/// Process mean handed to every CARMA model
const CARMA_MEAN: f64 = 0.0;

// =================================================================================================
// Problem sizes
// =================================================================================================

/// Doubling sequence of problem sizes bounded by `max`
///
/// # Example
///
/// ```rust
/// use gp_scaling_bench::bench::ProblemSizes;
///
/// let sizes: Vec<usize> = ProblemSizes::new(64, 200).collect();
/// assert_eq!(sizes, vec![64, 128]);
/// ```
#[derive(Debug, Clone)]
pub struct ProblemSizes {
    next: Option<usize>,
    max: usize,
}

impl ProblemSizes {
    /// Sizes `start, 2·start, …` up to and including `max`
    pub fn new(start: usize, max: usize) -> Self {
        Self { next: Some(start), max }
    }
}

impl Iterator for ProblemSizes {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let n = self.next?;
        if n == 0 || n > self.max {
            self.next = None;
            return None;
        }
        self.next = n.checked_mul(2);
        Some(n)
    }
}

// =================================================================================================
// Result
// =================================================================================================

/// Timings for one problem size
///
/// Raw totals are kept as whole microseconds; averages are derived in
/// seconds. With `niter = 0` every average is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkResult {
    /// Problem size `N`
    pub size: usize,

    /// Repetitions per measurement
    pub niter: usize,

    /// Total time spent in `compute`
    pub compute_time: Duration,

    /// Total time spent in `solve`
    pub solve_time: Duration,

    /// Total time spent in CARMA construct + setup + likelihood
    pub carma_time: Duration,
}

impl BenchmarkResult {
    fn average(&self, total: Duration) -> f64 {
        if self.niter == 0 {
            0.0
        } else {
            total.as_micros() as f64 / (self.niter as f64 * 1.0e6)
        }
    }

    /// `(compute_time + solve_time) / niter`, in seconds
    pub fn combined_average(&self) -> f64 {
        self.average(self.compute_time + self.solve_time)
    }

    /// `carma_time / niter`, in seconds
    pub fn carma_average(&self) -> f64 {
        self.average(self.carma_time)
    }
}

// =================================================================================================
// Driver
// =================================================================================================

/// Runs the scaling sweep for one covariance solver and one likelihood model
///
/// `N_max` is the length of the dataset: generate it at the largest size
/// to be visited.
///
/// # Example
///
/// ```rust
/// use gp_scaling_bench::bench::ScalingDriver;
/// use gp_scaling_bench::data::{Dataset, SeededRandom, synthesize_parameters};
/// use gp_scaling_bench::solver::{CarmaSolver, SemiseparableSolver};
///
/// let mut source = SeededRandom::default();
/// let params = synthesize_parameters(2, &mut source);
/// let dataset = Dataset::generate(128, &mut source);
///
/// let driver: ScalingDriver<'_, _, CarmaSolver> =
///     ScalingDriver::new(SemiseparableSolver::new(), &params, &dataset, 1);
/// let results = driver.run(|_| Ok(())).unwrap();
/// assert_eq!(results.len(), 2);
/// ```
pub struct ScalingDriver<'a, S, M> {
    solver: S,
    parameters: &'a SolverParameters,
    dataset: &'a Dataset,
    niter: usize,
    start_size: usize,
    timer: Timer,
    _model: PhantomData<M>,
}

impl<'a, S, M> ScalingDriver<'a, S, M>
where
    S: CovarianceSolver,
    M: LikelihoodModel,
{
    /// Create a driver starting at [`DEFAULT_START_SIZE`]
    pub fn new(
        solver: S,
        parameters: &'a SolverParameters,
        dataset: &'a Dataset,
        niter: usize,
    ) -> Self {
        Self {
            solver,
            parameters,
            dataset,
            niter,
            start_size: DEFAULT_START_SIZE,
            timer: Timer::new(),
            _model: PhantomData,
        }
    }

    /// Builder pattern: set the first problem size
    pub fn with_start_size(mut self, start_size: usize) -> Self {
        self.start_size = start_size;
        self
    }

    /// Problem sizes this driver will visit
    pub fn sizes(&self) -> ProblemSizes {
        ProblemSizes::new(self.start_size, self.dataset.len())
    }

    /// Run every size, handing each result to `on_result` as soon as it is
    /// measured
    ///
    /// # Errors
    ///
    /// Stops at the first solver failure or the first error returned by
    /// `on_result`.
    pub fn run<F>(&self, mut on_result: F) -> Result<Vec<BenchmarkResult>, BenchError>
    where
        F: FnMut(&BenchmarkResult) -> Result<(), BenchError>,
    {
        log::info!(
            "sweep: solver={} N_max={} niter={} start={}",
            self.solver.name(),
            self.dataset.len(),
            self.niter,
            self.start_size
        );

        let mut results = Vec::new();
        for size in self.sizes() {
            let result = self.run_size(size)?;
            on_result(&result)?;
            results.push(result);
        }

        if results.is_empty() {
            log::warn!(
                "no problem sizes visited: N_max = {} is below the start size {}",
                self.dataset.len(),
                self.start_size
            );
        }

        Ok(results)
    }

    /// Measure a single problem size
    ///
    /// # Panics
    ///
    /// Panics when `size` exceeds the dataset length.
    pub fn run_size(&self, size: usize) -> Result<BenchmarkResult, BenchError> {
        let view = self.dataset.prefix(size);
        let kernel = &self.parameters.kernel;
        let solver_error = |source: SolverError| BenchError::Solver {
            solver: self.solver.name().to_string(),
            size,
            source,
        };
        let model_error = |model: &M, source: SolverError| BenchError::Solver {
            solver: model.name().to_string(),
            size,
            source,
        };

        // ====== Factorization ======

        let mut compute_time = Duration::ZERO;
        let mut factorization = None;
        for _ in 0..self.niter {
            let (factor, elapsed) = self
                .timer
                .measure(|| self.solver.compute(kernel, view.times, view.uncertainties));
            compute_time += elapsed;
            factorization = Some(factor.map_err(solver_error)?);
        }

        // ====== Solve, reusing the last factorization ======

        let mut solve_time = Duration::ZERO;
        if let Some(factor) = factorization.as_ref() {
            for _ in 0..self.niter {
                let (solution, elapsed) =
                    self.timer.measure(|| self.solver.solve(factor, view.values));
                solve_time += elapsed;
                solution.map_err(solver_error)?;
            }
        }

        // ====== CARMA: construct + setup + likelihood ======

        let mut carma_time = Duration::ZERO;
        let mut non_finite = 0usize;
        for _ in 0..self.niter {
            let ((model, log_likelihood), elapsed) = self.timer.measure(|| {
                let mut model = M::construct(CARMA_MEAN, &self.parameters.carma);
                let log_likelihood = model.setup().and_then(|()| {
                    model.log_likelihood(view.times, view.values, view.uncertainties)
                });
                (model, log_likelihood)
            });
            carma_time += elapsed;

            let log_likelihood = log_likelihood.map_err(|source| model_error(&model, source))?;
            if !log_likelihood.is_finite() {
                non_finite += 1;
            }
        }

        if non_finite > 0 {
            log::warn!(
                "N = {}: {} of {} likelihood evaluations were not finite",
                size,
                non_finite,
                self.niter
            );
        }

        log::debug!(
            "N = {}: compute {:?}, solve {:?}, carma {:?} (totals)",
            size,
            compute_time,
            solve_time,
            carma_time
        );

        Ok(BenchmarkResult {
            size,
            niter: self.niter,
            compute_time,
            solve_time,
            carma_time,
        })
    }
}

// =================================================================================================
// Tests
// =================================================================================================
