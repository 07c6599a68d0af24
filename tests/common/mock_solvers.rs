//! Mock backends for testing the scaling driver
//!
//! The mocks do no numerical work. They record how often each measured
//! operation was called and with how many points, so tests can check the
//! driver's repetition and slicing logic independently of any algorithm.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gp_scaling_bench::data::{CarmaParameters, KernelParameters, RandomSource};
use gp_scaling_bench::error::SolverError;
use gp_scaling_bench::solver::{CovarianceSolver, LikelihoodModel};
use nalgebra::DVector;

// =================================================================================================
// Call counters
// =================================================================================================

/// Calls observed by the mocks, shared between a mock and the test
#[derive(Debug, Default)]
pub struct CallCounts {
    pub compute: Cell<usize>,
    pub solve: Cell<usize>,
    pub construct: Cell<usize>,
    pub setup: Cell<usize>,
    pub likelihood: Cell<usize>,
    /// Point count seen by each `compute` call
    pub compute_sizes: RefCell<Vec<usize>>,
    /// Point count seen by each `log_likelihood` call
    pub likelihood_sizes: RefCell<Vec<usize>>,
}

impl CallCounts {
    pub fn reset(&self) {
        self.compute.set(0);
        self.solve.set(0);
        self.construct.set(0);
        self.setup.set(0);
        self.likelihood.set(0);
        self.compute_sizes.borrow_mut().clear();
        self.likelihood_sizes.borrow_mut().clear();
    }
}

fn bump(cell: &Cell<usize>) {
    cell.set(cell.get() + 1);
}

thread_local! {
    // `LikelihoodModel::construct` has no receiver, so the model mock
    // reports to a per-thread counter instead of an injected one.
    static MODEL_COUNTS: Rc<CallCounts> = Rc::new(CallCounts::default());
}

// =================================================================================================
// Counting covariance solver
// =================================================================================================

/// Covariance solver that only counts calls
pub struct CountingSolver {
    pub counts: Rc<CallCounts>,
}

impl CountingSolver {
    pub fn new() -> Self {
        Self { counts: Rc::new(CallCounts::default()) }
    }
}

/// Factorization handle of [`CountingSolver`]
pub struct CountingFactor {
    pub len: usize,
}

impl CovarianceSolver for CountingSolver {
    type Factorization = CountingFactor;

    fn compute(
        &self,
        _kernel: &KernelParameters,
        times: &[f64],
        uncertainties: &[f64],
    ) -> Result<CountingFactor, SolverError> {
        assert_eq!(times.len(), uncertainties.len());
        bump(&self.counts.compute);
        self.counts.compute_sizes.borrow_mut().push(times.len());
        Ok(CountingFactor { len: times.len() })
    }

    fn solve(
        &self,
        factorization: &CountingFactor,
        values: &[f64],
    ) -> Result<DVector<f64>, SolverError> {
        assert_eq!(factorization.len, values.len(), "solve saw a stale factorization");
        bump(&self.counts.solve);
        Ok(DVector::from_column_slice(values))
    }

    fn name(&self) -> &str {
        "Counting"
    }
}

// =================================================================================================
// Failing covariance solver
// =================================================================================================

/// Covariance solver whose `compute` fails from a given size on
pub struct FailingSolver {
    pub fail_from: usize,
}

impl CovarianceSolver for FailingSolver {
    type Factorization = usize;

    fn compute(
        &self,
        _kernel: &KernelParameters,
        times: &[f64],
        _uncertainties: &[f64],
    ) -> Result<usize, SolverError> {
        if times.len() >= self.fail_from {
            Err(SolverError::NotPositiveDefinite { index: 0, pivot: -1.0 })
        } else {
            Ok(times.len())
        }
    }

    fn solve(&self, _factorization: &usize, values: &[f64]) -> Result<DVector<f64>, SolverError> {
        Ok(DVector::from_column_slice(values))
    }

    fn name(&self) -> &str {
        "Failing"
    }
}

// =================================================================================================
// Mock likelihood model
// =================================================================================================

/// Likelihood model that counts construct / setup / evaluate calls
pub struct MockLikelihood {
    mean: f64,
    ready: bool,
}

impl MockLikelihood {
    /// Counters for the current thread
    pub fn counts() -> Rc<CallCounts> {
        MODEL_COUNTS.with(Rc::clone)
    }
}

impl LikelihoodModel for MockLikelihood {
    fn construct(mean: f64, _parameters: &CarmaParameters) -> Self {
        MODEL_COUNTS.with(|c| bump(&c.construct));
        Self { mean, ready: false }
    }

    fn setup(&mut self) -> Result<(), SolverError> {
        MODEL_COUNTS.with(|c| bump(&c.setup));
        self.ready = true;
        Ok(())
    }

    fn log_likelihood(
        &self,
        times: &[f64],
        values: &[f64],
        _uncertainties: &[f64],
    ) -> Result<f64, SolverError> {
        if !self.ready {
            return Err(SolverError::NotSetUp("Mock"));
        }
        MODEL_COUNTS.with(|c| {
            bump(&c.likelihood);
            c.likelihood_sizes.borrow_mut().push(times.len());
        });
        Ok(-0.5 * values.iter().map(|v| (v - self.mean).powi(2)).sum::<f64>())
    }

    fn name(&self) -> &str {
        "Mock"
    }
}

/// Likelihood model whose `setup` always fails
pub struct FailingLikelihood;

impl LikelihoodModel for FailingLikelihood {
    fn construct(_mean: f64, _parameters: &CarmaParameters) -> Self {
        Self
    }

    fn setup(&mut self) -> Result<(), SolverError> {
        Err(SolverError::NotPositiveDefinite { index: 1, pivot: 0.0 })
    }

    fn log_likelihood(
        &self,
        _times: &[f64],
        _values: &[f64],
        _uncertainties: &[f64],
    ) -> Result<f64, SolverError> {
        Ok(0.0)
    }

    fn name(&self) -> &str {
        "FailingModel"
    }
}

// =================================================================================================
// Stub random source
// =================================================================================================

/// Random source replaying a fixed cycle of draws
pub struct StubSource {
    values: Vec<f64>,
    position: usize,
}

impl StubSource {
    pub fn new(values: Vec<f64>) -> Self {
        assert!(!values.is_empty());
        Self { values, position: 0 }
    }

    /// Number of draws taken so far
    pub fn draws(&self) -> usize {
        self.position
    }
}

impl RandomSource for StubSource {
    fn next_symmetric(&mut self) -> f64 {
        let value = self.values[self.position % self.values.len()];
        self.position += 1;
        value
    }
}
