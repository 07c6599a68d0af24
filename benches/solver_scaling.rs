//! Criterion benchmarks for the reference backends
//!
//! The benchmark binary measures wall-clock averages over a handful of
//! repetitions. This harness measures the same operations with
//! criterion's statistics, which is useful when tuning a backend.
//!
//! # What We're Measuring
//!
//! 1. **Semiseparable compute**: `L D Lᵀ` factorization, O(N·J²)
//! 2. **Semiseparable solve**: forward and backward substitution, O(N·J)
//! 3. **CARMA likelihood**: construct + setup + Kalman filter, O(N·p²)
//!
//! # Expected Results
//!
//! All three should scale linearly: doubling `N` roughly doubles the time.
//!
//! # Running Benchmarks
//!
//! ```bash
//! # Run everything
//! cargo bench --bench solver_scaling
//!
//! # Only the semiseparable solver
//! cargo bench --bench solver_scaling semiseparable
//!
//! # Only CARMA
//! cargo bench --bench solver_scaling carma
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, SamplingMode, Throughput};
use std::hint::black_box;
use std::time::Duration;

use gp_scaling_bench::data::{synthesize_parameters, Dataset, SeededRandom, SolverParameters};
use gp_scaling_bench::solver::{CarmaSolver, CovarianceSolver, LikelihoodModel, SemiseparableSolver};

const SIZES: [usize; 4] = [256, 1024, 4096, 16384];
const NTERMS: usize = 3;

/// Parameters and a dataset covering the largest benchmarked size
fn inputs() -> (SolverParameters, Dataset) {
    let mut source = SeededRandom::default();
    let params = synthesize_parameters(NTERMS, &mut source);
    let dataset = Dataset::generate(SIZES[SIZES.len() - 1], &mut source);
    (params, dataset)
}

// =================================================================================================
// Benchmark Functions
// =================================================================================================

/// Factorization and solve of the semiseparable solver
fn benchmark_semiseparable(c: &mut Criterion) {
    let (params, dataset) = inputs();
    let solver = SemiseparableSolver::new();

    let mut group = c.benchmark_group("semiseparable");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(5));

    for &n in &SIZES {
        let view = dataset.prefix(n);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("compute", n), &view, |b, view| {
            b.iter(|| {
                black_box(
                    solver
                        .compute(&params.kernel, view.times, view.uncertainties)
                        .unwrap(),
                )
            })
        });

        let factor = solver
            .compute(&params.kernel, view.times, view.uncertainties)
            .unwrap();
        group.bench_with_input(BenchmarkId::new("solve", n), &view, |b, view| {
            b.iter(|| black_box(solver.solve(&factor, view.values).unwrap()))
        });
    }

    group.finish();
}

/// Construct + setup + likelihood of the CARMA model
fn benchmark_carma(c: &mut Criterion) {
    let (params, dataset) = inputs();

    let mut group = c.benchmark_group("carma");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(5));

    for &n in &SIZES {
        let view = dataset.prefix(n);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("log_likelihood", n), &view, |b, view| {
            b.iter(|| {
                let mut model = CarmaSolver::construct(0.0, &params.carma);
                model.setup().unwrap();
                black_box(
                    model
                        .log_likelihood(view.times, view.values, view.uncertainties)
                        .unwrap(),
                )
            })
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_semiseparable, benchmark_carma);
criterion_main!(benches);
