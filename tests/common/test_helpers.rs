//! Helper functions for integration tests

#![allow(dead_code)]

use gp_scaling_bench::bench::{run_benchmark, BenchmarkResult};
use gp_scaling_bench::config::BenchmarkConfig;
use gp_scaling_bench::data::KernelParameters;
use gp_scaling_bench::output::TextReporter;
use gp_scaling_bench::solver::{CarmaSolver, SemiseparableSolver};
use nalgebra::{DMatrix, DVector};

/// Run the reference backends and capture the text report
pub fn run_to_string(config: &BenchmarkConfig) -> (String, Vec<BenchmarkResult>) {
    let mut reporter = TextReporter::new(Vec::new());
    let results =
        run_benchmark::<_, CarmaSolver, _>(config, SemiseparableSolver::new(), &mut reporter)
            .expect("benchmark run failed");
    let text = String::from_utf8(reporter.into_inner()).expect("report is not UTF-8");
    (text, results)
}

/// Dense covariance `diag(σ²) + k(|t_n - t_m|)`
pub fn dense_covariance(kernel: &KernelParameters, times: &[f64], sigma: &[f64]) -> DMatrix<f64> {
    let n = times.len();
    DMatrix::from_fn(n, n, |i, j| {
        let k = kernel.evaluate((times[i] - times[j]).abs());
        if i == j { k + sigma[i] * sigma[i] } else { k }
    })
}

/// Gaussian log-likelihood through a dense Cholesky factorization
pub fn dense_log_likelihood(covariance: DMatrix<f64>, values: &[f64]) -> f64 {
    let n = values.len();
    let y = DVector::from_column_slice(values);
    let cholesky = covariance.cholesky().expect("covariance is not positive definite");
    let alpha = cholesky.solve(&y);
    let log_det: f64 = 2.0 * cholesky.l().diagonal().iter().map(|d| d.ln()).sum::<f64>();
    -0.5 * (y.dot(&alpha) + log_det + n as f64 * (2.0 * std::f64::consts::PI).ln())
}

/// Relative error `|a - b| / max(|b|, 1e-15)`
pub fn relative_error(a: f64, b: f64) -> f64 {
    (a - b).abs() / b.abs().max(1e-15)
}
