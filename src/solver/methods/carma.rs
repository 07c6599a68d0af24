//! CARMA process likelihood
//!
//! # Mathematical Background
//!
//! A CARMA(p, q) process is driven by the polynomials
//!
//! ```text
//! α(z) = z^p + ar₀ z^{p-1} + … + ar_{p-1}
//! β(z) = 1 + ma₀ z + … + ma_{q-1} z^q
//! ```
//!
//! Rotating the state onto the roots `r_k` of `α` makes the transition
//! diagonal, so a step of length `Δt` is `x ← diag(exp(r_k Δt)) x`. With
//! amplitude `σ`:
//!
//! ```text
//! b̃_k  = β(r_k)                               observation vector
//! κ_k  = 1 / Π_{m≠k} (r_k - r_m)
//! V_kl = -σ² κ_k conj(κ_l) / (r_k + conj(r_l))   stationary covariance
//! ```
//!
//! The likelihood is evaluated with a Kalman filter in O(N·p²).
//!
//! # Degenerate models
//!
//! Repeated or non-stationary roots make `V` meaningless. The filter still
//! runs and returns a non-finite likelihood instead of failing, so the cost
//! of an evaluation can be measured for any coefficients.

use nalgebra::{Complex, DMatrix, DVector};

use crate::data::CarmaParameters;
use crate::error::SolverError;
use crate::solver::traits::{check_len, LikelihoodModel};

const LN_2PI: f64 = 1.837_877_066_409_345_3;

/// Driving-noise amplitude
const SIGMA: f64 = 1.0;

// =================================================================================================
// Solver
// =================================================================================================

/// Quantities computed once by [`CarmaSolver::setup`]
#[derive(Debug, Clone)]
struct CarmaState {
    roots: DVector<Complex<f64>>,
    observation: DVector<Complex<f64>>,
    stationary: DMatrix<Complex<f64>>,
}

/// Reference CARMA likelihood model
///
/// # Example
///
/// ```rust
/// use gp_scaling_bench::data::CarmaParameters;
/// use gp_scaling_bench::solver::{CarmaSolver, LikelihoodModel};
///
/// let params = CarmaParameters::new(vec![1.5], vec![]);
/// let mut model = CarmaSolver::construct(0.0, &params);
/// model.setup().unwrap();
///
/// let ll = model.log_likelihood(&[0.0, 1.0], &[0.1, -0.2], &[1.0, 1.0]).unwrap();
/// assert!(ll.is_finite());
/// ```
#[derive(Debug, Clone)]
pub struct CarmaSolver {
    mean: f64,
    ar_params: DVector<f64>,
    ma_params: DVector<f64>,
    state: Option<CarmaState>,
}

impl LikelihoodModel for CarmaSolver {
    fn construct(mean: f64, parameters: &CarmaParameters) -> Self {
        Self {
            mean,
            ar_params: parameters.ar_params.clone(),
            ma_params: parameters.ma_params.clone(),
            state: None,
        }
    }

    fn setup(&mut self) -> Result<(), SolverError> {
        let p = self.ar_params.len();
        let roots = ar_roots(&self.ar_params);

        let observation = roots.map(|r| ma_polynomial(&self.ma_params, r));

        let kappa = DVector::from_fn(p, |k, _| {
            let mut product = Complex::new(1.0, 0.0);
            for m in (0..p).filter(|&m| m != k) {
                product *= roots[k] - roots[m];
            }
            Complex::new(1.0, 0.0) / product
        });

        let variance = SIGMA * SIGMA;
        let stationary = DMatrix::from_fn(p, p, |k, l| {
            -variance * kappa[k] * kappa[l].conj() / (roots[k] + roots[l].conj())
        });

        self.state = Some(CarmaState {
            roots,
            observation,
            stationary,
        });
        Ok(())
    }

    fn log_likelihood(
        &self,
        times: &[f64],
        values: &[f64],
        uncertainties: &[f64],
    ) -> Result<f64, SolverError> {
        let state = self.state.as_ref().ok_or(SolverError::NotSetUp("CARMA"))?;

        let n = times.len();
        check_len("log_likelihood (values)", n, values.len())?;
        check_len("log_likelihood (uncertainties)", n, uncertainties.len())?;

        let p = state.roots.len();
        let b = &state.observation;
        let v = &state.stationary;

        let mut x = DVector::<Complex<f64>>::zeros(p);
        let mut cov = v.clone();
        let mut log_likelihood = 0.0;

        for i in 0..n {
            // ====== Predict ======
            if i > 0 {
                let dt = times[i] - times[i - 1];
                let transition = state.roots.map(|r| (r * dt).exp());

                x.component_mul_assign(&transition);
                for l in 0..p {
                    for k in 0..p {
                        cov[(k, l)] = transition[k] * (cov[(k, l)] - v[(k, l)])
                            * transition[l].conj()
                            + v[(k, l)];
                    }
                }
            }

            // ====== Innovation ======
            let predicted: Complex<f64> = (0..p).map(|k| b[k] * x[k]).sum();
            let cov_bh = DVector::from_fn(p, |k, _| {
                (0..p).map(|l| cov[(k, l)] * b[l].conj()).sum::<Complex<f64>>()
            });
            let model_variance: Complex<f64> = (0..p).map(|k| b[k] * cov_bh[k]).sum();

            let variance = uncertainties[i] * uncertainties[i] + model_variance.re;
            let residual = values[i] - self.mean - predicted.re;

            log_likelihood -= 0.5 * (residual * residual / variance + variance.ln() + LN_2PI);

            // ====== Update ======
            let gain = cov_bh.map(|c| c / variance);
            x.axpy(Complex::new(residual, 0.0), &gain, Complex::new(1.0, 0.0));
            for l in 0..p {
                for k in 0..p {
                    cov[(k, l)] -= gain[k] * gain[l].conj() * variance;
                }
            }
        }

        Ok(log_likelihood)
    }

    fn name(&self) -> &str {
        "CARMA"
    }
}

// =================================================================================================
// Polynomial helpers
// =================================================================================================

/// Roots of `z^p + ar₀ z^{p-1} + … + ar_{p-1}`
fn ar_roots(ar_params: &DVector<f64>) -> DVector<Complex<f64>> {
    match ar_params.len() {
        0 => DVector::zeros(0),
        1 => DVector::from_element(1, Complex::new(-ar_params[0], 0.0)),
        p => {
            let companion = DMatrix::from_fn(p, p, |i, j| {
                if i == 0 {
                    -ar_params[j]
                } else if i == j + 1 {
                    1.0
                } else {
                    0.0
                }
            });
            companion.complex_eigenvalues()
        }
    }
}

/// `β(z) = 1 + Σ ma_k z^{k+1}` by Horner's rule
fn ma_polynomial(ma_params: &DVector<f64>, z: Complex<f64>) -> Complex<f64> {
    let mut acc = Complex::new(0.0, 0.0);
    for &coef in ma_params.iter().rev() {
        acc = (acc + coef) * z;
    }
    acc + 1.0
}

// =================================================================================================
// Tests
// =================================================================================================
