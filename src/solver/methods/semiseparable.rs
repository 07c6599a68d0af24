//! Semiseparable covariance solver
//!
//! # Mathematical Background
//!
//! For a kernel made of exponential and damped-cosine terms evaluated on
//! sorted times, the covariance matrix has the form
//!
//! ```text
//! K = diag(A) + tril(U Vᵀ ∘ Φ) + triu(V Uᵀ ∘ Φ)
//! ```
//!
//! with rank `J = n_real + 2·n_complex`. Each point `n` carries
//!
//! ```text
//! real term j:     U = a_j                  V = 1
//! complex term j:  U = a_j cos(d_j t_n)     V = cos(d_j t_n)
//!                  U = a_j sin(d_j t_n)     V = sin(d_j t_n)
//! φ_n = exp(-c_j (t_n - t_{n-1}))
//! A_n = σ_n² + Σ a_j
//! ```
//!
//! The factorization `K = L D Lᵀ`, `L = I + tril(U Wᵀ ∘ Φ)` is computed by
//! the recursion
//!
//! ```text
//! S_n = φ_n ∘ (S_{n-1} + D_{n-1} W_{n-1} W_{n-1}ᵀ) ∘ φ_nᵀ
//! D_n = A_n - U_nᵀ S_n U_n
//! W_n = (V_n - S_n U_n) / D_n
//! ```
//!
//! # Characteristics
//!
//! - **Factorization**: O(N·J²)
//! - **Solve**: O(N·J)
//! - **Memory**: O(N·J)

use nalgebra::{DMatrix, DVector};

use crate::data::KernelParameters;
use crate::error::SolverError;
use crate::solver::traits::{check_len, CovarianceSolver};

const LN_2PI: f64 = 1.837_877_066_409_345_3;

// =================================================================================================
// Factorization
// =================================================================================================

/// `L D Lᵀ` factorization of a semiseparable covariance matrix
///
/// Per-point quantities are stored one column per time point.
#[derive(Debug, Clone)]
pub struct SemiseparableFactor {
    u: DMatrix<f64>,
    w: DMatrix<f64>,
    phi: DMatrix<f64>,
    d: DVector<f64>,
}

impl SemiseparableFactor {
    /// Number of points
    pub fn len(&self) -> usize {
        self.d.len()
    }

    /// True for a factorization of zero points
    pub fn is_empty(&self) -> bool {
        self.d.is_empty()
    }

    /// Semiseparable rank `J`
    pub fn rank(&self) -> usize {
        self.u.nrows()
    }

    /// `ln det K = Σ ln D_n`
    pub fn log_determinant(&self) -> f64 {
        self.d.iter().map(|d| d.ln()).sum()
    }
}

// =================================================================================================
// Solver
// =================================================================================================

/// Reference semiseparable solver
#[derive(Debug, Clone, Copy, Default)]
pub struct SemiseparableSolver;

impl SemiseparableSolver {
    /// Create a new solver
    pub fn new() -> Self {
        Self
    }

    /// Gaussian log-likelihood `-½ (yᵀK⁻¹y + ln det K + N ln 2π)`
    pub fn log_likelihood(
        &self,
        factorization: &SemiseparableFactor,
        values: &[f64],
    ) -> Result<f64, SolverError> {
        let alpha = self.solve(factorization, values)?;
        let quad: f64 = values.iter().zip(alpha.iter()).map(|(y, a)| y * a).sum();
        let n = factorization.len() as f64;
        Ok(-0.5 * (quad + factorization.log_determinant() + n * LN_2PI))
    }
}

impl CovarianceSolver for SemiseparableSolver {
    type Factorization = SemiseparableFactor;

    fn compute(
        &self,
        kernel: &KernelParameters,
        times: &[f64],
        uncertainties: &[f64],
    ) -> Result<SemiseparableFactor, SolverError> {
        let n = times.len();
        check_len("compute (uncertainties)", n, uncertainties.len())?;

        let counts = kernel.term_counts();
        let rank = counts.rank();
        let variance = kernel.variance();

        // ====== Step 1: semiseparable generators ======

        let mut u = DMatrix::<f64>::zeros(rank, n);
        let mut v = DMatrix::<f64>::zeros(rank, n);
        let mut phi = DMatrix::<f64>::zeros(rank, n);

        for k in 0..n {
            let t = times[k];
            let dt = if k > 0 { t - times[k - 1] } else { 0.0 };

            let mut row = 0;
            for j in 0..counts.n_real {
                u[(row, k)] = kernel.alpha_real[j];
                v[(row, k)] = 1.0;
                phi[(row, k)] = (-kernel.beta_real[j] * dt).exp();
                row += 1;
            }

            for j in 0..counts.n_complex {
                let amplitude = kernel.alpha_complex[j];
                let decay = (-kernel.beta_complex_real[j] * dt).exp();
                let (sin, cos) = (kernel.beta_complex_imag[j] * t).sin_cos();

                u[(row, k)] = amplitude * cos;
                v[(row, k)] = cos;
                phi[(row, k)] = decay;

                u[(row + 1, k)] = amplitude * sin;
                v[(row + 1, k)] = sin;
                phi[(row + 1, k)] = decay;

                row += 2;
            }
        }

        // ====== Step 2: L D Lᵀ recursion ======

        let mut s = DMatrix::<f64>::zeros(rank, rank);
        let mut w = DMatrix::<f64>::zeros(rank, n);
        let mut d = DVector::<f64>::zeros(n);

        for k in 0..n {
            if k > 0 {
                let w_prev = w.column(k - 1);
                s.ger(d[k - 1], &w_prev, &w_prev, 1.0);

                let p = phi.column(k);
                for col in 0..rank {
                    for r in 0..rank {
                        s[(r, col)] *= p[r] * p[col];
                    }
                }
            }

            let u_k = u.column(k);
            let s_u = &s * &u_k;
            let pivot = uncertainties[k] * uncertainties[k] + variance - u_k.dot(&s_u);

            if !(pivot > 0.0 && pivot.is_finite()) {
                return Err(SolverError::NotPositiveDefinite { index: k, pivot });
            }
            d[k] = pivot;

            let w_k = (&v.column(k) - &s_u) / pivot;
            w.set_column(k, &w_k);
        }

        Ok(SemiseparableFactor { u, w, phi, d })
    }

    fn solve(
        &self,
        factorization: &SemiseparableFactor,
        values: &[f64],
    ) -> Result<DVector<f64>, SolverError> {
        let n = factorization.len();
        check_len("solve", n, values.len())?;

        let mut z = DVector::from_column_slice(values);
        let mut f = DVector::<f64>::zeros(factorization.rank());

        // Forward: L z = y
        for k in 1..n {
            f.axpy(z[k - 1], &factorization.w.column(k - 1), 1.0);
            f.component_mul_assign(&factorization.phi.column(k));
            z[k] -= factorization.u.column(k).dot(&f);
        }

        z.component_div_assign(&factorization.d);

        // Backward: Lᵀ x = D⁻¹ z
        f.fill(0.0);
        for k in (0..n.saturating_sub(1)).rev() {
            f.axpy(z[k + 1], &factorization.u.column(k + 1), 1.0);
            f.component_mul_assign(&factorization.phi.column(k + 1));
            z[k] -= factorization.w.column(k).dot(&f);
        }

        Ok(z)
    }

    fn name(&self) -> &str {
        "Semiseparable"
    }
}

// =================================================================================================
// Tests
// =================================================================================================
