//! Solver parameter synthesis
//!
//! Produces the kernel coefficients for the semiseparable solver and the
//! AR/MA coefficient vectors for the CARMA model from a [`RandomSource`].
//!
//! # Term split
//!
//! A kernel with `nterms` terms is split into complex-conjugate pairs and at
//! most one purely real term:
//!
//! ```text
//! n_complex = nterms / 2
//! n_real    = nterms - 2 * n_complex      (0 or 1)
//! ```
//!
//! # Draw order
//!
//! The order of draws is part of the reproducibility contract: CARMA AR
//! coefficients, CARMA MA coefficients, then the five kernel vectors in
//! declaration order.

use nalgebra::DVector;

use super::random::RandomSource;

// =================================================================================================
// Term counts
// =================================================================================================

/// Split of the kernel terms into real and complex-pair components
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermCounts {
    /// Number of purely real exponential terms
    pub n_real: usize,

    /// Number of complex-conjugate-pair terms
    pub n_complex: usize,
}

impl TermCounts {
    /// Split `nterms` into real and complex-pair terms
    ///
    /// # Example
    ///
    /// ```rust
    /// use gp_scaling_bench::data::TermCounts;
    ///
    /// let counts = TermCounts::from_nterms(3);
    /// assert_eq!((counts.n_real, counts.n_complex), (1, 1));
    /// ```
    pub fn from_nterms(nterms: usize) -> Self {
        let n_complex = nterms / 2;
        Self {
            n_real: nterms - 2 * n_complex,
            n_complex,
        }
    }

    /// Total term count, `n_real + 2 * n_complex`
    pub fn nterms(&self) -> usize {
        self.n_real + 2 * self.n_complex
    }

    /// Width of the semiseparable representation (one column per real
    /// term, two per complex pair)
    pub fn rank(&self) -> usize {
        self.nterms()
    }
}

// =================================================================================================
// Kernel parameters
// =================================================================================================

/// Coefficients of the semiseparable covariance kernel
///
/// ```text
/// k(τ) = Σ_real    α_j exp(-β_j τ)
///      + Σ_complex α_j exp(-β_re,j τ) cos(β_im,j τ)
/// ```
///
/// All entries are strictly positive.
#[derive(Debug, Clone, PartialEq)]
pub struct KernelParameters {
    pub alpha_real: DVector<f64>,
    pub beta_real: DVector<f64>,
    pub alpha_complex: DVector<f64>,
    pub beta_complex_real: DVector<f64>,
    pub beta_complex_imag: DVector<f64>,
}

impl KernelParameters {
    /// Build from explicit coefficient vectors
    ///
    /// # Panics
    ///
    /// Panics when the real or the complex vectors do not share a length.
    pub fn new(
        alpha_real: Vec<f64>,
        beta_real: Vec<f64>,
        alpha_complex: Vec<f64>,
        beta_complex_real: Vec<f64>,
        beta_complex_imag: Vec<f64>,
    ) -> Self {
        assert_eq!(alpha_real.len(), beta_real.len(), "real term vectors differ in length");
        assert!(
            alpha_complex.len() == beta_complex_real.len()
                && alpha_complex.len() == beta_complex_imag.len(),
            "complex term vectors differ in length"
        );

        Self {
            alpha_real: DVector::from_vec(alpha_real),
            beta_real: DVector::from_vec(beta_real),
            alpha_complex: DVector::from_vec(alpha_complex),
            beta_complex_real: DVector::from_vec(beta_complex_real),
            beta_complex_imag: DVector::from_vec(beta_complex_imag),
        }
    }

    /// Draw positive coefficients for the given term split
    pub fn random(counts: TermCounts, source: &mut dyn RandomSource) -> Self {
        let mut positive = |len: usize| DVector::from_iterator(
            len,
            (0..len).map(|_| shift_positive(source.next_symmetric())),
        );

        let alpha_real = positive(counts.n_real);
        let beta_real = positive(counts.n_real);
        let alpha_complex = positive(counts.n_complex);
        let beta_complex_real = positive(counts.n_complex);
        let beta_complex_imag = positive(counts.n_complex);

        Self {
            alpha_real,
            beta_real,
            alpha_complex,
            beta_complex_real,
            beta_complex_imag,
        }
    }

    /// Term split described by these coefficients
    pub fn term_counts(&self) -> TermCounts {
        TermCounts {
            n_real: self.alpha_real.len(),
            n_complex: self.alpha_complex.len(),
        }
    }

    /// Kernel value at lag `tau` (`tau >= 0`)
    pub fn evaluate(&self, tau: f64) -> f64 {
        let real: f64 = self
            .alpha_real
            .iter()
            .zip(self.beta_real.iter())
            .map(|(a, c)| a * (-c * tau).exp())
            .sum();

        let complex: f64 = (0..self.alpha_complex.len())
            .map(|j| {
                self.alpha_complex[j]
                    * (-self.beta_complex_real[j] * tau).exp()
                    * (self.beta_complex_imag[j] * tau).cos()
            })
            .sum();

        real + complex
    }

    /// Kernel variance, `k(0)`
    pub fn variance(&self) -> f64 {
        self.alpha_real.sum() + self.alpha_complex.sum()
    }

    /// True when every coefficient is strictly positive
    pub fn is_positive(&self) -> bool {
        [
            &self.alpha_real,
            &self.beta_real,
            &self.alpha_complex,
            &self.beta_complex_real,
            &self.beta_complex_imag,
        ]
        .iter()
        .all(|v| v.iter().all(|&x| x > 0.0))
    }
}

/// Map a draw from `[-1, 1)` onto `[1, 2)`
fn shift_positive(u: f64) -> f64 {
    1.0 + 0.5 * (u + 1.0)
}

// =================================================================================================
// CARMA parameters
// =================================================================================================

/// AR and MA coefficients of a CARMA(p, q) process
///
/// `ar_params` has `nterms` entries and `ma_params` has `nterms - 1`.
/// No sign constraint is applied.
#[derive(Debug, Clone, PartialEq)]
pub struct CarmaParameters {
    pub ar_params: DVector<f64>,
    pub ma_params: DVector<f64>,
}

impl CarmaParameters {
    /// Build from explicit coefficient vectors
    pub fn new(ar_params: Vec<f64>, ma_params: Vec<f64>) -> Self {
        Self {
            ar_params: DVector::from_vec(ar_params),
            ma_params: DVector::from_vec(ma_params),
        }
    }

    /// Draw symmetric coefficients for a model of order `nterms`
    pub fn random(nterms: usize, source: &mut dyn RandomSource) -> Self {
        let ar_params = DVector::from_vec(source.symmetric_vec(nterms));
        let ma_params = DVector::from_vec(source.symmetric_vec(nterms.saturating_sub(1)));
        Self { ar_params, ma_params }
    }

    /// Autoregressive order `p`
    pub fn p(&self) -> usize {
        self.ar_params.len()
    }

    /// Moving-average order `q`
    pub fn q(&self) -> usize {
        self.ma_params.len()
    }
}

// =================================================================================================
// Synthesis
// =================================================================================================

/// Parameters for one benchmark run
#[derive(Debug, Clone, PartialEq)]
pub struct SolverParameters {
    pub counts: TermCounts,
    pub kernel: KernelParameters,
    pub carma: CarmaParameters,
}

/// Draw the CARMA and kernel parameters for `nterms` terms
///
/// Deterministic for a given source state. `nterms = 0` yields empty
/// vectors everywhere.
pub fn synthesize_parameters(nterms: usize, source: &mut dyn RandomSource) -> SolverParameters {
    let counts = TermCounts::from_nterms(nterms);
    let carma = CarmaParameters::random(nterms, source);
    let kernel = KernelParameters::random(counts, source);

    log::debug!(
        "synthesized parameters: nterms={} n_real={} n_complex={}",
        nterms,
        counts.n_real,
        counts.n_complex
    );

    SolverParameters { counts, kernel, carma }
}

// =================================================================================================
// Tests
// =================================================================================================
