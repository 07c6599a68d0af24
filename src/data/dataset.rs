//! Synthetic time-series dataset
//!
//! One dataset is generated at the largest problem size and every smaller
//! problem reads a prefix of it. Times are sorted once, so every prefix is
//! itself sorted, which the semiseparable solver relies on.

use nalgebra::DVector;

use super::random::RandomSource;

/// Synthetic observations: sorted times, latent-signal values and
/// per-point uncertainties
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    times: DVector<f64>,
    values: DVector<f64>,
    uncertainties: DVector<f64>,
}

/// Borrowed prefix of a [`Dataset`]
#[derive(Debug, Clone, Copy)]
pub struct DatasetView<'a> {
    pub times: &'a [f64],
    pub values: &'a [f64],
    pub uncertainties: &'a [f64],
}

impl Dataset {
    /// Generate `n_max` points
    ///
    /// # Algorithm
    ///
    /// 1. Draw raw times, then raw uncertainties, uniformly on `[-1, 1)`
    /// 2. Sort times ascending
    /// 3. Rescale uncertainties: `σ = 0.1 u + 1.0`, giving `[0.9, 1.1)`
    /// 4. `values = sin(times)`
    ///
    /// No noise is added to `values`; `uncertainties` is a solver input only.
    pub fn generate(n_max: usize, source: &mut dyn RandomSource) -> Self {
        let mut times = source.symmetric_vec(n_max);
        let raw_uncertainties = source.symmetric_vec(n_max);

        times.sort_by(f64::total_cmp);

        let uncertainties: Vec<f64> = raw_uncertainties.iter().map(|u| 0.1 * u + 1.0).collect();
        let values: Vec<f64> = times.iter().map(|t| t.sin()).collect();

        log::debug!("generated dataset with {} points", n_max);

        Self {
            times: DVector::from_vec(times),
            values: DVector::from_vec(values),
            uncertainties: DVector::from_vec(uncertainties),
        }
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// True when the dataset has no points
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// First `n` points of every vector
    ///
    /// # Panics
    ///
    /// Panics when `n > self.len()`.
    pub fn prefix(&self, n: usize) -> DatasetView<'_> {
        assert!(
            n <= self.len(),
            "prefix of {} points requested from a dataset of {}",
            n,
            self.len()
        );

        DatasetView {
            times: &self.times.as_slice()[..n],
            values: &self.values.as_slice()[..n],
            uncertainties: &self.uncertainties.as_slice()[..n],
        }
    }

    /// The whole dataset as a view
    pub fn view(&self) -> DatasetView<'_> {
        self.prefix(self.len())
    }
}

impl DatasetView<'_> {
    /// Number of points in the view
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// True when the view has no points
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}
