//! Small preprocessing utilities shared by the examples and tests.
//!
//! Provides a per-column standard scaler over the crate math `Array2`.
//! Scaling is not required by the perceptron but keeps feature magnitudes
//! comparable, which shortens training on real tables.

use crate::error::ModelError;
use crate::math::Array2;

/// Per-column mean/std standardizer.
#[derive(Clone, Debug)]
pub struct Scaler {
    mean: Vec<f32>,
    std: Vec<f32>,
}

impl Scaler {
    /// Minimum stddev to avoid division by zero when transforming.
    const MIN_STD: f32 = 1e-6;

    /// Fit column means and standard deviations from `x` (rows are
    /// samples, columns are features).
    pub fn fit(x: &Array2<f32>) -> Result<Self, ModelError> {
        let (nrows, ncols) = x.shape();
        if nrows == 0 || ncols == 0 {
            return Err(ModelError::invalid_parameter(
                "cannot fit a scaler on an empty matrix",
            ));
        }

        let nrows_f = nrows as f32;
        let mut mean = vec![0.0f32; ncols];
        for r in 0..nrows {
            for (c, v) in x.row_slice(r).iter().enumerate() {
                mean[c] += v;
            }
        }
        for v in mean.iter_mut() {
            *v /= nrows_f;
        }

        let mut std = vec![0.0f32; ncols];
        for r in 0..nrows {
            for (c, v) in x.row_slice(r).iter().enumerate() {
                let d = v - mean[c];
                std[c] += d * d;
            }
        }
        for v in std.iter_mut() {
            *v = (*v / nrows_f).sqrt().max(Self::MIN_STD);
        }

        Ok(Scaler { mean, std })
    }

    pub fn mean(&self) -> &[f32] {
        &self.mean
    }

    pub fn std(&self) -> &[f32] {
        &self.std
    }

    /// Standardize every row of `x` with the fitted statistics.
    pub fn transform(&self, x: &Array2<f32>) -> Result<Array2<f32>, ModelError> {
        if x.ncols() != self.mean.len() {
            return Err(ModelError::DimensionMismatch {
                what: "scaler feature columns",
                expected: self.mean.len(),
                found: x.ncols(),
            });
        }
        let mut out = x.clone();
        for r in 0..out.nrows() {
            for c in 0..out.ncols() {
                out[(r, c)] = (out[(r, c)] - self.mean[c]) / self.std[c];
            }
        }
        Ok(out)
    }

    /// Fit and transform in one call.
    pub fn fit_transform(x: &Array2<f32>) -> Result<Array2<f32>, ModelError> {
        let scaler = Self::fit(x)?;
        scaler.transform(x)
    }
}
