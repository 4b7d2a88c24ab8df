use rand::distributions::Distribution;
use rand::{thread_rng, Rng};
use statrs::distribution::Normal;

use crate::config::PerceptronConfig;
use crate::error::ModelError;
use crate::math::{vector, Array1, Array2};
use crate::models::BinaryClassifier;

/// Binary linear classifier trained by the perceptron learning rule.
///
/// The weight vector has length F+1: index 0 is the bias term, indices
/// 1..=F the feature weights. It is absent until the first `fit` and is
/// reinitialized from scratch by every subsequent `fit` (repeated calls are
/// independent trials, not continued training).
pub struct Perceptron {
    weights: Option<Array1<f32>>,
    config: PerceptronConfig,
}

impl Perceptron {
    pub fn new(config: PerceptronConfig) -> Self {
        Perceptron {
            weights: None,
            config,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(PerceptronConfig::default())
    }

    pub fn config(&self) -> &PerceptronConfig {
        &self.config
    }

    /// The trained weight vector, or `None` before the first `fit`.
    pub fn weights(&self) -> Option<&Array1<f32>> {
        self.weights.as_ref()
    }

    /// Raw decision-function values `dot(x_row, w[1..]) + w[0]` per row.
    fn raw_activations(weights: &Array1<f32>, x: &Array2<f32>) -> Vec<f32> {
        let (bias, feature_weights) = (weights[0], &weights.as_slice()[1..]);
        (0..x.nrows())
            .map(|row| bias + vector::dot(feature_weights, x.row_slice(row)))
            .collect()
    }

    /// Draw a fresh weight vector from a narrow zero-mean normal.
    fn init_weights<R: Rng + ?Sized>(
        len: usize,
        std_dev: f32,
        rng: &mut R,
    ) -> Result<Array1<f32>, ModelError> {
        let normal = Normal::new(0.0, std_dev as f64).map_err(|e| {
            ModelError::invalid_parameter(format!("weight init distribution: {}", e))
        })?;
        Ok((0..len).map(|_| normal.sample(rng) as f32).collect())
    }

    /// Predict a {0, 1} label for every row of `x`.
    ///
    /// Pure function of the current weights and the input; label 1 is
    /// assigned where the activation is >= 0, label 0 otherwise.
    ///
    /// # Errors
    ///
    /// `NotTrained` before any `fit`; `DimensionMismatch` when `x` has a
    /// different feature count than the trained weights.
    pub fn predict(&self, x: &Array2<f32>) -> Result<Array1<i32>, ModelError> {
        let weights = self.weights.as_ref().ok_or(ModelError::NotTrained)?;
        let n_features = weights.len() - 1;
        if x.ncols() != n_features {
            return Err(ModelError::DimensionMismatch {
                what: "prediction feature columns",
                expected: n_features,
                found: x.ncols(),
            });
        }

        Ok(Self::raw_activations(weights, x)
            .into_iter()
            .map(|a| if a >= 0.0 { 1 } else { 0 })
            .collect())
    }

    /// Train on `x`/`y` using the provided RNG for weight initialization.
    ///
    /// Runs exactly `config.epochs` full-batch passes. Each pass first
    /// computes activations, thresholded predictions and the diagnostic
    /// loss against the start-of-pass weights, then applies the sequential
    /// per-row updates `w += lr * [1, x_j] * (y_j - pred_j)` in index
    /// order. The predictions driving the updates are the ones captured
    /// before any update of that pass; rows predicted correctly contribute
    /// a zero update. The loss is observational only and never gates an
    /// update.
    ///
    /// # Arguments
    ///
    /// * `x` - N x F training feature matrix
    /// * `y` - N labels in {0, 1}
    /// * `rng` - random source for weight initialization
    ///
    /// # Returns
    ///
    /// The loss `-sum_j activation_j * (y_j - pred_j)` computed during the
    /// final pass.
    pub fn fit_with<R: Rng + ?Sized>(
        &mut self,
        x: &Array2<f32>,
        y: &Array1<i32>,
        rng: &mut R,
    ) -> Result<f32, ModelError> {
        self.config.validate()?;
        if x.nrows() != y.len() {
            return Err(ModelError::DimensionMismatch {
                what: "training rows vs labels",
                expected: x.nrows(),
                found: y.len(),
            });
        }
        if x.ncols() == 0 {
            return Err(ModelError::DimensionMismatch {
                what: "training feature columns",
                expected: 1,
                found: 0,
            });
        }

        // Reset, not resume: weights from a previous fit are discarded.
        let mut weights = Self::init_weights(x.ncols() + 1, self.config.init_std, rng)?;
        let lr = self.config.learning_rate;
        let mut final_loss = 0.0f32;

        for epoch in 0..self.config.epochs {
            // Pass 1: batch predictions and loss against start-of-pass
            // weights. The unthresholded activations keep the sign
            // information the loss needs.
            let activations = Self::raw_activations(&weights, x);
            let predictions: Vec<i32> = activations
                .iter()
                .map(|&a| if a >= 0.0 { 1 } else { 0 })
                .collect();
            let loss = -activations
                .iter()
                .zip(predictions.iter())
                .enumerate()
                .map(|(j, (&a, &p))| a * (y[j] - p) as f32)
                .sum::<f32>();

            // Pass 2: sequential updates, each applied immediately, all
            // driven by the pass-1 predictions.
            for j in 0..x.nrows() {
                let step = lr * (y[j] - predictions[j]) as f32;
                if step == 0.0 {
                    continue;
                }
                weights[0] += step;
                for (w, &v) in weights.as_mut_slice()[1..].iter_mut().zip(x.row_slice(j)) {
                    *w += step * v;
                }
            }

            log::trace!("epoch {}: loss {:.6}", epoch, loss);
            final_loss = loss;
        }

        self.weights = Some(weights);
        Ok(final_loss)
    }

    /// Convenience wrapper over [`Perceptron::fit_with`] using `thread_rng`.
    pub fn fit(&mut self, x: &Array2<f32>, y: &Array1<i32>) -> Result<f32, ModelError> {
        self.fit_with(x, y, &mut thread_rng())
    }
}

impl BinaryClassifier for Perceptron {
    fn fit(&mut self, x: &Array2<f32>, y: &Array1<i32>) -> Result<f32, ModelError> {
        Perceptron::fit(self, x, y)
    }

    fn predict(&self, x: &Array2<f32>) -> Result<Array1<i32>, ModelError> {
        Perceptron::predict(self, x)
    }

    fn name(&self) -> &str {
        "perceptron"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    // label = 1 iff x1 + x2 > 0; points inside the (-0.5, 0.5) band around
    // the boundary are redrawn so the classes stay cleanly separated
    fn separable_dataset(n: usize, rng: &mut StdRng) -> (Array2<f32>, Array1<i32>) {
        let mut data = Vec::with_capacity(n * 2);
        let mut labels = Vec::with_capacity(n);
        while labels.len() < n {
            let x1: f32 = rng.gen_range(-2.0..2.0);
            let x2: f32 = rng.gen_range(-2.0..2.0);
            if (x1 + x2).abs() < 0.5 {
                continue;
            }
            data.push(x1);
            data.push(x2);
            labels.push(if x1 + x2 > 0.0 { 1 } else { 0 });
        }
        (
            Array2::from_shape_vec((n, 2), data).unwrap(),
            Array1::from_vec(labels),
        )
    }

    #[test]
    fn test_predict_before_fit_errors() {
        let model = Perceptron::with_defaults();
        let x = Array2::from_shape_vec((1, 2), vec![1.0, 2.0]).unwrap();
        assert_eq!(model.predict(&x), Err(ModelError::NotTrained));
    }

    #[test]
    fn test_fit_learns_separable_data() {
        let mut rng = StdRng::seed_from_u64(42);
        let (x, y) = separable_dataset(200, &mut rng);
        let mut model = Perceptron::new(PerceptronConfig {
            learning_rate: 0.01,
            epochs: 500,
            init_std: 0.01,
        });
        model.fit_with(&x, &y, &mut rng).unwrap();

        let predictions = model.predict(&x).unwrap();
        let matches = predictions
            .iter()
            .zip(y.iter())
            .filter(|(p, t)| p == t)
            .count();
        assert_eq!(matches, y.len(), "training accuracy should reach 100%");
    }

    #[test]
    fn test_refit_resets_weights() {
        let mut data_rng = StdRng::seed_from_u64(1);
        let (x, y) = separable_dataset(50, &mut data_rng);
        let mut model = Perceptron::with_defaults();
        let mut rng = StdRng::seed_from_u64(7);
        model.fit_with(&x, &y, &mut rng).unwrap();
        let first = model.weights().unwrap().clone();

        // Same data, same seed: an independent trial lands on the same
        // weights, which it could not do if training resumed.
        let mut rng = StdRng::seed_from_u64(7);
        model.fit_with(&x, &y, &mut rng).unwrap();
        assert_eq!(&first, model.weights().unwrap());
    }
}
