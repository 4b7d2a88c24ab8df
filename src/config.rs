use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Hyper-parameters for the perceptron.
///
/// `learning_rate` scales every weight update, `epochs` is the number of
/// full-batch passes over the training set (always run to completion, no
/// early stopping), and `init_std` is the standard deviation of the
/// zero-mean normal distribution weights are drawn from at the start of
/// each `fit`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct PerceptronConfig {
    pub learning_rate: f32,
    pub epochs: usize,
    pub init_std: f32,
}

impl PerceptronConfig {
    pub fn new(learning_rate: f32, epochs: usize) -> Self {
        Self {
            learning_rate,
            epochs,
            ..Self::default()
        }
    }

    /// Check every field against its valid domain.
    ///
    /// Called at the start of `fit` so bad hyper-parameters surface before
    /// any weights are touched.
    pub fn validate(&self) -> Result<(), ModelError> {
        if !(self.learning_rate > 0.0) || !self.learning_rate.is_finite() {
            return Err(ModelError::invalid_parameter(format!(
                "learning_rate must be a positive finite number, got {}",
                self.learning_rate
            )));
        }
        if self.epochs == 0 {
            return Err(ModelError::invalid_parameter(
                "epochs must be a positive integer",
            ));
        }
        if !(self.init_std > 0.0) || !self.init_std.is_finite() {
            return Err(ModelError::invalid_parameter(format!(
                "init_std must be a positive finite number, got {}",
                self.init_std
            )));
        }
        Ok(())
    }
}

impl Default for PerceptronConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.01,
            epochs: 500,
            init_std: 0.01,
        }
    }
}
