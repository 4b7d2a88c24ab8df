pub mod perceptron;

pub use self::perceptron::Perceptron;

use crate::error::ModelError;
use crate::math::{Array1, Array2};

/// A small trait abstraction for binary classifiers. The crate currently
/// ships a single implementation, but the contract lives here so callers
/// can hold models behind `Box<dyn BinaryClassifier>`.
pub trait BinaryClassifier {
    /// Fit the model on a feature matrix and {0, 1} labels, returning the
    /// diagnostic loss from the final training pass.
    fn fit(&mut self, x: &Array2<f32>, y: &Array1<i32>) -> Result<f32, ModelError>;

    /// Predict a {0, 1} label for every row of `x`.
    fn predict(&self, x: &Array2<f32>) -> Result<Array1<i32>, ModelError>;

    /// Optional human readable name for the model
    fn name(&self) -> &str {
        "classifier"
    }
}
