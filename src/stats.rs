use crate::error::ModelError;
use crate::math::Array1;

/// Percentage of positions where `predicted` matches `actual`.
///
/// Computed as `100 * matches / total`. The caller decides which subset
/// (train or test) the two label vectors describe; this function only
/// counts agreements.
///
/// # Arguments
///
/// * `predicted` - labels produced by a classifier
/// * `actual` - ground-truth labels of the same length
///
/// # Returns
///
/// The accuracy in [0, 100], or an error when the vectors differ in
/// length or are empty.
pub fn accuracy(predicted: &Array1<i32>, actual: &Array1<i32>) -> Result<f32, ModelError> {
    if predicted.len() != actual.len() {
        return Err(ModelError::DimensionMismatch {
            what: "predicted vs actual labels",
            expected: actual.len(),
            found: predicted.len(),
        });
    }
    if actual.is_empty() {
        return Err(ModelError::invalid_parameter(
            "accuracy is undefined for empty label vectors",
        ));
    }

    let matches = predicted
        .iter()
        .zip(actual.iter())
        .filter(|(p, a)| p == a)
        .count();

    Ok(100.0 * matches as f32 / actual.len() as f32)
}
