//! Train/test partitioning for labeled datasets.
//!
//! A dataset is a rectangular numeric table whose last column holds the
//! {0, 1} label and whose remaining columns are real-valued features. This
//! module slices such a table into aligned train/test feature matrices and
//! label vectors, optionally after a uniform shuffle of the row order.

use rand::seq::SliceRandom;
use rand::{thread_rng, Rng};

use crate::error::ModelError;
use crate::math::{Array1, Array2};

/// The four aligned outputs of a train/test split.
///
/// Row `i` of `train_x` corresponds to element `i` of `train_y` (same for
/// test). The two halves are disjoint and together cover every row of the
/// input exactly once.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitSets {
    pub train_x: Array2<f32>,
    pub train_y: Array1<i32>,
    pub test_x: Array2<f32>,
    pub test_y: Array1<i32>,
}

impl SplitSets {
    fn empty(n_features: usize) -> Self {
        SplitSets {
            train_x: Array2::empty(n_features),
            train_y: Array1::from_vec(Vec::new()),
            test_x: Array2::empty(n_features),
            test_y: Array1::from_vec(Vec::new()),
        }
    }
}

/// Partition `data` into train/test subsets using the provided RNG.
///
/// The first `floor(fraction * nrows)` rows (after the optional shuffle)
/// become the training subset; the remainder becomes the test subset. The
/// last column of each subset is extracted as the label vector, rounded to
/// `i32`; the other columns form the feature matrix.
///
/// # Arguments
///
/// * `data` - N rows x (F+1) columns, last column the label
/// * `fraction` - target proportion of rows assigned to training, in [0, 1]
/// * `shuffle` - permute row order uniformly before slicing
/// * `rng` - random source for the shuffle (injected so tests can seed it)
///
/// # Errors
///
/// `InvalidParameter` when `fraction` is outside [0, 1] or NaN;
/// `DimensionMismatch` when a non-empty table has no feature columns.
pub fn train_test_split_with<R: Rng + ?Sized>(
    data: &Array2<f32>,
    fraction: f64,
    shuffle: bool,
    rng: &mut R,
) -> Result<SplitSets, ModelError> {
    if !(fraction >= 0.0 && fraction <= 1.0) {
        return Err(ModelError::invalid_parameter(format!(
            "split fraction must lie in [0, 1], got {}",
            fraction
        )));
    }

    let n_samples = data.nrows();
    if n_samples == 0 {
        return Ok(SplitSets::empty(data.ncols().saturating_sub(1)));
    }
    if data.ncols() < 2 {
        return Err(ModelError::DimensionMismatch {
            what: "dataset columns (features + label)",
            expected: 2,
            found: data.ncols(),
        });
    }

    let mut indices: Vec<usize> = (0..n_samples).collect();
    if shuffle {
        indices.shuffle(rng);
    }

    let cut = (fraction * n_samples as f64).floor() as usize;
    let label_col = data.ncols() - 1;

    let subset = |rows: &[usize]| -> (Array2<f32>, Array1<i32>) {
        let table = data.select_rows(rows);
        let x = table.select_columns(..label_col);
        let y = table.column(label_col).mapv(|v| v.round() as i32);
        (x, y)
    };

    let (train_x, train_y) = subset(&indices[..cut]);
    let (test_x, test_y) = subset(&indices[cut..]);

    log::debug!(
        "split {} rows into {} train / {} test (fraction {}, shuffle: {})",
        n_samples,
        train_y.len(),
        test_y.len(),
        fraction,
        shuffle
    );

    Ok(SplitSets {
        train_x,
        train_y,
        test_x,
        test_y,
    })
}

/// Convenience wrapper over [`train_test_split_with`] using `thread_rng`.
pub fn train_test_split(
    data: &Array2<f32>,
    fraction: f64,
    shuffle: bool,
) -> Result<SplitSets, ModelError> {
    train_test_split_with(data, fraction, shuffle, &mut thread_rng())
}
