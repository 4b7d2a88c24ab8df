//! Integration tests for the preprocessing module (Scaler).

use perceptron::error::ModelError;
use perceptron::math::Array2;
use perceptron::preprocessing::Scaler;

// ---------------------------------------------------------------------------
// Scaler fit / transform
// ---------------------------------------------------------------------------

#[test]
fn fit_computes_mean_and_std() {
    let x = Array2::from_shape_vec(
        (4, 2),
        vec![
            1.0, 10.0, //
            2.0, 20.0, //
            3.0, 30.0, //
            4.0, 40.0,
        ],
    )
    .unwrap();

    let sc = Scaler::fit(&x).unwrap();
    assert!((sc.mean()[0] - 2.5).abs() < 1e-5, "mean[0] = {}", sc.mean()[0]);
    assert!((sc.mean()[1] - 25.0).abs() < 1e-5, "mean[1] = {}", sc.mean()[1]);
    assert!(sc.std()[0] > 0.0);
    assert!(sc.std()[1] > 0.0);
}

#[test]
fn transform_centers_and_scales() {
    let x = Array2::from_shape_vec((4, 1), vec![1.0, 2.0, 3.0, 4.0]).unwrap();

    let t = Scaler::fit_transform(&x).unwrap();
    assert_eq!(t.shape(), (4, 1));

    let mean: f32 = (0..4).map(|r| t[(r, 0)]).sum::<f32>() / 4.0;
    assert!(mean.abs() < 1e-5, "column mean after transform = {}", mean);

    let var: f32 = (0..4).map(|r| (t[(r, 0)] - mean).powi(2)).sum::<f32>() / 4.0;
    assert!((var - 1.0).abs() < 1e-4, "column variance after transform = {}", var);
}

#[test]
fn constant_column_does_not_divide_by_zero() {
    let x = Array2::from_shape_vec((3, 1), vec![5.0, 5.0, 5.0]).unwrap();
    let t = Scaler::fit_transform(&x).unwrap();
    for r in 0..3 {
        assert!(t[(r, 0)].abs() < 1e-2, "constant column should map to ~0");
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[test]
fn fit_rejects_empty_matrix() {
    let x: Array2<f32> = Array2::empty(2);
    assert!(matches!(
        Scaler::fit(&x),
        Err(ModelError::InvalidParameter(_))
    ));
}

#[test]
fn transform_rejects_column_mismatch() {
    let x = Array2::from_shape_vec((2, 2), vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    let sc = Scaler::fit(&x).unwrap();

    let wrong = Array2::from_shape_vec((2, 3), vec![0.0; 6]).unwrap();
    let err = sc.transform(&wrong).unwrap_err();
    assert!(matches!(err, ModelError::DimensionMismatch { .. }));
}
