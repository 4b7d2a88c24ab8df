use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use perceptron::config::PerceptronConfig;
use perceptron::data_handling::train_test_split_with;
use perceptron::math::Array2;
use perceptron::models::{BinaryClassifier, Perceptron};
use perceptron::preprocessing::Scaler;
use perceptron::stats::accuracy;

/// Build a linearly separable table: two features, label 1 iff x1 + x2 > 0.
fn separable_table<R: Rng>(n_rows: usize, rng: &mut R) -> Result<Array2<f32>> {
    let mut data = Vec::with_capacity(n_rows * 3);
    for _ in 0..n_rows {
        let x1: f32 = rng.gen_range(-5.0..5.0);
        let x2: f32 = rng.gen_range(-5.0..5.0);
        let label = if x1 + x2 > 0.0 { 1.0 } else { 0.0 };
        data.extend_from_slice(&[x1, x2, label]);
    }
    Array2::from_shape_vec((n_rows, 3), data).context("building dataset table")
}

fn main() -> Result<()> {
    env_logger::init();

    let mut rng = StdRng::seed_from_u64(1234);
    let table = separable_table(1000, &mut rng)?;

    let sets = train_test_split_with(&table, 0.7, true, &mut rng)
        .context("splitting the dataset")?;
    log::info!(
        "{} training rows, {} test rows",
        sets.train_y.len(),
        sets.test_y.len()
    );

    let scaler = Scaler::fit(&sets.train_x).context("fitting the scaler")?;
    let train_x = scaler.transform(&sets.train_x)?;
    let test_x = scaler.transform(&sets.test_x)?;

    let mut model = Perceptron::new(PerceptronConfig {
        learning_rate: 0.01,
        epochs: 500,
        init_std: 0.01,
    });
    let final_loss = model
        .fit_with(&train_x, &sets.train_y, &mut rng)
        .context("training the perceptron")?;
    log::info!("{} trained, final loss {:.6}", model.name(), final_loss);

    let train_acc = accuracy(&model.predict(&train_x)?, &sets.train_y)?;
    let test_acc = accuracy(&model.predict(&test_x)?, &sets.test_y)?;
    log::info!("train accuracy {:.2}%, test accuracy {:.2}%", train_acc, test_acc);

    Ok(())
}
