//! Fits the ordinary least squares model on the bundled corpus.
//!
//! The corpus is partitioned into train and test rows with a seeded
//! shuffle, the model is fitted on the train partition only and the
//! held-out partition is scored for the log.

use nalgebra::{DMatrix, DVector};
use rand::prelude::*;

use crate::dataset::{Dataset, FEATURE_COUNT};
use crate::model::Model;
use crate::opts::TrainOpts;
use crate::prelude::*;
use crate::store;

pub fn run(opts: TrainOpts) -> Result {
    let start_instant = Instant::now();
    let dataset = Dataset::load().context("failed to load the bundled dataset")?;
    let (train_indexes, test_indexes) = split_indexes(dataset.len(), opts.test_ratio, opts.seed);
    info!(n_train = train_indexes.len(), n_test = test_indexes.len(), seed = opts.seed);

    let model = fit(&dataset, &train_indexes)?;
    info!(
        intercept = model.intercept,
        test_mse = mean_squared_error(&model, &dataset, &test_indexes),
    );

    store::save(&model, &opts.model_path).context("failed to save the model artifact")?;
    info!(path = ?opts.model_path, elapsed = ?start_instant.elapsed(), "saved");
    Ok(())
}

/// Partitions the row indexes into train and test sets.
///
/// The shuffle is seeded: repeated runs produce identical partitions.
pub fn split_indexes(n_rows: usize, test_ratio: f64, seed: u64) -> (Vec<usize>, Vec<usize>) {
    let mut test_indexes: Vec<usize> = (0..n_rows).collect();
    test_indexes.shuffle(&mut StdRng::seed_from_u64(seed));
    let n_test = (n_rows as f64 * test_ratio).ceil() as usize;
    let train_indexes = test_indexes.split_off(n_test);
    (train_indexes, test_indexes)
}

/// Solves the least squares problem on the selected corpus rows.
pub fn fit(dataset: &Dataset, indexes: &[usize]) -> Result<Model> {
    if indexes.len() <= FEATURE_COUNT {
        return Err(anyhow!("{} train rows are not enough to fit the model", indexes.len()));
    }

    // Design matrix with a leading column of ones for the intercept.
    let design = DMatrix::from_fn(indexes.len(), FEATURE_COUNT + 1, |row, column| match column {
        0 => 1.0,
        _ => dataset.features[indexes[row]][column - 1],
    });
    let targets =
        DVector::from_iterator(indexes.len(), indexes.iter().map(|index| dataset.targets[*index]));

    let solution = design
        .svd(true, true)
        .solve(&targets, f64::EPSILON)
        .map_err(|message| anyhow!("failed to solve the least squares problem: {message}"))?;
    Ok(Model {
        intercept: solution[0],
        coefficients: solution.iter().skip(1).copied().collect(),
    })
}

fn mean_squared_error(model: &Model, dataset: &Dataset, indexes: &[usize]) -> f64 {
    let residuals = indexes.iter().map(|index| {
        let residual = model.predict(&dataset.features[*index]) - dataset.targets[*index];
        residual * residual
    });
    residuals.sum::<f64>() / indexes.len().max(1) as f64
}
