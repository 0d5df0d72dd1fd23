//! Bundled diabetes disease progression corpus.

use serde::Deserialize;

use crate::prelude::*;

/// Number of features per corpus row, fixed in this order at both
/// training and prediction time.
pub const FEATURE_COUNT: usize = 10;

pub const FEATURE_NAMES: [&str; FEATURE_COUNT] =
    ["age", "sex", "bmi", "bp", "s1", "s2", "s3", "s4", "s5", "s6"];

const RAW_CORPUS: &str = include_str!("dataset/diabetes.tsv");

/// Single corpus record as bundled, prior to normalization.
#[derive(Deserialize)]
#[serde(rename_all = "UPPERCASE")]
struct RawRecord {
    age: f64,
    sex: f64,
    bmi: f64,
    bp: f64,
    s1: f64,
    s2: f64,
    s3: f64,
    s4: f64,
    s5: f64,
    s6: f64,
    y: f64,
}

impl RawRecord {
    fn features(&self) -> [f64; FEATURE_COUNT] {
        [
            self.age, self.sex, self.bmi, self.bp, self.s1, self.s2, self.s3, self.s4, self.s5,
            self.s6,
        ]
    }
}

/// The corpus, loaded once at startup and immutable afterwards.
pub struct Dataset {
    pub features: Vec<Vec<f64>>,
    pub targets: Vec<f64>,
}

impl Dataset {
    /// Parses the bundled corpus and normalizes the feature columns:
    /// each column is mean-centered and scaled to unit L2 norm.
    #[instrument(skip_all)]
    pub fn load() -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .from_reader(RAW_CORPUS.as_bytes());
        let mut features = Vec::new();
        let mut targets = Vec::new();
        for record in reader.deserialize() {
            let record: RawRecord = record.context("failed to parse the bundled corpus")?;
            features.push(record.features().to_vec());
            targets.push(record.y);
        }
        if features.is_empty() {
            return Err(anyhow!("the bundled corpus is empty"));
        }
        normalize_columns(&mut features);
        info!(n_rows = features.len(), "loaded");
        Ok(Self { features, targets })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.features.len()
    }
}

fn normalize_columns(features: &mut [Vec<f64>]) {
    let n_rows = features.len() as f64;
    for column in 0..FEATURE_COUNT {
        let mean = features.iter().map(|row| row[column]).sum::<f64>() / n_rows;
        for row in features.iter_mut() {
            row[column] -= mean;
        }
        let norm = features
            .iter()
            .map(|row| row[column] * row[column])
            .sum::<f64>()
            .sqrt();
        if norm > 0.0 {
            for row in features.iter_mut() {
                row[column] /= norm;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_ok() -> Result {
        let dataset = Dataset::load()?;
        assert_eq!(dataset.len(), 442);
        assert_eq!(dataset.targets.len(), dataset.features.len());
        assert!(dataset.features.iter().all(|row| row.len() == FEATURE_COUNT));
        Ok(())
    }

    #[test]
    fn columns_are_normalized_ok() -> Result {
        let dataset = Dataset::load()?;
        for column in 0..FEATURE_COUNT {
            let mean =
                dataset.features.iter().map(|row| row[column]).sum::<f64>() / dataset.len() as f64;
            assert!(mean.abs() < 1e-9, "column {column} mean is {mean}");
            let norm = dataset
                .features
                .iter()
                .map(|row| row[column] * row[column])
                .sum::<f64>()
                .sqrt();
            assert!((norm - 1.0).abs() < 1e-9, "column {column} norm is {norm}");
        }
        Ok(())
    }
}
