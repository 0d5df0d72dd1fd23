use poem::handler;
use poem::web::{Data, Json};
use serde::Serialize;

use crate::dataset::Dataset;
use crate::prelude::*;
use crate::web::state::State;

/// The corpus as two parallel sequences.
#[derive(Serialize)]
pub struct DatasetResponse {
    features: Vec<Vec<f64>>,
    target: Vec<f64>,
}

impl From<&Dataset> for DatasetResponse {
    fn from(dataset: &Dataset) -> Self {
        Self {
            features: dataset.features.clone(),
            target: dataset.targets.clone(),
        }
    }
}

#[handler]
#[instrument(skip_all, level = "info")]
pub async fn get(Data(state): Data<&State>) -> Json<DatasetResponse> {
    Json(DatasetResponse::from(state.dataset.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::FEATURE_COUNT;
    use crate::web::test::create_test_client;

    #[test]
    fn parallel_sequences_ok() -> Result {
        let dataset = Dataset::load()?;
        let response = DatasetResponse::from(&dataset);
        assert_eq!(response.features.len(), response.target.len());
        assert!(response.features.iter().all(|row| row.len() == FEATURE_COUNT));
        Ok(())
    }

    #[tokio::test]
    async fn dataset_ok() -> Result {
        let client = create_test_client()?;
        let response = client.get("/dataset").send().await;
        response.assert_status_is_ok();
        Ok(())
    }
}
