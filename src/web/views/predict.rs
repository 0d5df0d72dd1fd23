use poem::http::StatusCode;
use poem::web::{Data, Json};
use poem::{handler, IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::dataset::FEATURE_COUNT;
use crate::prelude::*;
use crate::web::state::State;

const MISSING_FEATURES: &str = "no features provided";
const MALFORMED_FEATURES: &str = "Features should be a list of ten numbers";

/// Prediction request body, prior to validation.
#[derive(Deserialize)]
pub struct PredictRequest {
    #[serde(default)]
    features: Option<serde_json::Value>,
}

#[derive(Serialize)]
struct PredictResponse {
    prediction: f64,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: &'static str,
}

#[handler]
#[instrument(skip_all, level = "info")]
pub async fn post(Json(request): Json<PredictRequest>, Data(state): Data<&State>) -> Response {
    let features = match validate(request) {
        Ok(features) => features,
        Err(message) => {
            info!(error = message, "rejected");
            return (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: message }))
                .into_response();
        }
    };
    let prediction = state.model.predict(&features);
    debug!(prediction);
    Json(PredictResponse { prediction }).into_response()
}

/// Checks the request shape and produces the feature vector.
///
/// The model is only touched once this succeeds.
fn validate(request: PredictRequest) -> StdResult<[f64; FEATURE_COUNT], &'static str> {
    let features = request.features.ok_or(MISSING_FEATURES)?;
    let features = features.as_array().ok_or(MALFORMED_FEATURES)?;
    if features.len() != FEATURE_COUNT {
        return Err(MALFORMED_FEATURES);
    }
    let mut validated = [0.0; FEATURE_COUNT];
    for (value, slot) in features.iter().zip(&mut validated) {
        *slot = value.as_f64().ok_or(MALFORMED_FEATURES)?;
    }
    Ok(validated)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::web::test::{create_test_client, test_model};

    #[test]
    fn validate_ok() {
        let request = PredictRequest {
            features: Some(json!([0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0])),
        };
        let features = validate(request).unwrap();
        assert_eq!(features.len(), FEATURE_COUNT);
        assert_eq!(features[9], 1.0);
    }

    #[test]
    fn validate_accepts_integers_ok() {
        let request = PredictRequest {
            features: Some(json!([1, 2, 3, 4, 5, 6, 7, 8, 9, 10])),
        };
        assert!(validate(request).is_ok());
    }

    #[test]
    fn validate_missing_ok() {
        let request = PredictRequest { features: None };
        assert_eq!(validate(request).unwrap_err(), MISSING_FEATURES);
    }

    #[test]
    fn validate_malformed_ok() {
        for features in [
            json!(42),
            json!("0.1"),
            json!({"age": 0.1}),
            json!(vec![0.1; 9]),
            json!(vec![0.1; 11]),
            json!([0.1, 0.2, 0.3, 0.4, "0.5", 0.6, 0.7, 0.8, 0.9, 1.0]),
        ] {
            let request = PredictRequest { features: Some(features) };
            assert_eq!(validate(request).unwrap_err(), MALFORMED_FEATURES);
        }
    }

    #[tokio::test]
    async fn predict_ok() -> Result {
        let features = vec![0.01, -0.02, 0.03, -0.04, 0.05, -0.06, 0.07, -0.08, 0.09, -0.1];
        let expected = test_model().predict(&features);

        let client = create_test_client()?;
        let response =
            client.post("/predict").body_json(&json!({ "features": features })).send().await;
        response.assert_status_is_ok();
        response.assert_json(&json!({ "prediction": expected })).await;
        Ok(())
    }

    #[tokio::test]
    async fn predict_missing_features_ok() -> Result {
        let client = create_test_client()?;
        let response = client.post("/predict").body_json(&json!({})).send().await;
        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!({ "error": MISSING_FEATURES })).await;
        Ok(())
    }

    #[tokio::test]
    async fn predict_wrong_length_ok() -> Result {
        let client = create_test_client()?;
        let response = client
            .post("/predict")
            .body_json(&json!({ "features": vec![0.1; 9] }))
            .send()
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!({ "error": MALFORMED_FEATURES })).await;
        Ok(())
    }

    #[tokio::test]
    async fn predict_not_a_list_ok() -> Result {
        let client = create_test_client()?;
        let response = client
            .post("/predict")
            .body_json(&json!({ "features": 0.1 }))
            .send()
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!({ "error": MALFORMED_FEATURES })).await;
        Ok(())
    }
}
