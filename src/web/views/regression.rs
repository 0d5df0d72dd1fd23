use poem::handler;
use poem::web::{Data, Json};
use serde::Serialize;

use crate::prelude::*;
use crate::web::state::State;

/// Regression line parameters of the loaded model.
#[derive(Serialize)]
pub struct RegressionLine {
    intercept: f64,
    coefficients: Vec<f64>,
}

#[handler]
#[instrument(skip_all, level = "info")]
pub async fn get(Data(state): Data<&State>) -> Json<RegressionLine> {
    Json(RegressionLine {
        intercept: state.model.intercept,
        coefficients: state.model.coefficients.clone(),
    })
}
