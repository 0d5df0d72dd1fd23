use serde::{Deserialize, Serialize};

use crate::math;

/// Fitted ordinary least squares regression model.
///
/// Created by the trainer, persisted by the store and held as read-only
/// state by the web application.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Model {
    pub intercept: f64,
    pub coefficients: Vec<f64>,
}

impl Model {
    #[must_use]
    pub fn predict(&self, features: &[f64]) -> f64 {
        self.intercept + math::dot(&self.coefficients, features)
    }
}
