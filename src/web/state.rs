use crate::dataset::Dataset;
use crate::model::Model;
use crate::prelude::*;

/// Web application global state.
///
/// Built once at startup, read-only for the lifetime of the process.
#[derive(Clone)]
pub struct State {
    pub model: Arc<Model>,
    pub dataset: Arc<Dataset>,
}

impl State {
    pub fn new(model: Model, dataset: Dataset) -> Self {
        Self {
            model: Arc::new(model),
            dataset: Arc::new(dataset),
        }
    }
}
