use std::sync::Arc;
use bento_core::ResultStore;
use crate::pipeline::Pipeline;

pub struct AppState {
    pub pipeline: Pipeline,
    /// Backs `/api/save-data` and `/api/get-data`
    pub store: Arc<dyn ResultStore>,
}

impl AppState {
    pub fn new(pipeline: Pipeline, store: Arc<dyn ResultStore>) -> Self {
        Self { pipeline, store }
    }
}
