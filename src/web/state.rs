use crate::analysis::AnalysisPipeline;

/// Shared application state available to all route handlers via Axum's
/// `State` extractor. Nothing in it is mutated by a request.
pub struct AppState {
    pub pipeline: AnalysisPipeline,
}

impl AppState {
    pub fn new(pipeline: AnalysisPipeline) -> Self {
        Self { pipeline }
    }
}
