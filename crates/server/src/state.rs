use std::sync::Arc;

use service::limit::DEFAULT_SCORE_LIMIT;
use service::Storage;

/// Shared handler context. One store per process, injected at startup.
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn Storage>,
    pub default_score_limit: usize,
}

impl AppState {
    pub fn new(storage: Arc<dyn Storage>, default_score_limit: usize) -> Self {
        Self { storage, default_score_limit }
    }

    pub fn with_storage(storage: Arc<dyn Storage>) -> Self {
        Self::new(storage, DEFAULT_SCORE_LIMIT)
    }
}
