use std::sync::Arc;

use crate::catalog::Catalog;
use crate::search::extractor::FilterExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Loaded once at startup; read-only afterwards.
    pub catalog: Arc<Catalog>,
    /// `None` when no completion-service credential is configured.
    pub extractor: Option<Arc<dyn FilterExtractor>>,
}

impl AppState {
    pub fn ai_enabled(&self) -> bool {
        self.extractor.is_some()
    }
}
