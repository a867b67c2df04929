use crate::extraction::service::ExtractionService;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Extraction service over the configured connector (live or mock).
    pub extraction: ExtractionService,
}
