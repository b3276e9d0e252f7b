use crate::config::Config;
use crate::llm_client::GenerationClient;

/// Shared application state injected into all route handlers via Axum
/// extractors. Everything here is read-only after startup — requests share
/// clients and configuration but never mutable state.
#[derive(Clone)]
pub struct AppState {
    /// HTTP client used for document fetches. Carries the configured timeout.
    pub http: reqwest::Client,
    pub llm: GenerationClient,
    pub config: Config,
}
