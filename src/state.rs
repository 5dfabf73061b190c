use std::sync::Arc;

use crate::config::Config;
use crate::middleware::rate_limit::RequestLimiter;
use crate::services::gemini::GeminiClient;

/// Shared application state injected into route handlers via axum
/// extractors. Constructed once in `main`; nothing here is ambient or
/// global.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub gemini: GeminiClient,
    pub limiter: Arc<RequestLimiter>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let gemini = GeminiClient::new(
            config.gemini_api_key.clone(),
            config.request_timeout_seconds,
        );
        let limiter = Arc::new(RequestLimiter::new(config.max_concurrent_requests));

        Self {
            config,
            gemini,
            limiter,
        }
    }
}
