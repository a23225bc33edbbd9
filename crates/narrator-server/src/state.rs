//! Application state management

use std::sync::Arc;

use narrator_core::{AppConfig, GeminiProvider, SpeechProvider};
use tracing::warn;

/// Shared application state
///
/// Built once at startup and cloned into each handler. The provider is
/// absent when no API credential was configured; synthesis requests then
/// fail with a configuration error while the liveness routes keep working.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub provider: Option<Arc<dyn SpeechProvider>>,
}

impl AppState {
    /// Build state from configuration, wiring up the Gemini adapter when a
    /// credential is available.
    pub fn new(config: AppConfig) -> Self {
        let provider: Option<Arc<dyn SpeechProvider>> = match config.tts.api_key.clone() {
            Some(api_key) => Some(Arc::new(GeminiProvider::new(
                api_key,
                config.tts.base_url.clone(),
            ))),
            None => {
                warn!("GEMINI_API_KEY not set; synthesis requests will fail");
                None
            }
        };

        Self {
            config: Arc::new(config),
            provider,
        }
    }

    /// Build state with an explicit provider, used by tests
    pub fn with_provider(config: AppConfig, provider: Arc<dyn SpeechProvider>) -> Self {
        Self {
            config: Arc::new(config),
            provider: Some(provider),
        }
    }
}
