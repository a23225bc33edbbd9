//! Narrator TTS Server - HTTP gateway in front of a generative TTS provider

use narrator_core::{config::KNOWN_TTS_MODELS, AppConfig};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use narrator_server::api;
use narrator_server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "narrator_server=debug,narrator_core=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Narrator TTS server");

    // Load configuration
    let config = AppConfig::from_env()?;
    info!("TTS model configured: {}", config.tts.model);
    if !KNOWN_TTS_MODELS.contains(&config.tts.model.as_str()) {
        warn!(
            "'{}' is not a known TTS model; synthesis requests may be rejected upstream",
            config.tts.model
        );
    }

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::new(config);

    // Build router
    let app = api::create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
