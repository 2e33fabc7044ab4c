use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;

use voiceguard::application::services::DetectionService;
use voiceguard::infrastructure::llm::GeminiClassifier;
use voiceguard::infrastructure::observability::{init_tracing, TracingConfig};
use voiceguard::presentation::{create_router, AppState, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env()?;

    init_tracing(TracingConfig::default(), settings.server.port);

    if settings.gemini.api_key.is_empty() {
        tracing::warn!("GEMINI_API_KEY is empty; detection requests will fail until it is set");
    }

    let classifier = Arc::new(GeminiClassifier::new(
        settings.gemini.api_key.clone(),
        &settings.gemini.model,
        Duration::from_secs(settings.gemini.timeout_secs),
    )?);

    let detection_service = Arc::new(DetectionService::new(
        classifier,
        settings.limits.max_audio_bytes,
    ));

    let state = AppState {
        detection_service,
        settings: settings.clone(),
    };

    let router = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
