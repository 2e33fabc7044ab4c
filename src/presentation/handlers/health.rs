use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::application::ports::VoiceClassifier;
use crate::domain::Language;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub supported_languages: Vec<&'static str>,
    /// Configuration check only: true iff a Gemini key is set. Not a probe.
    pub gemini_available: bool,
}

pub async fn health_handler<C>(State(state): State<AppState<C>>) -> impl IntoResponse
where
    C: VoiceClassifier + 'static,
{
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy",
            supported_languages: Language::supported_names(),
            gemini_available: !state.settings.gemini.api_key.is_empty(),
        }),
    )
}
