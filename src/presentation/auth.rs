use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::application::ports::VoiceClassifier;
use crate::presentation::handlers::ErrorBody;
use crate::presentation::state::AppState;

pub const API_KEY_HEADER: &str = "x-api-key";

/// Rejects the request with 401 unless the `x-api-key` header exactly
/// matches the configured secret. Runs before the body is touched, so
/// unauthenticated calls never pay for base64 decoding or the upstream call.
pub async fn require_api_key<C>(
    State(state): State<AppState<C>>,
    request: Request,
    next: Next,
) -> Response
where
    C: VoiceClassifier + 'static,
{
    let provided = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok());

    match provided {
        Some(key) if key == state.settings.auth.api_secret => next.run(request).await,
        _ => {
            tracing::warn!("Rejected request with missing or invalid API key");
            (
                StatusCode::UNAUTHORIZED,
                Json(ErrorBody::new("Invalid API key")),
            )
                .into_response()
        }
    }
}
