use axum::http::StatusCode;
use axum::middleware;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::VoiceClassifier;
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::auth::require_api_key;
use crate::presentation::handlers::{detect_handler, health_handler, ErrorBody};
use crate::presentation::state::AppState;

pub fn create_router<C>(state: AppState<C>) -> Router
where
    C: VoiceClassifier + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    // Auth guards the detection route only; health stays open.
    let router = Router::new()
        .route("/api/voice-detection", post(detect_handler::<C>))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_api_key::<C>,
        ))
        .route("/health", get(health_handler::<C>))
        .fallback(not_found_handler);

    router
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}

async fn not_found_handler() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody::new("Endpoint not found")),
    )
}
