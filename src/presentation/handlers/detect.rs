use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::application::ports::{ClassifierError, VoiceClassifier};
use crate::application::services::{DetectionError, DetectionRequest};
use crate::domain::{Classification, Language};
use crate::presentation::state::AppState;

use super::responses::ErrorBody;

#[derive(Debug, Serialize)]
pub struct DetectionResponse {
    pub status: &'static str,
    pub language: Language,
    pub classification: Classification,
    #[serde(rename = "confidenceScore")]
    pub confidence_score: f64,
    pub explanation: String,
}

#[tracing::instrument(skip(state, payload))]
pub async fn detect_handler<C>(
    State(state): State<AppState<C>>,
    payload: Result<Json<DetectionRequest>, JsonRejection>,
) -> Response
where
    C: VoiceClassifier + 'static,
{
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            tracing::warn!(error = %rejection.body_text(), "Malformed detection request body");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody::new(rejection.body_text())),
            )
                .into_response();
        }
    };

    match state.detection_service.detect(&request).await {
        Ok(detection) => (
            StatusCode::OK,
            Json(DetectionResponse {
                status: "success",
                language: detection.language,
                classification: detection.analysis.classification,
                confidence_score: round_confidence(detection.analysis.confidence),
                explanation: detection.analysis.explanation,
            }),
        )
            .into_response(),
        Err(DetectionError::Validation(e)) => {
            tracing::warn!(error = %e, "Detection request failed validation");
            (StatusCode::BAD_REQUEST, Json(ErrorBody::new(e.to_string()))).into_response()
        }
        Err(DetectionError::Classifier(e)) => {
            tracing::error!(error = %e, "Voice analysis failed");
            let status = match e {
                ClassifierError::Unavailable(_) => StatusCode::BAD_GATEWAY,
                ClassifierError::Rejected(_) | ClassifierError::InvalidResponse(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            };
            (status, Json(ErrorBody::new(e.to_string()))).into_response()
        }
    }
}

/// Two decimal places on the wire, as callers expect.
fn round_confidence(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
