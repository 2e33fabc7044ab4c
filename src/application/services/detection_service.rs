use std::sync::Arc;

use crate::application::ports::{ClassifierError, VoiceClassifier};
use crate::domain::{Language, VoiceAnalysis};

use super::request_validator::{DetectionRequest, RequestValidator, ValidationError};

/// Outcome of a completed detection: the echoed language plus the verdict.
#[derive(Debug, Clone)]
pub struct Detection {
    pub language: Language,
    pub analysis: VoiceAnalysis,
}

#[derive(Debug, thiserror::Error)]
pub enum DetectionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Classifier(#[from] ClassifierError),
}

/// Orchestrates one detection request: validate, then a single bounded call
/// to the classifier. Validation failures never reach the external model.
pub struct DetectionService<C: VoiceClassifier> {
    validator: RequestValidator,
    classifier: Arc<C>,
}

impl<C: VoiceClassifier> DetectionService<C> {
    pub fn new(classifier: Arc<C>, max_audio_bytes: usize) -> Self {
        Self {
            validator: RequestValidator::new(max_audio_bytes),
            classifier,
        }
    }

    pub async fn detect(&self, request: &DetectionRequest) -> Result<Detection, DetectionError> {
        let validated = self.validator.validate(request)?;

        tracing::debug!(
            language = %validated.language,
            audio_bytes = validated.audio.len(),
            "Dispatching sample to classifier"
        );

        let analysis = self
            .classifier
            .classify(&validated.audio, validated.language)
            .await?;

        tracing::info!(
            language = %validated.language,
            classification = %analysis.classification,
            confidence = analysis.confidence,
            "Detection completed"
        );

        Ok(Detection {
            language: validated.language,
            analysis,
        })
    }
}
