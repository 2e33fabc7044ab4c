use async_trait::async_trait;

use crate::domain::{Language, VoiceAnalysis};

/// Seam in front of the external classification model.
///
/// One call per incoming request; no retries, batching, or caching.
#[async_trait]
pub trait VoiceClassifier: Send + Sync {
    async fn classify(
        &self,
        audio: &[u8],
        language: Language,
    ) -> Result<VoiceAnalysis, ClassifierError>;
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ClassifierError {
    #[error("external service unavailable: {0}")]
    Unavailable(String),
    #[error("external service rejected request: {0}")]
    Rejected(String),
    #[error("model response unparseable: {0}")]
    InvalidResponse(String),
}
