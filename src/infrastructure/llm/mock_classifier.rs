use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::application::ports::{ClassifierError, VoiceClassifier};
use crate::domain::{Language, VoiceAnalysis};

/// Scripted classifier for tests. Counts calls so tests can assert that
/// short-circuited requests never reach the external model.
pub struct MockVoiceClassifier {
    result: Result<VoiceAnalysis, ClassifierError>,
    calls: AtomicUsize,
}

impl MockVoiceClassifier {
    pub fn returning(analysis: VoiceAnalysis) -> Self {
        Self {
            result: Ok(analysis),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(error: ClassifierError) -> Self {
        Self {
            result: Err(error),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl VoiceClassifier for MockVoiceClassifier {
    async fn classify(
        &self,
        _audio: &[u8],
        _language: Language,
    ) -> Result<VoiceAnalysis, ClassifierError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}
