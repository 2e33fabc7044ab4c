mod gemini_classifier;
mod mock_classifier;

pub use gemini_classifier::{parse_verdict, GeminiClassifier};
pub use mock_classifier::MockVoiceClassifier;
