mod voice_classifier;

pub use voice_classifier::{ClassifierError, VoiceClassifier};
