use super::classification::Classification;

/// The model's verdict on a single voice sample.
///
/// Only the classifier's reply parser constructs this, and the parser
/// rejects confidence values outside [0, 1].
#[derive(Debug, Clone, PartialEq)]
pub struct VoiceAnalysis {
    pub classification: Classification,
    pub confidence: f64,
    pub explanation: String,
}
