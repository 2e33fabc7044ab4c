use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::Deserialize;

use crate::domain::Language;

/// Wire body of `POST /api/voice-detection`. Field presence is enforced by
/// deserialization; field values are checked by [`RequestValidator`].
#[derive(Debug, Clone, Deserialize)]
pub struct DetectionRequest {
    pub language: String,
    #[serde(rename = "audioFormat")]
    pub audio_format: String,
    #[serde(rename = "audioBase64")]
    pub audio_base64: String,
}

/// A request that passed every check, with the audio already decoded.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedDetection {
    pub language: Language,
    pub audio: Vec<u8>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ValidationError {
    #[error("Unsupported language: {0}. Supported: Tamil, English, Hindi, Malayalam, Telugu")]
    UnsupportedLanguage(String),
    #[error("Unsupported audioFormat: {0}. Only MP3 is supported")]
    UnsupportedFormat(String),
    #[error("audioBase64 cannot be empty")]
    EmptyAudio,
    #[error("audioBase64 is not valid base64")]
    InvalidBase64,
    #[error("Audio file too large. Maximum size: {limit} bytes")]
    AudioTooLarge { limit: usize },
}

/// Pure, ordered validation of the detection request. No I/O; the first
/// failing check wins.
#[derive(Debug, Clone)]
pub struct RequestValidator {
    max_audio_bytes: usize,
}

impl RequestValidator {
    pub fn new(max_audio_bytes: usize) -> Self {
        Self { max_audio_bytes }
    }

    pub fn validate(&self, request: &DetectionRequest) -> Result<ValidatedDetection, ValidationError> {
        let language = Language::parse(&request.language)
            .ok_or_else(|| ValidationError::UnsupportedLanguage(request.language.clone()))?;

        if !request.audio_format.eq_ignore_ascii_case("mp3") {
            return Err(ValidationError::UnsupportedFormat(request.audio_format.clone()));
        }

        if request.audio_base64.is_empty() {
            return Err(ValidationError::EmptyAudio);
        }

        let audio = BASE64
            .decode(request.audio_base64.as_bytes())
            .map_err(|_| ValidationError::InvalidBase64)?;

        if audio.len() > self.max_audio_bytes {
            return Err(ValidationError::AudioTooLarge {
                limit: self.max_audio_bytes,
            });
        }

        Ok(ValidatedDetection { language, audio })
    }
}
