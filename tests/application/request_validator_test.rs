use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use voiceguard::application::services::{DetectionRequest, RequestValidator, ValidationError};
use voiceguard::domain::Language;

const MAX_BYTES: usize = 32;

fn validator() -> RequestValidator {
    RequestValidator::new(MAX_BYTES)
}

fn request(language: &str, format: &str, audio_base64: &str) -> DetectionRequest {
    DetectionRequest {
        language: language.to_string(),
        audio_format: format.to_string(),
        audio_base64: audio_base64.to_string(),
    }
}

#[test]
fn given_valid_request_when_validate_then_decoded_audio() {
    let encoded = STANDARD.encode(b"mp3 bytes");
    let validated = validator()
        .validate(&request("English", "mp3", &encoded))
        .unwrap();

    assert_eq!(validated.language, Language::English);
    assert_eq!(validated.audio, b"mp3 bytes");
}

#[test]
fn given_uppercase_format_when_validate_then_accepted() {
    let encoded = STANDARD.encode(b"mp3 bytes");
    assert!(validator().validate(&request("Hindi", "MP3", &encoded)).is_ok());
}

#[test]
fn given_unknown_language_when_validate_then_language_error() {
    let encoded = STANDARD.encode(b"mp3 bytes");
    let error = validator()
        .validate(&request("Spanish", "mp3", &encoded))
        .unwrap_err();

    assert!(matches!(error, ValidationError::UnsupportedLanguage(_)));
    assert!(error.to_string().contains("language"));
    assert!(error.to_string().contains("Spanish"));
}

#[test]
fn given_case_mismatch_language_when_validate_then_language_error() {
    let encoded = STANDARD.encode(b"mp3 bytes");
    let error = validator()
        .validate(&request("telugu", "mp3", &encoded))
        .unwrap_err();

    assert!(matches!(error, ValidationError::UnsupportedLanguage(_)));
}

#[test]
fn given_wav_format_when_validate_then_format_error() {
    let encoded = STANDARD.encode(b"wav bytes");
    let error = validator()
        .validate(&request("English", "wav", &encoded))
        .unwrap_err();

    assert!(matches!(error, ValidationError::UnsupportedFormat(_)));
    assert!(error.to_string().contains("MP3"));
}

#[test]
fn given_bad_language_and_bad_format_when_validate_then_language_error_wins() {
    let error = validator()
        .validate(&request("Spanish", "wav", "xyz"))
        .unwrap_err();

    assert!(matches!(error, ValidationError::UnsupportedLanguage(_)));
}

#[test]
fn given_empty_audio_when_validate_then_empty_error() {
    let error = validator()
        .validate(&request("English", "mp3", ""))
        .unwrap_err();

    assert!(matches!(error, ValidationError::EmptyAudio));
}

#[test]
fn given_invalid_base64_when_validate_then_base64_error() {
    let error = validator()
        .validate(&request("English", "mp3", "@@@ not base64 @@@"))
        .unwrap_err();

    assert!(matches!(error, ValidationError::InvalidBase64));
}

#[test]
fn given_audio_over_limit_when_validate_then_too_large_error() {
    let encoded = STANDARD.encode(vec![0u8; MAX_BYTES + 1]);
    let error = validator()
        .validate(&request("English", "mp3", &encoded))
        .unwrap_err();

    assert!(matches!(
        error,
        ValidationError::AudioTooLarge { limit: MAX_BYTES }
    ));
    assert!(error.to_string().contains("too large"));
}

#[test]
fn given_audio_exactly_at_limit_when_validate_then_accepted() {
    let encoded = STANDARD.encode(vec![0u8; MAX_BYTES]);
    let validated = validator()
        .validate(&request("English", "mp3", &encoded))
        .unwrap();

    assert_eq!(validated.audio.len(), MAX_BYTES);
}
