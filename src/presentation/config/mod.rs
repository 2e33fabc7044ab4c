mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    AuthSettings, GeminiSettings, LimitSettings, ServerSettings, Settings, SettingsError,
    DEFAULT_CLASSIFIER_TIMEOUT_SECS, DEFAULT_GEMINI_MODEL, DEFAULT_MAX_AUDIO_BYTES, DEFAULT_PORT,
};
