use super::environment::Environment;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_MAX_AUDIO_BYTES: usize = 10 * 1024 * 1024;
pub const DEFAULT_CLASSIFIER_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash-exp";

/// Process-wide configuration, read once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub auth: AuthSettings,
    pub gemini: GeminiSettings,
    pub limits: LimitSettings,
    pub environment: Environment,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct AuthSettings {
    pub api_secret: String,
}

#[derive(Debug, Clone)]
pub struct GeminiSettings {
    /// May be empty; the health endpoint then reports the model unavailable.
    pub api_key: String,
    pub model: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct LimitSettings {
    pub max_audio_bytes: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
    #[error("invalid value for {name}: {value}")]
    InvalidVar { name: &'static str, value: String },
}

impl Settings {
    pub fn from_env() -> Result<Self, SettingsError> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|_| SettingsError::InvalidVar {
                name: "PORT",
                value: raw.clone(),
            })?,
            Err(_) => DEFAULT_PORT,
        };

        let api_secret = std::env::var("API_SECRET_KEY")
            .map_err(|_| SettingsError::MissingVar("API_SECRET_KEY"))?;

        let max_audio_bytes = match std::env::var("MAX_AUDIO_SIZE") {
            Ok(raw) => raw.parse::<usize>().map_err(|_| SettingsError::InvalidVar {
                name: "MAX_AUDIO_SIZE",
                value: raw.clone(),
            })?,
            Err(_) => DEFAULT_MAX_AUDIO_BYTES,
        };

        let timeout_secs = match std::env::var("CLASSIFIER_TIMEOUT_SECS") {
            Ok(raw) => raw.parse::<u64>().map_err(|_| SettingsError::InvalidVar {
                name: "CLASSIFIER_TIMEOUT_SECS",
                value: raw.clone(),
            })?,
            Err(_) => DEFAULT_CLASSIFIER_TIMEOUT_SECS,
        };

        let environment = match std::env::var("APP_ENV") {
            Ok(raw) => {
                Environment::try_from(raw.clone()).map_err(|_| SettingsError::InvalidVar {
                    name: "APP_ENV",
                    value: raw,
                })?
            }
            Err(_) => Environment::Development,
        };

        Ok(Self {
            server: ServerSettings { port },
            auth: AuthSettings { api_secret },
            gemini: GeminiSettings {
                api_key: std::env::var("GEMINI_API_KEY").unwrap_or_default(),
                model: std::env::var("GEMINI_MODEL")
                    .unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string()),
                timeout_secs,
            },
            limits: LimitSettings { max_audio_bytes },
            environment,
        })
    }
}
