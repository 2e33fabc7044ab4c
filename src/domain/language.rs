use std::fmt;

use serde::{Deserialize, Serialize};

/// Languages the detection service accepts samples in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    Tamil,
    English,
    Hindi,
    Malayalam,
    Telugu,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::Tamil,
        Language::English,
        Language::Hindi,
        Language::Malayalam,
        Language::Telugu,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Tamil => "Tamil",
            Language::English => "English",
            Language::Hindi => "Hindi",
            Language::Malayalam => "Malayalam",
            Language::Telugu => "Telugu",
        }
    }

    /// Case-sensitive lookup against the allow-list.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.as_str() == value)
    }

    pub fn supported_names() -> Vec<&'static str> {
        Self::ALL.iter().map(Language::as_str).collect()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
