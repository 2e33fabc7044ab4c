use std::fmt;

use serde::{Deserialize, Serialize};

/// Binary verdict assigned to a voice sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    #[serde(rename = "AI_GENERATED")]
    AiGenerated,
    #[serde(rename = "HUMAN")]
    Human,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::AiGenerated => "AI_GENERATED",
            Classification::Human => "HUMAN",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
