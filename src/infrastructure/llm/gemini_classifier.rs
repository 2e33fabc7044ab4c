use std::time::Duration;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::application::ports::{ClassifierError, VoiceClassifier};
use crate::domain::{Classification, Language, VoiceAnalysis};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Classifier backed by the Gemini `generateContent` API. The audio bytes
/// travel as an inline-data part next to a language-specific instruction,
/// and the reply is parsed fail-closed by [`parse_verdict`].
pub struct GeminiClassifier {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: Blob,
    },
}

#[derive(Serialize)]
struct Blob {
    #[serde(rename = "mimeType")]
    mime_type: String,
    data: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    parts: Option<Vec<CandidatePart>>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

/// Shape the instruction asks the model to answer in.
#[derive(Deserialize)]
struct ModelVerdict {
    classification: String,
    confidence_score: f64,
    explanation: Option<String>,
}

impl GeminiClassifier {
    pub fn new(api_key: String, model: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        let endpoint = format!(
            "{}/v1beta/models/{}:generateContent",
            DEFAULT_BASE_URL, model
        );
        Ok(Self {
            client,
            endpoint,
            api_key,
            model: model.to_string(),
        })
    }

    fn instruction(language: Language) -> String {
        format!(
            "You are an expert voice analyst specializing in detecting AI-generated \
             versus human voices in {language} speech. Listen to the attached audio \
             sample and judge the naturalness of the speech patterns, pitch consistency \
             and variation, breathing and pauses, spectral character, and \
             {language}-specific phonetic patterns. Respond ONLY with a JSON object of \
             the form {{\"classification\": \"AI_GENERATED\" or \"HUMAN\", \
             \"confidence_score\": 0.XX, \"explanation\": \"brief technical reasoning \
             for the decision\"}}."
        )
    }
}

#[async_trait]
impl VoiceClassifier for GeminiClassifier {
    async fn classify(
        &self,
        audio: &[u8],
        language: Language,
    ) -> Result<VoiceAnalysis, ClassifierError> {
        if self.api_key.is_empty() {
            return Err(ClassifierError::Rejected(
                "no Gemini API key configured".to_string(),
            ));
        }

        let request_body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![
                    Part::Text {
                        text: Self::instruction(language),
                    },
                    Part::InlineData {
                        inline_data: Blob {
                            mime_type: "audio/mpeg".to_string(),
                            data: BASE64.encode(audio),
                        },
                    },
                ],
            }],
        };

        tracing::debug!(
            model = %self.model,
            language = %language,
            audio_bytes = audio.len(),
            "Sending sample to Gemini"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", self.api_key.as_str())])
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ClassifierError::Unavailable("request timed out".to_string())
                } else {
                    ClassifierError::Unavailable(e.to_string())
                }
            })?;

        let status = response.status();
        if status.is_server_error() {
            return Err(ClassifierError::Unavailable(format!("HTTP {}", status)));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClassifierError::Rejected(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let reply: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ClassifierError::InvalidResponse(e.to_string()))?;

        let text = reply
            .candidates
            .unwrap_or_default()
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts)
            .unwrap_or_default()
            .into_iter()
            .find_map(|p| p.text)
            .ok_or_else(|| ClassifierError::InvalidResponse("empty model reply".to_string()))?;

        parse_verdict(&text)
    }
}

/// Strict, fail-closed parse of the model's textual reply.
///
/// The JSON object may arrive bare, inside a ```json fence, or embedded in
/// prose; anything past extraction is rejected rather than repaired: unknown
/// classification labels and confidence values outside [0, 1] are errors.
pub fn parse_verdict(text: &str) -> Result<VoiceAnalysis, ClassifierError> {
    let json = extract_json(text).ok_or_else(|| {
        ClassifierError::InvalidResponse("no JSON object in model reply".to_string())
    })?;

    let verdict: ModelVerdict = serde_json::from_str(json)
        .map_err(|e| ClassifierError::InvalidResponse(format!("malformed verdict: {}", e)))?;

    let classification = match verdict.classification.as_str() {
        "AI_GENERATED" => Classification::AiGenerated,
        "HUMAN" => Classification::Human,
        other => {
            return Err(ClassifierError::InvalidResponse(format!(
                "unknown classification label: {}",
                other
            )))
        }
    };

    if !(0.0..=1.0).contains(&verdict.confidence_score) {
        return Err(ClassifierError::InvalidResponse(format!(
            "confidence score out of range: {}",
            verdict.confidence_score
        )));
    }

    Ok(VoiceAnalysis {
        classification,
        confidence: verdict.confidence_score,
        explanation: verdict.explanation.unwrap_or_default(),
    })
}

fn extract_json(text: &str) -> Option<&str> {
    if let Some(fence) = text.find("```json") {
        let rest = &text[fence + 7..];
        let end = rest.find("```")?;
        return Some(rest[..end].trim());
    }
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end >= start).then(|| &text[start..=end])
}
