//! Gemini provider
//!
//! Primary provider and the only one that accepts images. Talks to the
//! `generateContent` REST endpoint.

use super::{
    http::{build_client, post_json},
    provider::AiProvider,
    AiConfig, CompletionRequest, ProviderError,
};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

pub const GEMINI: &str = "gemini";

pub struct GeminiProvider {
    client: Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl GeminiProvider {
    pub fn new(config: &AiConfig) -> Result<Self, ProviderError> {
        let api_key = config
            .gemini_api_key
            .clone()
            .ok_or(ProviderError::Unconfigured(GEMINI))?;

        Ok(Self {
            client: build_client(config.effective_timeout())?,
            api_url: config.effective_gemini_api_url().to_string(),
            api_key,
            model: config.effective_gemini_model().to_string(),
        })
    }

    fn full_url(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.api_url, self.model)
    }
}

impl AiProvider for GeminiProvider {
    fn generate(&self, request: &CompletionRequest<'_>) -> Result<String, ProviderError> {
        let body = GenerateContentRequest::from_request(request);
        let response: GenerateContentResponse = post_json(
            self.client
                .post(self.full_url())
                .header("x-goog-api-key", &self.api_key),
            &body,
        )?;
        response.into_text()
    }

    fn name(&self) -> &str {
        GEMINI
    }

    fn supports_vision(&self) -> bool {
        true
    }

    fn is_ready(&self) -> bool {
        !self.api_key.is_empty()
    }
}

// generateContent request/response types

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    role: &'static str,
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
        inline_data: InlineData,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f32,
}

impl GenerateContentRequest {
    fn from_request(request: &CompletionRequest<'_>) -> Self {
        let mut parts = vec![Part::Text {
            text: request.prompt.to_string(),
        }];
        if let Some(image) = request.image {
            parts.push(Part::InlineData {
                inline_data: InlineData {
                    mime_type: image.mime_type.clone(),
                    data: image.to_base64(),
                },
            });
        }

        Self {
            contents: vec![Content {
                role: "user",
                parts,
            }],
            generation_config: GenerationConfig {
                temperature: request.temperature,
            },
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

impl GenerateContentResponse {
    fn into_text(self) -> Result<String, ProviderError> {
        let block_reason = self.prompt_feedback.and_then(|f| f.block_reason);

        let Some(candidate) = self.candidates.into_iter().next() else {
            return Err(match block_reason {
                Some(reason) => ProviderError::malformed(format!("prompt blocked: {}", reason)),
                None => ProviderError::malformed("no candidates returned"),
            });
        };

        let text: String = candidate
            .content
            .map(|c| c.parts)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|p| p.text)
            .collect();

        if text.is_empty() {
            return Err(ProviderError::malformed("candidate has no text"));
        }
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::ai::ImageAttachment;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> Result<String, ProviderError> {
        serde_json::from_value::<GenerateContentResponse>(value)
            .unwrap()
            .into_text()
    }

    #[test]
    fn test_text_request_shape() {
        let request = CompletionRequest::new("Name a prime", 0.5, None);
        let body = serde_json::to_value(GenerateContentRequest::from_request(&request)).unwrap();
        assert_eq!(
            body,
            json!({
                "contents": [{"role": "user", "parts": [{"text": "Name a prime"}]}],
                "generationConfig": {"temperature": 0.5}
            })
        );
    }

    #[test]
    fn test_image_request_shape() {
        let image = ImageAttachment {
            mime_type: "image/jpeg".to_string(),
            data: vec![1, 2, 3],
        };
        let request = CompletionRequest {
            prompt: "Mark this",
            temperature: 0.3,
            image: Some(&image),
        };
        let body = serde_json::to_value(GenerateContentRequest::from_request(&request)).unwrap();
        assert_eq!(
            body["contents"][0]["parts"][1],
            json!({"inlineData": {"mimeType": "image/jpeg", "data": "AQID"}})
        );
    }

    #[test]
    fn test_joins_text_parts() {
        let text = parse(json!({
            "candidates": [{"content": {"parts": [{"text": "Q1. "}, {"text": "What is 2+2?"}]}}]
        }))
        .unwrap();
        assert_eq!(text, "Q1. What is 2+2?");
    }

    #[test]
    fn test_blocked_prompt() {
        let err = parse(json!({"promptFeedback": {"blockReason": "SAFETY"}})).unwrap_err();
        assert!(err.to_string().contains("SAFETY"));
    }

    #[test]
    fn test_empty_candidate() {
        let err = parse(json!({"candidates": [{}]})).unwrap_err();
        assert!(matches!(err, ProviderError::MalformedResponse(_)));
    }

    #[test]
    fn test_missing_key_is_unconfigured() {
        let result = GeminiProvider::new(&AiConfig::default());
        assert!(matches!(result, Err(ProviderError::Unconfigured(GEMINI))));
    }

    #[test]
    fn test_url_uses_model() {
        let config = AiConfig {
            gemini_api_key: Some("k".to_string()),
            gemini_api_url: Some("http://localhost:9/".to_string()),
            ..AiConfig::default()
        };
        let provider = GeminiProvider::new(&config).unwrap();
        assert_eq!(
            provider.full_url(),
            "http://localhost:9/v1beta/models/gemini-2.0-flash-exp:generateContent"
        );
        assert!(provider.supports_vision());
        assert!(provider.is_ready());
    }
}
