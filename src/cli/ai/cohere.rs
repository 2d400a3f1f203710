//! Cohere provider (secondary, text only)

use super::{
    http::{build_client, post_json},
    provider::AiProvider,
    AiConfig, CompletionRequest, ProviderError,
};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

pub const COHERE: &str = "cohere";

pub struct CohereProvider {
    client: Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl CohereProvider {
    pub fn new(config: &AiConfig) -> Result<Self, ProviderError> {
        let api_key = config
            .cohere_api_key
            .clone()
            .ok_or(ProviderError::Unconfigured(COHERE))?;

        Ok(Self {
            client: build_client(config.effective_timeout())?,
            api_url: config.effective_cohere_api_url().to_string(),
            api_key,
            model: config.effective_cohere_model().to_string(),
        })
    }
}

impl AiProvider for CohereProvider {
    fn generate(&self, request: &CompletionRequest<'_>) -> Result<String, ProviderError> {
        if request.has_image() {
            return Err(ProviderError::UnsupportedModality {
                provider: COHERE.to_string(),
            });
        }

        let body = ChatRequest {
            model: &self.model,
            message: request.prompt,
            temperature: request.temperature,
        };
        let response: ChatResponse = post_json(
            self.client
                .post(format!("{}/v1/chat", self.api_url))
                .bearer_auth(&self.api_key),
            &body,
        )?;
        response.into_text()
    }

    fn name(&self) -> &str {
        COHERE
    }

    fn is_ready(&self) -> bool {
        !self.api_key.is_empty()
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    message: &'a str,
    temperature: f32,
}

#[derive(Deserialize)]
struct ChatResponse {
    text: Option<String>,
}

impl ChatResponse {
    fn into_text(self) -> Result<String, ProviderError> {
        self.text
            .ok_or_else(|| ProviderError::malformed("response has no text"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::ai::ImageAttachment;
    use serde_json::json;

    fn configured() -> CohereProvider {
        CohereProvider::new(&AiConfig {
            cohere_api_key: Some("co".to_string()),
            ..AiConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_request_shape() {
        let body = ChatRequest {
            model: "command-r-plus-08-2024",
            message: "Hello",
            temperature: 0.25,
        };
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({"model": "command-r-plus-08-2024", "message": "Hello", "temperature": 0.25})
        );
    }

    #[test]
    fn test_response_text() {
        let body = json!({"text": "Q1. Add 2 and 3.", "generation_id": "x"});
        let response: ChatResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.into_text().unwrap(), "Q1. Add 2 and 3.");
    }

    #[test]
    fn test_response_without_text() {
        let response: ChatResponse = serde_json::from_value(json!({"message": "oops"})).unwrap();
        assert!(response.into_text().is_err());
    }

    #[test]
    fn test_rejects_images_without_network() {
        let provider = configured();
        let image = ImageAttachment {
            mime_type: "image/jpeg".to_string(),
            data: vec![0],
        };
        let request = CompletionRequest {
            prompt: "Mark this",
            temperature: 0.3,
            image: Some(&image),
        };
        assert!(matches!(
            provider.generate(&request),
            Err(ProviderError::UnsupportedModality { .. })
        ));
        assert!(!provider.supports_vision());
    }

    #[test]
    fn test_missing_key_is_unconfigured() {
        assert!(CohereProvider::new(&AiConfig::default()).is_err());
    }
}
