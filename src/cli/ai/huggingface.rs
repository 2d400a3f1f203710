//! Hugging Face provider
//!
//! Fallback provider. Uses the router's OpenAI-compatible chat completions
//! endpoint, so any OpenAI-style server works via `HF_API_URL`.

use super::{
    http::{build_client, post_json},
    provider::AiProvider,
    AiConfig, CompletionRequest, ProviderError,
};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

pub const HUGGING_FACE: &str = "hf";

pub struct HuggingFaceProvider {
    client: Client,
    api_url: String,
    api_key: String,
    model: String,
    max_tokens: u32,
}

impl HuggingFaceProvider {
    pub fn new(config: &AiConfig) -> Result<Self, ProviderError> {
        let api_key = config
            .hf_token
            .clone()
            .ok_or(ProviderError::Unconfigured(HUGGING_FACE))?;

        Ok(Self {
            client: build_client(config.effective_timeout())?,
            api_url: config.effective_hf_api_url().to_string(),
            api_key,
            model: config.effective_hf_model().to_string(),
            max_tokens: config.effective_hf_max_tokens(),
        })
    }

    /// Build the full API URL
    fn full_url(&self) -> String {
        format!("{}/v1/chat/completions", self.api_url)
    }
}

impl AiProvider for HuggingFaceProvider {
    fn generate(&self, request: &CompletionRequest<'_>) -> Result<String, ProviderError> {
        if request.has_image() {
            return Err(ProviderError::UnsupportedModality {
                provider: HUGGING_FACE.to_string(),
            });
        }

        let body = ChatCompletionRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: request.prompt,
            }],
            temperature: request.temperature,
            max_tokens: self.max_tokens,
        };

        let completion: ChatCompletionResponse = post_json(
            self.client.post(self.full_url()).bearer_auth(&self.api_key),
            &body,
        )?;
        completion.into_text()
    }

    fn name(&self) -> &str {
        HUGGING_FACE
    }

    fn is_ready(&self) -> bool {
        !self.api_key.is_empty()
    }
}

// OpenAI-compatible request/response types

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

impl ChatCompletionResponse {
    fn into_text(self) -> Result<String, ProviderError> {
        let choice = self
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::malformed("no completion choices returned"))?;

        choice
            .message
            .content
            .ok_or_else(|| ProviderError::malformed("choice has no content"))
    }
}
