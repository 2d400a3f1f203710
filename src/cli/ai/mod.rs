//! AI completion layer for examprep
//!
//! Every prompt the application sends goes through [`CompletionGateway`],
//! which tries three remote providers in a fixed order:
//!
//! 1. Gemini (primary, the only provider that accepts images)
//! 2. Cohere (secondary, text only)
//! 3. Hugging Face router (fallback, text only, single attempt)
//!
//! The gateway never fails. Callers always get text back plus a [`Source`]
//! tag; when nothing worked the text is a fixed sentinel and the tag is
//! [`Source::Error`].

mod attachment;
mod cohere;
mod config;
mod error;
mod gateway;
mod gemini;
mod http;
mod huggingface;
mod provider;
mod retry;

pub use attachment::ImageAttachment;
pub use cohere::CohereProvider;
pub use config::{
    AiConfig, ENV_COHERE_API_KEY, ENV_COHERE_API_URL, ENV_COHERE_MODEL, ENV_GEMINI_API_KEY,
    ENV_GEMINI_API_URL, ENV_GEMINI_MODEL, ENV_HF_API_URL, ENV_HF_MAX_TOKENS, ENV_HF_MODEL,
    ENV_HF_TOKEN, ENV_RETRY_DELAY_MS, ENV_TIMEOUT_SECS,
};
pub use error::ProviderError;
pub use gateway::{
    AttemptPolicy, CompletionGateway, CompletionOptions, GatewayFailure, ProviderStatus,
    DEFAULT_MAX_RETRIES, DEFAULT_TEMPERATURE,
};
pub use gemini::GeminiProvider;
pub use huggingface::HuggingFaceProvider;
pub use provider::AiProvider;
pub use retry::{FixedDelay, NoDelay, RetryDelay};

use std::fmt;

/// A single request as seen by a provider adapter
#[derive(Debug, Clone, Copy)]
pub struct CompletionRequest<'a> {
    pub prompt: &'a str,
    /// Sampling temperature, forwarded unchanged
    pub temperature: f32,
    pub image: Option<&'a ImageAttachment>,
}

impl<'a> CompletionRequest<'a> {
    pub fn new(prompt: &'a str, temperature: f32, image: Option<&'a ImageAttachment>) -> Self {
        Self {
            prompt,
            temperature,
            image,
        }
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }
}

/// Which backend produced a completion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Text came from the named provider
    Provider(String),
    /// Text is a failure sentinel
    Error,
}

impl Source {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Provider(name) => name,
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Generated text plus its provenance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionResult {
    pub text: String,
    pub source: Source,
}

impl CompletionResult {
    pub fn from_provider(text: impl Into<String>, provider: &str) -> Self {
        Self {
            text: text.into(),
            source: Source::Provider(provider.to_string()),
        }
    }

    /// Terminal result: the sentinel text for `failure`, tagged `error`
    pub fn failed(failure: GatewayFailure) -> Self {
        Self {
            text: failure.message().to_string(),
            source: Source::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        self.source == Source::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_tags() {
        assert_eq!(Source::Provider("gemini".into()).as_str(), "gemini");
        assert_eq!(Source::Error.as_str(), "error");
        assert_eq!(Source::Error.to_string(), "error");
    }

    #[test]
    fn test_failed_result_carries_sentinel() {
        let result = CompletionResult::failed(GatewayFailure::AllProvidersExhausted);
        assert!(result.is_error());
        assert_eq!(result.text, GatewayFailure::AllProvidersExhausted.message());
    }

    #[test]
    fn test_provider_result_is_not_error() {
        let result = CompletionResult::from_provider("hello", "cohere");
        assert!(!result.is_error());
        assert_eq!(result.source, Source::Provider("cohere".to_string()));
    }
}
