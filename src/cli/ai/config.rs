//! AI configuration management
//!
//! Provider credentials and settings come from environment variables
//! (optionally seeded from a `.env` file at startup). A provider whose
//! credential is missing is simply left unconfigured.

use std::env;
use std::time::Duration;

// Environment variable names
pub const ENV_GEMINI_API_KEY: &str = "GEMINI_API_KEY";
pub const ENV_GEMINI_MODEL: &str = "GEMINI_MODEL";
pub const ENV_GEMINI_API_URL: &str = "GEMINI_API_URL";
pub const ENV_COHERE_API_KEY: &str = "COHERE_API_KEY";
pub const ENV_COHERE_MODEL: &str = "COHERE_MODEL";
pub const ENV_COHERE_API_URL: &str = "COHERE_API_URL";
pub const ENV_HF_TOKEN: &str = "HF_TOKEN";
pub const ENV_HF_MODEL: &str = "HF_MODEL";
pub const ENV_HF_API_URL: &str = "HF_API_URL";
pub const ENV_HF_MAX_TOKENS: &str = "HF_MAX_TOKENS";
pub const ENV_TIMEOUT_SECS: &str = "EXAMPREP_TIMEOUT_SECS";
pub const ENV_RETRY_DELAY_MS: &str = "EXAMPREP_RETRY_DELAY_MS";

const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash-exp";
const DEFAULT_GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_COHERE_MODEL: &str = "command-r-plus-08-2024";
const DEFAULT_COHERE_API_URL: &str = "https://api.cohere.com";
const DEFAULT_HF_MODEL: &str = "Qwen/Qwen2.5-72B-Instruct";
const DEFAULT_HF_API_URL: &str = "https://router.huggingface.co";
const DEFAULT_HF_MAX_TOKENS: u32 = 2000;
const DEFAULT_TIMEOUT_SECS: u64 = 60;
const DEFAULT_RETRY_DELAY_MS: u64 = 1000;

/// Configuration for all AI providers
#[derive(Debug, Clone, Default)]
pub struct AiConfig {
    pub gemini_api_key: Option<String>,
    pub gemini_model: Option<String>,
    pub gemini_api_url: Option<String>,
    pub cohere_api_key: Option<String>,
    pub cohere_model: Option<String>,
    pub cohere_api_url: Option<String>,
    pub hf_token: Option<String>,
    pub hf_model: Option<String>,
    pub hf_api_url: Option<String>,
    pub hf_max_tokens: Option<u32>,
    pub timeout_secs: Option<u64>,
    pub retry_delay_ms: Option<u64>,
}

impl AiConfig {
    /// Load configuration from the process environment
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    /// Blank values count as unset; unparseable numbers are ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Self {
            gemini_api_key: get(ENV_GEMINI_API_KEY),
            gemini_model: get(ENV_GEMINI_MODEL),
            gemini_api_url: get(ENV_GEMINI_API_URL),
            cohere_api_key: get(ENV_COHERE_API_KEY),
            cohere_model: get(ENV_COHERE_MODEL),
            cohere_api_url: get(ENV_COHERE_API_URL),
            hf_token: get(ENV_HF_TOKEN),
            hf_model: get(ENV_HF_MODEL),
            hf_api_url: get(ENV_HF_API_URL),
            hf_max_tokens: get(ENV_HF_MAX_TOKENS).and_then(|v| v.parse().ok()),
            timeout_secs: get(ENV_TIMEOUT_SECS).and_then(|v| v.parse().ok()),
            retry_delay_ms: get(ENV_RETRY_DELAY_MS).and_then(|v| v.parse().ok()),
        }
    }

    /// Check if at least one provider has credentials
    pub fn is_configured(&self) -> bool {
        self.gemini_api_key.is_some() || self.cohere_api_key.is_some() || self.hf_token.is_some()
    }

    pub fn effective_gemini_model(&self) -> &str {
        self.gemini_model.as_deref().unwrap_or(DEFAULT_GEMINI_MODEL)
    }

    pub fn effective_gemini_api_url(&self) -> &str {
        trim_url(self.gemini_api_url.as_deref().unwrap_or(DEFAULT_GEMINI_API_URL))
    }

    pub fn effective_cohere_model(&self) -> &str {
        self.cohere_model.as_deref().unwrap_or(DEFAULT_COHERE_MODEL)
    }

    pub fn effective_cohere_api_url(&self) -> &str {
        trim_url(self.cohere_api_url.as_deref().unwrap_or(DEFAULT_COHERE_API_URL))
    }

    pub fn effective_hf_model(&self) -> &str {
        self.hf_model.as_deref().unwrap_or(DEFAULT_HF_MODEL)
    }

    pub fn effective_hf_api_url(&self) -> &str {
        trim_url(self.hf_api_url.as_deref().unwrap_or(DEFAULT_HF_API_URL))
    }

    pub fn effective_hf_max_tokens(&self) -> u32 {
        self.hf_max_tokens.unwrap_or(DEFAULT_HF_MAX_TOKENS)
    }

    /// Per-request timeout applied by every provider client
    pub fn effective_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }

    /// Fixed pause between attempts against the same provider
    pub fn effective_retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms.unwrap_or(DEFAULT_RETRY_DELAY_MS))
    }
}

fn trim_url(url: &str) -> &str {
    url.trim_end_matches('/')
}
