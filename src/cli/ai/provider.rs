//! AI Provider trait definition
//!
//! Defines the interface that all completion backends must implement.

use super::{CompletionRequest, ProviderError};

/// Trait for AI providers that can generate completions
pub trait AiProvider: Send + Sync {
    /// Generate text for a single request
    ///
    /// # Arguments
    /// * `request` - Prompt, temperature and optional image
    ///
    /// # Returns
    /// The plain generated text, or the reason this attempt failed
    fn generate(&self, request: &CompletionRequest<'_>) -> Result<String, ProviderError>;

    /// Short tag identifying this provider (`gemini`, `cohere`, `hf`)
    fn name(&self) -> &str;

    /// Whether requests carrying an image can be served
    fn supports_vision(&self) -> bool {
        false
    }

    /// Check if this provider is ready to use
    fn is_ready(&self) -> bool;
}
