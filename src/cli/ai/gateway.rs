//! Completion gateway: ordered fallback with bounded retries
//!
//! ```text
//! START → primary (1..=max_retries) ─ ok ─────────────────────────→ DONE
//!           │ exhausted, image attached ──────────────────────────→ ERROR (vision)
//!           │ exhausted
//!           ▼
//!         secondary (1..=max_retries) ─ ok ───────────────────────→ DONE
//!           │ exhausted
//!           ▼
//!         tertiary (one attempt) ─ ok ────────────────────────────→ DONE
//!           │ failed
//!           ▼
//!         ERROR (all providers failed)
//! ```
//!
//! Unconfigured providers are skipped. The same `max_retries` governs the
//! primary and secondary slots; the tertiary slot is always tried once.

use tracing::{debug, info, warn};

use super::{
    cohere::COHERE, gemini::GEMINI, huggingface::HUGGING_FACE, AiConfig, AiProvider,
    CohereProvider, CompletionRequest, CompletionResult, FixedDelay, GeminiProvider,
    HuggingFaceProvider, ImageAttachment, ProviderError, RetryDelay,
};

pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_MAX_RETRIES: u32 = 2;

/// Terminal outcomes of a call that no provider could serve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayFailure {
    /// An image was attached and the vision provider could not serve it
    VisionUnavailable,
    AllProvidersExhausted,
}

impl GatewayFailure {
    /// Sentinel text returned in place of a completion
    pub fn message(self) -> &'static str {
        match self {
            Self::VisionUnavailable => {
                "Image analysis requires Gemini AI. Please check API configuration."
            }
            Self::AllProvidersExhausted => "All AI services failed. Please try again later.",
        }
    }
}

/// How many attempts a slot gets per call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptPolicy {
    /// Up to the caller's `max_retries`
    RetryBudget,
    /// Exactly one attempt regardless of `max_retries`
    Single,
}

impl AttemptPolicy {
    pub fn attempts(self, max_retries: u32) -> u32 {
        match self {
            Self::RetryBudget => max_retries,
            Self::Single => 1,
        }
    }
}

/// Read-only view of one slot in the chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderStatus {
    pub role: &'static str,
    pub name: String,
    pub supports_vision: bool,
    pub attempts: AttemptPolicy,
    pub configured: bool,
}

/// Per-call knobs for [`CompletionGateway::complete`]
#[derive(Debug, Clone, Copy)]
pub struct CompletionOptions<'a> {
    pub temperature: f32,
    pub max_retries: u32,
    pub image: Option<&'a ImageAttachment>,
}

impl Default for CompletionOptions<'_> {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            max_retries: DEFAULT_MAX_RETRIES,
            image: None,
        }
    }
}

impl<'a> CompletionOptions<'a> {
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_image(mut self, image: &'a ImageAttachment) -> Self {
        self.image = Some(image);
        self
    }
}

struct Slot {
    role: &'static str,
    name: String,
    provider: Option<Box<dyn AiProvider>>,
    policy: AttemptPolicy,
}

impl Slot {
    fn new(
        role: &'static str,
        default_name: &str,
        provider: Option<Box<dyn AiProvider>>,
        policy: AttemptPolicy,
    ) -> Self {
        let name = provider
            .as_ref()
            .map(|p| p.name().to_string())
            .unwrap_or_else(|| default_name.to_string());
        Self {
            role,
            name,
            provider,
            policy,
        }
    }

    fn ready_provider(&self) -> Option<&dyn AiProvider> {
        self.provider.as_deref().filter(|p| p.is_ready())
    }

    fn status(&self) -> ProviderStatus {
        ProviderStatus {
            role: self.role,
            name: self.name.clone(),
            supports_vision: self
                .provider
                .as_ref()
                .map(|p| p.supports_vision())
                .unwrap_or(self.role == PRIMARY),
            attempts: self.policy,
            configured: self.ready_provider().is_some(),
        }
    }
}

const PRIMARY: &str = "primary";
const SECONDARY: &str = "secondary";
const TERTIARY: &str = "tertiary";

/// Routes prompts through the provider chain. Holds no mutable state, so a
/// single instance can be shared across threads.
pub struct CompletionGateway {
    primary: Slot,
    secondary: Slot,
    tertiary: Slot,
    delay: Box<dyn RetryDelay>,
}

impl CompletionGateway {
    /// Assemble a gateway from already-built providers. `None` marks a slot
    /// as permanently unconfigured.
    pub fn new(
        primary: Option<Box<dyn AiProvider>>,
        secondary: Option<Box<dyn AiProvider>>,
        tertiary: Option<Box<dyn AiProvider>>,
    ) -> Self {
        Self {
            primary: Slot::new(PRIMARY, GEMINI, primary, AttemptPolicy::RetryBudget),
            secondary: Slot::new(SECONDARY, COHERE, secondary, AttemptPolicy::RetryBudget),
            tertiary: Slot::new(TERTIARY, HUGGING_FACE, tertiary, AttemptPolicy::Single),
            delay: Box::new(FixedDelay::default()),
        }
    }

    /// Build every provider from configuration. Providers that fail to
    /// initialise are logged and left out for the life of the gateway.
    pub fn from_config(config: &AiConfig) -> Self {
        let primary = init_provider(GEMINI, GeminiProvider::new(config));
        let secondary = init_provider(COHERE, CohereProvider::new(config));
        let tertiary = init_provider(HUGGING_FACE, HuggingFaceProvider::new(config));

        Self::new(primary, secondary, tertiary)
            .with_delay(FixedDelay(config.effective_retry_delay()))
    }

    /// Replace the pause used between attempts
    pub fn with_delay(mut self, delay: impl RetryDelay + 'static) -> Self {
        self.delay = Box::new(delay);
        self
    }

    /// Chain order with configuration state, for display
    pub fn statuses(&self) -> Vec<ProviderStatus> {
        [&self.primary, &self.secondary, &self.tertiary]
            .into_iter()
            .map(Slot::status)
            .collect()
    }

    pub fn has_provider(&self) -> bool {
        self.statuses().iter().any(|s| s.configured)
    }

    /// Produce a completion, falling back through the chain.
    ///
    /// Never fails: when no provider can serve the request the result
    /// carries a sentinel text and [`super::Source::Error`].
    pub fn complete(&self, prompt: &str, options: CompletionOptions<'_>) -> CompletionResult {
        let request = CompletionRequest::new(prompt, options.temperature, options.image);

        if let Some(result) = self.try_slot(&self.primary, &request, options.max_retries) {
            return result;
        }

        // Only the primary provider can see images; nothing to fall back to
        if request.has_image() {
            return CompletionResult::failed(GatewayFailure::VisionUnavailable);
        }

        if let Some(result) = self.try_slot(&self.secondary, &request, options.max_retries) {
            return result;
        }

        if let Some(result) = self.try_slot(&self.tertiary, &request, options.max_retries) {
            return result;
        }

        CompletionResult::failed(GatewayFailure::AllProvidersExhausted)
    }

    fn try_slot(
        &self,
        slot: &Slot,
        request: &CompletionRequest<'_>,
        max_retries: u32,
    ) -> Option<CompletionResult> {
        let Some(provider) = slot.ready_provider() else {
            debug!(role = slot.role, provider = %slot.name, "provider not configured, skipping");
            return None;
        };

        if request.has_image() && !provider.supports_vision() {
            let reason = ProviderError::UnsupportedModality {
                provider: provider.name().to_string(),
            };
            debug!(role = slot.role, "{}", reason);
            return None;
        }

        let attempts = slot.policy.attempts(max_retries);
        for attempt in 1..=attempts {
            match provider.generate(request) {
                Ok(text) => {
                    debug!(provider = provider.name(), attempt, "completion served");
                    return Some(CompletionResult::from_provider(text, provider.name()));
                }
                Err(e) => {
                    warn!(
                        provider = provider.name(),
                        attempt,
                        error = %e,
                        "completion attempt failed"
                    );
                    if attempt < attempts {
                        self.delay.wait(provider.name(), attempt);
                    }
                }
            }
        }

        None
    }
}

fn init_provider<P>(
    name: &str,
    result: Result<P, ProviderError>,
) -> Option<Box<dyn AiProvider>>
where
    P: AiProvider + 'static,
{
    match result {
        Ok(provider) => {
            info!(provider = name, "provider initialised");
            Some(Box::new(provider))
        }
        Err(e) => {
            warn!(provider = name, error = %e, "provider unavailable");
            None
        }
    }
}
