use anyhow::Result;

use crate::cli::ai::{AttemptPolicy, CompletionGateway, ProviderStatus};

/// Execute the providers command - show the fallback chain
pub fn run_providers(gateway: &CompletionGateway) -> Result<()> {
    for (i, status) in gateway.statuses().iter().enumerate() {
        println!("{}. {}", i + 1, describe(status));
    }

    if !gateway.has_provider() {
        println!("\nNo providers configured. Set GEMINI_API_KEY, COHERE_API_KEY or HF_TOKEN.");
    }

    Ok(())
}

fn describe(status: &ProviderStatus) -> String {
    let state = if status.configured { "ready" } else { "not configured" };
    let modality = if status.supports_vision { "text+vision" } else { "text" };
    let attempts = match status.attempts {
        AttemptPolicy::RetryBudget => "retries",
        AttemptPolicy::Single => "single attempt",
    };
    format!(
        "{:<7} {:<10} {:<12} {:<15} {}",
        status.name, status.role, modality, attempts, state
    )
}
