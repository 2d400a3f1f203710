//! Pause strategies used between attempts against the same provider.

use std::thread;
use std::time::Duration;

/// Called by the gateway after a failed attempt that will be retried.
pub trait RetryDelay: Send + Sync {
    /// `attempt` is the 1-based index of the attempt that just failed
    fn wait(&self, provider: &str, attempt: u32);
}

/// Sleep the calling thread for a fixed interval. No backoff.
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay(pub Duration);

impl Default for FixedDelay {
    fn default() -> Self {
        Self(Duration::from_secs(1))
    }
}

impl RetryDelay for FixedDelay {
    fn wait(&self, _provider: &str, _attempt: u32) {
        if !self.0.is_zero() {
            thread::sleep(self.0);
        }
    }
}

/// Retry immediately
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl RetryDelay for NoDelay {
    fn wait(&self, _provider: &str, _attempt: u32) {}
}
