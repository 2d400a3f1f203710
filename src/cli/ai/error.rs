use thiserror::Error;

/// Why a single provider attempt failed.
///
/// The gateway treats every variant the same way: log, retry while the
/// budget lasts, then fall through to the next provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("{0} is not configured")]
    Unconfigured(&'static str),

    #[error("{provider} cannot process images")]
    UnsupportedModality { provider: String },

    #[error("API error {status}: {body}")]
    Http { status: u16, body: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl ProviderError {
    pub fn malformed(detail: impl Into<String>) -> Self {
        Self::MalformedResponse(detail.into())
    }
}

impl From<serde_json::Error> for ProviderError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedResponse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_message() {
        let err = ProviderError::Http {
            status: 429,
            body: "rate limited".to_string(),
        };
        assert_eq!(err.to_string(), "API error 429: rate limited");
    }

    #[test]
    fn test_json_error_is_malformed() {
        let err: ProviderError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, ProviderError::MalformedResponse(_)));
    }
}
