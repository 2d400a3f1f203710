//! Shared blocking HTTP plumbing for the provider adapters.

use reqwest::blocking::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

use super::ProviderError;

/// Build the blocking client every adapter uses
pub fn build_client(timeout: Duration) -> Result<Client, ProviderError> {
    Ok(Client::builder().timeout(timeout).build()?)
}

/// POST `body` as JSON and decode the JSON response.
///
/// Non-2xx statuses become [`ProviderError::Http`] with the response body;
/// a body that does not match `R` becomes [`ProviderError::MalformedResponse`].
pub fn post_json<B, R>(request: RequestBuilder, body: &B) -> Result<R, ProviderError>
where
    B: Serialize + ?Sized,
    R: DeserializeOwned,
{
    let response = request
        .header("Content-Type", "application/json")
        .json(body)
        .send()?;

    let status = response.status();
    let text = response.text()?;

    if !status.is_success() {
        return Err(ProviderError::Http {
            status: status.as_u16(),
            body: text,
        });
    }

    Ok(serde_json::from_str(&text)?)
}
