//! Response helpers shared by the upstream clients.

use std::time::Duration;

use crate::GenAiError;

/// Build the pooled [`reqwest::Client`] shared by every upstream client.
///
/// `timeout` bounds each individual HTTP exchange.
pub fn build_client(timeout: Duration) -> Result<reqwest::Client, GenAiError> {
    Ok(reqwest::Client::builder().timeout(timeout).build()?)
}

/// Ensure the response has a success status code. Returns the response
/// unchanged on success, or a [`GenAiError::Api`] containing the status
/// and body text on failure.
pub(crate) async fn ensure_success(
    response: reqwest::Response,
) -> Result<reqwest::Response, GenAiError> {
    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        return Err(GenAiError::Api {
            status: status.as_u16(),
            body,
        });
    }
    Ok(response)
}

/// Parse a successful JSON response body into the expected type.
pub(crate) async fn parse_response<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, GenAiError> {
    let response = ensure_success(response).await?;
    Ok(response.json::<T>().await?)
}
