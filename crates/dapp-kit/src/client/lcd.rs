//! Query backend over the CosmWasm REST (LCD) gateway.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use futures::future::BoxFuture;
use reqwest::Url;
use serde::Deserialize;
use serde_json::Value;

use crate::error::BackendError;
use crate::types::WirePayload;

use super::backend::QueryBackend;

/// Smart query response body.
#[derive(Deserialize)]
struct SmartQueryResponse {
    data: Option<Value>,
}

/// Error body returned by the gateway on failure.
#[derive(Deserialize)]
struct GatewayError {
    #[serde(default)]
    code: Option<i64>,
    #[serde(default)]
    message: String,
}

/// Runs smart queries against `{endpoint}/cosmwasm/wasm/v1/contract/...`.
///
/// Each query is a single GET request; nothing is retried or cached.
///
/// # Example
///
/// ```rust,no_run
/// use dapp_kit::*;
///
/// # async fn example() -> Result<(), Error> {
/// let session = SessionState::new()
///     .with_query_backend(LcdQueryBackend::new("https://lcd.example.com"));
/// # Ok(())
/// # }
/// ```
pub struct LcdQueryBackend {
    endpoint: String,
    client: reqwest::Client,
}

impl LcdQueryBackend {
    /// Create a backend for the given gateway URL.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(endpoint, reqwest::Client::new())
    }

    /// Create a backend reusing an existing HTTP client.
    pub fn with_client(endpoint: impl Into<String>, client: reqwest::Client) -> Self {
        let endpoint = endpoint.into().trim_end_matches('/').to_string();
        Self { endpoint, client }
    }

    /// The gateway URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// URL of the smart query for `msg` on `contract`.
    ///
    /// The contract address and the base64 query are percent-encoded as
    /// path segments.
    pub fn smart_query_url(
        &self,
        contract: &str,
        msg: &WirePayload,
    ) -> Result<Url, BackendError> {
        let query = STANDARD.encode(msg.to_vec()?);
        let invalid = || BackendError::InvalidEndpoint(self.endpoint.clone());

        let mut url = Url::parse(&self.endpoint).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|_| invalid())?
            .pop_if_empty()
            .extend(["cosmwasm", "wasm", "v1", "contract", contract, "smart", query.as_str()]);
        Ok(url)
    }

    async fn smart_query(
        &self,
        contract: &str,
        msg: &WirePayload,
    ) -> Result<Value, BackendError> {
        let url = self.smart_query_url(contract, msg)?;
        tracing::trace!(%url, "smart query");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = match serde_json::from_str::<GatewayError>(&body) {
                Ok(err) if !err.message.is_empty() => match err.code {
                    Some(code) => format!("{} (code: {})", err.message, code),
                    None => err.message,
                },
                _ => format!("HTTP {}: {}", status, body),
            };
            return Err(BackendError::network(message, Some(status.as_u16())));
        }

        let response: SmartQueryResponse = serde_json::from_str(&body)
            .map_err(|e| BackendError::InvalidResponse(format!("{}: {}", e, body)))?;
        response.data.ok_or_else(|| {
            BackendError::InvalidResponse("Missing data in response".to_string())
        })
    }
}

impl QueryBackend for LcdQueryBackend {
    fn query<'a>(
        &'a self,
        contract: &'a str,
        msg: &'a WirePayload,
    ) -> BoxFuture<'a, Result<Value, BackendError>> {
        Box::pin(self.smart_query(contract, msg))
    }
}

impl std::fmt::Debug for LcdQueryBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LcdQueryBackend")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}
