//! Minimal JSON-RPC 2.0 client over HTTP shared by the provider and the
//! remote serializer

use crate::error::{SignerError, SignerResult};
use crate::types::HttpHeaders;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::debug;

/// JSON-RPC client bound to one endpoint
#[derive(Debug)]
pub struct JsonRpcClient {
    /// HTTP client used for RPC calls
    client: reqwest::Client,
    /// Target JSON-RPC endpoint URL
    endpoint: String,
    /// Next request id
    next_id: AtomicU64,
}

/// JSON-RPC envelope
#[derive(Debug, Deserialize)]
struct JsonRpcResponse {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<JsonRpcError>,
}

#[derive(Debug, Deserialize)]
struct JsonRpcError {
    code: i64,
    message: String,
}

impl JsonRpcClient {
    /// Create a client for `endpoint`.
    ///
    /// An empty endpoint is accepted here and rejected on first request, so
    /// callers can build clients before the network is configured.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> SignerResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SignerError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            next_id: AtomicU64::new(1),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Call `method` and decode the result into `T`
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: &str,
        params: Vec<Value>,
    ) -> SignerResult<T> {
        let result = self.request_raw(method, params).await?;
        serde_json::from_value(result).map_err(|e| {
            SignerError::Serialization(format!("Unexpected {} response: {}", method, e))
        })
    }

    /// Call `method` and return the raw `result` value
    pub async fn request_raw(&self, method: &str, params: Vec<Value>) -> SignerResult<Value> {
        if self.endpoint.is_empty() {
            return Err(SignerError::Config(format!(
                "No JSON-RPC endpoint configured for {}",
                method
            )));
        }

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let payload = build_payload(id, method, params);
        debug!("JSON-RPC request {} ({}) to {}", method, id, self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .await?
            .error_for_status()?;

        let envelope: JsonRpcResponse = response.json().await?;
        into_result(envelope)
    }

    /// Plain HTTP POST of a JSON body, used for non-RPC endpoints such as
    /// the faucet
    pub async fn post_json<T: DeserializeOwned>(
        &self,
        url: &str,
        body: &Value,
        headers: Option<&HttpHeaders>,
    ) -> SignerResult<T> {
        let mut request = self.client.post(url).json(body);
        for (name, value) in headers.into_iter().flatten() {
            request = request.header(name.as_str(), value.as_str());
        }

        let response = request.send().await?.error_for_status()?;
        Ok(response.json().await?)
    }
}

fn build_payload(id: u64, method: &str, params: Vec<Value>) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "method": method,
        "params": params,
    })
}

fn into_result(envelope: JsonRpcResponse) -> SignerResult<Value> {
    if let Some(error) = envelope.error {
        return Err(SignerError::Rpc {
            code: error.code,
            message: error.message,
        });
    }

    envelope.result.ok_or_else(|| SignerError::Rpc {
        code: 0,
        message: "rpc returned neither result nor error".to_string(),
    })
}
