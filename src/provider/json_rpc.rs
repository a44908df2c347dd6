//! Full-node provider speaking the Sui JSON-RPC API

use super::Provider;
use crate::config::NetworkConfig;
use crate::error::{SignerError, SignerResult};
use crate::metrics;
use crate::rpc::JsonRpcClient;
use crate::types::{
    ExecuteTransactionRequestType, FaucetResponse, HttpHeaders, SerializerHints,
    SignatureScheme, SuiAddress, SuiExecuteTransactionResponse,
};

use async_trait::async_trait;
use serde_json::json;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Network endpoints a provider talks to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub full_node: String,
    pub faucet: Option<String>,
}

/// Provider backed by a full node's JSON-RPC endpoint and an optional faucet
pub struct JsonRpcProvider {
    /// Network endpoints
    endpoints: Endpoints,
    /// Skip strict response validation in serializers derived from this provider
    skip_data_validation: bool,
    /// HTTP timeout for full-node requests
    timeout: Duration,
    /// JSON-RPC client for the full node
    client: JsonRpcClient,
}

impl JsonRpcProvider {
    /// Create a new provider from network configuration
    pub fn new(config: &NetworkConfig) -> SignerResult<Self> {
        let timeout = Duration::from_secs(config.request_timeout_secs);
        let client = JsonRpcClient::new(config.full_node_url.clone(), timeout)?;

        debug!("JSON-RPC provider for {}", config.full_node_url);

        Ok(Self {
            endpoints: Endpoints {
                full_node: config.full_node_url.clone(),
                faucet: config.faucet_url.clone(),
            },
            skip_data_validation: config.skip_data_validation,
            timeout,
            client,
        })
    }

    /// Get configured endpoints
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    fn faucet_url(&self) -> SignerResult<String> {
        let faucet = self
            .endpoints
            .faucet
            .as_deref()
            .ok_or_else(|| SignerError::Config("No faucet endpoint configured".to_string()))?;

        Ok(format!("{}/gas", faucet.trim_end_matches('/')))
    }
}

#[async_trait]
impl Provider for JsonRpcProvider {
    async fn execute_transaction(
        &self,
        tx_bytes: &str,
        signature_scheme: SignatureScheme,
        signature: &str,
        pub_key: &str,
        request_type: ExecuteTransactionRequestType,
    ) -> SignerResult<SuiExecuteTransactionResponse> {
        let started = Instant::now();
        let result = self
            .client
            .request_raw(
                "sui_executeTransaction",
                vec![
                    json!(tx_bytes),
                    json!(signature_scheme.as_str()),
                    json!(signature),
                    json!(pub_key),
                    json!(request_type.as_str()),
                ],
            )
            .await;

        match result {
            Ok(raw) => {
                let response = SuiExecuteTransactionResponse::new(raw);
                metrics::record_tx_submitted(request_type);
                metrics::record_tx_latency(request_type, started.elapsed().as_secs_f64());
                info!(
                    "Transaction executed ({}): {}",
                    request_type,
                    response.digest().unwrap_or("<no digest>")
                );
                Ok(response)
            }
            Err(e) => {
                metrics::record_tx_failed(request_type);
                warn!("Transaction submission failed ({}): {}", request_type, e);
                Err(e)
            }
        }
    }

    async fn request_sui_from_faucet(
        &self,
        recipient: &SuiAddress,
        http_headers: Option<&HttpHeaders>,
    ) -> SignerResult<FaucetResponse> {
        let url = self.faucet_url()?;
        let body = json!({ "FixedAmountRequest": { "recipient": recipient.as_str() } });

        let result = self
            .client
            .post_json::<FaucetResponse>(&url, &body, http_headers)
            .await
            .and_then(check_faucet_response);

        metrics::record_faucet_request(result.is_ok());
        if let Ok(ref response) = result {
            info!(
                "Faucet sent {} gas objects to {}",
                response.transferred_gas_objects.len(),
                recipient
            );
        }
        result
    }

    fn serializer_hints(&self) -> Option<SerializerHints> {
        Some(SerializerHints {
            endpoint: self.endpoints.full_node.clone(),
            skip_data_validation: self.skip_data_validation,
            timeout: Some(self.timeout),
        })
    }
}

fn check_faucet_response(response: FaucetResponse) -> SignerResult<FaucetResponse> {
    match response.error {
        Some(ref error) => Err(SignerError::Faucet(error.clone())),
        None => Ok(response),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serializer::RpcTxnDataSerializer;

    fn network(faucet: Option<&str>) -> NetworkConfig {
        NetworkConfig {
            full_node_url: "http://127.0.0.1:9000".to_string(),
            faucet_url: faucet.map(str::to_string),
            skip_data_validation: true,
            request_timeout_secs: 5,
        }
    }

    #[test]
    fn test_serializer_hints_follow_config() {
        let provider = JsonRpcProvider::new(&network(None)).unwrap();
        let hints = provider.serializer_hints().unwrap();
        assert_eq!(hints.endpoint, "http://127.0.0.1:9000");
        assert!(hints.skip_data_validation);
        assert_eq!(hints.timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_derived_serializer_uses_configured_timeout() {
        let mut config = network(None);
        config.request_timeout_secs = 1;
        let provider = JsonRpcProvider::new(&config).unwrap();

        let serializer = RpcTxnDataSerializer::from_hints(provider.serializer_hints());
        assert_eq!(serializer.endpoint(), "http://127.0.0.1:9000");
        assert_eq!(serializer.timeout(), Duration::from_secs(1));
    }

    #[test]
    fn test_faucet_url() {
        let provider = JsonRpcProvider::new(&network(Some("http://127.0.0.1:5003/"))).unwrap();
        assert_eq!(provider.faucet_url().unwrap(), "http://127.0.0.1:5003/gas");
    }

    #[tokio::test]
    async fn test_faucet_without_endpoint_is_config_error() {
        let provider = JsonRpcProvider::new(&network(None)).unwrap();
        let addr: SuiAddress = "0x1".parse().unwrap();
        let err = provider
            .request_sui_from_faucet(&addr, None)
            .await
            .unwrap_err();
        assert!(matches!(err, SignerError::Config(_)));
    }

    #[test]
    fn test_faucet_error_body() {
        let response = FaucetResponse {
            transferred_gas_objects: vec![],
            error: Some("rate limited".to_string()),
        };
        assert!(matches!(
            check_faucet_response(response),
            Err(SignerError::Faucet(ref msg)) if msg == "rate limited"
        ));
    }
}
