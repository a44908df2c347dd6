//! Serializer that asks the full node to build transaction bytes

use super::TxnDataSerializer;
use crate::error::{SignerError, SignerResult};
use crate::rpc::JsonRpcClient;
use crate::transactions::{
    MergeCoinTransaction, MoveCallTransaction, PayAllSuiTransaction, PaySuiTransaction,
    PayTransaction, PublishTransaction, SplitCoinTransaction, TransferObjectTransaction,
    TransferSuiTransaction,
};
use crate::types::{Base64DataBuffer, SerializerHints, SuiAddress};

use async_trait::async_trait;
use serde::de::IgnoredAny;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;
use tokio::sync::OnceCell;
use tracing::debug;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Strict shape of the node's transaction-building responses
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TransactionBytes {
    tx_bytes: Base64DataBuffer,
    #[serde(rename = "gas")]
    _gas: IgnoredAny,
    #[serde(rename = "inputObjects")]
    _input_objects: IgnoredAny,
}

/// Remote serializer using the node's `sui_*` transaction builder methods
pub struct RpcTxnDataSerializer {
    /// Full-node JSON-RPC endpoint
    endpoint: String,
    /// Accept responses without checking their full shape
    skip_data_validation: bool,
    /// HTTP request timeout
    timeout: Duration,
    /// Client built on first use
    client: OnceCell<JsonRpcClient>,
}

impl RpcTxnDataSerializer {
    /// Create a serializer for `endpoint`.
    ///
    /// Never performs I/O; an empty endpoint fails on first use.
    pub fn new(endpoint: impl Into<String>, skip_data_validation: bool) -> Self {
        Self {
            endpoint: endpoint.into(),
            skip_data_validation,
            timeout: DEFAULT_TIMEOUT,
            client: OnceCell::new(),
        }
    }

    /// Build from provider hints, falling back to an unconfigured serializer
    /// with validation enabled
    pub fn from_hints(hints: Option<SerializerHints>) -> Self {
        let hints = hints.unwrap_or_default();
        let serializer = Self::new(hints.endpoint, hints.skip_data_validation);
        match hints.timeout {
            Some(timeout) => serializer.with_timeout(timeout),
            None => serializer,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn skip_data_validation(&self) -> bool {
        self.skip_data_validation
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn client(&self) -> SignerResult<&JsonRpcClient> {
        self.client
            .get_or_try_init(|| async { JsonRpcClient::new(self.endpoint.clone(), self.timeout) })
            .await
    }

    async fn build(&self, method: &str, params: Vec<Value>) -> SignerResult<Base64DataBuffer> {
        let raw = self.client().await?.request_raw(method, params).await?;
        let tx_bytes = parse_tx_bytes(method, raw, self.skip_data_validation)?;
        debug!("{} built {} transaction bytes", method, tx_bytes.len());
        Ok(tx_bytes)
    }
}

/// Extract `txBytes` from a transaction-building response
fn parse_tx_bytes(
    method: &str,
    raw: Value,
    skip_data_validation: bool,
) -> SignerResult<Base64DataBuffer> {
    let tx_bytes = if skip_data_validation {
        let encoded = raw.get("txBytes").and_then(|v| v.as_str()).ok_or_else(|| {
            SignerError::Serialization(format!("{} response has no txBytes", method))
        })?;
        Base64DataBuffer::from_base64(encoded)?
    } else {
        let parsed: TransactionBytes = serde_json::from_value(raw).map_err(|e| {
            SignerError::Serialization(format!("Invalid {} response: {}", method, e))
        })?;
        parsed.tx_bytes
    };

    if tx_bytes.is_empty() {
        return Err(SignerError::Serialization(format!(
            "{} returned empty transaction bytes",
            method
        )));
    }

    Ok(tx_bytes)
}

#[async_trait]
impl TxnDataSerializer for RpcTxnDataSerializer {
    async fn new_transfer_object(
        &self,
        signer_address: &SuiAddress,
        tx: &TransferObjectTransaction,
    ) -> SignerResult<Base64DataBuffer> {
        self.build(
            "sui_transferObject",
            vec![
                json!(signer_address),
                json!(tx.object_id),
                json!(tx.gas_payment),
                json!(tx.gas_budget),
                json!(tx.recipient),
            ],
        )
        .await
    }

    async fn new_transfer_sui(
        &self,
        signer_address: &SuiAddress,
        tx: &TransferSuiTransaction,
    ) -> SignerResult<Base64DataBuffer> {
        self.build(
            "sui_transferSui",
            vec![
                json!(signer_address),
                json!(tx.sui_object_id),
                json!(tx.gas_budget),
                json!(tx.recipient),
                json!(tx.amount),
            ],
        )
        .await
    }

    async fn new_pay(
        &self,
        signer_address: &SuiAddress,
        tx: &PayTransaction,
    ) -> SignerResult<Base64DataBuffer> {
        self.build(
            "sui_pay",
            vec![
                json!(signer_address),
                json!(tx.input_coins),
                json!(tx.recipients),
                json!(tx.amounts),
                json!(tx.gas_payment),
                json!(tx.gas_budget),
            ],
        )
        .await
    }

    async fn new_pay_sui(
        &self,
        signer_address: &SuiAddress,
        tx: &PaySuiTransaction,
    ) -> SignerResult<Base64DataBuffer> {
        self.build(
            "sui_paySui",
            vec![
                json!(signer_address),
                json!(tx.input_coins),
                json!(tx.recipients),
                json!(tx.amounts),
                json!(tx.gas_budget),
            ],
        )
        .await
    }

    async fn new_pay_all_sui(
        &self,
        signer_address: &SuiAddress,
        tx: &PayAllSuiTransaction,
    ) -> SignerResult<Base64DataBuffer> {
        self.build(
            "sui_payAllSui",
            vec![
                json!(signer_address),
                json!(tx.input_coins),
                json!(tx.recipient),
                json!(tx.gas_budget),
            ],
        )
        .await
    }

    async fn new_merge_coin(
        &self,
        signer_address: &SuiAddress,
        tx: &MergeCoinTransaction,
    ) -> SignerResult<Base64DataBuffer> {
        self.build(
            "sui_mergeCoins",
            vec![
                json!(signer_address),
                json!(tx.primary_coin),
                json!(tx.coin_to_merge),
                json!(tx.gas_payment),
                json!(tx.gas_budget),
            ],
        )
        .await
    }

    async fn new_split_coin(
        &self,
        signer_address: &SuiAddress,
        tx: &SplitCoinTransaction,
    ) -> SignerResult<Base64DataBuffer> {
        self.build(
            "sui_splitCoin",
            vec![
                json!(signer_address),
                json!(tx.coin_object_id),
                json!(tx.split_amounts),
                json!(tx.gas_payment),
                json!(tx.gas_budget),
            ],
        )
        .await
    }

    async fn new_move_call(
        &self,
        signer_address: &SuiAddress,
        tx: &MoveCallTransaction,
    ) -> SignerResult<Base64DataBuffer> {
        self.build(
            "sui_moveCall",
            vec![
                json!(signer_address),
                json!(tx.package_object_id),
                json!(tx.module),
                json!(tx.function),
                json!(tx.type_arguments),
                json!(tx.arguments),
                json!(tx.gas_payment),
                json!(tx.gas_budget),
            ],
        )
        .await
    }

    async fn new_publish(
        &self,
        signer_address: &SuiAddress,
        tx: &PublishTransaction,
    ) -> SignerResult<Base64DataBuffer> {
        self.build(
            "sui_publish",
            vec![
                json!(signer_address),
                json!(tx.compiled_modules),
                json!(tx.gas_payment),
                json!(tx.gas_budget),
            ],
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hints_defaults() {
        let serializer = RpcTxnDataSerializer::from_hints(None);
        assert_eq!(serializer.endpoint(), "");
        assert!(!serializer.skip_data_validation());
        assert_eq!(serializer.timeout(), DEFAULT_TIMEOUT);

        let serializer = RpcTxnDataSerializer::from_hints(Some(SerializerHints {
            endpoint: "http://127.0.0.1:9000".into(),
            skip_data_validation: true,
            timeout: Some(Duration::from_secs(2)),
        }));
        assert_eq!(serializer.endpoint(), "http://127.0.0.1:9000");
        assert!(serializer.skip_data_validation());
        assert_eq!(serializer.timeout(), Duration::from_secs(2));
    }

    #[test]
    fn test_parse_strict_response() {
        let raw = json!({ "txBytes": "AQID", "gas": { "objectId": "0x9" }, "inputObjects": [] });
        let bytes = parse_tx_bytes("sui_pay", raw, false).unwrap();
        assert_eq!(bytes.as_bytes(), &[1, 2, 3]);
    }

    #[test]
    fn test_strict_rejects_incomplete_response() {
        let raw = json!({ "txBytes": "AQID" });
        let err = parse_tx_bytes("sui_pay", raw, false).unwrap_err();
        assert!(matches!(err, SignerError::Serialization(_)));
    }

    #[test]
    fn test_skip_validation_only_needs_tx_bytes() {
        let raw = json!({ "txBytes": "AQID" });
        let bytes = parse_tx_bytes("sui_pay", raw, true).unwrap();
        assert_eq!(bytes.len(), 3);

        let err = parse_tx_bytes("sui_pay", json!({}), true).unwrap_err();
        assert!(matches!(err, SignerError::Serialization(_)));
    }

    #[test]
    fn test_empty_tx_bytes_rejected() {
        let raw = json!({ "txBytes": "", "gas": {}, "inputObjects": [] });
        assert!(parse_tx_bytes("sui_publish", raw, false).is_err());
    }

    #[tokio::test]
    async fn test_unconfigured_serializer_fails_on_use() {
        let serializer = RpcTxnDataSerializer::from_hints(None);
        let tx = TransferSuiTransaction {
            sui_object_id: "0x1".into(),
            gas_budget: 1000,
            recipient: "0x2".parse().unwrap(),
            amount: Some(100),
        };
        let signer: SuiAddress = "0x3".parse().unwrap();

        let err = serializer.new_transfer_sui(&signer, &tx).await.unwrap_err();
        assert!(matches!(err, SignerError::Config(_)));
    }
}
