//! Shared value types exchanged with signers, serializers and providers
//!
//! These mirror the shapes used by the full-node JSON-RPC API so they can be
//! passed through without conversion.

use crate::error::{SignerError, SignerResult};

use base64::{engine::general_purpose::STANDARD as BASE64_STANDARD, Engine as _};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Extra HTTP headers forwarded with faucet requests
pub type HttpHeaders = HashMap<String, String>;

/// Hex-encoded account address, always `0x`-prefixed and lowercase
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SuiAddress(String);

impl SuiAddress {
    /// Create an address from raw bytes
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(format!("0x{}", hex::encode(bytes)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SuiAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for SuiAddress {
    type Err = SignerError;

    fn from_str(s: &str) -> SignerResult<Self> {
        let trimmed = s.trim();
        let hex_part = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        if hex_part.is_empty() || !hex_part.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(SignerError::Encoding(format!("Invalid address: {}", s)));
        }

        Ok(Self(format!("0x{}", hex_part.to_ascii_lowercase())))
    }
}

/// Owned byte buffer carried as base64 text on the wire
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Base64DataBuffer(Vec<u8>);

impl Base64DataBuffer {
    pub fn new(data: Vec<u8>) -> Self {
        Self(data)
    }

    /// Decode a base64 string
    pub fn from_base64(encoded: &str) -> SignerResult<Self> {
        BASE64_STANDARD
            .decode(encoded.trim())
            .map(Self)
            .map_err(|e| SignerError::Encoding(format!("Invalid base64: {}", e)))
    }

    pub fn to_base64(&self) -> String {
        BASE64_STANDARD.encode(&self.0)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for Base64DataBuffer {
    fn from(data: Vec<u8>) -> Self {
        Self(data)
    }
}

impl From<&[u8]> for Base64DataBuffer {
    fn from(data: &[u8]) -> Self {
        Self(data.to_vec())
    }
}

impl AsRef<[u8]> for Base64DataBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Base64DataBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base64())
    }
}

impl Serialize for Base64DataBuffer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_base64())
    }
}

impl<'de> Deserialize<'de> for Base64DataBuffer {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        Self::from_base64(&encoded).map_err(serde::de::Error::custom)
    }
}

/// Signature scheme identifiers accepted by the node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignatureScheme {
    #[serde(rename = "ED25519")]
    Ed25519,
    #[serde(rename = "Secp256k1")]
    Secp256k1,
}

impl SignatureScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignatureScheme::Ed25519 => "ED25519",
            SignatureScheme::Secp256k1 => "Secp256k1",
        }
    }

    /// Flag byte prefixed to the public key when deriving addresses
    pub fn flag(&self) -> u8 {
        match self {
            SignatureScheme::Ed25519 => 0x00,
            SignatureScheme::Secp256k1 => 0x01,
        }
    }
}

impl fmt::Display for SignatureScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Signature over transaction bytes together with the signer's public key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignaturePubkeyPair {
    pub signature_scheme: SignatureScheme,
    pub signature: Base64DataBuffer,
    pub pub_key: Base64DataBuffer,
}

/// Confirmation strength requested from the node on submission
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExecuteTransactionRequestType {
    /// Return as soon as the transaction is accepted
    ImmediateReturn,
    /// Return once a transaction certificate is formed
    WaitForTxCert,
    /// Return once effects are certified, without waiting for local execution
    WaitForEffectsCert,
    /// Return after the submitting node has executed and indexed the effects
    #[default]
    WaitForLocalExecution,
}

impl ExecuteTransactionRequestType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExecuteTransactionRequestType::ImmediateReturn => "ImmediateReturn",
            ExecuteTransactionRequestType::WaitForTxCert => "WaitForTxCert",
            ExecuteTransactionRequestType::WaitForEffectsCert => "WaitForEffectsCert",
            ExecuteTransactionRequestType::WaitForLocalExecution => "WaitForLocalExecution",
        }
    }
}

impl fmt::Display for ExecuteTransactionRequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExecuteTransactionRequestType {
    type Err = SignerError;

    fn from_str(s: &str) -> SignerResult<Self> {
        match s {
            "ImmediateReturn" => Ok(Self::ImmediateReturn),
            "WaitForTxCert" => Ok(Self::WaitForTxCert),
            "WaitForEffectsCert" => Ok(Self::WaitForEffectsCert),
            "WaitForLocalExecution" => Ok(Self::WaitForLocalExecution),
            other => Err(SignerError::Config(format!(
                "Unknown execute transaction request type: {}",
                other
            ))),
        }
    }
}

/// Raw node response to `sui_executeTransaction`
///
/// The submitter never inspects this; it is returned to the caller as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SuiExecuteTransactionResponse(serde_json::Value);

impl SuiExecuteTransactionResponse {
    pub fn new(raw: serde_json::Value) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> &serde_json::Value {
        &self.0
    }

    pub fn into_raw(self) -> serde_json::Value {
        self.0
    }

    /// Transaction digest, when the response shape carries one
    pub fn digest(&self) -> Option<&str> {
        const PATHS: [&str; 4] = [
            "/certificate/transactionDigest",
            "/EffectsCert/certificate/transactionDigest",
            "/TxCert/certificate/transactionDigest",
            "/ImmediateReturn/tx_digest",
        ];

        PATHS
            .iter()
            .find_map(|path| self.0.pointer(path).and_then(|v| v.as_str()))
    }
}

/// One gas coin sent by the faucet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaucetCoinInfo {
    pub amount: u64,
    pub id: String,
    pub transfer_tx_digest: String,
}

/// Faucet response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaucetResponse {
    #[serde(default)]
    pub transferred_gas_objects: Vec<FaucetCoinInfo>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Configuration a provider can expose so a default serializer can target
/// the same node
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SerializerHints {
    pub endpoint: String,
    pub skip_data_validation: bool,
    /// HTTP timeout the provider applies to its own requests
    pub timeout: Option<Duration>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_request_type_is_local_execution() {
        assert_eq!(
            ExecuteTransactionRequestType::default(),
            ExecuteTransactionRequestType::WaitForLocalExecution
        );
    }

    #[test]
    fn test_request_type_parses_wire_names() {
        let parsed: ExecuteTransactionRequestType = "WaitForEffectsCert".parse().unwrap();
        assert_eq!(parsed, ExecuteTransactionRequestType::WaitForEffectsCert);
        assert_eq!(
            serde_json::to_value(parsed).unwrap(),
            json!("WaitForEffectsCert")
        );
        assert!("WaitForever".parse::<ExecuteTransactionRequestType>().is_err());
    }

    #[test]
    fn test_address_normalization() {
        let addr: SuiAddress = "0xABCDEF".parse().unwrap();
        assert_eq!(addr.as_str(), "0xabcdef");

        let bare: SuiAddress = "abcdef".parse().unwrap();
        assert_eq!(bare, addr);

        assert!("0xzz".parse::<SuiAddress>().is_err());
        assert!("0x".parse::<SuiAddress>().is_err());
    }

    #[test]
    fn test_base64_buffer_serde() {
        let buf = Base64DataBuffer::new(vec![1, 2, 3]);
        let encoded = serde_json::to_value(&buf).unwrap();
        assert_eq!(encoded, json!("AQID"));

        let decoded: Base64DataBuffer = serde_json::from_value(encoded).unwrap();
        assert_eq!(decoded.as_bytes(), &[1, 2, 3]);

        assert!(Base64DataBuffer::from_base64("not base64!").is_err());
    }

    #[test]
    fn test_response_digest_lookup() {
        let resp = SuiExecuteTransactionResponse::new(json!({
            "EffectsCert": {
                "certificate": { "transactionDigest": "D1g3st" },
                "effects": {}
            }
        }));
        assert_eq!(resp.digest(), Some("D1g3st"));

        let empty = SuiExecuteTransactionResponse::new(json!({}));
        assert_eq!(empty.digest(), None);
    }

    #[test]
    fn test_faucet_response_parsing() {
        let resp: FaucetResponse = serde_json::from_value(json!({
            "transferredGasObjects": [
                { "amount": 50000, "id": "0x5", "transferTxDigest": "abc" }
            ],
            "error": null
        }))
        .unwrap();

        assert_eq!(resp.transferred_gas_objects.len(), 1);
        assert_eq!(resp.transferred_gas_objects[0].amount, 50000);
        assert!(resp.error.is_none());
    }
}
