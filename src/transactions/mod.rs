//! Transaction intents accepted by the submitter
//!
//! Each non-`bytes` intent carries the payload its serializer operation
//! expects. The submitter only looks at the tag, never the payload.

use crate::error::{SignerError, SignerResult};
use crate::types::{Base64DataBuffer, SuiAddress};

use serde::{Deserialize, Serialize};

/// Hex object id as used by the node API
pub type ObjectId = String;

/// Transfer an owned object to a recipient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferObjectTransaction {
    pub object_id: ObjectId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_payment: Option<ObjectId>,
    pub gas_budget: u64,
    pub recipient: SuiAddress,
}

/// Transfer SUI from a coin, optionally a partial amount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferSuiTransaction {
    #[serde(alias = "objectId")]
    pub sui_object_id: ObjectId,
    #[serde(default)]
    pub gas_budget: u64,
    pub recipient: SuiAddress,
    #[serde(default)]
    pub amount: Option<u64>,
}

/// Send coins to several recipients, paying gas from a separate coin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayTransaction {
    pub input_coins: Vec<ObjectId>,
    pub recipients: Vec<SuiAddress>,
    pub amounts: Vec<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_payment: Option<ObjectId>,
    pub gas_budget: u64,
}

/// Send SUI coins to several recipients, paying gas from the first input coin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaySuiTransaction {
    pub input_coins: Vec<ObjectId>,
    pub recipients: Vec<SuiAddress>,
    pub amounts: Vec<u64>,
    pub gas_budget: u64,
}

/// Send the full balance of the input SUI coins, less gas, to one recipient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayAllSuiTransaction {
    pub input_coins: Vec<ObjectId>,
    pub recipient: SuiAddress,
    pub gas_budget: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeCoinTransaction {
    pub primary_coin: ObjectId,
    pub coin_to_merge: ObjectId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_payment: Option<ObjectId>,
    pub gas_budget: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitCoinTransaction {
    pub coin_object_id: ObjectId,
    pub split_amounts: Vec<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_payment: Option<ObjectId>,
    pub gas_budget: u64,
}

/// Call a Move entry function
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveCallTransaction {
    pub package_object_id: ObjectId,
    pub module: String,
    pub function: String,
    #[serde(default)]
    pub type_arguments: Vec<String>,
    #[serde(default)]
    pub arguments: Vec<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_payment: Option<ObjectId>,
    pub gas_budget: u64,
}

/// Publish a package from base64-encoded compiled modules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishTransaction {
    pub compiled_modules: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_payment: Option<ObjectId>,
    pub gas_budget: u64,
}

/// Typed transaction intent, tagged as `{ "kind": ..., "data": ... }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "camelCase")]
pub enum SignableTransaction {
    /// Already serialized transaction bytes
    Bytes(Base64DataBuffer),
    MoveCall(MoveCallTransaction),
    TransferSui(TransferSuiTransaction),
    TransferObject(TransferObjectTransaction),
    MergeCoin(MergeCoinTransaction),
    SplitCoin(SplitCoinTransaction),
    Pay(PayTransaction),
    PaySui(PaySuiTransaction),
    PayAllSui(PayAllSuiTransaction),
    Publish(PublishTransaction),
}

/// Every tag a tagged intent may carry
pub const KNOWN_KINDS: [&str; 10] = [
    "bytes",
    "moveCall",
    "transferSui",
    "transferObject",
    "mergeCoin",
    "splitCoin",
    "pay",
    "paySui",
    "payAllSui",
    "publish",
];

impl SignableTransaction {
    /// Wire tag of this intent
    pub fn kind(&self) -> &'static str {
        match self {
            SignableTransaction::Bytes(_) => "bytes",
            SignableTransaction::MoveCall(_) => "moveCall",
            SignableTransaction::TransferSui(_) => "transferSui",
            SignableTransaction::TransferObject(_) => "transferObject",
            SignableTransaction::MergeCoin(_) => "mergeCoin",
            SignableTransaction::SplitCoin(_) => "splitCoin",
            SignableTransaction::Pay(_) => "pay",
            SignableTransaction::PaySui(_) => "paySui",
            SignableTransaction::PayAllSui(_) => "payAllSui",
            SignableTransaction::Publish(_) => "publish",
        }
    }

    /// Resolve an untyped `{ kind, data }` value.
    ///
    /// The tag is checked before the payload so an unknown kind is reported
    /// by name rather than as a generic decode failure.
    pub fn from_tagged(value: serde_json::Value) -> SignerResult<Self> {
        let kind = value
            .get("kind")
            .and_then(|k| k.as_str())
            .ok_or_else(|| {
                SignerError::InvalidTransaction("missing string \"kind\" field".to_string())
            })?;

        if !KNOWN_KINDS.contains(&kind) {
            return Err(SignerError::UnknownTransactionKind {
                kind: kind.to_string(),
            });
        }

        let kind = kind.to_string();
        serde_json::from_value(value).map_err(|e| {
            SignerError::InvalidTransaction(format!("malformed {} payload: {}", kind, e))
        })
    }
}

/// Anything `sign_and_execute_transaction` accepts
#[derive(Debug, Clone, PartialEq)]
pub enum TransactionInput {
    /// Raw serialized transaction bytes
    Bytes(Base64DataBuffer),
    /// Typed intent
    Intent(SignableTransaction),
    /// Untyped tagged intent, resolved at dispatch time
    Tagged(serde_json::Value),
}

impl From<Base64DataBuffer> for TransactionInput {
    fn from(bytes: Base64DataBuffer) -> Self {
        TransactionInput::Bytes(bytes)
    }
}

impl From<Vec<u8>> for TransactionInput {
    fn from(bytes: Vec<u8>) -> Self {
        TransactionInput::Bytes(bytes.into())
    }
}

impl From<SignableTransaction> for TransactionInput {
    fn from(intent: SignableTransaction) -> Self {
        TransactionInput::Intent(intent)
    }
}

impl From<serde_json::Value> for TransactionInput {
    fn from(value: serde_json::Value) -> Self {
        TransactionInput::Tagged(value)
    }
}
