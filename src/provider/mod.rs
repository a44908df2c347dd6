//! Provider module - submission and faucet access to a full node
//!
//! This module provides:
//! - The `Provider` capability the submitter submits through
//! - A JSON-RPC provider for real full nodes
//! - A void provider used when nothing is configured

pub mod json_rpc;
pub mod void;

pub use json_rpc::{Endpoints, JsonRpcProvider};
pub use void::VoidProvider;

use crate::error::SignerResult;
use crate::types::{
    ExecuteTransactionRequestType, FaucetResponse, HttpHeaders, SerializerHints,
    SignatureScheme, SuiAddress, SuiExecuteTransactionResponse,
};

use async_trait::async_trait;

/// Network access used for submission and funding
#[async_trait]
pub trait Provider: Send + Sync {
    /// Submit signed transaction bytes. All byte arguments are base64.
    async fn execute_transaction(
        &self,
        tx_bytes: &str,
        signature_scheme: SignatureScheme,
        signature: &str,
        pub_key: &str,
        request_type: ExecuteTransactionRequestType,
    ) -> SignerResult<SuiExecuteTransactionResponse>;

    /// Ask the network faucet to fund `recipient`
    async fn request_sui_from_faucet(
        &self,
        recipient: &SuiAddress,
        http_headers: Option<&HttpHeaders>,
    ) -> SignerResult<FaucetResponse>;

    /// Endpoint and validation settings a default serializer should reuse
    fn serializer_hints(&self) -> Option<SerializerHints> {
        None
    }
}
