//! Provider used when no network is configured

use super::Provider;
use crate::error::{SignerError, SignerResult};
use crate::types::{
    ExecuteTransactionRequestType, FaucetResponse, HttpHeaders, SignatureScheme, SuiAddress,
    SuiExecuteTransactionResponse,
};

use async_trait::async_trait;

/// Provider with no network behind it.
///
/// Construction always succeeds; every operation fails when called.
#[derive(Debug, Clone, Copy, Default)]
pub struct VoidProvider;

impl VoidProvider {
    pub fn new() -> Self {
        Self
    }
}

fn unavailable(operation: &str) -> SignerError {
    SignerError::ProviderUnavailable {
        operation: operation.to_string(),
    }
}

#[async_trait]
impl Provider for VoidProvider {
    async fn execute_transaction(
        &self,
        _tx_bytes: &str,
        _signature_scheme: SignatureScheme,
        _signature: &str,
        _pub_key: &str,
        _request_type: ExecuteTransactionRequestType,
    ) -> SignerResult<SuiExecuteTransactionResponse> {
        Err(unavailable("executeTransaction"))
    }

    async fn request_sui_from_faucet(
        &self,
        _recipient: &SuiAddress,
        _http_headers: Option<&HttpHeaders>,
    ) -> SignerResult<FaucetResponse> {
        Err(unavailable("requestSuiFromFaucet"))
    }
}
