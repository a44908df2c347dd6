//! Transaction submitter: serialize, sign and submit in one call

use super::Signer;
use crate::error::SignerResult;
use crate::provider::{Provider, VoidProvider};
use crate::serializer::{RpcTxnDataSerializer, TxnDataSerializer};
use crate::transactions::{
    MergeCoinTransaction, MoveCallTransaction, PayAllSuiTransaction, PaySuiTransaction,
    PayTransaction, PublishTransaction, SignableTransaction, SplitCoinTransaction,
    TransactionInput, TransferObjectTransaction, TransferSuiTransaction,
};
use crate::types::{
    Base64DataBuffer, ExecuteTransactionRequestType, FaucetResponse, HttpHeaders,
    SignaturePubkeyPair, SuiAddress, SuiExecuteTransactionResponse,
};

use std::sync::Arc;
use tracing::debug;

/// Signing identity bound to a provider and a serializer.
///
/// Holds no per-call state; concurrent calls on one instance are independent.
#[derive(Clone)]
pub struct TransactionSubmitter<S: Signer> {
    /// Signing identity
    signer: S,
    /// Submission and faucet access
    provider: Arc<dyn Provider>,
    /// Intent serializer
    serializer: Arc<dyn TxnDataSerializer>,
    /// Serializer was supplied by the caller rather than derived from the provider
    serializer_supplied: bool,
}

impl<S: Signer> TransactionSubmitter<S> {
    /// Create a submitter.
    ///
    /// Without a provider, a `VoidProvider` is used. Without a serializer, a
    /// remote serializer is derived from the provider's hints. Never fails
    /// and performs no I/O.
    pub fn new(
        signer: S,
        provider: Option<Arc<dyn Provider>>,
        serializer: Option<Arc<dyn TxnDataSerializer>>,
    ) -> Self {
        let provider = provider.unwrap_or_else(|| Arc::new(VoidProvider::new()));
        let serializer_supplied = serializer.is_some();
        let serializer = serializer.unwrap_or_else(|| {
            Arc::new(RpcTxnDataSerializer::from_hints(provider.serializer_hints()))
        });

        Self {
            signer,
            provider,
            serializer,
            serializer_supplied,
        }
    }

    pub fn signer(&self) -> &S {
        &self.signer
    }

    pub fn provider(&self) -> &Arc<dyn Provider> {
        &self.provider
    }

    pub fn serializer(&self) -> &Arc<dyn TxnDataSerializer> {
        &self.serializer
    }

    pub async fn get_address(&self) -> SignerResult<SuiAddress> {
        self.signer.get_address().await
    }

    pub async fn sign_data(&self, data: &Base64DataBuffer) -> SignerResult<SignaturePubkeyPair> {
        self.signer.sign_data(data).await
    }

    /// Bind the same identity to a different provider.
    ///
    /// A caller-supplied serializer is kept; a derived one is re-derived
    /// from the new provider.
    pub fn connect(&self, provider: Arc<dyn Provider>) -> SignerResult<Self> {
        let signer = self.signer.rebind()?;
        let serializer = self
            .serializer_supplied
            .then(|| Arc::clone(&self.serializer));

        Ok(Self::new(signer, Some(provider), serializer))
    }

    /// Request gas coins from the faucet for this identity's address
    pub async fn request_sui_from_faucet(
        &self,
        http_headers: Option<&HttpHeaders>,
    ) -> SignerResult<FaucetResponse> {
        let address = self.get_address().await?;
        self.provider
            .request_sui_from_faucet(&address, http_headers)
            .await
    }

    /// Sign a transaction and submit it to the full node for execution.
    ///
    /// `None` as the request type means `WaitForLocalExecution`.
    ///
    /// Raw bytes (or a `bytes` intent) are signed as-is; any other intent is
    /// serialized first. A tagged intent with an unknown kind fails before
    /// anything is serialized, signed or submitted.
    pub async fn sign_and_execute_transaction(
        &self,
        transaction: impl Into<TransactionInput>,
        request_type: impl Into<Option<ExecuteTransactionRequestType>> + Send,
    ) -> SignerResult<SuiExecuteTransactionResponse> {
        let request_type = request_type.into().unwrap_or_default();
        match transaction.into() {
            TransactionInput::Bytes(tx_bytes) => self.execute_bytes(tx_bytes, request_type).await,
            TransactionInput::Intent(intent) => self.execute_intent(intent, request_type).await,
            TransactionInput::Tagged(value) => {
                let intent = SignableTransaction::from_tagged(value)?;
                self.execute_intent(intent, request_type).await
            }
        }
    }

    pub async fn transfer_object(
        &self,
        transaction: TransferObjectTransaction,
        request_type: impl Into<Option<ExecuteTransactionRequestType>> + Send,
    ) -> SignerResult<SuiExecuteTransactionResponse> {
        let request_type = request_type.into().unwrap_or_default();
        self.execute_intent(SignableTransaction::TransferObject(transaction), request_type)
            .await
    }

    pub async fn transfer_sui(
        &self,
        transaction: TransferSuiTransaction,
        request_type: impl Into<Option<ExecuteTransactionRequestType>> + Send,
    ) -> SignerResult<SuiExecuteTransactionResponse> {
        let request_type = request_type.into().unwrap_or_default();
        self.execute_intent(SignableTransaction::TransferSui(transaction), request_type)
            .await
    }

    pub async fn pay(
        &self,
        transaction: PayTransaction,
        request_type: impl Into<Option<ExecuteTransactionRequestType>> + Send,
    ) -> SignerResult<SuiExecuteTransactionResponse> {
        let request_type = request_type.into().unwrap_or_default();
        self.execute_intent(SignableTransaction::Pay(transaction), request_type)
            .await
    }

    pub async fn pay_sui(
        &self,
        transaction: PaySuiTransaction,
        request_type: impl Into<Option<ExecuteTransactionRequestType>> + Send,
    ) -> SignerResult<SuiExecuteTransactionResponse> {
        let request_type = request_type.into().unwrap_or_default();
        self.execute_intent(SignableTransaction::PaySui(transaction), request_type)
            .await
    }

    pub async fn pay_all_sui(
        &self,
        transaction: PayAllSuiTransaction,
        request_type: impl Into<Option<ExecuteTransactionRequestType>> + Send,
    ) -> SignerResult<SuiExecuteTransactionResponse> {
        let request_type = request_type.into().unwrap_or_default();
        self.execute_intent(SignableTransaction::PayAllSui(transaction), request_type)
            .await
    }

    pub async fn merge_coin(
        &self,
        transaction: MergeCoinTransaction,
        request_type: impl Into<Option<ExecuteTransactionRequestType>> + Send,
    ) -> SignerResult<SuiExecuteTransactionResponse> {
        let request_type = request_type.into().unwrap_or_default();
        self.execute_intent(SignableTransaction::MergeCoin(transaction), request_type)
            .await
    }

    pub async fn split_coin(
        &self,
        transaction: SplitCoinTransaction,
        request_type: impl Into<Option<ExecuteTransactionRequestType>> + Send,
    ) -> SignerResult<SuiExecuteTransactionResponse> {
        let request_type = request_type.into().unwrap_or_default();
        self.execute_intent(SignableTransaction::SplitCoin(transaction), request_type)
            .await
    }

    pub async fn execute_move_call(
        &self,
        transaction: MoveCallTransaction,
        request_type: impl Into<Option<ExecuteTransactionRequestType>> + Send,
    ) -> SignerResult<SuiExecuteTransactionResponse> {
        let request_type = request_type.into().unwrap_or_default();
        self.execute_intent(SignableTransaction::MoveCall(transaction), request_type)
            .await
    }

    pub async fn publish(
        &self,
        transaction: PublishTransaction,
        request_type: impl Into<Option<ExecuteTransactionRequestType>> + Send,
    ) -> SignerResult<SuiExecuteTransactionResponse> {
        let request_type = request_type.into().unwrap_or_default();
        self.execute_intent(SignableTransaction::Publish(transaction), request_type)
            .await
    }

    /// Serialize a typed intent for this signer, then sign and submit it
    async fn execute_intent(
        &self,
        intent: SignableTransaction,
        request_type: ExecuteTransactionRequestType,
    ) -> SignerResult<SuiExecuteTransactionResponse> {
        if let SignableTransaction::Bytes(tx_bytes) = intent {
            return self.execute_bytes(tx_bytes, request_type).await;
        }

        let signer_address = self.get_address().await?;
        debug!("Serializing {} transaction for {}", intent.kind(), signer_address);

        let tx_bytes = self.serializer.serialize(&signer_address, &intent).await?;
        self.execute_bytes(tx_bytes, request_type).await
    }

    /// Sign serialized bytes once and submit them once
    async fn execute_bytes(
        &self,
        tx_bytes: Base64DataBuffer,
        request_type: ExecuteTransactionRequestType,
    ) -> SignerResult<SuiExecuteTransactionResponse> {
        let sig = self.signer.sign_data(&tx_bytes).await?;
        debug!(
            "Submitting {} signed bytes ({}, {})",
            tx_bytes.len(),
            sig.signature_scheme,
            request_type
        );

        self.provider
            .execute_transaction(
                &tx_bytes.to_base64(),
                sig.signature_scheme,
                &sig.signature.to_base64(),
                &sig.pub_key.to_base64(),
                request_type,
            )
            .await
    }
}
