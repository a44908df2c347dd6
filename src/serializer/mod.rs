//! Transaction serializers - turn typed intents into canonical transaction bytes

pub mod rpc;

pub use rpc::RpcTxnDataSerializer;

use crate::error::SignerResult;
use crate::transactions::{
    MergeCoinTransaction, MoveCallTransaction, PayAllSuiTransaction, PaySuiTransaction,
    PayTransaction, PublishTransaction, SignableTransaction, SplitCoinTransaction,
    TransferObjectTransaction, TransferSuiTransaction,
};
use crate::types::{Base64DataBuffer, SuiAddress};

use async_trait::async_trait;

/// Builds transaction bytes for each intent kind on behalf of a signer
#[async_trait]
pub trait TxnDataSerializer: Send + Sync {
    async fn new_transfer_object(
        &self,
        signer_address: &SuiAddress,
        tx: &TransferObjectTransaction,
    ) -> SignerResult<Base64DataBuffer>;

    async fn new_transfer_sui(
        &self,
        signer_address: &SuiAddress,
        tx: &TransferSuiTransaction,
    ) -> SignerResult<Base64DataBuffer>;

    async fn new_pay(
        &self,
        signer_address: &SuiAddress,
        tx: &PayTransaction,
    ) -> SignerResult<Base64DataBuffer>;

    async fn new_pay_sui(
        &self,
        signer_address: &SuiAddress,
        tx: &PaySuiTransaction,
    ) -> SignerResult<Base64DataBuffer>;

    async fn new_pay_all_sui(
        &self,
        signer_address: &SuiAddress,
        tx: &PayAllSuiTransaction,
    ) -> SignerResult<Base64DataBuffer>;

    async fn new_merge_coin(
        &self,
        signer_address: &SuiAddress,
        tx: &MergeCoinTransaction,
    ) -> SignerResult<Base64DataBuffer>;

    async fn new_split_coin(
        &self,
        signer_address: &SuiAddress,
        tx: &SplitCoinTransaction,
    ) -> SignerResult<Base64DataBuffer>;

    async fn new_move_call(
        &self,
        signer_address: &SuiAddress,
        tx: &MoveCallTransaction,
    ) -> SignerResult<Base64DataBuffer>;

    async fn new_publish(
        &self,
        signer_address: &SuiAddress,
        tx: &PublishTransaction,
    ) -> SignerResult<Base64DataBuffer>;

    /// Serialize any intent by routing it to the operation for its kind.
    ///
    /// `Bytes` intents are already serialized and pass through unchanged.
    async fn serialize(
        &self,
        signer_address: &SuiAddress,
        tx: &SignableTransaction,
    ) -> SignerResult<Base64DataBuffer> {
        match tx {
            SignableTransaction::Bytes(bytes) => Ok(bytes.clone()),
            SignableTransaction::MoveCall(t) => self.new_move_call(signer_address, t).await,
            SignableTransaction::TransferSui(t) => self.new_transfer_sui(signer_address, t).await,
            SignableTransaction::TransferObject(t) => {
                self.new_transfer_object(signer_address, t).await
            }
            SignableTransaction::MergeCoin(t) => self.new_merge_coin(signer_address, t).await,
            SignableTransaction::SplitCoin(t) => self.new_split_coin(signer_address, t).await,
            SignableTransaction::Pay(t) => self.new_pay(signer_address, t).await,
            SignableTransaction::PaySui(t) => self.new_pay_sui(signer_address, t).await,
            SignableTransaction::PayAllSui(t) => self.new_pay_all_sui(signer_address, t).await,
            SignableTransaction::Publish(t) => self.new_publish(signer_address, t).await,
        }
    }
}
