//! Sui Submitter - sign and submit Sui transactions through a full node
//!
//! A `TransactionSubmitter` binds a signing identity to a provider (submission
//! and faucet access) and a serializer (intent to transaction bytes). Typed
//! intents, tagged JSON intents and raw bytes all go through the same
//! serialize, sign, submit pipeline.

pub mod config;
pub mod error;
pub mod metrics;
pub mod provider;
pub mod rpc;
pub mod serializer;
pub mod signer;
pub mod transactions;
pub mod types;

pub use error::{SignerError, SignerResult};
pub use provider::{JsonRpcProvider, Provider, VoidProvider};
pub use serializer::{RpcTxnDataSerializer, TxnDataSerializer};
pub use signer::{KeypairSigner, Signer, TransactionSubmitter};
pub use transactions::{SignableTransaction, TransactionInput};
pub use types::{
    Base64DataBuffer, ExecuteTransactionRequestType, SignatureScheme, SuiAddress,
    SuiExecuteTransactionResponse,
};
