//! Signing identities and the submitter that drives them
//!
//! This module provides:
//! - The `Signer` capability every signing identity implements
//! - An Ed25519 keypair identity
//! - `TransactionSubmitter`, which serializes, signs and submits intents

mod keypair;
mod submitter;


pub use keypair::KeypairSigner;
pub use submitter::TransactionSubmitter;

use crate::error::{SignerError, SignerResult};
use crate::types::{Base64DataBuffer, SignaturePubkeyPair, SuiAddress};

use async_trait::async_trait;

/// Key material able to identify itself and sign transaction bytes
#[async_trait]
pub trait Signer: Send + Sync {
    /// Address derived from this identity's public key
    async fn get_address(&self) -> SignerResult<SuiAddress>;

    /// Sign `data` and return the signature with the matching public key
    async fn sign_data(&self, data: &Base64DataBuffer) -> SignerResult<SignaturePubkeyPair>;

    /// Produce an identity to use with a different provider.
    ///
    /// Identities bound to one provider (remote signers, hardware wallets)
    /// keep the default, which refuses.
    fn rebind(&self) -> SignerResult<Self>
    where
        Self: Sized,
    {
        Err(SignerError::UnsupportedOperation(
            "signer cannot be connected to a different provider".to_string(),
        ))
    }
}
