//! Ed25519 keypair signing identity

use super::Signer;
use crate::error::{SignerError, SignerResult};
use crate::types::{Base64DataBuffer, SignaturePubkeyPair, SignatureScheme, SuiAddress};

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64_STANDARD, Engine as _};
use ed25519_dalek::{Signer as _, SigningKey};
use sha3::{Digest, Sha3_256};
use std::fmt;

/// Number of address bytes kept from the public key hash
const ADDRESS_LENGTH: usize = 20;

/// Signing identity holding an Ed25519 secret key in memory
#[derive(Clone)]
pub struct KeypairSigner {
    signing_key: SigningKey,
}

impl KeypairSigner {
    /// Create from a 32-byte secret seed
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(&seed),
        }
    }

    /// Create from either a 32-byte seed or a 64-byte `seed || public key`
    /// export. For the 64-byte form the public half must match the seed.
    pub fn from_secret_bytes(bytes: &[u8]) -> SignerResult<Self> {
        match bytes.len() {
            32 => {
                let mut seed = [0u8; 32];
                seed.copy_from_slice(bytes);
                Ok(Self::from_seed(seed))
            }
            64 => {
                let mut seed = [0u8; 32];
                seed.copy_from_slice(&bytes[..32]);
                let signer = Self::from_seed(seed);
                if signer.public_key() != bytes[32..] {
                    return Err(SignerError::Signing(
                        "public key does not match secret key".to_string(),
                    ));
                }
                Ok(signer)
            }
            n => Err(SignerError::Encoding(format!(
                "Ed25519 secret key must be 32 or 64 bytes, got {}",
                n
            ))),
        }
    }

    /// Parse a hex (optionally `0x`-prefixed) or base64 encoded secret key
    pub fn from_encoded(encoded: &str) -> SignerResult<Self> {
        let trimmed = encoded.trim();
        let hex_part = trimmed.strip_prefix("0x").unwrap_or(trimmed);

        let bytes = match hex::decode(hex_part) {
            Ok(bytes) => bytes,
            Err(_) => BASE64_STANDARD
                .decode(trimmed)
                .map_err(|e| SignerError::Encoding(format!("Invalid secret key: {}", e)))?,
        };

        Self::from_secret_bytes(&bytes)
    }

    pub fn public_key(&self) -> [u8; 32] {
        self.signing_key.verifying_key().to_bytes()
    }

    /// Address: first 20 bytes of SHA3-256 over the scheme flag and public key
    pub fn address(&self) -> SuiAddress {
        let mut hasher = Sha3_256::new();
        hasher.update([SignatureScheme::Ed25519.flag()]);
        hasher.update(self.public_key());
        let digest = hasher.finalize();
        SuiAddress::from_bytes(&digest[..ADDRESS_LENGTH])
    }
}

impl fmt::Debug for KeypairSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeypairSigner")
            .field("address", &self.address())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Signer for KeypairSigner {
    async fn get_address(&self) -> SignerResult<SuiAddress> {
        Ok(self.address())
    }

    async fn sign_data(&self, data: &Base64DataBuffer) -> SignerResult<SignaturePubkeyPair> {
        let signature = self.signing_key.sign(data.as_bytes());

        Ok(SignaturePubkeyPair {
            signature_scheme: SignatureScheme::Ed25519,
            signature: signature.to_bytes().to_vec().into(),
            pub_key: self.public_key().to_vec().into(),
        })
    }

    fn rebind(&self) -> SignerResult<Self> {
        Ok(self.clone())
    }
}
