//! Message signatures with a recovery byte.

use crate::ecc::{KeyPair, PrivateKey, PublicKey};
use crate::error::{CryptoError, CryptoResult};
use crate::hash::Crypto;
use neo_sdk_config::SIGNATURE_SIZE;
use ecdsa::RecoveryId;
use p256::ecdsa::{Signature, VerifyingKey};
use tracing::warn;

const COMPONENT_SIZE: usize = SIGNATURE_SIZE / 2;

/// Offset added to the recovery id in the `v` byte.
pub const RECOVERY_HEADER: u8 = 27;

/// `v`, `r` and `s` of an ECDSA signature. `r` and `s` are always 32
/// big-endian bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SignatureData {
    v: u8,
    r: [u8; COMPONENT_SIZE],
    s: [u8; COMPONENT_SIZE],
}

impl SignatureData {
    /// `v` may be a bare recovery id (`0..=3`) or carry the `27` header
    /// (`27..=34`).
    pub fn new(v: u8, r: &[u8], s: &[u8]) -> CryptoResult<Self> {
        if !matches!(v, 0..=3 | 27..=34) {
            return Err(CryptoError::invalid_argument(format!(
                "v must be in 0..=3 or 27..=34, got {}",
                v
            )));
        }
        Ok(Self {
            v,
            r: component("r", r)?,
            s: component("s", s)?,
        })
    }

    /// Splits a 64-byte `r || s` signature.
    pub fn from_bytes(v: u8, signature: &[u8]) -> CryptoResult<Self> {
        if signature.len() != SIGNATURE_SIZE {
            return Err(CryptoError::invalid_argument(format!(
                "signature must be {} bytes, got {}",
                SIGNATURE_SIZE,
                signature.len()
            )));
        }
        let (r, s) = signature.split_at(COMPONENT_SIZE);
        Self::new(v, r, s)
    }

    pub fn v(&self) -> u8 {
        self.v
    }

    pub fn r(&self) -> &[u8; COMPONENT_SIZE] {
        &self.r
    }

    pub fn s(&self) -> &[u8; COMPONENT_SIZE] {
        &self.s
    }

    /// `r || s`.
    pub fn concatenated(&self) -> [u8; SIGNATURE_SIZE] {
        let mut out = [0u8; SIGNATURE_SIZE];
        out[..COMPONENT_SIZE].copy_from_slice(&self.r);
        out[COMPONENT_SIZE..].copy_from_slice(&self.s);
        out
    }

    /// Recovery id encoded in `v`: `0..=3` as-is, `27..=30` and the
    /// compressed-key range `31..=34` with the header removed.
    pub fn recovery_id(&self) -> u8 {
        match self.v {
            0..=3 => self.v,
            27..=30 => self.v - RECOVERY_HEADER,
            _ => self.v - RECOVERY_HEADER - 4,
        }
    }
}

fn component(name: &str, bytes: &[u8]) -> CryptoResult<[u8; COMPONENT_SIZE]> {
    bytes.try_into().map_err(|_| {
        CryptoError::invalid_argument(format!(
            "{} must be {} bytes, got {}",
            name,
            COMPONENT_SIZE,
            bytes.len()
        ))
    })
}

/// Signs the SHA-256 of `message` and attaches `v = 27 + recovery id`.
pub fn sign_message(message: &[u8], key_pair: &KeyPair) -> CryptoResult<SignatureData> {
    let message_hash = Crypto::sha256(message);
    let signature = key_pair.sign(&message_hash)?;
    let unrecoverable = SignatureData::from_bytes(0, &signature)?;

    let rec_id = (0..4u8)
        .find(|id| {
            recover_from_signature(*id, &unrecoverable, &message_hash).as_ref()
                == Some(key_pair.public_key())
        })
        .ok_or_else(|| CryptoError::security("no recovery id matches the signing key"))?;

    SignatureData::from_bytes(RECOVERY_HEADER + rec_id, &signature)
}

/// [`sign_message`] over hex-encoded message bytes.
pub fn sign_hex_message(hex_message: &str, key_pair: &KeyPair) -> CryptoResult<SignatureData> {
    let message = hex::decode(hex_message)
        .map_err(|e| CryptoError::invalid_format(format!("message hex: {}", e)))?;
    sign_message(&message, key_pair)
}

/// Recovers the public key for one candidate recovery id. Not every id
/// yields a point; those return `None`.
pub fn recover_from_signature(
    rec_id: u8,
    signature: &SignatureData,
    message_hash: &[u8],
) -> Option<PublicKey> {
    let recovery_id = RecoveryId::from_byte(rec_id)?;
    let parsed = Signature::from_slice(&signature.concatenated()).ok()?;
    let verifying_key = VerifyingKey::recover_from_prehash(message_hash, &parsed, recovery_id).ok()?;
    Some(PublicKey::from(p256::PublicKey::from(&verifying_key)))
}

/// Recovers the signer of `message` from a signature carrying a `27..=34`
/// header byte.
pub fn signed_message_to_key(message: &[u8], signature: &SignatureData) -> CryptoResult<PublicKey> {
    if !(27..=34).contains(&signature.v()) {
        return Err(CryptoError::security(format!(
            "header byte out of range: {}",
            signature.v()
        )));
    }
    let rec_id = signature.recovery_id();

    let message_hash = Crypto::sha256(message);
    recover_from_signature(rec_id, signature, &message_hash).ok_or_else(|| {
        warn!(rec_id, "public key recovery failed");
        CryptoError::security("could not recover public key from signature")
    })
}

pub fn public_key_from_private_key(private_key: &PrivateKey) -> CryptoResult<PublicKey> {
    private_key.public_key()
}

/// Verifies a signature over the SHA-256 of `message`.
pub fn verify_signature(message: &[u8], signature: &SignatureData, public_key: &PublicKey) -> bool {
    public_key.verify(&Crypto::sha256(message), &signature.concatenated())
}
