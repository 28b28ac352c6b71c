//! Hash functions for Neo cryptography.
//!
//! SHA-256, RIPEMD-160 and the two Neo combinations built from them.

use neo_sdk_config::{ADDRESS_SIZE, HASH_SIZE};
use neo_sdk_primitives::Hash160;
use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// Stateless hash functions.
pub struct Crypto;

impl Crypto {
    /// Computes SHA-256 hash of the input data.
    pub fn sha256(data: &[u8]) -> [u8; HASH_SIZE] {
        let mut hasher = Sha256::new();
        hasher.update(data);
        hasher.finalize().into()
    }

    /// Computes Hash256 (double SHA-256) of the input data.
    /// Used for transaction hashes and Base58Check checksums.
    pub fn hash256(data: &[u8]) -> [u8; HASH_SIZE] {
        Self::sha256(&Self::sha256(data))
    }

    /// Computes RIPEMD-160 hash of the input data.
    pub fn ripemd160(data: &[u8]) -> [u8; ADDRESS_SIZE] {
        let mut hasher = Ripemd160::new();
        hasher.update(data);
        hasher.finalize().into()
    }

    /// Computes Hash160 (RIPEMD-160 of SHA-256) of the input data.
    /// This is commonly used for Neo addresses.
    pub fn hash160(data: &[u8]) -> [u8; ADDRESS_SIZE] {
        Self::ripemd160(&Self::sha256(data))
    }
}

/// Script hash of a byte script.
pub trait ToScriptHash {
    /// Hash160 of the script. The digest is in script (little-endian) order.
    fn to_script_hash(&self) -> Hash160;
}

impl<T: AsRef<[u8]> + ?Sized> ToScriptHash for T {
    fn to_script_hash(&self) -> Hash160 {
        let mut bytes = Crypto::hash160(self.as_ref());
        bytes.reverse();
        Hash160::from(bytes)
    }
}
