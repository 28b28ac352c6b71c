//! # Neo SDK cryptography
//!
//! Hashing, Base58Check, secp256r1 keys and Neo addresses.
//!
//! - **Hashing**: [`Crypto`] for SHA-256, RIPEMD-160, Hash160 and Hash256, plus a
//!   concurrent [`HashCache`]
//! - **Encoding**: [`Base58`] and Base58Check
//! - **Keys**: [`PrivateKey`], [`PublicKey`] and [`KeyPair`] on secp256r1
//! - **Signatures**: recoverable [`SignatureData`] over message hashes
//! - **Addresses**: script hash to address conversion
//!
//! ## Example
//!
//! ```rust
//! use neo_sdk_crypto::{KeyPair, PrivateKey};
//!
//! let key = hex::decode("e6e919577dd7b8e97805151c05ae07ff4f752654d6d8797597aca989c02c4cb3").unwrap();
//! let pair = KeyPair::from_private_key(PrivateKey::from_slice(&key).unwrap()).unwrap();
//! assert_eq!(pair.address(), "NSo4wEjhHuFyEy4K2pzD11KyBYuuFQxM9j");
//! ```

pub mod address;
pub mod base58;
pub mod ecc;
pub mod error;
pub mod hash;
pub mod hash_cache;
pub mod signature;

pub use address::{address_to_script_hash, is_valid_address, script_hash_to_address, AddressExt};
pub use base58::Base58;
pub use ecc::{KeyPair, PrivateKey, PublicKey};
pub use error::{CryptoError, CryptoResult};
pub use hash::{Crypto, ToScriptHash};
pub use hash_cache::HashCache;
pub use signature::SignatureData;
