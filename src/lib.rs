//! # neo-sdk: Neo N3 client SDK core
//!
//! Offline building blocks for Neo N3 clients:
//! - Base58 and Base58Check encoding, Hash160/Hash256 helpers
//! - Little-endian binary writer and reader with variable-length integers
//! - secp256r1 keys, ECDSA signing, verification and public key recovery
//! - WIF and NEP-2 private key formats
//! - Address and script hash conversion
//! - NeoVM script construction
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use neo_sdk::prelude::*;
//!
//! fn main() -> Result<(), SdkError> {
//!     let sdk = NeoSdk::new(SdkConfig::default());
//!     let key_pair = key_pair_from_wif("L4xa4S78qj87q9FRkMQDeZsrymQG6ThR5oczagNNNnBrWRjicF36")?;
//!     println!("{}", sdk.address_of(&key_pair));
//!
//!     let nep2 = sdk.encrypt_nep2("password", &key_pair)?;
//!     let restored = sdk.decrypt_nep2("password", &nep2)?;
//!     assert_eq!(restored.public_key(), key_pair.public_key());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`config`] - network constants shared by every crate
//! - [`io`] - binary writer and reader
//! - [`primitives`] - `Hash160` and `Hash256`
//! - [`vm`] - opcodes, `ScriptBuilder` and push-data decoding
//! - [`crypto`] - hashes, Base58, keys, signatures and addresses
//! - [`wallets`] - WIF, NEP-2 and scrypt parameters

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod logging;
mod sdk;
mod settings;

pub use neo_sdk_config as config;
pub use neo_sdk_crypto as crypto;
pub use neo_sdk_io as io;
pub use neo_sdk_primitives as primitives;
pub use neo_sdk_vm as vm;
pub use neo_sdk_wallets as wallets;

pub use sdk::NeoSdk;
pub use settings::SdkConfig;

use thiserror::Error;

/// Common imports for Neo SDK users
pub mod prelude {
    pub use crate::config::NetworkType;
    pub use crate::crypto::{
        AddressExt, Base58, Crypto, HashCache, KeyPair, PrivateKey, PublicKey, SignatureData,
        ToScriptHash,
    };
    pub use crate::io::{BinaryWriter, MemoryReader, Serializable};
    pub use crate::primitives::{Hash160, Hash256};
    pub use crate::vm::{CallFlags, ContractParameter, OpCode, PushDataReader, ScriptBuilder};
    pub use crate::wallets::{key_pair_from_wif, key_pair_to_wif, nep2, ScryptParams, Wif};
    pub use crate::{NeoSdk, SdkConfig, SdkError, SdkResult};
}

/// Errors surfaced by the SDK facade.
#[derive(Error, Debug)]
pub enum SdkError {
    /// Binary encoding error
    #[error(transparent)]
    Io(#[from] io::IoError),

    /// Hash parsing error
    #[error(transparent)]
    Primitive(#[from] primitives::PrimitiveError),

    /// Script construction error
    #[error(transparent)]
    Vm(#[from] vm::VmError),

    /// Key, hash or address error
    #[error(transparent)]
    Crypto(#[from] crypto::CryptoError),

    /// WIF or NEP-2 error
    #[error(transparent)]
    Wallet(#[from] wallets::WalletError),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration file could not be read
    #[error("Failed to read configuration: {0}")]
    File(#[from] std::io::Error),
}

/// Result type for SDK operations
pub type SdkResult<T> = std::result::Result<T, SdkError>;

/// SDK version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
