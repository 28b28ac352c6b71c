//! # Neo SDK wallets
//!
//! Private key import and export formats:
//!
//! - [`Wif`]: Wallet Import Format
//! - [`nep2`]: passphrase protection with scrypt and AES-256
//! - [`ScryptParams`]: the scrypt cost settings NEP-2 runs with

pub mod error;
pub mod nep2;
pub mod scrypt_parameters;
pub mod wif;

pub use error::{WalletError, WalletResult};
pub use scrypt_parameters::ScryptParams;
pub use wif::{key_pair_from_wif, key_pair_to_wif, Wif};
