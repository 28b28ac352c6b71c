//! Neo SDK Configuration
//!
//! Network constants and the network selector shared by the SDK crates.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Size of a hash (Hash256) in bytes
pub const HASH_SIZE: usize = 32;
/// Size of a script hash (Hash160) in bytes
pub const ADDRESS_SIZE: usize = 20;
/// Size of a secp256r1 private key in bytes
pub const PRIVATE_KEY_SIZE: usize = 32;
/// Size of a compressed secp256r1 public key in bytes
pub const PUBLIC_KEY_SIZE: usize = 33;
/// Size of an `r || s` signature in bytes
pub const SIGNATURE_SIZE: usize = 64;

/// Address version byte used by Neo N3 networks.
pub const DEFAULT_ADDRESS_VERSION: u8 = 0x35;

/// Maximum number of public keys in a multi-signature account
pub const MAX_MULTISIG_KEYS: usize = 1024;

/// Network type for Neo blockchain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NetworkType {
    #[serde(alias = "main")]
    MainNet,
    #[default]
    #[serde(alias = "test")]
    TestNet,
    #[serde(alias = "privnet")]
    Private,
}

impl NetworkType {
    /// Gets the network magic number
    pub fn magic(&self) -> u32 {
        match self {
            NetworkType::MainNet => 0x334f454e,
            NetworkType::TestNet => 0x3554334e,
            NetworkType::Private => 0x00000000,
        }
    }

    /// Gets the address version
    pub fn address_version(&self) -> u8 {
        match self {
            NetworkType::MainNet | NetworkType::TestNet | NetworkType::Private => {
                DEFAULT_ADDRESS_VERSION
            }
        }
    }
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkType::MainNet => write!(f, "mainnet"),
            NetworkType::TestNet => write!(f, "testnet"),
            NetworkType::Private => write!(f, "private"),
        }
    }
}

impl FromStr for NetworkType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mainnet" | "main" => Ok(NetworkType::MainNet),
            "testnet" | "test" => Ok(NetworkType::TestNet),
            "private" | "privnet" => Ok(NetworkType::Private),
            _ => Err(format!("Unknown network type: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_version() {
        assert_eq!(NetworkType::MainNet.address_version(), 0x35);
        assert_eq!(NetworkType::TestNet.address_version(), 0x35);
        assert_eq!(NetworkType::Private.address_version(), DEFAULT_ADDRESS_VERSION);
    }

    #[test]
    fn test_network_type_parse() {
        assert_eq!("MainNet".parse::<NetworkType>().unwrap(), NetworkType::MainNet);
        assert_eq!("test".parse::<NetworkType>().unwrap(), NetworkType::TestNet);
        assert_eq!("privnet".parse::<NetworkType>().unwrap(), NetworkType::Private);
        assert!("moonnet".parse::<NetworkType>().is_err());
    }

    #[test]
    fn test_network_type_serde() {
        let json = serde_json::to_string(&NetworkType::MainNet).unwrap();
        assert_eq!(json, "\"mainnet\"");
        let parsed: NetworkType = serde_json::from_str("\"privnet\"").unwrap();
        assert_eq!(parsed, NetworkType::Private);
        assert_eq!(NetworkType::default(), NetworkType::TestNet);
    }
}
