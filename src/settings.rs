//! SDK configuration.

use crate::config::NetworkType;
use crate::wallets::ScryptParams;
use crate::{SdkError, SdkResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings shared by the [`NeoSdk`](crate::NeoSdk) operations.
///
/// ```toml
/// network = "mainnet"
/// address_version = 0x35
///
/// [scrypt]
/// n = 16384
/// r = 8
/// p = 8
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SdkConfig {
    /// Network the keys belong to
    pub network: NetworkType,
    /// Overrides the address version of `network`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_version: Option<u8>,
    /// Scrypt parameters for NEP-2
    pub scrypt: ScryptParams,
}

impl SdkConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(content: &str) -> SdkResult<Self> {
        let config: SdkConfig =
            toml::from_str(content).map_err(|e| SdkError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> SdkResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Serializes the configuration to TOML.
    pub fn to_toml_string(&self) -> SdkResult<String> {
        toml::to_string_pretty(self).map_err(|e| SdkError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> SdkResult<()> {
        self.scrypt
            .validate()
            .map_err(|e| SdkError::Config(format!("scrypt: {}", e)))
    }

    /// The address version in effect.
    pub fn address_version(&self) -> u8 {
        self.address_version
            .unwrap_or_else(|| self.network.address_version())
    }
}
