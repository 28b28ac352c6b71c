use crate::crypto::{AddressExt, HashCache, KeyPair};
use crate::primitives::Hash160;
use crate::wallets::nep2;
use crate::{SdkConfig, SdkResult};
use std::sync::Arc;
use tracing::debug;

/// Configured entry point for address and NEP-2 operations.
///
/// Cloning is cheap; clones share the same [`HashCache`].
#[derive(Debug, Clone)]
pub struct NeoSdk {
    config: SdkConfig,
    hash_cache: Arc<HashCache>,
}

impl NeoSdk {
    /// Creates an SDK instance with its own hash cache.
    pub fn new(config: SdkConfig) -> Self {
        debug!(
            network = %config.network,
            address_version = config.address_version(),
            "neo-sdk initialized"
        );
        Self {
            config,
            hash_cache: Arc::new(HashCache::new()),
        }
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &SdkConfig {
        &self.config
    }

    /// Returns the shared SHA-256 cache.
    pub fn hash_cache(&self) -> &Arc<HashCache> {
        &self.hash_cache
    }

    /// Address of a key pair under the configured address version.
    pub fn address_of(&self, key_pair: &KeyPair) -> String {
        key_pair
            .public_key()
            .address_with_version(self.config.address_version())
    }

    /// Address of a script hash under the configured address version.
    pub fn script_hash_to_address(&self, script_hash: &Hash160) -> String {
        script_hash.to_address_with_version(self.config.address_version())
    }

    /// Script hash of an address under the configured address version.
    pub fn address_to_script_hash(&self, address: &str) -> SdkResult<Hash160> {
        Ok(Hash160::from_address_with_version(
            address,
            self.config.address_version(),
        )?)
    }

    /// Encrypts a key pair with the configured scrypt parameters.
    pub fn encrypt_nep2(&self, password: &str, key_pair: &KeyPair) -> SdkResult<String> {
        Ok(nep2::encrypt_with_version(
            password,
            key_pair,
            &self.config.scrypt,
            self.config.address_version(),
        )?)
    }

    /// Decrypts a NEP-2 string with the configured scrypt parameters.
    pub fn decrypt_nep2(&self, password: &str, nep2: &str) -> SdkResult<KeyPair> {
        Ok(nep2::decrypt_with_version(
            password,
            nep2,
            &self.config.scrypt,
            self.config.address_version(),
        )?)
    }
}

impl Default for NeoSdk {
    fn default() -> Self {
        Self::new(SdkConfig::default())
    }
}
