//! Conversion between script hashes and Neo addresses.
//!
//! An address is Base58Check over `version || script_hash`, where the script
//! hash is in script (little-endian) order.

use crate::base58::Base58;
use crate::error::{CryptoError, CryptoResult};
use neo_sdk_config::{ADDRESS_SIZE, DEFAULT_ADDRESS_VERSION};
use neo_sdk_primitives::Hash160;

/// Encodes a 20-byte script hash, used as-is, into an address.
pub fn script_hash_to_address(script_hash: &[u8], version: u8) -> CryptoResult<String> {
    if script_hash.len() != ADDRESS_SIZE {
        return Err(CryptoError::invalid_argument(format!(
            "script hash length must be {}, got {}",
            ADDRESS_SIZE,
            script_hash.len()
        )));
    }

    let mut payload = Vec::with_capacity(1 + ADDRESS_SIZE);
    payload.push(version);
    payload.extend_from_slice(script_hash);
    Ok(Base58::encode_check(&payload))
}

/// Decodes an address into its 20-byte script hash.
pub fn address_to_script_hash(address: &str, version: u8) -> CryptoResult<[u8; ADDRESS_SIZE]> {
    let decoded = Base58::decode(address)
        .ok_or_else(|| CryptoError::invalid_argument("address is not valid Base58"))?;
    if decoded.len() != 1 + ADDRESS_SIZE + 4 {
        return Err(CryptoError::invalid_argument(format!(
            "address payload length must be {}, got {}",
            1 + ADDRESS_SIZE + 4,
            decoded.len()
        )));
    }
    if decoded[0] != version {
        return Err(CryptoError::invalid_argument(format!(
            "address version {:#04x} does not match expected {:#04x}",
            decoded[0], version
        )));
    }

    let (body, checksum) = decoded.split_at(1 + ADDRESS_SIZE);
    if Base58::checksum(body) != checksum {
        return Err(CryptoError::ChecksumMismatch(format!(
            "address {} has an invalid checksum",
            address
        )));
    }

    let mut script_hash = [0u8; ADDRESS_SIZE];
    script_hash.copy_from_slice(&body[1..]);
    Ok(script_hash)
}

/// Whether `address` decodes under the default address version.
pub fn is_valid_address(address: &str) -> bool {
    address_to_script_hash(address, DEFAULT_ADDRESS_VERSION).is_ok()
}

/// Address conversion for [`Hash160`].
pub trait AddressExt: Sized {
    /// Address under the default version.
    fn to_address(&self) -> String;

    fn to_address_with_version(&self, version: u8) -> String;

    fn from_address(address: &str) -> CryptoResult<Self>;

    fn from_address_with_version(address: &str, version: u8) -> CryptoResult<Self>;
}

impl AddressExt for Hash160 {
    fn to_address(&self) -> String {
        self.to_address_with_version(DEFAULT_ADDRESS_VERSION)
    }

    fn to_address_with_version(&self, version: u8) -> String {
        let mut payload = Vec::with_capacity(1 + ADDRESS_SIZE);
        payload.push(version);
        payload.extend_from_slice(&self.to_le_array());
        Base58::encode_check(&payload)
    }

    fn from_address(address: &str) -> CryptoResult<Self> {
        Self::from_address_with_version(address, DEFAULT_ADDRESS_VERSION)
    }

    fn from_address_with_version(address: &str, version: u8) -> CryptoResult<Self> {
        let bytes = address_to_script_hash(address, version)?;
        Ok(Hash160::from_le_bytes(&bytes)?)
    }
}
