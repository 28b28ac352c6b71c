//! NEP-2 passphrase-protected private keys.
//!
//! Layout before Base58Check: `0x01 0x42 0xE0 || address_hash(4) || encrypted(32)`.
//! The address hash is the first four bytes of Hash256 over the key's
//! address and doubles as the scrypt salt. The key is XORed with the first
//! half of the derived key, then AES-256-ECB encrypted with the second half.

use crate::scrypt_parameters::{ScryptParams, DERIVED_KEY_LENGTH};
use crate::{WalletError, WalletResult};
use aes::cipher::{generic_array::GenericArray, BlockDecrypt, BlockEncrypt, KeyInit};
use aes::Aes256;
use neo_sdk_config::{DEFAULT_ADDRESS_VERSION, PRIVATE_KEY_SIZE};
use neo_sdk_crypto::base58::CHECKSUM_SIZE;
use neo_sdk_crypto::{Base58, Crypto, KeyPair, PrivateKey};
use tracing::debug;
use zeroize::Zeroizing;

const NEP2_PREFIX: [u8; 3] = [0x01, 0x42, 0xE0];
const ADDRESS_HASH_SIZE: usize = 4;
const AES_BLOCK_SIZE: usize = 16;

/// Length of the NEP-2 payload without the checksum.
pub const NEP2_PAYLOAD_LENGTH: usize = NEP2_PREFIX.len() + ADDRESS_HASH_SIZE + PRIVATE_KEY_SIZE;

/// Encrypts the private key of `key_pair` under the default address version.
pub fn encrypt(password: &str, key_pair: &KeyPair, params: &ScryptParams) -> WalletResult<String> {
    encrypt_with_version(password, key_pair, params, DEFAULT_ADDRESS_VERSION)
}

pub fn encrypt_with_version(
    password: &str,
    key_pair: &KeyPair,
    params: &ScryptParams,
    version: u8,
) -> WalletResult<String> {
    let private_key = key_pair
        .private_key()
        .ok_or_else(|| WalletError::invalid_argument("watch-only key pair has no private key"))?;

    let address_hash = compute_address_hash(key_pair, version);
    let derived = derive_key(password, &address_hash, params)?;
    let (half1, half2) = derived.split_at(PRIVATE_KEY_SIZE);

    let mut block = Zeroizing::new([0u8; PRIVATE_KEY_SIZE]);
    for (out, (key, mask)) in block
        .iter_mut()
        .zip(private_key.as_bytes().iter().zip(half1.iter()))
    {
        *out = key ^ mask;
    }

    let cipher = Aes256::new(GenericArray::from_slice(half2));
    for chunk in block.chunks_mut(AES_BLOCK_SIZE) {
        cipher.encrypt_block(GenericArray::from_mut_slice(chunk));
    }

    let mut payload = Vec::with_capacity(NEP2_PAYLOAD_LENGTH);
    payload.extend_from_slice(&NEP2_PREFIX);
    payload.extend_from_slice(&address_hash);
    payload.extend_from_slice(&block[..]);
    Ok(Base58::encode_check(&payload))
}

/// Decrypts a NEP-2 string under the default address version.
pub fn decrypt(password: &str, nep2: &str, params: &ScryptParams) -> WalletResult<KeyPair> {
    decrypt_with_version(password, nep2, params, DEFAULT_ADDRESS_VERSION)
}

pub fn decrypt_with_version(
    password: &str,
    nep2: &str,
    params: &ScryptParams,
    version: u8,
) -> WalletResult<KeyPair> {
    let data = Base58::decode(nep2)
        .ok_or_else(|| WalletError::invalid_format("not a valid NEP-2 string: bad Base58"))?;
    if data.len() != NEP2_PAYLOAD_LENGTH + CHECKSUM_SIZE {
        return Err(WalletError::invalid_format(format!(
            "not a valid NEP-2 string: expected {} bytes, got {}",
            NEP2_PAYLOAD_LENGTH + CHECKSUM_SIZE,
            data.len()
        )));
    }

    let (payload, checksum) = data.split_at(NEP2_PAYLOAD_LENGTH);
    if Base58::checksum(payload) != checksum {
        return Err(WalletError::invalid_format(
            "base58 checksum of the NEP-2 string does not match",
        ));
    }
    if payload[..NEP2_PREFIX.len()] != NEP2_PREFIX {
        return Err(WalletError::invalid_format(
            "not a valid NEP-2 string: unexpected prefix",
        ));
    }

    let salt_start = NEP2_PREFIX.len();
    let salt_end = salt_start + ADDRESS_HASH_SIZE;
    let address_hash = &payload[salt_start..salt_end];
    let derived = derive_key(password, address_hash, params)?;
    let (half1, half2) = derived.split_at(PRIVATE_KEY_SIZE);

    let mut block = Zeroizing::new([0u8; PRIVATE_KEY_SIZE]);
    block.copy_from_slice(&payload[salt_end..]);
    let cipher = Aes256::new(GenericArray::from_slice(half2));
    for chunk in block.chunks_mut(AES_BLOCK_SIZE) {
        cipher.decrypt_block(GenericArray::from_mut_slice(chunk));
    }
    for (byte, mask) in block.iter_mut().zip(half1.iter()) {
        *byte ^= mask;
    }

    let key_pair = PrivateKey::from_slice(&block[..])
        .and_then(KeyPair::from_private_key)
        .map_err(|_| {
            debug!("NEP-2 decryption produced an invalid private key");
            WalletError::PasswordIncorrect
        })?;

    if compute_address_hash(&key_pair, version) != address_hash {
        debug!("NEP-2 address hash mismatch");
        return Err(WalletError::PasswordIncorrect);
    }
    Ok(key_pair)
}

fn compute_address_hash(key_pair: &KeyPair, version: u8) -> [u8; ADDRESS_HASH_SIZE] {
    let address = key_pair.public_key().address_with_version(version);
    let hash = Crypto::hash256(address.as_bytes());
    [hash[0], hash[1], hash[2], hash[3]]
}

fn derive_key(
    password: &str,
    salt: &[u8],
    params: &ScryptParams,
) -> WalletResult<Zeroizing<[u8; DERIVED_KEY_LENGTH]>> {
    let scrypt_params = params.to_scrypt_params()?;
    let mut derived = Zeroizing::new([0u8; DERIVED_KEY_LENGTH]);
    scrypt::scrypt(password.as_bytes(), salt, &scrypt_params, &mut derived[..])
        .map_err(|e| WalletError::invalid_argument(format!("scrypt: {}", e)))?;
    Ok(derived)
}
