//! Wallet Import Format.
//!
//! `0x80 || key(32) || [0x01 when compressed]` followed by a Base58Check
//! checksum.

use crate::{WalletError, WalletResult};
use neo_sdk_config::PRIVATE_KEY_SIZE;
use neo_sdk_crypto::base58::CHECKSUM_SIZE;
use neo_sdk_crypto::{Base58, KeyPair, PrivateKey};
use zeroize::Zeroizing;

/// Version byte of a WIF payload.
pub const WIF_VERSION: u8 = 0x80;

const COMPRESSED_FLAG: u8 = 0x01;
const UNCOMPRESSED_LENGTH: usize = 1 + PRIVATE_KEY_SIZE + CHECKSUM_SIZE;
const COMPRESSED_LENGTH: usize = UNCOMPRESSED_LENGTH + 1;

/// WIF codec.
pub struct Wif;

impl Wif {
    /// Encodes a 32-byte private key.
    pub fn encode(private_key: &[u8], compressed: bool) -> WalletResult<String> {
        if private_key.len() != PRIVATE_KEY_SIZE {
            return Err(WalletError::invalid_argument(format!(
                "private key must be {} bytes, got {}",
                PRIVATE_KEY_SIZE,
                private_key.len()
            )));
        }

        let mut payload = Zeroizing::new(Vec::with_capacity(PRIVATE_KEY_SIZE + 2));
        payload.push(WIF_VERSION);
        payload.extend_from_slice(private_key);
        if compressed {
            payload.push(COMPRESSED_FLAG);
        }
        Ok(Base58::encode_check(&payload))
    }

    /// Decodes a WIF string into the private key bytes and the compressed flag.
    pub fn decode(wif: &str) -> WalletResult<(Zeroizing<[u8; PRIVATE_KEY_SIZE]>, bool)> {
        if wif.is_empty() {
            return Err(WalletError::invalid_argument("WIF string is empty"));
        }

        let data = Zeroizing::new(
            Base58::decode(wif)
                .filter(|d| d.len() == UNCOMPRESSED_LENGTH || d.len() == COMPRESSED_LENGTH)
                .ok_or_else(|| WalletError::invalid_format("incorrect WIF format"))?,
        );
        if data[0] != WIF_VERSION {
            return Err(WalletError::invalid_format(format!(
                "incorrect WIF prefix {:#04x}",
                data[0]
            )));
        }

        let compressed = data.len() == COMPRESSED_LENGTH;
        if compressed && data[1 + PRIVATE_KEY_SIZE] != COMPRESSED_FLAG {
            return Err(WalletError::invalid_format(format!(
                "incorrect WIF compressed flag {:#04x}",
                data[1 + PRIVATE_KEY_SIZE]
            )));
        }

        let split = data.len() - CHECKSUM_SIZE;
        if Base58::checksum(&data[..split]) != data[split..] {
            return Err(WalletError::ChecksumMismatch(
                "WIF checksum does not match".to_string(),
            ));
        }

        let mut key = Zeroizing::new([0u8; PRIVATE_KEY_SIZE]);
        key.copy_from_slice(&data[1..1 + PRIVATE_KEY_SIZE]);
        Ok((key, compressed))
    }
}

/// Imports a key pair from WIF.
pub fn key_pair_from_wif(wif: &str) -> WalletResult<KeyPair> {
    let (key, _) = Wif::decode(wif)?;
    Ok(KeyPair::from_private_key(PrivateKey::from_slice(&key[..])?)?)
}

/// Exports the private key of `key_pair` as compressed WIF.
pub fn key_pair_to_wif(key_pair: &KeyPair) -> WalletResult<String> {
    let private_key = key_pair
        .private_key()
        .ok_or_else(|| WalletError::invalid_argument("watch-only key pair has no private key"))?;
    Wif::encode(private_key.as_bytes(), true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    const KEY: [u8; 32] = hex!("e6e919577dd7b8e97805151c05ae07ff4f752654d6d8797597aca989c02c4cb3");

    #[test]
    fn test_encode() {
        assert_eq!(
            Wif::encode(&KEY, true).unwrap(),
            "L4xa4S78qj87q9FRkMQDeZsrymQG6ThR5oczagNNNnBrWRjicF36"
        );
        assert_eq!(
            Wif::encode(&KEY, false).unwrap(),
            "5KZyt5L4b9dxUDk9KtJ3QvDRvBy29wXuaiNkQVQRKyukqqLkUa3"
        );
        assert!(matches!(
            Wif::encode(&KEY[..31], true),
            Err(WalletError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_decode() {
        let (key, compressed) = Wif::decode("L25kgAQJXNHnhc7Sx9bomxxwVSMsZdkaNQ3m2VfHrnLzKWMLP13A").unwrap();
        assert_eq!(
            *key,
            hex!("9117f4bf9be717c9a90994326897f4243503accd06712162267e77f18b49c3a3")
        );
        assert!(compressed);

        let (key, compressed) = Wif::decode("5KZyt5L4b9dxUDk9KtJ3QvDRvBy29wXuaiNkQVQRKyukqqLkUa3").unwrap();
        assert_eq!(*key, KEY);
        assert!(!compressed);
    }

    #[test]
    fn test_decode_errors() {
        assert!(matches!(Wif::decode(""), Err(WalletError::InvalidArgument(_))));

        let err = Wif::decode("0OIl").unwrap_err();
        assert!(matches!(err, WalletError::InvalidFormat(ref m) if m.contains("format")));

        let err = Wif::decode("yd4onJaQEbagAEJHrU7W2EM6E8H4zSLFiaYqkDh8DQxjtBMe9").unwrap_err();
        assert!(matches!(err, WalletError::InvalidFormat(ref m) if m.contains("format")));

        let err = Wif::decode("LAfPFKmChXCvg88DWDzha94RjsZXQ42JXqftax1PMG6hbqWTuL7c").unwrap_err();
        assert!(matches!(err, WalletError::InvalidFormat(ref m) if m.contains("prefix")));

        let err = Wif::decode("L25kgAQJXNHnhc7Sx9bomxxwVSMsZdkaNQ3m2VfHrnLzKWSHA5oW").unwrap_err();
        assert!(matches!(err, WalletError::InvalidFormat(ref m) if m.contains("compressed")));
    }

    #[test]
    fn test_decode_checksum_mismatch() {
        let mut raw = Base58::decode("L4xa4S78qj87q9FRkMQDeZsrymQG6ThR5oczagNNNnBrWRjicF36").unwrap();
        let last = raw.len() - 1;
        raw[last] ^= 0x01;
        let err = Wif::decode(&Base58::encode(&raw)).unwrap_err();
        assert!(matches!(err, WalletError::ChecksumMismatch(ref m) if m.contains("checksum")));
    }

    #[test]
    fn test_key_pair_round_trip() {
        let pair = key_pair_from_wif("L4xa4S78qj87q9FRkMQDeZsrymQG6ThR5oczagNNNnBrWRjicF36").unwrap();
        assert_eq!(pair.address(), "NSo4wEjhHuFyEy4K2pzD11KyBYuuFQxM9j");
        assert_eq!(
            key_pair_to_wif(&pair).unwrap(),
            "L4xa4S78qj87q9FRkMQDeZsrymQG6ThR5oczagNNNnBrWRjicF36"
        );

        let watch_only = KeyPair::from_public_key(*pair.public_key());
        assert!(key_pair_to_wif(&watch_only).is_err());
    }
}
