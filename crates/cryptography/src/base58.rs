//! Base58 and Base58Check encoding with the Bitcoin alphabet.

use crate::hash::Crypto;

/// Length of the Base58Check checksum suffix.
pub const CHECKSUM_SIZE: usize = 4;

/// Base58 codec.
pub struct Base58;

impl Base58 {
    /// Encodes bytes. Each leading zero byte becomes a leading `'1'`.
    pub fn encode(data: &[u8]) -> String {
        bs58::encode(data).into_string()
    }

    /// Decodes a Base58 string, `None` if any character is outside the alphabet.
    pub fn decode(input: &str) -> Option<Vec<u8>> {
        bs58::decode(input).into_vec().ok()
    }

    /// First four bytes of the double SHA-256 of `data`.
    pub fn checksum(data: &[u8]) -> [u8; CHECKSUM_SIZE] {
        let hash = Crypto::hash256(data);
        [hash[0], hash[1], hash[2], hash[3]]
    }

    /// Encodes `data` followed by its checksum.
    pub fn encode_check(data: &[u8]) -> String {
        let mut buffer = Vec::with_capacity(data.len() + CHECKSUM_SIZE);
        buffer.extend_from_slice(data);
        buffer.extend_from_slice(&Self::checksum(data));
        Self::encode(&buffer)
    }

    /// Decodes a Base58Check string and strips the checksum.
    ///
    /// Returns `None` for malformed input, a payload shorter than the
    /// checksum, or a checksum mismatch.
    pub fn decode_check(input: &str) -> Option<Vec<u8>> {
        let mut decoded = Self::decode(input)?;
        if decoded.len() < CHECKSUM_SIZE {
            return None;
        }

        let split = decoded.len() - CHECKSUM_SIZE;
        if Self::checksum(&decoded[..split]) != decoded[split..] {
            return None;
        }
        decoded.truncate(split);
        Some(decoded)
    }
}
