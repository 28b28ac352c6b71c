//! secp256r1 key types.
//!
//! [`PrivateKey`] holds a validated scalar in a zeroizing buffer,
//! [`PublicKey`] a validated curve point in compressed form, and [`KeyPair`]
//! ties them together for signing. A key pair built from a public key alone
//! is watch-only and refuses to sign.

use crate::address::AddressExt;
use crate::error::{CryptoError, CryptoResult};
use crate::hash::ToScriptHash;
use neo_sdk_config::{DEFAULT_ADDRESS_VERSION, PRIVATE_KEY_SIZE, PUBLIC_KEY_SIZE, SIGNATURE_SIZE};
use neo_sdk_io::{BinaryWriter, IoError, IoResult, MemoryReader, Serializable};
use neo_sdk_primitives::Hash160;
use neo_sdk_vm::{InteropService, ScriptBuilder};
use p256::ecdsa::signature::hazmat::{PrehashVerifier, RandomizedPrehashSigner};
use p256::ecdsa::{Signature, SigningKey, VerifyingKey};
use p256::elliptic_curve::sec1::ToEncodedPoint;
use p256::SecretKey;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use subtle::ConstantTimeEq;
use tracing::debug;
use zeroize::Zeroizing;

/// Length of an uncompressed SEC1 point.
pub const UNCOMPRESSED_PUBLIC_KEY_SIZE: usize = 65;

/// A secp256r1 private key.
#[derive(Clone)]
pub struct PrivateKey {
    bytes: Zeroizing<[u8; PRIVATE_KEY_SIZE]>,
}

impl PrivateKey {
    /// Accepts exactly 32 big-endian bytes forming a scalar in `1..n`.
    pub fn from_slice(bytes: &[u8]) -> CryptoResult<Self> {
        if bytes.len() != PRIVATE_KEY_SIZE {
            return Err(CryptoError::invalid_argument(format!(
                "private key must be {} bytes, got {}",
                PRIVATE_KEY_SIZE,
                bytes.len()
            )));
        }
        SecretKey::from_slice(bytes)
            .map_err(|_| CryptoError::invalid_argument("private key is not a valid secp256r1 scalar"))?;

        let mut key = Zeroizing::new([0u8; PRIVATE_KEY_SIZE]);
        key.copy_from_slice(bytes);
        Ok(Self { bytes: key })
    }

    /// Draws a fresh key from `rng`.
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let secret = SecretKey::random(rng);
        Self::from_secret_key(&secret)
    }

    fn from_secret_key(secret: &SecretKey) -> Self {
        let mut key = Zeroizing::new([0u8; PRIVATE_KEY_SIZE]);
        key.copy_from_slice(&secret.to_bytes());
        Self { bytes: key }
    }

    pub fn as_bytes(&self) -> &[u8; PRIVATE_KEY_SIZE] {
        &self.bytes
    }

    fn secret_key(&self) -> CryptoResult<SecretKey> {
        SecretKey::from_slice(&self.bytes[..])
            .map_err(|_| CryptoError::invalid_argument("private key is not a valid secp256r1 scalar"))
    }

    /// Derives the public key by scalar multiplication.
    pub fn public_key(&self) -> CryptoResult<PublicKey> {
        Ok(PublicKey::from(self.secret_key()?.public_key()))
    }
}

impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.bytes.as_slice().ct_eq(other.bytes.as_slice()).into()
    }
}

impl Eq for PrivateKey {}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey(***)")
    }
}

/// A secp256r1 public key, stored compressed.
#[derive(Clone, Copy)]
pub struct PublicKey {
    encoded: [u8; PUBLIC_KEY_SIZE],
    point: p256::PublicKey,
}

impl PublicKey {
    /// Parses a 33-byte compressed or 65-byte uncompressed SEC1 point.
    pub fn from_slice(bytes: &[u8]) -> CryptoResult<Self> {
        if bytes.len() != PUBLIC_KEY_SIZE && bytes.len() != UNCOMPRESSED_PUBLIC_KEY_SIZE {
            return Err(CryptoError::invalid_argument(format!(
                "public key must be {} or {} bytes, got {}",
                PUBLIC_KEY_SIZE,
                UNCOMPRESSED_PUBLIC_KEY_SIZE,
                bytes.len()
            )));
        }
        match (bytes.len(), bytes[0]) {
            (PUBLIC_KEY_SIZE, 0x02 | 0x03) | (UNCOMPRESSED_PUBLIC_KEY_SIZE, 0x04) => {}
            (_, prefix) => {
                return Err(CryptoError::invalid_argument(format!(
                    "invalid public key prefix {:#04x} for {} bytes",
                    prefix,
                    bytes.len()
                )))
            }
        }
        let point = p256::PublicKey::from_sec1_bytes(bytes)
            .map_err(|_| CryptoError::invalid_argument("public key is not a point on secp256r1"))?;
        Ok(Self::from(point))
    }

    /// Compressed SEC1 encoding.
    pub fn encoded(&self) -> &[u8; PUBLIC_KEY_SIZE] {
        &self.encoded
    }

    /// Uncompressed SEC1 encoding, `0x04 || x || y`.
    pub fn to_uncompressed(&self) -> Vec<u8> {
        self.point.to_encoded_point(false).as_bytes().to_vec()
    }

    pub fn to_p256(&self) -> p256::PublicKey {
        self.point
    }

    /// `PUSHDATA1 <key> SYSCALL System.Crypto.CheckSig`.
    pub fn verification_script(&self) -> Vec<u8> {
        let mut builder = ScriptBuilder::new();
        builder
            .push_data(&self.encoded)
            .sys_call(InteropService::CryptoCheckSig);
        builder.into_bytes()
    }

    /// Script hash of the single-signature verification script.
    pub fn script_hash(&self) -> Hash160 {
        self.verification_script().to_script_hash()
    }

    /// Hash160 of the compressed key bytes themselves.
    pub fn key_hash(&self) -> Hash160 {
        self.encoded.to_script_hash()
    }

    pub fn address(&self) -> String {
        self.address_with_version(DEFAULT_ADDRESS_VERSION)
    }

    pub fn address_with_version(&self, version: u8) -> String {
        self.script_hash().to_address_with_version(version)
    }

    /// Verifies a 64-byte `r || s` signature over a message hash. Any
    /// malformed input yields `false`.
    pub fn verify(&self, message_hash: &[u8], signature: &[u8]) -> bool {
        if signature.len() != SIGNATURE_SIZE {
            return false;
        }
        let Ok(signature) = Signature::from_slice(signature) else {
            return false;
        };
        VerifyingKey::from(&self.point)
            .verify_prehash(message_hash, &signature)
            .is_ok()
    }
}

impl From<p256::PublicKey> for PublicKey {
    fn from(point: p256::PublicKey) -> Self {
        let mut encoded = [0u8; PUBLIC_KEY_SIZE];
        encoded.copy_from_slice(point.to_encoded_point(true).as_bytes());
        Self { encoded, point }
    }
}

impl PartialEq for PublicKey {
    fn eq(&self, other: &Self) -> bool {
        self.encoded == other.encoded
    }
}

impl Eq for PublicKey {}

impl PartialOrd for PublicKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PublicKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.encoded.cmp(&other.encoded)
    }
}

impl Hash for PublicKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.encoded.hash(state);
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", hex::encode(self.encoded))
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.encoded))
    }
}

impl FromStr for PublicKey {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s)
            .map_err(|e| CryptoError::invalid_format(format!("public key hex: {}", e)))?;
        Self::from_slice(&bytes)
    }
}

impl Serializable for PublicKey {
    fn size(&self) -> usize {
        PUBLIC_KEY_SIZE
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.write_bytes(&self.encoded)
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        let length = match reader.peek()? {
            0x02 | 0x03 => PUBLIC_KEY_SIZE,
            0x04 => UNCOMPRESSED_PUBLIC_KEY_SIZE,
            prefix => {
                return Err(IoError::invalid_data(format!(
                    "invalid public key prefix {:#04x}",
                    prefix
                )))
            }
        };
        let start = reader.position();
        let bytes = reader.read_memory(length)?;
        PublicKey::from_slice(bytes).map_err(|e| {
            let _ = reader.set_position(start);
            IoError::invalid_data(e.to_string())
        })
    }
}

/// A public key with an optional private key.
#[derive(Clone)]
pub struct KeyPair {
    private_key: Option<PrivateKey>,
    public_key: PublicKey,
}

impl KeyPair {
    pub fn from_private_key(private_key: PrivateKey) -> CryptoResult<Self> {
        let public_key = private_key.public_key()?;
        debug!(public_key = %public_key, "key pair created");
        Ok(Self {
            private_key: Some(private_key),
            public_key,
        })
    }

    /// Watch-only key pair.
    pub fn from_public_key(public_key: PublicKey) -> Self {
        Self {
            private_key: None,
            public_key,
        }
    }

    /// Generates a key pair from the OS random source.
    pub fn generate() -> Self {
        Self::generate_with_rng(&mut OsRng)
    }

    pub fn generate_with_rng<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let secret = SecretKey::random(rng);
        let public_key = PublicKey::from(secret.public_key());
        Self {
            private_key: Some(PrivateKey::from_secret_key(&secret)),
            public_key,
        }
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    pub fn private_key(&self) -> Option<&PrivateKey> {
        self.private_key.as_ref()
    }

    pub fn is_watch_only(&self) -> bool {
        self.private_key.is_none()
    }

    pub fn script_hash(&self) -> Hash160 {
        self.public_key.script_hash()
    }

    pub fn address(&self) -> String {
        self.public_key.address()
    }

    /// Signs a message hash with a fresh nonce from the OS random source.
    pub fn sign(&self, message_hash: &[u8]) -> CryptoResult<[u8; SIGNATURE_SIZE]> {
        self.sign_with_rng(message_hash, &mut OsRng)
    }

    /// Signs a message hash, returning `r || s` with `s` in the lower half
    /// of the curve order.
    pub fn sign_with_rng<R: RngCore + CryptoRng>(
        &self,
        message_hash: &[u8],
        rng: &mut R,
    ) -> CryptoResult<[u8; SIGNATURE_SIZE]> {
        let private_key = self.private_key.as_ref().ok_or_else(|| {
            CryptoError::InvalidOperation("cannot sign with a watch-only key pair".to_string())
        })?;

        let signing_key = SigningKey::from(private_key.secret_key()?);
        let signature: Signature = signing_key
            .sign_prehash_with_rng(rng, message_hash)
            .map_err(|e| CryptoError::security(format!("signing failed: {}", e)))?;
        let signature = signature.normalize_s().unwrap_or(signature);

        let mut out = [0u8; SIGNATURE_SIZE];
        out.copy_from_slice(&signature.to_bytes());
        Ok(out)
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("public_key", &self.public_key)
            .field("watch_only", &self.is_watch_only())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::Crypto;
    use hex_literal::hex;
    use neo_sdk_io::SerializableExt;
    use p256::elliptic_curve::scalar::IsHigh;

    const PRIVATE: [u8; 32] = hex!("e6e919577dd7b8e97805151c05ae07ff4f752654d6d8797597aca989c02c4cb3");
    const PUBLIC: [u8; 33] = hex!("02c0b60c995bc092e866f15a37c176bb59b7ebacf069ba94c0ebf561cb8f956238");

    fn key_pair() -> KeyPair {
        KeyPair::from_private_key(PrivateKey::from_slice(&PRIVATE).unwrap()).unwrap()
    }

    #[test]
    fn test_public_key_derivation() {
        let pair = key_pair();
        assert_eq!(pair.public_key().encoded(), &PUBLIC);
        assert_eq!(pair.address(), "NSo4wEjhHuFyEy4K2pzD11KyBYuuFQxM9j");
        assert_eq!(
            pair.script_hash().to_le_array(),
            hex!("4b7ac4b2811e5e73fd48cb5d465708d2b625ab04")
        );
    }

    #[test]
    fn test_private_key_validation() {
        assert!(PrivateKey::from_slice(&[1u8; 31]).is_err());
        assert!(PrivateKey::from_slice(&[1u8; 33]).is_err());
        assert!(PrivateKey::from_slice(&[0u8; 32]).is_err());
        assert!(PrivateKey::from_slice(&[0xFF; 32]).is_err());
        assert_eq!(format!("{:?}", PrivateKey::from_slice(&PRIVATE).unwrap()), "PrivateKey(***)");
    }

    #[test]
    fn test_public_key_parsing() {
        let key = PublicKey::from_slice(&PUBLIC).unwrap();
        let uncompressed = key.to_uncompressed();
        assert_eq!(uncompressed.len(), 65);
        assert_eq!(PublicKey::from_slice(&uncompressed).unwrap(), key);
        assert_eq!(key.to_string().parse::<PublicKey>().unwrap(), key);

        assert!(PublicKey::from_slice(&PUBLIC[..32]).is_err());
        let mut compact_tag = PUBLIC;
        compact_tag[0] = 0x05;
        let err = PublicKey::from_slice(&compact_tag).unwrap_err();
        assert!(err.to_string().contains("prefix 0x05"));

        let mut wrong_length_tag = PUBLIC;
        wrong_length_tag[0] = 0x04;
        assert!(PublicKey::from_slice(&wrong_length_tag).is_err());
        let mut uncompressed_tag = uncompressed.clone();
        uncompressed_tag[0] = 0x02;
        assert!(PublicKey::from_slice(&uncompressed_tag).is_err());
    }

    #[test]
    fn test_slice_and_wire_parsers_agree() {
        let mut compact_tag = PUBLIC.to_vec();
        compact_tag[0] = 0x05;
        let mut reader = MemoryReader::new(&compact_tag);
        assert!(<PublicKey as Serializable>::deserialize(&mut reader).is_err());
        assert!(PublicKey::from_slice(&compact_tag).is_err());

        let mut reader = MemoryReader::new(&PUBLIC);
        let parsed = <PublicKey as Serializable>::deserialize(&mut reader).unwrap();
        assert_eq!(parsed, PublicKey::from_slice(&PUBLIC).unwrap());
    }

    #[test]
    fn test_verification_script_and_hashes() {
        let key = PublicKey::from_slice(&PUBLIC).unwrap();
        let mut expected = vec![0x0C, 0x21];
        expected.extend_from_slice(&PUBLIC);
        expected.extend_from_slice(&hex!("4156e7b327"));
        assert_eq!(key.verification_script(), expected);

        let mut key_hash = Crypto::hash160(&PUBLIC);
        key_hash.reverse();
        assert_eq!(key.key_hash(), Hash160::from(key_hash));
        assert_ne!(key.key_hash(), key.script_hash());
    }

    #[test]
    fn test_public_key_serialization() {
        let key = PublicKey::from_slice(&PUBLIC).unwrap();
        assert_eq!(SerializableExt::to_array(&key).unwrap(), PUBLIC.to_vec());
        assert_eq!(PublicKey::from_array(&PUBLIC).unwrap(), key);
        assert_eq!(PublicKey::from_array(&key.to_uncompressed()).unwrap(), key);
        assert!(PublicKey::from_array(&[0x05; 33]).is_err());
    }

    #[test]
    fn test_sign_and_verify() {
        let pair = key_pair();
        let hash = Crypto::sha256(b"hello neo");
        let first = pair.sign(&hash).unwrap();
        let second = pair.sign(&hash).unwrap();

        assert!(pair.public_key().verify(&hash, &first));
        assert!(pair.public_key().verify(&hash, &second));
        assert_ne!(first, second);

        let other = Crypto::sha256(b"other");
        assert!(!pair.public_key().verify(&other, &first));
        assert!(!pair.public_key().verify(&hash, &first[..63]));
        assert!(!pair.public_key().verify(&hash, &[0u8; 64]));
    }

    #[test]
    fn test_signatures_are_low_s() {
        let pair = KeyPair::generate();
        for i in 0..16u8 {
            let hash = Crypto::sha256(&[i]);
            let bytes = pair.sign(&hash).unwrap();
            let signature = Signature::from_slice(&bytes).unwrap();
            assert!(!bool::from(signature.s().is_high()));
        }
    }

    #[test]
    fn test_watch_only_cannot_sign() {
        let pair = KeyPair::from_public_key(PublicKey::from_slice(&PUBLIC).unwrap());
        assert!(pair.is_watch_only());
        assert!(matches!(
            pair.sign(&[0u8; 32]),
            Err(CryptoError::InvalidOperation(_))
        ));
        assert_eq!(pair.address(), "NSo4wEjhHuFyEy4K2pzD11KyBYuuFQxM9j");
    }

    #[test]
    fn test_public_key_ordering() {
        let a = PublicKey::from_slice(&PUBLIC).unwrap();
        let b = PublicKey::from_slice(&hex!(
            "02028a99826edc0c97d18e22b6932373d908d323aa7f92656a77ec26e8861699ef"
        ))
        .unwrap();
        let mut keys = vec![a, b];
        keys.sort();
        assert_eq!(keys, vec![b, a]);
    }
}
