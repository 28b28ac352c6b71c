//! `Hash160` and `Hash256`.

use crate::error::{PrimitiveError, PrimitiveResult};
use neo_sdk_config::{ADDRESS_SIZE, HASH_SIZE};
use neo_sdk_io::{BinaryWriter, IoError, IoResult, MemoryReader, Serializable};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

macro_rules! fixed_hash {
    ($(#[$meta:meta])* $name:ident, $size:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name([u8; $size]);

        impl $name {
            /// Length in bytes.
            pub const LENGTH: usize = $size;

            /// The all-zero value.
            pub const ZERO: Self = Self([0u8; $size]);

            #[inline]
            #[must_use]
            pub const fn zero() -> Self {
                Self::ZERO
            }

            #[inline]
            #[must_use]
            pub fn is_zero(&self) -> bool {
                self.0 == [0u8; $size]
            }

            /// Creates a value from big-endian (display order) bytes.
            ///
            /// # Errors
            ///
            /// Returns `PrimitiveError::InvalidLength` on a length mismatch.
            pub fn from_slice(value: &[u8]) -> PrimitiveResult<Self> {
                let bytes: [u8; $size] =
                    value.try_into().map_err(|_| PrimitiveError::InvalidLength {
                        expected: $size,
                        actual: value.len(),
                    })?;
                Ok(Self(bytes))
            }

            /// Creates a value from little-endian (wire/script order) bytes.
            pub fn from_le_bytes(value: &[u8]) -> PrimitiveResult<Self> {
                let mut hash = Self::from_slice(value)?;
                hash.0.reverse();
                Ok(hash)
            }

            /// Big-endian bytes.
            #[inline]
            #[must_use]
            pub fn to_array(&self) -> [u8; $size] {
                self.0
            }

            /// Little-endian bytes, as written to the wire.
            #[inline]
            #[must_use]
            pub fn to_le_array(&self) -> [u8; $size] {
                let mut bytes = self.0;
                bytes.reverse();
                bytes
            }

            /// Parses `0x`-prefixed or bare big-endian hex.
            pub fn parse(s: &str) -> PrimitiveResult<Self> {
                let digits = s
                    .strip_prefix("0x")
                    .or_else(|| s.strip_prefix("0X"))
                    .unwrap_or(s);

                if digits.len() != $size * 2 {
                    return Err(PrimitiveError::InvalidFormat {
                        message: format!(
                            "expected {} hex characters, got {}",
                            $size * 2,
                            digits.len()
                        ),
                    });
                }

                let bytes = hex::decode(digits).map_err(|e| PrimitiveError::InvalidFormat {
                    message: e.to_string(),
                })?;
                Self::from_slice(&bytes)
            }

            /// `0x` followed by lowercase big-endian hex.
            #[must_use]
            pub fn to_hex_string(&self) -> String {
                format!("0x{}", hex::encode(self.0))
            }
        }

        impl FromStr for $name {
            type Err = PrimitiveError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.to_hex_string())
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.to_hex_string())
            }
        }

        impl From<[u8; $size]> for $name {
            fn from(data: [u8; $size]) -> Self {
                Self(data)
            }
        }

        impl TryFrom<&[u8]> for $name {
            type Error = PrimitiveError;

            fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
                Self::from_slice(data)
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl Serializable for $name {
            fn size(&self) -> usize {
                $size
            }

            fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
                writer.write_bytes(&self.to_le_array())
            }

            fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
                let bytes = reader.read_memory($size)?;
                Self::from_le_bytes(bytes).map_err(|e| IoError::invalid_data(e.to_string()))
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.to_hex_string())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                Self::parse(&s).map_err(de::Error::custom)
            }
        }
    };
}

fixed_hash!(
    /// A 160-bit hash, the identifier of an account or contract script.
    Hash160,
    ADDRESS_SIZE
);

fixed_hash!(
    /// A 256-bit hash, the identifier of a transaction or block.
    Hash256,
    HASH_SIZE
);
