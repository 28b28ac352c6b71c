//! Scrypt parameters for NEP-2 key derivation.

use crate::{WalletError, WalletResult};
use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Length of the key derived for NEP-2.
pub const DERIVED_KEY_LENGTH: usize = 64;

/// Scrypt cost parameters.
///
/// Deserialization accepts `n`/`cost`, `r`/`blockSize` and `p`/`parallel` in
/// any letter case. When none of them is present every field is `0`, which
/// [`validate`](Self::validate) rejects. When at least one is present the
/// others fall back to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScryptParams {
    /// CPU/memory cost (N).
    pub n: u32,

    /// Block size (r).
    pub r: u32,

    /// Parallelization (p).
    pub p: u32,
}

impl ScryptParams {
    pub const DEFAULT_N: u32 = 16384;
    pub const DEFAULT_R: u32 = 8;
    pub const DEFAULT_P: u32 = 8;

    /// Creates validated parameters.
    pub fn new(n: u32, r: u32, p: u32) -> WalletResult<Self> {
        let params = Self { n, r, p };
        params.validate()?;
        Ok(params)
    }

    /// Validates the scrypt parameters.
    pub fn validate(&self) -> WalletResult<()> {
        if self.n <= 1 || !self.n.is_power_of_two() {
            return Err(WalletError::invalid_argument(
                "N must be a power of 2 greater than 1",
            ));
        }
        if self.r == 0 {
            return Err(WalletError::invalid_argument("r must be greater than 0"));
        }
        if self.p == 0 {
            return Err(WalletError::invalid_argument("p must be greater than 0"));
        }
        if self.r > u32::MAX / 128 {
            return Err(WalletError::invalid_argument("r is too large"));
        }
        if self.p > (u32::MAX - 1) / (128 * self.r) {
            return Err(WalletError::invalid_argument("p is too large"));
        }
        if self.n > u32::MAX / (128 * self.r) {
            return Err(WalletError::invalid_argument("N is too large"));
        }
        Ok(())
    }

    /// log2 of N.
    pub fn log_n(&self) -> u8 {
        self.n.trailing_zeros() as u8
    }

    /// Memory used by one derivation, in bytes.
    pub fn memory_usage(&self) -> u64 {
        128 * self.r as u64 * self.n as u64
    }

    /// Converts to scrypt crate parameters with a 64-byte output.
    pub fn to_scrypt_params(&self) -> WalletResult<scrypt::Params> {
        self.validate()?;
        scrypt::Params::new(self.log_n(), self.r, self.p, DERIVED_KEY_LENGTH)
            .map_err(|e| WalletError::invalid_argument(format!("scrypt parameters: {}", e)))
    }
}

impl Default for ScryptParams {
    fn default() -> Self {
        Self {
            n: Self::DEFAULT_N,
            r: Self::DEFAULT_R,
            p: Self::DEFAULT_P,
        }
    }
}

impl fmt::Display for ScryptParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScryptParams(N={}, r={}, p={})", self.n, self.r, self.p)
    }
}

impl<'de> Deserialize<'de> for ScryptParams {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ParamsVisitor;

        impl<'de> Visitor<'de> for ParamsVisitor {
            type Value = ScryptParams;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map with n, r and p")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let (mut n, mut r, mut p) = (None, None, None);
                while let Some(key) = map.next_key::<String>()? {
                    match key.to_ascii_lowercase().as_str() {
                        "n" | "cost" => n = Some(map.next_value()?),
                        "r" | "blocksize" => r = Some(map.next_value()?),
                        "p" | "parallel" => p = Some(map.next_value()?),
                        _ => {
                            map.next_value::<IgnoredAny>()?;
                        }
                    }
                }

                if n.is_none() && r.is_none() && p.is_none() {
                    return Ok(ScryptParams { n: 0, r: 0, p: 0 });
                }
                Ok(ScryptParams {
                    n: n.unwrap_or(ScryptParams::DEFAULT_N),
                    r: r.unwrap_or(ScryptParams::DEFAULT_R),
                    p: p.unwrap_or(ScryptParams::DEFAULT_P),
                })
            }
        }

        deserializer.deserialize_map(ParamsVisitor)
    }
}
