//! # Neo SDK Primitives
//!
//! Fixed-length hash identifiers:
//! - [`Hash160`]: 20-byte script hashes (accounts, contracts)
//! - [`Hash256`]: 32-byte transaction and block hashes
//!
//! Both hold their bytes in big-endian display order and serialize to the
//! wire in little-endian order.
//!
//! ## Example
//!
//! ```rust
//! use neo_sdk_primitives::Hash160;
//!
//! let hash = Hash160::parse("0x04ab25b6d20857465dcb48fd735e1e81b2c47a4b").unwrap();
//! assert_eq!(hash.to_le_array()[0], 0x4b);
//! assert_eq!(hash.to_string(), "0x04ab25b6d20857465dcb48fd735e1e81b2c47a4b");
//! ```

pub mod error;
mod hash;

pub use error::{PrimitiveError, PrimitiveResult};
pub use hash::{Hash160, Hash256};
