//! Contract invocation arguments.

use neo_sdk_primitives::{Hash160, Hash256};
use num_bigint::BigInt;
use std::fmt;

/// Type code of a [`ContractParameter`].
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContractParameterType {
    #[default]
    Any = 0x00,
    Boolean = 0x10,
    Integer = 0x11,
    ByteArray = 0x12,
    String = 0x13,
    Hash160 = 0x14,
    Hash256 = 0x15,
    PublicKey = 0x16,
    Signature = 0x17,
    Array = 0x20,
    Map = 0x22,
    InteropInterface = 0x30,
    Void = 0xff,
}

impl ContractParameterType {
    /// Manifest name of the type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContractParameterType::Any => "Any",
            ContractParameterType::Boolean => "Boolean",
            ContractParameterType::Integer => "Integer",
            ContractParameterType::ByteArray => "ByteArray",
            ContractParameterType::String => "String",
            ContractParameterType::Hash160 => "Hash160",
            ContractParameterType::Hash256 => "Hash256",
            ContractParameterType::PublicKey => "PublicKey",
            ContractParameterType::Signature => "Signature",
            ContractParameterType::Array => "Array",
            ContractParameterType::Map => "Map",
            ContractParameterType::InteropInterface => "InteropInterface",
            ContractParameterType::Void => "Void",
        }
    }
}

impl fmt::Display for ContractParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed argument pushed onto the VM stack.
///
/// `Map` entries are an association list. Consumers must not rely on the
/// order in which entries end up in a script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractParameter {
    Any,
    Boolean(bool),
    Integer(BigInt),
    ByteArray(Vec<u8>),
    String(String),
    Hash160(Hash160),
    Hash256(Hash256),
    PublicKey(Vec<u8>),
    Signature(Vec<u8>),
    Array(Vec<ContractParameter>),
    Map(Vec<(ContractParameter, ContractParameter)>),
    InteropInterface,
}

impl ContractParameter {
    pub fn param_type(&self) -> ContractParameterType {
        match self {
            ContractParameter::Any => ContractParameterType::Any,
            ContractParameter::Boolean(_) => ContractParameterType::Boolean,
            ContractParameter::Integer(_) => ContractParameterType::Integer,
            ContractParameter::ByteArray(_) => ContractParameterType::ByteArray,
            ContractParameter::String(_) => ContractParameterType::String,
            ContractParameter::Hash160(_) => ContractParameterType::Hash160,
            ContractParameter::Hash256(_) => ContractParameterType::Hash256,
            ContractParameter::PublicKey(_) => ContractParameterType::PublicKey,
            ContractParameter::Signature(_) => ContractParameterType::Signature,
            ContractParameter::Array(_) => ContractParameterType::Array,
            ContractParameter::Map(_) => ContractParameterType::Map,
            ContractParameter::InteropInterface => ContractParameterType::InteropInterface,
        }
    }

    pub fn integer(value: impl Into<BigInt>) -> Self {
        ContractParameter::Integer(value.into())
    }

    pub fn string(value: impl Into<String>) -> Self {
        ContractParameter::String(value.into())
    }

    pub fn byte_array(value: impl Into<Vec<u8>>) -> Self {
        ContractParameter::ByteArray(value.into())
    }
}

impl From<bool> for ContractParameter {
    fn from(value: bool) -> Self {
        ContractParameter::Boolean(value)
    }
}

impl From<i64> for ContractParameter {
    fn from(value: i64) -> Self {
        ContractParameter::Integer(BigInt::from(value))
    }
}

impl From<BigInt> for ContractParameter {
    fn from(value: BigInt) -> Self {
        ContractParameter::Integer(value)
    }
}

impl From<&str> for ContractParameter {
    fn from(value: &str) -> Self {
        ContractParameter::String(value.to_string())
    }
}

impl From<Hash160> for ContractParameter {
    fn from(value: Hash160) -> Self {
        ContractParameter::Hash160(value)
    }
}

impl From<Hash256> for ContractParameter {
    fn from(value: Hash256) -> Self {
        ContractParameter::Hash256(value)
    }
}

impl From<Vec<ContractParameter>> for ContractParameter {
    fn from(value: Vec<ContractParameter>) -> Self {
        ContractParameter::Array(value)
    }
}
