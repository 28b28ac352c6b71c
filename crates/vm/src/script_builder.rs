//! Script builder for the Neo Virtual Machine.
//!
//! The builder only appends. To start over, drop it and create a new one.

use crate::call_flags::CallFlags;
use crate::contract_parameter::ContractParameter;
use crate::error::{VmError, VmResult};
use crate::interop_service::InteropService;
use crate::op_code::OpCode;
use neo_sdk_config::{MAX_MULTISIG_KEYS, PUBLIC_KEY_SIZE};
use neo_sdk_primitives::Hash160;
use num_bigint::{BigInt, Sign};
use num_traits::ToPrimitive;

/// Helps construct VM scripts programmatically.
#[derive(Debug, Default, Clone)]
pub struct ScriptBuilder {
    script: Vec<u8>,
}

impl ScriptBuilder {
    /// Creates a new script builder.
    #[inline]
    pub fn new() -> Self {
        Self { script: Vec::new() }
    }

    /// Emits a single raw byte.
    #[inline]
    pub fn emit(&mut self, byte: u8) -> &mut Self {
        self.script.push(byte);
        self
    }

    /// Emits the opcodes in order.
    #[inline]
    pub fn op_code(&mut self, ops: &[OpCode]) -> &mut Self {
        self.script.extend(ops.iter().map(|op| *op as u8));
        self
    }

    /// Emits an opcode followed by the provided operand bytes.
    #[inline]
    pub fn emit_instruction(&mut self, op: OpCode, operand: &[u8]) -> &mut Self {
        self.script.push(op as u8);
        self.script.extend_from_slice(operand);
        self
    }

    /// Pushes `true` as `PUSH1` and `false` as `PUSH0`.
    #[inline]
    pub fn push_bool(&mut self, value: bool) -> &mut Self {
        self.op_code(&[if value { OpCode::PUSH1 } else { OpCode::PUSH0 }])
    }

    /// Pushes an integer. `-1..=16` use the single-byte opcodes, anything
    /// else the narrowest `PUSHINT*` that holds it.
    pub fn push_integer(&mut self, value: i64) -> &mut Self {
        if let Some(op) = OpCode::push_small_int(value) {
            return self.op_code(&[op]);
        }

        let bytes = value.to_le_bytes();
        let (op, width) = if i8::try_from(value).is_ok() {
            (OpCode::PUSHINT8, 1)
        } else if i16::try_from(value).is_ok() {
            (OpCode::PUSHINT16, 2)
        } else if i32::try_from(value).is_ok() {
            (OpCode::PUSHINT32, 4)
        } else {
            (OpCode::PUSHINT64, 8)
        };
        self.emit_instruction(op, &bytes[..width])
    }

    /// Pushes an arbitrary precision integer, up to 256 bits.
    pub fn push_big_integer(&mut self, value: &BigInt) -> VmResult<&mut Self> {
        if let Some(v) = value.to_i64() {
            return Ok(self.push_integer(v));
        }

        let bytes = value.to_signed_bytes_le();
        let (op, width) = match bytes.len() {
            0..=16 => (OpCode::PUSHINT128, 16),
            17..=32 => (OpCode::PUSHINT256, 32),
            len => {
                return Err(VmError::invalid_argument(format!(
                    "integer needs {} bytes, PUSHINT256 holds at most 32",
                    len
                )))
            }
        };

        let fill = if value.sign() == Sign::Minus { 0xFF } else { 0x00 };
        let mut padded = bytes;
        padded.resize(width, fill);
        Ok(self.emit_instruction(op, &padded))
    }

    /// Pushes raw bytes with the shortest `PUSHDATA*` that fits the length.
    pub fn push_data(&mut self, data: &[u8]) -> &mut Self {
        let len = data.len();
        if len <= 0xFF {
            self.emit_instruction(OpCode::PUSHDATA1, &[len as u8]);
        } else if len <= 0xFFFF {
            self.emit_instruction(OpCode::PUSHDATA2, &(len as u16).to_le_bytes());
        } else {
            self.emit_instruction(OpCode::PUSHDATA4, &(len as u32).to_le_bytes());
        }
        self.script.extend_from_slice(data);
        self
    }

    /// Pushes the UTF-8 bytes of `value`.
    #[inline]
    pub fn push_string(&mut self, value: &str) -> &mut Self {
        self.push_data(value.as_bytes())
    }

    #[inline]
    pub fn push_null(&mut self) -> &mut Self {
        self.op_code(&[OpCode::PUSHNULL])
    }

    /// Pushes a single contract parameter. On error nothing is appended.
    pub fn push_param(&mut self, param: &ContractParameter) -> VmResult<&mut Self> {
        self.rollback_on_error(|builder| builder.emit_param(param))
    }

    /// Pushes each parameter in order. On error nothing is appended.
    pub fn push_params(&mut self, params: &[ContractParameter]) -> VmResult<&mut Self> {
        self.rollback_on_error(|builder| params.iter().try_for_each(|p| builder.emit_param(p)))
    }

    /// Pushes a VM array: `NEWARRAY0` when empty, otherwise the items in
    /// reverse, the count and `PACK`.
    pub fn push_array(&mut self, items: &[ContractParameter]) -> VmResult<&mut Self> {
        self.rollback_on_error(|builder| builder.emit_array(items))
    }

    /// Pushes a VM map: value then key for every entry, the count and `PACKMAP`.
    pub fn push_map(
        &mut self,
        entries: &[(ContractParameter, ContractParameter)],
    ) -> VmResult<&mut Self> {
        self.rollback_on_error(|builder| builder.emit_map(entries))
    }

    /// Emits `SYSCALL` with the service hash.
    #[inline]
    pub fn sys_call(&mut self, service: InteropService) -> &mut Self {
        self.emit_instruction(OpCode::SYSCALL, &service.hash())
    }

    /// Emits a `System.Contract.Call` of `method` on `script_hash`.
    ///
    /// Stack layout, first pushed first: arguments array, call flags,
    /// method name, little-endian script hash.
    pub fn contract_call(
        &mut self,
        script_hash: &Hash160,
        method: &str,
        params: &[ContractParameter],
        call_flags: CallFlags,
    ) -> VmResult<&mut Self> {
        self.rollback_on_error(|builder| {
            builder.emit_array(params)?;
            builder
                .push_integer(call_flags.bits() as i64)
                .push_string(method)
                .push_data(&script_hash.to_le_array())
                .sys_call(InteropService::ContractCall);
            Ok(())
        })
    }

    /// Runs `emit` and cuts the script back to its previous length if it fails.
    fn rollback_on_error<F>(&mut self, emit: F) -> VmResult<&mut Self>
    where
        F: FnOnce(&mut Self) -> VmResult<()>,
    {
        let mark = self.script.len();
        match emit(self) {
            Ok(()) => Ok(self),
            Err(err) => {
                self.script.truncate(mark);
                Err(err)
            }
        }
    }

    fn emit_param(&mut self, param: &ContractParameter) -> VmResult<()> {
        match param {
            ContractParameter::Any => {
                self.push_null();
            }
            ContractParameter::Boolean(value) => {
                self.push_bool(*value);
            }
            ContractParameter::Integer(value) => {
                self.push_big_integer(value)?;
            }
            ContractParameter::ByteArray(bytes)
            | ContractParameter::PublicKey(bytes)
            | ContractParameter::Signature(bytes) => {
                self.push_data(bytes);
            }
            ContractParameter::String(value) => {
                self.push_string(value);
            }
            ContractParameter::Hash160(hash) => {
                self.push_data(&hash.to_le_array());
            }
            ContractParameter::Hash256(hash) => {
                self.push_data(&hash.to_le_array());
            }
            ContractParameter::Array(items) => self.emit_array(items)?,
            ContractParameter::Map(entries) => self.emit_map(entries)?,
            ContractParameter::InteropInterface => {
                return Err(VmError::invalid_operation(
                    "InteropInterface parameters cannot be pushed",
                ));
            }
        }
        Ok(())
    }

    fn emit_array(&mut self, items: &[ContractParameter]) -> VmResult<()> {
        if items.is_empty() {
            self.op_code(&[OpCode::NEWARRAY0]);
            return Ok(());
        }

        for item in items.iter().rev() {
            self.emit_param(item)?;
        }
        self.push_integer(items.len() as i64).op_code(&[OpCode::PACK]);
        Ok(())
    }

    fn emit_map(&mut self, entries: &[(ContractParameter, ContractParameter)]) -> VmResult<()> {
        for (key, value) in entries {
            self.emit_param(value)?;
            self.emit_param(key)?;
        }
        self.push_integer(entries.len() as i64)
            .op_code(&[OpCode::PACKMAP]);
        Ok(())
    }

    /// Converts the builder to a byte array.
    #[inline]
    pub fn to_array(&self) -> Vec<u8> {
        self.script.clone()
    }

    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.script
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.script.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.script.is_empty()
    }

    /// Single-signature verification script:
    /// `PUSHDATA1 <33-byte key> SYSCALL System.Crypto.CheckSig`.
    pub fn build_verification_script(encoded_public_key: &[u8]) -> VmResult<Vec<u8>> {
        check_public_key(encoded_public_key)?;
        let mut builder = ScriptBuilder::new();
        builder
            .push_data(encoded_public_key)
            .sys_call(InteropService::CryptoCheckSig);
        Ok(builder.into_bytes())
    }

    /// `m`-of-`n` verification script. Keys are emitted in ascending byte
    /// order whatever order they are given in.
    pub fn build_multisig_script(
        public_keys: &[[u8; PUBLIC_KEY_SIZE]],
        signing_threshold: usize,
    ) -> VmResult<Vec<u8>> {
        let n = public_keys.len();
        if n == 0 || n > MAX_MULTISIG_KEYS {
            return Err(VmError::invalid_argument(format!(
                "multi-signature accounts need 1 to {} public keys, got {}",
                MAX_MULTISIG_KEYS, n
            )));
        }
        if signing_threshold == 0 || signing_threshold > n {
            return Err(VmError::invalid_argument(format!(
                "signing threshold must be between 1 and {}, got {}",
                n, signing_threshold
            )));
        }

        let mut sorted: Vec<&[u8; PUBLIC_KEY_SIZE]> = public_keys.iter().collect();
        sorted.sort();

        let mut builder = ScriptBuilder::new();
        builder.push_integer(signing_threshold as i64);
        for key in sorted {
            check_public_key(key)?;
            builder.push_data(key);
        }
        builder
            .push_integer(n as i64)
            .sys_call(InteropService::CryptoCheckMultisig);
        Ok(builder.into_bytes())
    }

    /// Invocation script carrying one signature.
    pub fn build_invocation_script(signature: &[u8]) -> Vec<u8> {
        let mut builder = ScriptBuilder::new();
        builder.push_data(signature);
        builder.into_bytes()
    }

    /// Script whose hash is the address of a deployed contract.
    pub fn build_contract_hash_script(sender: &Hash160, nef_checksum: u32, name: &str) -> Vec<u8> {
        let mut builder = ScriptBuilder::new();
        builder
            .op_code(&[OpCode::ABORT])
            .push_data(&sender.to_le_array())
            .push_integer(nef_checksum as i64)
            .push_string(name);
        builder.into_bytes()
    }
}

fn check_public_key(key: &[u8]) -> VmResult<()> {
    match key {
        [0x02 | 0x03, ..] if key.len() == PUBLIC_KEY_SIZE => Ok(()),
        _ => Err(VmError::invalid_argument(format!(
            "expected a {}-byte compressed public key, got {} bytes",
            PUBLIC_KEY_SIZE,
            key.len()
        ))),
    }
}
