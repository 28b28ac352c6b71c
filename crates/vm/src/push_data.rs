//! Decoding of push instructions from a [`MemoryReader`].

use crate::error::{VmError, VmResult};
use crate::op_code::OpCode;
use neo_sdk_io::MemoryReader;
use num_bigint::BigInt;
use num_traits::ToPrimitive;

/// Reads values pushed by `PUSHDATA*`, `PUSHINT*` and the small-integer
/// opcodes.
///
/// On error the reader is left where it was before the call.
pub trait PushDataReader {
    /// Reads the payload of a `PUSHDATA1`, `PUSHDATA2` or `PUSHDATA4`.
    fn read_push_data(&mut self) -> VmResult<Vec<u8>>;

    /// Reads a `PUSHDATA*` payload as UTF-8.
    fn read_push_string(&mut self) -> VmResult<String>;

    /// Reads an integer pushed by `PUSHM1..=PUSH16`, `PUSHINT8..=PUSHINT256`
    /// or a `PUSHDATA*` carrying signed little-endian bytes.
    fn read_push_big_int(&mut self) -> VmResult<BigInt>;

    /// As [`read_push_big_int`](Self::read_push_big_int), narrowed to `i64`.
    fn read_push_integer(&mut self) -> VmResult<i64>;
}

fn rewind_on_error<'a, T>(
    reader: &mut MemoryReader<'a>,
    f: impl FnOnce(&mut MemoryReader<'a>) -> VmResult<T>,
) -> VmResult<T> {
    let start = reader.position();
    let result = f(reader);
    if result.is_err() {
        reader.set_position(start)?;
    }
    result
}

fn read_push_data_inner(reader: &mut MemoryReader<'_>) -> VmResult<Vec<u8>> {
    let byte = reader.read_u8()?;
    let length = match OpCode::try_from(byte) {
        Ok(OpCode::PUSHDATA1) => reader.read_u8()? as usize,
        Ok(OpCode::PUSHDATA2) => reader.read_u16()? as usize,
        Ok(OpCode::PUSHDATA4) => reader.read_u32()? as usize,
        _ => {
            return Err(VmError::InvalidOpCode {
                expected: "PUSHDATA",
                found: byte,
            })
        }
    };
    Ok(reader.read_bytes(length)?)
}

fn read_push_big_int_inner(reader: &mut MemoryReader<'_>) -> VmResult<BigInt> {
    let byte = reader.peek()?;
    let op = OpCode::try_from(byte)?;

    if let Some(value) = op.small_int_value() {
        reader.read_u8()?;
        return Ok(BigInt::from(value));
    }

    let width = match op {
        OpCode::PUSHINT8 => 1,
        OpCode::PUSHINT16 => 2,
        OpCode::PUSHINT32 => 4,
        OpCode::PUSHINT64 => 8,
        OpCode::PUSHINT128 => 16,
        OpCode::PUSHINT256 => 32,
        OpCode::PUSHDATA1 | OpCode::PUSHDATA2 | OpCode::PUSHDATA4 => {
            let bytes = read_push_data_inner(reader)?;
            return Ok(BigInt::from_signed_bytes_le(&bytes));
        }
        _ => {
            return Err(VmError::InvalidOpCode {
                expected: "integer push",
                found: byte,
            })
        }
    };

    reader.read_u8()?;
    let bytes = reader.read_memory(width)?;
    Ok(BigInt::from_signed_bytes_le(bytes))
}

impl<'a> PushDataReader for MemoryReader<'a> {
    fn read_push_data(&mut self) -> VmResult<Vec<u8>> {
        rewind_on_error(self, read_push_data_inner)
    }

    fn read_push_string(&mut self) -> VmResult<String> {
        rewind_on_error(self, |reader| {
            let bytes = read_push_data_inner(reader)?;
            String::from_utf8(bytes)
                .map_err(|_| VmError::invalid_argument("pushed data is not valid UTF-8"))
        })
    }

    fn read_push_big_int(&mut self) -> VmResult<BigInt> {
        rewind_on_error(self, read_push_big_int_inner)
    }

    fn read_push_integer(&mut self) -> VmResult<i64> {
        rewind_on_error(self, |reader| {
            let value = read_push_big_int_inner(reader)?;
            value
                .to_i64()
                .ok_or_else(|| VmError::invalid_argument(format!("{} does not fit in i64", value)))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScriptBuilder;
    use hex_literal::hex;

    #[test]
    fn test_read_push_data_lengths() {
        for len in [0usize, 1, 75, 255, 256, 65535, 65536] {
            let data = vec![0x5A; len];
            let mut builder = ScriptBuilder::new();
            builder.push_data(&data);
            let script = builder.to_array();

            let mut reader = MemoryReader::new(&script);
            assert_eq!(reader.read_push_data().unwrap(), data);
            assert_eq!(reader.available(), 0);
        }
    }

    #[test]
    fn test_read_push_data_rejects_other_opcode() {
        let script = [OpCode::PUSH1 as u8, 0x00];
        let mut reader = MemoryReader::new(&script);
        let err = reader.read_push_data().unwrap_err();
        assert_eq!(
            err,
            VmError::InvalidOpCode {
                expected: "PUSHDATA",
                found: 0x11
            }
        );
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn test_read_push_data_truncated_restores_position() {
        let script = hex!("0c0501020304");
        let mut reader = MemoryReader::new(&script);
        assert!(reader.read_push_data().is_err());
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn test_read_push_string() {
        let script = hex!("0c036e656f");
        let mut reader = MemoryReader::new(&script);
        assert_eq!(reader.read_push_string().unwrap(), "neo");

        let invalid = hex!("0c02fffe");
        let mut reader = MemoryReader::new(&invalid);
        assert!(reader.read_push_string().is_err());
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn test_read_push_integers() {
        let mut builder = ScriptBuilder::new();
        for value in [-1i64, 0, 16, 17, -2, 128, -800000, i64::MIN, i64::MAX] {
            builder.push_integer(value);
        }
        let script = builder.to_array();

        let mut reader = MemoryReader::new(&script);
        for value in [-1i64, 0, 16, 17, -2, 128, -800000, i64::MIN, i64::MAX] {
            assert_eq!(reader.read_push_integer().unwrap(), value);
        }
        assert_eq!(reader.available(), 0);
    }

    #[test]
    fn test_read_push_big_int_wide_and_pushdata() {
        let value = -(BigInt::from(1) << 200usize) + 7;
        let mut builder = ScriptBuilder::new();
        builder.push_big_integer(&value).unwrap();
        builder.push_data(&[0x00, 0x80]);
        let script = builder.to_array();

        let mut reader = MemoryReader::new(&script);
        assert_eq!(reader.read_push_big_int().unwrap(), value);
        assert_eq!(reader.read_push_big_int().unwrap(), BigInt::from(-32768));
    }

    #[test]
    fn test_read_push_integer_overflow_restores_position() {
        let mut builder = ScriptBuilder::new();
        builder.push_big_integer(&(BigInt::from(1) << 100usize)).unwrap();
        let script = builder.to_array();

        let mut reader = MemoryReader::new(&script);
        assert!(matches!(
            reader.read_push_integer(),
            Err(VmError::InvalidArgument(_))
        ));
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn test_read_push_big_int_rejects_non_push() {
        let script = [OpCode::RET as u8];
        let mut reader = MemoryReader::new(&script);
        assert!(matches!(
            reader.read_push_big_int(),
            Err(VmError::InvalidOpCode { found: 0x40, .. })
        ));
    }
}
