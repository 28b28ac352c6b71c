use crate::{IoError, IoResult, Serializable};

/// A binary writer that appends little-endian values to a growable buffer.
///
/// # Examples
///
/// ```rust
/// use neo_sdk_io::BinaryWriter;
///
/// let mut writer = BinaryWriter::new();
/// writer.write_u32(42).unwrap();
/// writer.write_var_string("Neo").unwrap();
///
/// assert_eq!(writer.to_bytes(), [42, 0, 0, 0, 3, b'N', b'e', b'o']);
/// ```
#[derive(Debug, Default, Clone)]
pub struct BinaryWriter {
    buffer: Vec<u8>,
}

impl BinaryWriter {
    pub fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
        }
    }

    pub fn write_bool(&mut self, value: bool) -> IoResult<()> {
        self.write_u8(if value { 0x01 } else { 0x00 })
    }

    pub fn write_u8(&mut self, value: u8) -> IoResult<()> {
        self.buffer.push(value);
        Ok(())
    }

    pub fn write_i8(&mut self, value: i8) -> IoResult<()> {
        self.buffer.push(value as u8);
        Ok(())
    }

    pub fn write_u16(&mut self, value: u16) -> IoResult<()> {
        self.write_bytes(&value.to_le_bytes())
    }

    pub fn write_i16(&mut self, value: i16) -> IoResult<()> {
        self.write_bytes(&value.to_le_bytes())
    }

    pub fn write_u32(&mut self, value: u32) -> IoResult<()> {
        self.write_bytes(&value.to_le_bytes())
    }

    pub fn write_i32(&mut self, value: i32) -> IoResult<()> {
        self.write_bytes(&value.to_le_bytes())
    }

    pub fn write_u64(&mut self, value: u64) -> IoResult<()> {
        self.write_bytes(&value.to_le_bytes())
    }

    pub fn write_i64(&mut self, value: i64) -> IoResult<()> {
        self.write_bytes(&value.to_le_bytes())
    }

    pub fn write_bytes(&mut self, buffer: &[u8]) -> IoResult<()> {
        self.buffer.extend_from_slice(buffer);
        Ok(())
    }

    /// Writes a variable-length unsigned integer.
    ///
    /// Values below `0xFD` take one byte; larger values are prefixed by
    /// `0xFD`, `0xFE` or `0xFF` followed by a u16, u32 or u64.
    pub fn write_var_int(&mut self, value: u64) -> IoResult<()> {
        if value < 0xFD {
            self.write_u8(value as u8)
        } else if value <= 0xFFFF {
            self.write_u8(0xFD)?;
            self.write_u16(value as u16)
        } else if value <= 0xFFFF_FFFF {
            self.write_u8(0xFE)?;
            self.write_u32(value as u32)
        } else {
            self.write_u8(0xFF)?;
            self.write_u64(value)
        }
    }

    /// Writes a varint length prefix followed by the bytes. Empty input
    /// produces the single byte `0x00`.
    pub fn write_var_bytes(&mut self, value: &[u8]) -> IoResult<()> {
        self.write_var_int(value.len() as u64)?;
        self.write_bytes(value)
    }

    pub fn write_var_string(&mut self, value: &str) -> IoResult<()> {
        self.write_var_bytes(value.as_bytes())
    }

    /// Writes `value` as UTF-8 and pads with zeros up to `length` bytes.
    pub fn write_fixed_string(&mut self, value: &str, length: usize) -> IoResult<()> {
        let bytes = value.as_bytes();
        if bytes.len() > length {
            return Err(IoError::invalid_data(format!(
                "UTF-8 byte length {} exceeds fixed size {}",
                bytes.len(),
                length
            )));
        }

        self.write_bytes(bytes)?;
        self.buffer.resize(self.buffer.len() + (length - bytes.len()), 0);
        Ok(())
    }

    pub fn write_serializable<T: Serializable>(&mut self, value: &T) -> IoResult<()> {
        value.serialize(self)
    }

    /// Writes a varint count followed by each item.
    pub fn write_serializable_list<T: Serializable>(&mut self, value: &[T]) -> IoResult<()> {
        self.write_var_int(value.len() as u64)?;
        for item in value {
            item.serialize(self)?;
        }
        Ok(())
    }

    /// Returns everything written since creation or the last [`reset`](Self::reset).
    pub fn to_bytes(&self) -> Vec<u8> {
        self.buffer.clone()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Rewinds the writer so the buffer can be reused.
    pub fn reset(&mut self) {
        self.buffer.clear();
    }
}
