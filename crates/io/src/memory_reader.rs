use crate::{IoError, IoResult};
use num_bigint::BigInt;

/// Cursor over a borrowed byte slice.
///
/// Every read checks the remaining length first; a failed read leaves the
/// position unchanged.
#[derive(Debug, Clone)]
pub struct MemoryReader<'a> {
    memory: &'a [u8],
    pos: usize,
}

impl<'a> MemoryReader<'a> {
    pub fn new(memory: &'a [u8]) -> Self {
        Self { memory, pos: 0 }
    }

    #[inline(always)]
    fn ensure_position(&self, move_by: usize) -> IoResult<()> {
        match self.pos.checked_add(move_by) {
            Some(end) if end <= self.memory.len() => Ok(()),
            _ => Err(IoError::UnexpectedEof),
        }
    }

    #[inline(always)]
    fn read_array<const N: usize>(&mut self) -> IoResult<[u8; N]> {
        self.ensure_position(N)?;
        let mut value = [0u8; N];
        value.copy_from_slice(&self.memory[self.pos..self.pos + N]);
        self.pos += N;
        Ok(value)
    }

    #[inline(always)]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Moves the cursor. Positions past the end of the input are rejected.
    pub fn set_position(&mut self, position: usize) -> IoResult<()> {
        if position > self.memory.len() {
            return Err(IoError::invalid_data(format!(
                "Position {} is beyond the end of the input ({} bytes)",
                position,
                self.memory.len()
            )));
        }
        self.pos = position;
        Ok(())
    }

    /// Number of unread bytes.
    #[inline(always)]
    pub fn available(&self) -> usize {
        self.memory.len() - self.pos
    }

    #[inline(always)]
    pub fn peek(&self) -> IoResult<u8> {
        self.ensure_position(1)?;
        Ok(self.memory[self.pos])
    }

    pub fn read_bool(&mut self) -> IoResult<bool> {
        match self.peek()? {
            0 => {
                self.pos += 1;
                Ok(false)
            }
            1 => {
                self.pos += 1;
                Ok(true)
            }
            other => Err(IoError::invalid_data(format!(
                "Invalid boolean value: {other:#04x}"
            ))),
        }
    }

    #[inline(always)]
    pub fn read_u8(&mut self) -> IoResult<u8> {
        self.ensure_position(1)?;
        let value = self.memory[self.pos];
        self.pos += 1;
        Ok(value)
    }

    #[inline(always)]
    pub fn read_i8(&mut self) -> IoResult<i8> {
        Ok(self.read_u8()? as i8)
    }

    #[inline(always)]
    pub fn read_u16(&mut self) -> IoResult<u16> {
        Ok(u16::from_le_bytes(self.read_array()?))
    }

    #[inline(always)]
    pub fn read_i16(&mut self) -> IoResult<i16> {
        Ok(i16::from_le_bytes(self.read_array()?))
    }

    #[inline(always)]
    pub fn read_u32(&mut self) -> IoResult<u32> {
        Ok(u32::from_le_bytes(self.read_array()?))
    }

    #[inline(always)]
    pub fn read_i32(&mut self) -> IoResult<i32> {
        Ok(i32::from_le_bytes(self.read_array()?))
    }

    #[inline(always)]
    pub fn read_u64(&mut self) -> IoResult<u64> {
        Ok(u64::from_le_bytes(self.read_array()?))
    }

    #[inline(always)]
    pub fn read_i64(&mut self) -> IoResult<i64> {
        Ok(i64::from_le_bytes(self.read_array()?))
    }

    /// Reads a variable-length integer with no upper bound.
    pub fn read_var_int(&mut self) -> IoResult<u64> {
        self.read_var_int_max(u64::MAX)
    }

    /// Reads a variable-length integer and rejects values above `max`.
    pub fn read_var_int_max(&mut self, max: u64) -> IoResult<u64> {
        let start = self.pos;
        let result = self.read_var_int_unchecked().and_then(|value| {
            if value > max {
                Err(IoError::ExceedsMaximum { value, max })
            } else {
                Ok(value)
            }
        });
        if result.is_err() {
            self.pos = start;
        }
        result
    }

    fn read_var_int_unchecked(&mut self) -> IoResult<u64> {
        let b = self.read_u8()?;
        let value = match b {
            0xfd => self.read_u16()? as u64,
            0xfe => self.read_u32()? as u64,
            0xff => self.read_u64()?,
            _ => b as u64,
        };
        Ok(value)
    }

    #[inline(always)]
    pub fn read_bytes(&mut self, count: usize) -> IoResult<Vec<u8>> {
        Ok(self.read_memory(count)?.to_vec())
    }

    #[inline(always)]
    pub fn read_memory(&mut self, count: usize) -> IoResult<&'a [u8]> {
        self.ensure_position(count)?;
        let result = &self.memory[self.pos..self.pos + count];
        self.pos += count;
        Ok(result)
    }

    pub fn read_var_bytes(&mut self) -> IoResult<Vec<u8>> {
        self.read_var_bytes_max(usize::MAX)
    }

    pub fn read_var_bytes_max(&mut self, max: usize) -> IoResult<Vec<u8>> {
        Ok(self.read_var_memory(max)?.to_vec())
    }

    pub fn read_var_memory(&mut self, max: usize) -> IoResult<&'a [u8]> {
        let start = self.pos;
        let length = self.read_var_int_max(max as u64)? as usize;
        self.read_memory(length).map_err(|e| {
            self.pos = start;
            e
        })
    }

    pub fn read_var_string(&mut self) -> IoResult<String> {
        self.read_var_string_max(usize::MAX)
    }

    pub fn read_var_string_max(&mut self, max: usize) -> IoResult<String> {
        let start = self.pos;
        let data = self.read_var_memory(max)?;
        String::from_utf8(data.to_vec()).map_err(|_| {
            self.pos = start;
            IoError::invalid_data("Invalid UTF-8 sequence")
        })
    }

    /// Reads a zero-padded string occupying exactly `length` bytes.
    pub fn read_fixed_string(&mut self, length: usize) -> IoResult<String> {
        self.ensure_position(length)?;
        let data = &self.memory[self.pos..self.pos + length];
        let end = data.iter().position(|b| *b == 0).unwrap_or(length);
        if data[end..].iter().any(|b| *b != 0) {
            return Err(IoError::invalid_data("Invalid fixed string format"));
        }
        let value = String::from_utf8(data[..end].to_vec())
            .map_err(|_| IoError::invalid_data("Invalid UTF-8 sequence"))?;
        self.pos += length;
        Ok(value)
    }

    /// Reads every remaining byte as a signed little-endian two's-complement
    /// integer. An empty remainder yields zero.
    pub fn read_big_integer(&mut self) -> IoResult<BigInt> {
        Ok(BigInt::from_signed_bytes_le(self.read_to_end()))
    }

    #[inline(always)]
    pub fn read_to_end(&mut self) -> &'a [u8] {
        let result = &self.memory[self.pos..];
        self.pos = self.memory.len();
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_fixed_width() {
        let data = [
            0x01, 0x2a, 0x18, 0xfc, 0x40, 0x42, 0x0f, 0x00, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
            0xff, 0x7f,
        ];
        let mut reader = MemoryReader::new(&data);

        assert!(reader.read_bool().unwrap());
        assert_eq!(reader.read_u8().unwrap(), 42);
        assert_eq!(reader.read_i16().unwrap(), -1000);
        assert_eq!(reader.read_u32().unwrap(), 1_000_000);
        assert_eq!(reader.read_i64().unwrap(), i64::MAX);
        assert_eq!(reader.available(), 0);
        assert_eq!(reader.read_u8(), Err(IoError::UnexpectedEof));
    }

    #[test]
    fn test_failed_read_keeps_position() {
        let data = [0x01, 0x02, 0x03];
        let mut reader = MemoryReader::new(&data);
        reader.read_u8().unwrap();

        assert_eq!(reader.read_u32(), Err(IoError::UnexpectedEof));
        assert_eq!(reader.position(), 1);
        assert_eq!(reader.read_u16().unwrap(), 0x0302);
    }

    #[test]
    fn test_read_var_int_truncated() {
        let data = [0xfe, 0x01, 0x02];
        let mut reader = MemoryReader::new(&data);
        assert_eq!(reader.read_var_int(), Err(IoError::UnexpectedEof));
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn test_read_var_int_max() {
        let data = [0xfd, 0x00, 0x01];
        let mut reader = MemoryReader::new(&data);
        assert_eq!(
            reader.read_var_int_max(255),
            Err(IoError::ExceedsMaximum { value: 256, max: 255 })
        );
        assert_eq!(reader.read_var_int_max(256).unwrap(), 256);
    }

    #[test]
    fn test_read_bool_rejects_other_values() {
        let data = [0x02];
        let mut reader = MemoryReader::new(&data);
        assert!(matches!(reader.read_bool(), Err(IoError::InvalidData(_))));
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn test_read_var_bytes_and_string() {
        let data = [0x03, 0x01, 0x02, 0x03, 0x03, b'n', b'e', b'o', 0x05, 0x00];
        let mut reader = MemoryReader::new(&data);
        assert_eq!(reader.read_var_bytes().unwrap(), vec![1, 2, 3]);
        assert_eq!(reader.read_var_string().unwrap(), "neo");

        let before = reader.position();
        assert_eq!(reader.read_var_bytes(), Err(IoError::UnexpectedEof));
        assert_eq!(reader.position(), before);
    }

    #[test]
    fn test_read_big_integer() {
        let data = [0x00, 0xcb, 0xf3, 0xff];
        let mut reader = MemoryReader::new(&data);
        assert_eq!(reader.read_big_integer().unwrap(), BigInt::from(-800000));
        assert_eq!(reader.available(), 0);

        let data = [0x80, 0x00];
        let mut reader = MemoryReader::new(&data);
        assert_eq!(reader.read_big_integer().unwrap(), BigInt::from(128));

        let mut reader = MemoryReader::new(&[]);
        assert_eq!(reader.read_big_integer().unwrap(), BigInt::from(0));
    }

    #[test]
    fn test_set_position() {
        let data = [0x0a, 0x0b, 0x0c];
        let mut reader = MemoryReader::new(&data);
        reader.set_position(2).unwrap();
        assert_eq!(reader.read_u8().unwrap(), 0x0c);
        reader.set_position(0).unwrap();
        assert_eq!(reader.read_u8().unwrap(), 0x0a);
        assert!(reader.set_position(4).is_err());
        assert!(reader.set_position(3).is_ok());
        assert_eq!(reader.available(), 0);
    }

    #[test]
    fn test_read_fixed_string() {
        let data = [b'n', b'e', b'o', 0, 0, b'x', 0];
        let mut reader = MemoryReader::new(&data);
        assert_eq!(reader.read_fixed_string(5).unwrap(), "neo");
        assert!(reader.read_fixed_string(3).is_err());
    }
}
