// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// modifications are permitted.

//! Serialization traits and utilities for wire values.

use crate::{BinaryWriter, IoResult, MemoryReader};

/// A value with a fixed binary wire encoding.
pub trait Serializable {
    /// The size of the object in bytes after serialization.
    fn size(&self) -> usize;

    /// Serializes the object using the specified BinaryWriter.
    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()>;

    /// Deserializes the object using the specified MemoryReader.
    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self>
    where
        Self: Sized;
}

/// Extension methods for serializable objects.
pub trait SerializableExt: Serializable {
    /// Converts the object to a byte array.
    fn to_array(&self) -> IoResult<Vec<u8>> {
        let mut writer = BinaryWriter::with_capacity(self.size());
        self.serialize(&mut writer)?;
        Ok(writer.into_bytes())
    }

    /// Creates an object from a byte array.
    fn from_array(data: &[u8]) -> IoResult<Self>
    where
        Self: Sized,
    {
        let mut reader = MemoryReader::new(data);
        Self::deserialize(&mut reader)
    }
}

impl<T: Serializable> SerializableExt for T {}

/// Helper functions for serialization.
pub mod helper {
    use super::Serializable;
    use crate::{IoResult, MemoryReader};

    /// Deserializes a varint-counted collection of at most `max` items.
    pub fn deserialize_array<T: Serializable>(
        reader: &mut MemoryReader,
        max: usize,
    ) -> IoResult<Vec<T>> {
        let count = reader.read_var_int_max(max as u64)? as usize;
        let mut items = Vec::with_capacity(count.min(reader.available()));
        for _ in 0..count {
            items.push(T::deserialize(reader)?);
        }
        Ok(items)
    }

    /// Gets the size of a serialized array.
    pub fn get_array_size<T: Serializable>(items: &[T]) -> usize {
        get_var_size(items.len() as u64) + items.iter().map(Serializable::size).sum::<usize>()
    }

    /// Gets the size of a variable-length integer.
    pub fn get_var_size(value: u64) -> usize {
        if value < 0xFD {
            1
        } else if value <= 0xFFFF {
            3
        } else if value <= 0xFFFFFFFF {
            5
        } else {
            9
        }
    }

    /// Gets the size of a varint-prefixed byte block.
    pub fn get_var_bytes_size(value: &[u8]) -> usize {
        get_var_size(value.len() as u64) + value.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::IoError;

    #[derive(Debug, PartialEq)]
    struct Witness {
        invocation: Vec<u8>,
        nonce: u32,
    }

    impl Serializable for Witness {
        fn size(&self) -> usize {
            helper::get_var_bytes_size(&self.invocation) + 4
        }

        fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
            writer.write_var_bytes(&self.invocation)?;
            writer.write_u32(self.nonce)
        }

        fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
            Ok(Witness {
                invocation: reader.read_var_bytes_max(1024)?,
                nonce: reader.read_u32()?,
            })
        }
    }

    #[test]
    fn test_serializable_roundtrip() {
        let original = Witness {
            invocation: vec![0x0c, 0x40],
            nonce: 0x12345678,
        };
        let bytes = original.to_array().unwrap();
        assert_eq!(bytes.len(), original.size());
        assert_eq!(Witness::from_array(&bytes).unwrap(), original);
    }

    #[test]
    fn test_serialize_list() {
        let items = vec![
            Witness { invocation: vec![1], nonce: 1 },
            Witness { invocation: vec![], nonce: 2 },
            Witness { invocation: vec![3, 3, 3], nonce: 3 },
        ];

        let mut writer = BinaryWriter::new();
        writer.write_serializable_list(&items).unwrap();
        let bytes = writer.to_bytes();
        assert_eq!(bytes.len(), helper::get_array_size(&items));

        let mut reader = MemoryReader::new(&bytes);
        let deserialized: Vec<Witness> = helper::deserialize_array(&mut reader, 16).unwrap();
        assert_eq!(items, deserialized);

        let mut reader = MemoryReader::new(&bytes);
        assert!(matches!(
            helper::deserialize_array::<Witness>(&mut reader, 2),
            Err(IoError::ExceedsMaximum { value: 3, max: 2 })
        ));
    }

    #[test]
    fn test_get_var_size() {
        assert_eq!(helper::get_var_size(0), 1);
        assert_eq!(helper::get_var_size(252), 1);
        assert_eq!(helper::get_var_size(253), 3);
        assert_eq!(helper::get_var_size(u16::MAX as u64), 3);
        assert_eq!(helper::get_var_size(65536), 5);
        assert_eq!(helper::get_var_size(0xFFFFFFFF), 5);
        assert_eq!(helper::get_var_size(0x100000000), 9);
    }
}
