//! Neo SDK IO
//!
//! Little-endian binary codec used for wire values: a growable
//! [`BinaryWriter`], a cursor-based [`MemoryReader`] and the
//! [`Serializable`] trait tying them together.

mod binary_writer;
mod error;
mod memory_reader;
pub mod serializable;

pub use binary_writer::BinaryWriter;
pub use error::{IoError, IoResult};
pub use memory_reader::MemoryReader;
pub use serializable::{helper, Serializable, SerializableExt};
