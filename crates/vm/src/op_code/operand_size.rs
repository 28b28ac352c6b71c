//! Operand size information for NeoVM opcodes.

/// How many operand bytes follow an opcode.
///
/// An operand is either absent, a fixed number of bytes, or a
/// little-endian length prefix of `size_prefix` bytes followed by that
/// many bytes of data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OperandSize {
    size: usize,
    size_prefix: usize,
}

impl OperandSize {
    /// No operand.
    pub const NONE: Self = Self {
        size: 0,
        size_prefix: 0,
    };

    /// Creates a new operand size with a fixed size.
    pub const fn fixed(size: usize) -> Self {
        Self {
            size,
            size_prefix: 0,
        }
    }

    /// Creates a new operand size with a length prefix.
    pub const fn prefix(size_prefix: usize) -> Self {
        Self {
            size: 0,
            size_prefix,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn size_prefix(&self) -> usize {
        self.size_prefix
    }

    pub fn has_fixed_size(&self) -> bool {
        self.size > 0
    }

    pub fn has_size_prefix(&self) -> bool {
        self.size_prefix > 0
    }
}
