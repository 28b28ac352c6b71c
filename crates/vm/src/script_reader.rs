//! Instruction-level reading of a script.

use crate::error::VmResult;
use crate::op_code::OpCode;
use neo_sdk_io::MemoryReader;

/// Walks a script one instruction at a time.
///
/// Each item is the opcode and its operand. For size-prefixed operands the
/// prefix is consumed and only the payload is returned.
pub struct ScriptReader<'a> {
    reader: MemoryReader<'a>,
}

impl<'a> ScriptReader<'a> {
    pub fn new(script: &'a [u8]) -> Self {
        Self {
            reader: MemoryReader::new(script),
        }
    }

    pub fn position(&self) -> usize {
        self.reader.position()
    }

    /// Reads the next instruction, `None` at the end of the script.
    pub fn read_instruction(&mut self) -> VmResult<Option<(OpCode, &'a [u8])>> {
        if self.reader.available() == 0 {
            return Ok(None);
        }

        let op = OpCode::try_from(self.reader.peek()?)?;
        let start = self.reader.position();
        let result = self.read_operand(op);
        if result.is_err() {
            self.reader.set_position(start)?;
        }
        result.map(|operand| Some((op, operand)))
    }

    fn read_operand(&mut self, op: OpCode) -> VmResult<&'a [u8]> {
        self.reader.read_u8()?;
        let operand_size = op.operand_size();
        let length = match operand_size.size_prefix() {
            0 => operand_size.size(),
            1 => self.reader.read_u8()? as usize,
            2 => self.reader.read_u16()? as usize,
            _ => self.reader.read_u32()? as usize,
        };
        Ok(self.reader.read_memory(length)?)
    }

    /// Renders `script` as one `OPCODE [operand-hex]` line per instruction.
    pub fn convert_to_op_code_string(script: &[u8]) -> VmResult<String> {
        let mut reader = ScriptReader::new(script);
        let mut lines = Vec::new();
        while let Some((op, operand)) = reader.read_instruction()? {
            if operand.is_empty() {
                lines.push(op.name().to_string());
            } else {
                lines.push(format!("{} {}", op.name(), hex::encode(operand)));
            }
        }
        Ok(lines.join("\n"))
    }
}
