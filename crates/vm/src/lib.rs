//! # NeoVM script construction
//!
//! Bytecode construction for the Neo Virtual Machine. This crate does not
//! execute scripts; it builds and inspects them.
//!
//! - **OpCode**: the instruction table with operand sizes
//! - **ScriptBuilder**: append-only assembler for invocation and verification scripts
//! - **PushDataReader**: decodes push instructions from a [`MemoryReader`](neo_sdk_io::MemoryReader)
//! - **ScriptReader**: disassembles a script into readable instructions
//! - **InteropService**: syscall names and their 4-byte hashes
//!
//! ## Example
//!
//! ```rust
//! use neo_sdk_vm::{OpCode, ScriptBuilder};
//!
//! let mut builder = ScriptBuilder::new();
//! builder.push_integer(17).op_code(&[OpCode::RET]);
//!
//! assert_eq!(builder.to_array(), vec![0x00, 0x11, 0x40]);
//! ```

pub mod call_flags;
pub mod contract_parameter;
pub mod error;
pub mod interop_service;
pub mod op_code;
pub mod push_data;
pub mod script_builder;
pub mod script_reader;

pub use call_flags::CallFlags;
pub use contract_parameter::{ContractParameter, ContractParameterType};
pub use error::{VmError, VmResult};
pub use interop_service::InteropService;
pub use op_code::{OpCode, OperandSize};
pub use push_data::PushDataReader;
pub use script_builder::ScriptBuilder;
pub use script_reader::ScriptReader;
