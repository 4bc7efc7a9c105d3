//! Opcode Definitions
//!
//! Operand-free discriminants of the instruction set.
//! This file contains no execution semantics.

use std::fmt;

/// Instruction opcodes
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpCode {
    // Literals
    PushNil   = 0x01,
    PushTrue  = 0x02,
    PushFalse = 0x03,
    PushInt   = 0x04,

    // Stack
    Dup = 0x10,
    Pop = 0x11,

    // Introspection
    AKind = 0x20,

    // Control flow
    Ret = 0x30,

    // System
    Noop = 0xF0,
}

impl OpCode {
    /// Assembly name of the opcode
    pub fn mnemonic(self) -> &'static str {
        match self {
            OpCode::PushNil => "push_nil",
            OpCode::PushTrue => "push_true",
            OpCode::PushFalse => "push_false",
            OpCode::PushInt => "push_int",

            OpCode::Dup => "dup",
            OpCode::Pop => "pop",

            OpCode::AKind => "a_kind",

            OpCode::Ret => "ret",

            OpCode::Noop => "noop",
        }
    }
}

impl fmt::Display for OpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
