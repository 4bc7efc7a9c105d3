//! Instruction Representation
//!
//! Closed set of instructions. Operands travel inside the variant, so an
//! instruction that the engine cannot handle is unrepresentable.

use super::opcode::OpCode;

/// A single instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// Push `nil`
    PushNil,
    /// Push `true`
    PushTrue,
    /// Push `false`
    PushFalse,
    /// Push an integer literal
    PushInt(i64),
    /// Push a copy of the top value
    Dup,
    /// Discard the top value
    Pop,
    /// Push the kind of the top value, leaving the value in place
    AKind,
    /// Pop the top value and return it
    Ret,
    Noop,
}

impl Instruction {
    pub fn opcode(&self) -> OpCode {
        match self {
            Instruction::PushNil => OpCode::PushNil,
            Instruction::PushTrue => OpCode::PushTrue,
            Instruction::PushFalse => OpCode::PushFalse,
            Instruction::PushInt(_) => OpCode::PushInt,
            Instruction::Dup => OpCode::Dup,
            Instruction::Pop => OpCode::Pop,
            Instruction::AKind => OpCode::AKind,
            Instruction::Ret => OpCode::Ret,
            Instruction::Noop => OpCode::Noop,
        }
    }
}
