//! Sequence Builder
//!
//! Appends instructions to a growable list and finalizes it into an
//! immutable [`Sequence`]. The engine only ever sees the finalized form.

use super::instruction::Instruction;
use super::sequence::Sequence;

/// In-process assembler for instruction sequences
#[derive(Debug, Default, Clone)]
pub struct SequenceBuilder {
    instructions: Vec<Instruction>,
}

impl SequenceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an arbitrary instruction
    pub fn emit(&mut self, instruction: Instruction) -> &mut Self {
        self.instructions.push(instruction);
        self
    }

    pub fn push_nil(&mut self) -> &mut Self {
        self.emit(Instruction::PushNil)
    }

    pub fn push_true(&mut self) -> &mut Self {
        self.emit(Instruction::PushTrue)
    }

    pub fn push_false(&mut self) -> &mut Self {
        self.emit(Instruction::PushFalse)
    }

    pub fn push_int(&mut self, value: i64) -> &mut Self {
        self.emit(Instruction::PushInt(value))
    }

    pub fn dup(&mut self) -> &mut Self {
        self.emit(Instruction::Dup)
    }

    pub fn pop(&mut self) -> &mut Self {
        self.emit(Instruction::Pop)
    }

    pub fn a_kind(&mut self) -> &mut Self {
        self.emit(Instruction::AKind)
    }

    pub fn ret(&mut self) -> &mut Self {
        self.emit(Instruction::Ret)
    }

    pub fn noop(&mut self) -> &mut Self {
        self.emit(Instruction::Noop)
    }

    /// Number of instructions appended so far
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Finalize into an immutable sequence
    pub fn finish(self) -> Sequence {
        Sequence::new(self.instructions)
    }
}
