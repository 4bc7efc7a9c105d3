//! Activation Frame
//!
//! One in-progress run: an operand stack, an instruction pointer and a
//! borrowed view of the sequence being executed.

use crate::bytecode::instruction::Instruction;
use crate::bytecode::sequence::Sequence;

use super::stack::OperandStack;

/// Activation record for a single run
#[derive(Debug)]
pub struct Frame<'seq> {
    sequence: &'seq Sequence,
    ip: usize,
    stack: OperandStack,
}

impl<'seq> Frame<'seq> {
    /// Frame at ip 0 with an empty, unbounded stack
    pub fn new(sequence: &'seq Sequence) -> Self {
        Self::with_stack(sequence, OperandStack::new())
    }

    pub fn with_stack(sequence: &'seq Sequence, stack: OperandStack) -> Self {
        Frame {
            sequence,
            ip: 0,
            stack,
        }
    }

    /// Instruction at the current pointer, `None` once past the end
    pub fn fetch(&self) -> Option<&'seq Instruction> {
        self.sequence.get(self.ip)
    }

    pub fn advance(&mut self) {
        self.ip += 1;
    }

    pub fn ip(&self) -> usize {
        self.ip
    }

    pub fn sequence(&self) -> &'seq Sequence {
        self.sequence
    }

    pub fn stack(&self) -> &OperandStack {
        &self.stack
    }

    pub fn stack_mut(&mut self) -> &mut OperandStack {
        &mut self.stack
    }
}
