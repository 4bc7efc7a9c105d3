//! Instruction Sequences
//!
//! A finalized program. Sequences never change after assembly, so one
//! sequence can back any number of concurrent runs.

use std::sync::Arc;

use super::instruction::Instruction;

/// Ordered, immutable list of instructions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    instructions: Arc<[Instruction]>,
}

impl Sequence {
    pub fn new(instructions: Vec<Instruction>) -> Self {
        Sequence {
            instructions: instructions.into(),
        }
    }

    /// Empty sequence (runs fail with `MissingReturn`)
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Instruction at `ip`, or `None` past the end
    pub fn get(&self, ip: usize) -> Option<&Instruction> {
        self.instructions.get(ip)
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Instruction> {
        self.instructions.iter()
    }
}

impl From<Vec<Instruction>> for Sequence {
    fn from(instructions: Vec<Instruction>) -> Self {
        Sequence::new(instructions)
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a Instruction;
    type IntoIter = std::slice::Iter<'a, Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
