//! Operand Stack
//!
//! Per-frame LIFO storage for values.
//! No execution semantics.

use crate::error::StackError;

use super::value::Value;

/// Operand stack owned by a single frame
#[derive(Debug, Default)]
pub struct OperandStack {
    values: Vec<Value>,
    max_depth: Option<usize>,
}

impl OperandStack {
    /// Create an unbounded stack
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a stack that refuses to grow past `max_depth`
    pub fn with_limit(max_depth: usize) -> Self {
        OperandStack {
            values: Vec::new(),
            max_depth: Some(max_depth),
        }
    }

    /// Push value onto stack
    pub fn push(&mut self, value: Value) -> Result<(), StackError> {
        if let Some(limit) = self.max_depth {
            if self.values.len() >= limit {
                return Err(StackError::Overflow { limit });
            }
        }
        self.values.push(value);
        Ok(())
    }

    /// Pop value from stack
    pub fn pop(&mut self) -> Result<Value, StackError> {
        self.values.pop().ok_or(StackError::Underflow)
    }

    /// Peek at top of stack without removing
    pub fn peek(&self) -> Result<&Value, StackError> {
        self.values.last().ok_or(StackError::Underflow)
    }

    /// Get current stack depth
    pub fn depth(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }
}
