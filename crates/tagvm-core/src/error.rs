//! Engine Error Types
//!
//! Defines the error conditions produced while running an instruction sequence.
//! Every error is terminal for the run that raised it and leaves nothing
//! outside that run's frame behind.

use thiserror::Error;

use crate::bytecode::opcode::OpCode;

/// Failure raised by the operand stack itself.
///
/// Carries no position information; the engine lifts it into an
/// [`ExecError`] tagged with the instruction that caused it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StackError {
    #[error("stack underflow")]
    Underflow,

    #[error("stack overflow: limit {limit}")]
    Overflow { limit: usize },
}

/// Failure of a single `execute` call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecError {
    /// An instruction demanded an operand and found none.
    #[error("stack underflow in {opcode} at ip {ip}")]
    StackUnderflow { ip: usize, opcode: OpCode },

    /// Control reached the end of the sequence without a `ret`.
    #[error("sequence of {len} instructions ended without ret")]
    MissingReturn { len: usize },

    /// A push exceeded the configured stack capacity.
    #[error("stack overflow in {opcode} at ip {ip}: limit {limit}")]
    StackOverflow {
        ip: usize,
        opcode: OpCode,
        limit: usize,
    },

    /// The configured step budget ran out before the sequence returned.
    #[error("step budget of {steps} exhausted")]
    StepBudgetExhausted { steps: u64 },
}

/// Fieldless classification of an [`ExecError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    StackUnderflow,
    MissingReturn,
    StackOverflow,
    StepBudgetExhausted,
}

impl ExecError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ExecError::StackUnderflow { .. } => ErrorKind::StackUnderflow,
            ExecError::MissingReturn { .. } => ErrorKind::MissingReturn,
            ExecError::StackOverflow { .. } => ErrorKind::StackOverflow,
            ExecError::StepBudgetExhausted { .. } => ErrorKind::StepBudgetExhausted,
        }
    }

    /// Instruction pointer of the failing instruction, if the error has one.
    pub fn ip(&self) -> Option<usize> {
        match self {
            ExecError::StackUnderflow { ip, .. } | ExecError::StackOverflow { ip, .. } => Some(*ip),
            ExecError::MissingReturn { .. } | ExecError::StepBudgetExhausted { .. } => None,
        }
    }

    /// Attach the failing position to a stack-level error.
    pub(crate) fn from_stack(err: StackError, ip: usize, opcode: OpCode) -> Self {
        match err {
            StackError::Underflow => ExecError::StackUnderflow { ip, opcode },
            StackError::Overflow { limit } => ExecError::StackOverflow { ip, opcode, limit },
        }
    }
}

pub type ExecResult<T> = Result<T, ExecError>;
