//! Instruction spec harness
//!
//! Assembles a small program around the instruction under test and runs it
//! on a fresh engine. Spec tests for each instruction live in `tests/`.

use tracing::debug;
use tracing_subscriber::EnvFilter;

pub use tagvm_core::{
    EngineConfig, ErrorKind, ExecError, ExecResult, Execution, Instruction, Kind, OpCode,
    Sequence, SequenceBuilder, Value,
};

use tagvm_core::Engine;

/// A program written to exercise one instruction
#[derive(Debug, Clone)]
pub struct InstructionSpec {
    opcode: OpCode,
    sequence: Sequence,
    config: EngineConfig,
}

impl InstructionSpec {
    /// Assemble the program by handing `build` a fresh builder
    pub fn new<F>(opcode: OpCode, build: F) -> Self
    where
        F: FnOnce(&mut SequenceBuilder),
    {
        let mut g = SequenceBuilder::new();
        build(&mut g);
        InstructionSpec {
            opcode,
            sequence: g.finish(),
            config: EngineConfig::default(),
        }
    }

    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Instruction under test
    pub fn opcode(&self) -> OpCode {
        self.opcode
    }

    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    pub fn run(&self) -> ExecResult<Value> {
        debug!(instruction = %self.opcode, len = self.sequence.len(), "running spec");
        Engine::new(self.config.clone()).execute(&self.sequence)
    }

    pub fn run_traced(&self) -> Execution {
        debug!(instruction = %self.opcode, len = self.sequence.len(), "running traced spec");
        Engine::new(self.config.clone()).execute_traced(&self.sequence)
    }
}

/// Install a test-friendly subscriber filtered by `RUST_LOG` (default `warn`).
/// Safe to call from every test.
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_records_instruction_under_test() {
        let spec = InstructionSpec::new(OpCode::PushTrue, |g| {
            g.push_true();
            g.ret();
        });
        assert_eq!(spec.opcode(), OpCode::PushTrue);
        assert_eq!(spec.sequence().len(), 2);
        assert_eq!(spec.run(), Ok(Value::Bool(true)));
    }

    #[test]
    fn config_reaches_the_engine() {
        init_test_logging();
        let spec = InstructionSpec::new(OpCode::Noop, |g| {
            g.noop();
            g.push_nil();
            g.ret();
        })
        .with_config(EngineConfig::new().with_max_steps(1));
        let err = spec.run().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::StepBudgetExhausted);
    }
}
