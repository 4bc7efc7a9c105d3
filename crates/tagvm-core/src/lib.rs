//! tagvm - Core Library
//!
//! Public API surface for the kind-tagged stack engine.

pub mod error;
pub mod config;
pub mod bytecode;
pub mod vm;

// Re-export commonly used types
pub use error::{ErrorKind, ExecError, ExecResult, StackError};
pub use config::EngineConfig;
pub use bytecode::{Instruction, OpCode, Sequence, SequenceBuilder};
pub use vm::{run, Engine, Execution, Kind, Value};
