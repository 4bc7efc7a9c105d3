pub mod engine;
pub mod frame;
pub mod stack;
pub mod value;

pub use engine::{run, Engine, Execution, Trace, TraceStep};
pub use frame::Frame;
pub use stack::OperandStack;
pub use value::{Kind, Value};
