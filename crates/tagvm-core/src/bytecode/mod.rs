pub mod builder;
pub mod instruction;
pub mod opcode;
pub mod sequence;

pub use builder::SequenceBuilder;
pub use instruction::Instruction;
pub use opcode::OpCode;
pub use sequence::Sequence;
