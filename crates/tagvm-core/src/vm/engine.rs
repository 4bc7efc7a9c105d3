//! Execution Engine
//!
//! Fetch-dispatch loop that drives one frame through a sequence until it
//! returns or fails. Each call to [`Engine::execute`] builds a fresh frame, so
//! nothing leaks between runs and a shared [`Sequence`] may be executed from
//! many threads at once.

use tracing::{debug, instrument, trace};

use crate::bytecode::instruction::Instruction;
use crate::bytecode::opcode::OpCode;
use crate::bytecode::sequence::Sequence;
use crate::config::EngineConfig;
use crate::error::{ExecError, ExecResult, StackError};

use super::frame::Frame;
use super::stack::OperandStack;
use super::value::Value;

/// Outcome of a single instruction
#[derive(Debug)]
enum Control {
    Continue,
    Return(Value),
}

/// One dispatched instruction, as seen from the stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceStep {
    pub ip: usize,
    pub opcode: OpCode,
    pub depth_before: usize,
    pub depth_after: usize,
}

/// Stack-depth trajectory of a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    steps: Vec<TraceStep>,
}

impl Trace {
    pub fn steps(&self) -> &[TraceStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Last dispatched step, i.e. the one that returned or failed
    pub fn last(&self) -> Option<&TraceStep> {
        self.steps.last()
    }

    /// Depth after each step, in dispatch order
    pub fn depths(&self) -> Vec<usize> {
        self.steps.iter().map(|s| s.depth_after).collect()
    }

    fn record(&mut self, step: TraceStep) {
        self.steps.push(step);
    }
}

/// Result of a traced run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Execution {
    pub result: ExecResult<Value>,
    pub trace: Trace,
}

/// Stack bytecode engine
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Engine { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run `sequence` to completion in a fresh frame
    pub fn execute(&self, sequence: &Sequence) -> ExecResult<Value> {
        self.run_frame(sequence, None)
    }

    /// Like [`Engine::execute`], also recording the stack-depth trajectory
    pub fn execute_traced(&self, sequence: &Sequence) -> Execution {
        let mut trace = Trace::default();
        let result = self.run_frame(sequence, Some(&mut trace));
        Execution { result, trace }
    }

    #[instrument(name = "execute", skip_all, fields(len = sequence.len()))]
    fn run_frame(&self, sequence: &Sequence, mut trace: Option<&mut Trace>) -> ExecResult<Value> {
        let stack = match self.config.max_stack_depth {
            Some(limit) => OperandStack::with_limit(limit),
            None => OperandStack::new(),
        };
        let mut frame = Frame::with_stack(sequence, stack);
        let mut steps: u64 = 0;

        // The loop head is the only place a run may be aborted.
        let outcome = loop {
            let Some(instruction) = frame.fetch() else {
                break Err(ExecError::MissingReturn { len: sequence.len() });
            };

            if let Some(budget) = self.config.max_steps {
                if steps >= budget {
                    break Err(ExecError::StepBudgetExhausted { steps: budget });
                }
            }

            let ip = frame.ip();
            let depth_before = frame.stack().depth();
            let control = step(&mut frame, instruction);
            steps += 1;

            if let Some(trace) = trace.as_deref_mut() {
                trace.record(TraceStep {
                    ip,
                    opcode: instruction.opcode(),
                    depth_before,
                    depth_after: frame.stack().depth(),
                });
            }

            match control {
                Ok(Control::Continue) => frame.advance(),
                Ok(Control::Return(value)) => break Ok(value),
                Err(err) => break Err(err),
            }
        };

        match &outcome {
            Ok(value) => debug!(kind = %value.kind(), steps, "returned"),
            Err(err) => debug!(error = %err, steps, "failed"),
        }
        outcome
    }
}

/// Apply one instruction to the frame (dispatch only, no pointer movement)
fn step(frame: &mut Frame<'_>, instruction: &Instruction) -> ExecResult<Control> {
    let ip = frame.ip();
    let opcode = instruction.opcode();
    let lift = move |err: StackError| ExecError::from_stack(err, ip, opcode);

    let stack = frame.stack_mut();
    trace!(ip, %opcode, depth = stack.depth(), "dispatch");

    match *instruction {
        Instruction::PushNil => stack.push(Value::Nil).map_err(lift)?,
        Instruction::PushTrue => stack.push(Value::Bool(true)).map_err(lift)?,
        Instruction::PushFalse => stack.push(Value::Bool(false)).map_err(lift)?,
        Instruction::PushInt(n) => stack.push(Value::Integer(n)).map_err(lift)?,

        Instruction::Dup => {
            let top = stack.peek().map_err(lift)?.clone();
            stack.push(top).map_err(lift)?;
        }
        Instruction::Pop => {
            stack.pop().map_err(lift)?;
        }

        // Non-destructive: the inspected value stays beneath its kind.
        Instruction::AKind => {
            let kind = stack.peek().map_err(lift)?.kind();
            stack.push(Value::Kind(kind)).map_err(lift)?;
        }

        Instruction::Ret => return stack.pop().map(Control::Return).map_err(lift),

        Instruction::Noop => {}
    }

    Ok(Control::Continue)
}

/// Execute `sequence` with the default (unbounded) configuration
pub fn run(sequence: &Sequence) -> ExecResult<Value> {
    Engine::default().execute(sequence)
}
