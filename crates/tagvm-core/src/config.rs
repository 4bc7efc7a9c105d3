//! Engine Configuration
//!
//! Optional resource limits for a run. Configuration specifies constraints
//! only; enforcement is handled by the engine. Both limits are off by default.

/// Engine configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineConfig {
    /// Maximum operand stack depth (`None` = unbounded)
    pub max_stack_depth: Option<usize>,

    /// Maximum number of instructions dispatched per run (`None` = unbounded)
    pub max_steps: Option<u64>,
}

impl EngineConfig {
    /// Create a new configuration with no limits
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_stack_depth(mut self, depth: usize) -> Self {
        self.max_stack_depth = Some(depth);
        self
    }

    pub fn with_max_steps(mut self, steps: u64) -> Self {
        self.max_steps = Some(steps);
        self
    }
}
