use std::sync::Arc;

use crate::observer::Observer;

/// Build-time execution defaults for a graph.
#[derive(Clone, Debug)]
pub struct ExecutionConfig {
    /// Upper bound on node executions per run. `None` disables the guard,
    /// for workflows whose loops are bounded elsewhere.
    pub max_steps: Option<usize>,
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            max_steps: Some(50),
        }
    }
}

impl ExecutionConfig {
    pub fn merge(&self, overrides: &ExecutionOptions) -> Self {
        Self {
            max_steps: overrides.max_steps.or(self.max_steps),
        }
    }
}

/// Per-run overrides. Unset fields fall back to the graph's
/// [`ExecutionConfig`].
#[derive(Clone, Default)]
pub struct ExecutionOptions {
    pub max_steps: Option<usize>,
    pub observer: Option<Arc<dyn Observer>>,
}
