use async_trait::async_trait;

use crate::state::{GraphState, StateSchema, StateUpdate};

/// Error a node reports on failure. The engine wraps it in
/// [`GraphError::NodeFailed`](crate::GraphError::NodeFailed) together with the
/// failing step's name.
pub type NodeError = Box<dyn std::error::Error + Send + Sync>;

/// A single step of a workflow. Receives a snapshot of the shared state and
/// returns a partial update for the engine to merge.
#[async_trait]
pub trait GraphNode<S: StateSchema>: Send + Sync {
    async fn invoke(&self, state: GraphState<S>) -> Result<StateUpdate<S>, NodeError>;
}
