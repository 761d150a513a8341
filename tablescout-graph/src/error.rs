use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("node failed: {node}")]
    NodeFailed {
        node: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("missing node: {node}")]
    MissingNode { node: String },
    #[error("invalid edge to '{node}'")]
    InvalidEdge { node: String },
    #[error("node '{node}' has no outgoing edge and never finishes")]
    MissingEdge { node: String },
    #[error("no entry point set")]
    MissingEntry,
    #[error("router on '{node}' returned undeclared transition to '{target}'")]
    UndeclaredTransition { node: String, target: String },
    #[error("max steps exceeded: reached {reached}, limit {max}")]
    MaxStepsExceeded { max: usize, reached: usize },
}
