mod config;
mod error;
mod graph;
mod node;
mod observer;
mod program;
mod state;

pub use config::{ExecutionConfig, ExecutionOptions};
pub use error::GraphError;
pub use graph::{ExecutableGraph, GraphBuilder, NodeKey, Transition};
pub use node::{GraphNode, NodeError};
pub use observer::Observer;
pub use program::{EdgeKind, GraphProgram};
pub use state::{GraphState, StateSchema, StateUpdate};
