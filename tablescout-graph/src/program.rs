use ahash::AHashMap;
use petgraph::graph::{Graph, NodeIndex};
use petgraph::visit::EdgeRef;

use crate::graph::NodeKey;
use crate::node::GraphNode;
use crate::state::StateSchema;

pub struct NodeData<K: NodeKey, S: StateSchema> {
    pub key: K,
    pub name: String,
    pub runnable: Box<dyn GraphNode<S>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeKind {
    Default,
    Conditional,
}

/// Static structure of a built graph. Transitions to the terminal state are
/// not edges here, so a finish-only node appears with no outgoing edges.
pub struct GraphProgram<K: NodeKey, S: StateSchema> {
    graph: Graph<NodeData<K, S>, EdgeKind>,
    key_to_index: AHashMap<K, NodeIndex>,
}

impl<K: NodeKey, S: StateSchema> GraphProgram<K, S> {
    pub(crate) fn new(
        graph: Graph<NodeData<K, S>, EdgeKind>,
        key_to_index: AHashMap<K, NodeIndex>,
    ) -> Self {
        Self {
            graph,
            key_to_index,
        }
    }

    pub(crate) fn node(&self, key: &K) -> Option<&dyn GraphNode<S>> {
        let index = self.key_to_index.get(key)?;
        Some(self.graph.node_weight(*index)?.runnable.as_ref())
    }

    pub fn contains(&self, key: &K) -> bool {
        self.key_to_index.contains_key(key)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn node_names(&self) -> Vec<String> {
        self.graph
            .node_weights()
            .map(|data| data.name.clone())
            .collect()
    }

    pub fn edge_names(&self) -> Vec<(String, String)> {
        self.graph
            .edge_references()
            .filter_map(|edge| {
                let from = self.graph.node_weight(edge.source())?;
                let to = self.graph.node_weight(edge.target())?;
                Some((from.name.clone(), to.name.clone()))
            })
            .collect()
    }

    pub fn edge_kinds(&self) -> Vec<(String, String, EdgeKind)> {
        self.graph
            .edge_references()
            .filter_map(|edge| {
                let from = self.graph.node_weight(edge.source())?;
                let to = self.graph.node_weight(edge.target())?;
                Some((from.name.clone(), to.name.clone(), *edge.weight()))
            })
            .collect()
    }
}
