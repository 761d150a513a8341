use std::fmt;
use std::hash::Hash;

use ahash::AHashMap;
use petgraph::graph::Graph;

use crate::config::{ExecutionConfig, ExecutionOptions};
use crate::error::GraphError;
use crate::node::GraphNode;
use crate::program::{EdgeKind, GraphProgram, NodeData};
use crate::state::{GraphState, StateSchema};

/// Node identifier. Implemented automatically for any small copyable key,
/// typically a fieldless enum naming the workflow's steps.
pub trait NodeKey: Copy + Eq + Hash + fmt::Debug + Send + Sync + 'static {}

impl<K> NodeKey for K where K: Copy + Eq + Hash + fmt::Debug + Send + Sync + 'static {}

/// Where control goes after a node completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transition<K: NodeKey> {
    To(K),
    End,
}

type Router<K, S> = Box<dyn Fn(&GraphState<S>) -> Transition<K> + Send + Sync>;
type EntryRouter<K, S> = Box<dyn Fn(&GraphState<S>) -> K + Send + Sync>;

enum Edge<K: NodeKey, S: StateSchema> {
    Fixed(Transition<K>),
    Conditional {
        targets: Vec<Transition<K>>,
        router: Router<K, S>,
    },
}

enum Entry<K: NodeKey, S: StateSchema> {
    Fixed(K),
    Conditional {
        targets: Vec<K>,
        router: EntryRouter<K, S>,
    },
}

pub struct GraphBuilder<K: NodeKey, S: StateSchema> {
    nodes: AHashMap<K, Box<dyn GraphNode<S>>>,
    edges: AHashMap<K, Edge<K, S>>,
    entry: Option<Entry<K, S>>,
    config: ExecutionConfig,
}

impl<K: NodeKey, S: StateSchema> Default for GraphBuilder<K, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: NodeKey, S: StateSchema> GraphBuilder<K, S> {
    pub fn new() -> Self {
        Self {
            nodes: AHashMap::new(),
            edges: AHashMap::new(),
            entry: None,
            config: ExecutionConfig::default(),
        }
    }

    pub fn add_node<N>(mut self, key: K, node: N) -> Self
    where
        N: GraphNode<S> + 'static,
    {
        self.nodes.insert(key, Box::new(node));
        self
    }

    pub fn add_edge(mut self, from: K, to: K) -> Self {
        self.edges.insert(from, Edge::Fixed(Transition::To(to)));
        self
    }

    /// Marks `node` terminal: once it completes, the run ends.
    pub fn set_finish(mut self, node: K) -> Self {
        self.edges.insert(node, Edge::Fixed(Transition::End));
        self
    }

    /// Routes out of `from` by inspecting the merged state. `targets` declares
    /// every transition the router may return; `build` checks they exist and
    /// the run rejects any router result outside the list.
    pub fn add_conditional_edge<F>(
        mut self,
        from: K,
        targets: impl Into<Vec<Transition<K>>>,
        router: F,
    ) -> Self
    where
        F: Fn(&GraphState<S>) -> Transition<K> + Send + Sync + 'static,
    {
        self.edges.insert(
            from,
            Edge::Conditional {
                targets: targets.into(),
                router: Box::new(router),
            },
        );
        self
    }

    pub fn set_entry(mut self, node: K) -> Self {
        self.entry = Some(Entry::Fixed(node));
        self
    }

    /// Picks the first node at run time by inspecting the initial state.
    pub fn set_conditional_entry<F>(mut self, targets: impl Into<Vec<K>>, router: F) -> Self
    where
        F: Fn(&GraphState<S>) -> K + Send + Sync + 'static,
    {
        self.entry = Some(Entry::Conditional {
            targets: targets.into(),
            router: Box::new(router),
        });
        self
    }

    pub fn with_default_config(mut self, config: ExecutionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Result<ExecutableGraph<K, S>, GraphError> {
        let entry = self.entry.ok_or(GraphError::MissingEntry)?;

        let invalid = |key: &K| GraphError::InvalidEdge {
            node: format!("{:?}", key),
        };

        match &entry {
            Entry::Fixed(key) => {
                if !self.nodes.contains_key(key) {
                    return Err(invalid(key));
                }
            }
            Entry::Conditional { targets, .. } => {
                for key in targets {
                    if !self.nodes.contains_key(key) {
                        return Err(invalid(key));
                    }
                }
            }
        }

        for (from, edge) in &self.edges {
            if !self.nodes.contains_key(from) {
                return Err(invalid(from));
            }
            match edge {
                Edge::Fixed(Transition::To(to)) => {
                    if !self.nodes.contains_key(to) {
                        return Err(invalid(to));
                    }
                }
                Edge::Fixed(Transition::End) => {}
                Edge::Conditional { targets, .. } => {
                    for target in targets {
                        if let Transition::To(to) = target {
                            if !self.nodes.contains_key(to) {
                                return Err(invalid(to));
                            }
                        }
                    }
                }
            }
        }

        for key in self.nodes.keys() {
            if !self.edges.contains_key(key) {
                return Err(GraphError::MissingEdge {
                    node: format!("{:?}", key),
                });
            }
        }

        let mut graph = Graph::new();
        let mut key_to_index = AHashMap::with_capacity(self.nodes.len());
        for (key, runnable) in self.nodes {
            let name = format!("{:?}", key);
            let index = graph.add_node(NodeData {
                key,
                name,
                runnable,
            });
            key_to_index.insert(key, index);
        }
        for (from, edge) in &self.edges {
            let from_index = key_to_index[from];
            match edge {
                Edge::Fixed(Transition::To(to)) => {
                    graph.add_edge(from_index, key_to_index[to], EdgeKind::Default);
                }
                Edge::Fixed(Transition::End) => {}
                Edge::Conditional { targets, .. } => {
                    for target in targets {
                        if let Transition::To(to) = target {
                            graph.add_edge(from_index, key_to_index[to], EdgeKind::Conditional);
                        }
                    }
                }
            }
        }

        Ok(ExecutableGraph {
            program: GraphProgram::new(graph, key_to_index),
            edges: self.edges,
            entry,
            config: self.config,
        })
    }
}

pub struct ExecutableGraph<K: NodeKey, S: StateSchema> {
    program: GraphProgram<K, S>,
    edges: AHashMap<K, Edge<K, S>>,
    entry: Entry<K, S>,
    config: ExecutionConfig,
}

impl<K: NodeKey, S: StateSchema> fmt::Debug for ExecutableGraph<K, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExecutableGraph")
            .field("nodes", &self.program.node_count())
            .field("edges", &self.program.edge_count())
            .finish_non_exhaustive()
    }
}

impl<K: NodeKey, S: StateSchema> ExecutableGraph<K, S> {
    pub fn program(&self) -> &GraphProgram<K, S> {
        &self.program
    }

    pub async fn invoke(&self, state: GraphState<S>) -> Result<GraphState<S>, GraphError> {
        self.invoke_with_options(state, ExecutionOptions::default())
            .await
    }

    pub async fn invoke_with_options(
        &self,
        mut state: GraphState<S>,
        options: ExecutionOptions,
    ) -> Result<GraphState<S>, GraphError> {
        let config = self.config.merge(&options);
        let observer = options.observer;

        let mut current = match &self.entry {
            Entry::Fixed(key) => *key,
            Entry::Conditional { targets, router } => {
                let key = router(&state);
                if !targets.contains(&key) {
                    return Err(GraphError::UndeclaredTransition {
                        node: "entry".to_string(),
                        target: format!("{:?}", key),
                    });
                }
                key
            }
        };

        let mut steps = 0usize;
        loop {
            steps += 1;
            if let Some(max) = config.max_steps {
                if steps > max {
                    return Err(GraphError::MaxStepsExceeded {
                        max,
                        reached: steps,
                    });
                }
            }

            let name = format!("{:?}", current);
            let node = self
                .program
                .node(&current)
                .ok_or_else(|| GraphError::MissingNode { node: name.clone() })?;

            if let Some(observer) = observer.as_deref() {
                observer.on_node_enter(&name);
            }
            tracing::debug!(node = %name, step = steps, "running node");

            let update = match node.invoke(state.clone()).await {
                Ok(update) => update,
                Err(source) => {
                    tracing::warn!(node = %name, error = %source, "node failed");
                    if let Some(observer) = observer.as_deref() {
                        observer.on_error(&name, &source.to_string());
                    }
                    return Err(GraphError::NodeFailed { node: name, source });
                }
            };
            state = state.apply(update);

            if let Some(observer) = observer.as_deref() {
                observer.on_node_exit(&name);
            }

            let next = match self.edges.get(&current) {
                Some(Edge::Fixed(transition)) => *transition,
                Some(Edge::Conditional { targets, router }) => {
                    let transition = router(&state);
                    if !targets.contains(&transition) {
                        return Err(GraphError::UndeclaredTransition {
                            node: name,
                            target: format!("{:?}", transition),
                        });
                    }
                    transition
                }
                None => return Err(GraphError::MissingEdge { node: name }),
            };

            match next {
                Transition::To(key) => current = key,
                Transition::End => break,
            }
        }

        Ok(state)
    }
}
