use serde::{Deserialize, Serialize};
use tablescout_graph::{
    EdgeKind, GraphBuilder, GraphNode, GraphState, NodeError, StateSchema, StateUpdate, Transition,
};

#[derive(Clone, Default, Debug, Serialize, Deserialize, PartialEq)]
struct DemoState {
    count: i32,
}

impl StateSchema for DemoState {
    type Update = Self;
    fn apply(_: &Self, update: Self) -> Self {
        update
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Key {
    Plan,
    Act,
}

struct NoOp;

#[async_trait::async_trait]
impl GraphNode<DemoState> for NoOp {
    async fn invoke(
        &self,
        input: GraphState<DemoState>,
    ) -> Result<StateUpdate<DemoState>, NodeError> {
        Ok(StateUpdate::new(input.data))
    }
}

#[test]
fn program_reports_nodes_and_edges() {
    let graph = GraphBuilder::new()
        .add_node(Key::Plan, NoOp)
        .add_node(Key::Act, NoOp)
        .add_edge(Key::Plan, Key::Act)
        .add_conditional_edge(
            Key::Act,
            vec![Transition::To(Key::Plan), Transition::End],
            |_: &GraphState<DemoState>| Transition::End,
        )
        .set_entry(Key::Plan)
        .build()
        .unwrap();

    let program = graph.program();
    assert_eq!(program.node_count(), 2);
    assert_eq!(program.edge_count(), 2);
    assert!(program.contains(&Key::Plan));
    assert!(program.contains(&Key::Act));

    let mut names = program.node_names();
    names.sort();
    assert_eq!(names, vec!["Act".to_string(), "Plan".to_string()]);

    let mut edges = program.edge_names();
    edges.sort();
    assert_eq!(
        edges,
        vec![
            ("Act".to_string(), "Plan".to_string()),
            ("Plan".to_string(), "Act".to_string()),
        ]
    );

    let kinds = program.edge_kinds();
    assert!(kinds.contains(&("Plan".to_string(), "Act".to_string(), EdgeKind::Default)));
    assert!(kinds.contains(&("Act".to_string(), "Plan".to_string(), EdgeKind::Conditional)));
}
