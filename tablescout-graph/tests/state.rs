use serde::{Deserialize, Serialize};
use tablescout_graph::{GraphState, StateSchema, StateUpdate};

#[derive(Clone, Default, Debug, Serialize, Deserialize, PartialEq)]
struct SessionState {
    query: Option<String>,
    attempts: u32,
    notes: Vec<String>,
}

#[derive(Clone, Default)]
struct SessionUpdate {
    query: Option<String>,
    attempts: Option<u32>,
    note: Option<String>,
}

impl StateSchema for SessionState {
    type Update = SessionUpdate;

    fn apply(current: &Self, update: SessionUpdate) -> Self {
        let mut next = current.clone();
        if let Some(query) = update.query {
            next.query = Some(query);
        }
        if let Some(attempts) = update.attempts {
            next.attempts = attempts;
        }
        if let Some(note) = update.note {
            next.notes.push(note);
        }
        next
    }
}

#[test]
fn apply_touches_only_populated_slots() {
    let state = GraphState::new(SessionState {
        query: Some("tacos".to_string()),
        attempts: 1,
        notes: vec!["first pass".to_string()],
    });

    let next = state.apply(StateUpdate::new(SessionUpdate {
        attempts: Some(2),
        note: Some("second pass".to_string()),
        ..Default::default()
    }));

    assert_eq!(next.data.query.as_deref(), Some("tacos"));
    assert_eq!(next.data.attempts, 2);
    assert_eq!(
        next.data.notes,
        vec!["first pass".to_string(), "second pass".to_string()]
    );
}

#[test]
fn empty_update_leaves_state_unchanged() {
    let state = GraphState::new(SessionState {
        query: Some("ramen".to_string()),
        attempts: 3,
        notes: vec![],
    });
    let before = state.data.clone();

    let next = state.apply(StateUpdate::new(SessionUpdate::default()));
    assert_eq!(next.data, before);
}
