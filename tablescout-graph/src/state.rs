use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Shared state threaded through a workflow run.
///
/// `Update` is the partial record a node returns; `apply` folds it into the
/// current state. Nodes never mutate state directly, so a field a node does
/// not populate in its update survives the step unchanged.
pub trait StateSchema:
    Serialize + DeserializeOwned + Clone + Default + Send + Sync + 'static
{
    type Update: Send + 'static;

    fn apply(current: &Self, update: Self::Update) -> Self;
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(bound = "S: StateSchema")]
pub struct GraphState<S: StateSchema> {
    pub data: S,
}

impl<S: StateSchema> GraphState<S> {
    pub fn new(data: S) -> Self {
        Self { data }
    }

    pub fn apply(self, update: StateUpdate<S>) -> Self {
        Self {
            data: S::apply(&self.data, update.data),
        }
    }
}

pub struct StateUpdate<S: StateSchema> {
    pub data: S::Update,
}

impl<S: StateSchema> StateUpdate<S> {
    pub fn new(data: S::Update) -> Self {
        Self { data }
    }
}
