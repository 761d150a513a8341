use std::sync::Arc;

use async_trait::async_trait;
use tablescout_core::SearchProvider;
use tablescout_graph::{GraphNode, GraphState, NodeError, StateUpdate};

use crate::state::{DinerState, DinerUpdate};

/// Runs the current query against the search provider and stores the raw
/// hits. The retry counter belongs to the validator and is left untouched.
pub struct Search {
    provider: Arc<dyn SearchProvider>,
}

impl Search {
    pub fn new(provider: Arc<dyn SearchProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl GraphNode<DinerState> for Search {
    async fn invoke(
        &self,
        state: GraphState<DinerState>,
    ) -> Result<StateUpdate<DinerState>, NodeError> {
        let query = state.data.search_query.clone().unwrap_or_default();
        tracing::debug!(query = %query, pass = state.data.search_attempts + 1, "searching");

        let hits = self.provider.search(&query).await?;
        tracing::debug!(hits = hits.len(), "search finished");

        Ok(StateUpdate::new(DinerUpdate::default().raw_results(hits)))
    }
}
