use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tablescout_core::{ChatModel, ChatRequest, Console, Message, PromptTemplate, Value};
use tablescout_graph::{GraphNode, GraphState, NodeError, StateUpdate};

use crate::prompts;
use crate::state::{DinerState, DinerUpdate};

/// Builds a search query from the diner's recent orders instead of asking.
///
/// Only the five most recent orders feed the model; older history stops
/// describing what the diner eats now.
pub struct HistoryAnalyst {
    chat: Arc<dyn ChatModel>,
    console: Arc<dyn Console>,
}

impl HistoryAnalyst {
    pub fn new(chat: Arc<dyn ChatModel>, console: Arc<dyn Console>) -> Self {
        Self { chat, console }
    }
}

#[async_trait]
impl GraphNode<DinerState> for HistoryAnalyst {
    async fn invoke(
        &self,
        state: GraphState<DinerState>,
    ) -> Result<StateUpdate<DinerState>, NodeError> {
        let diner = &state.data;

        let start = diner.order_history.len().saturating_sub(5);
        let recent = &diner.order_history[start..];
        let summary = recent
            .iter()
            .map(|order| format!("{} at {}", order.category, order.restaurant))
            .collect::<Vec<_>>()
            .join(", ");

        self.console
            .say(&format!("You usually order: {}", summary));

        let prompt = PromptTemplate::new(prompts::HISTORY_QUERY).render(&HashMap::from([
            ("location".to_string(), Value::from(diner.location.clone())),
            ("history".to_string(), Value::from(summary)),
        ]))?;
        let response = self
            .chat
            .complete(ChatRequest::new(vec![Message::user(prompt)]))
            .await?;
        let query = response.content.trim().to_string();

        // The taste tag follows the most recent order, not the most frequent
        // one; the model already weighs frequency when writing the query.
        let profile = match recent.last() {
            Some(order) => format!("Fan of {}", order.category),
            None => "Fan of good food".to_string(),
        };

        tracing::debug!(query = %query, profile = %profile, "history distilled into a query");

        Ok(StateUpdate::new(
            DinerUpdate::default()
                .search_query(query)
                .taste_profile(profile),
        ))
    }
}
