use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tablescout_core::{ChatModel, ChatRequest, Console, Message, PromptTemplate, Value};
use tablescout_graph::{GraphNode, GraphState, NodeError, StateUpdate};

use crate::prompts;
use crate::state::{DinerState, DinerUpdate};

/// Asks the diner what they want and turns the answer into a search query.
///
/// Runs first for diners with no history, and again whenever the diner turns
/// the menu down. A re-run wipes the previous candidates and the retry
/// counter so the next search starts clean.
pub struct Interviewer {
    chat: Arc<dyn ChatModel>,
    console: Arc<dyn Console>,
}

impl Interviewer {
    pub fn new(chat: Arc<dyn ChatModel>, console: Arc<dyn Console>) -> Self {
        Self { chat, console }
    }

    async fn opening_question(&self, diner: &DinerState) -> Result<String, NodeError> {
        if diner.candidates.is_empty() {
            self.console
                .say(&format!("Hello {}, welcome!", diner.name));
            let prompt = PromptTemplate::new(prompts::FIRST_QUESTION).render(&HashMap::from([
                ("name".to_string(), Value::from(diner.name.clone())),
                ("location".to_string(), Value::from(diner.location.clone())),
            ]))?;
            let response = self
                .chat
                .complete(ChatRequest::new(vec![Message::user(prompt)]))
                .await?;
            Ok(response.content)
        } else {
            // The diner rejected the menu built from their history, so the
            // question drops the history angle entirely.
            self.console.say("Got it, feeling adventurous today!");
            Ok(format!(
                "{}, forget the history then. What are you craving RIGHT NOW?",
                diner.name
            ))
        }
    }
}

#[async_trait]
impl GraphNode<DinerState> for Interviewer {
    async fn invoke(
        &self,
        state: GraphState<DinerState>,
    ) -> Result<StateUpdate<DinerState>, NodeError> {
        let diner = &state.data;

        let question = self.opening_question(diner).await?;
        self.console.say(&question);
        let reply = self.console.ask("You: ").await?;

        let prompt = PromptTemplate::new(prompts::QUERY_FROM_REPLY).render(&HashMap::from([
            ("reply".to_string(), Value::from(reply.clone())),
            ("location".to_string(), Value::from(diner.location.clone())),
        ]))?;
        let response = self
            .chat
            .complete(ChatRequest::new(vec![Message::user(prompt)]))
            .await?;
        let query = response.content.trim().to_string();

        tracing::debug!(query = %query, "interview distilled into a query");

        Ok(StateUpdate::new(
            DinerUpdate::default()
                .search_query(query)
                .taste_profile(reply)
                .candidates(Vec::new())
                .search_attempts(0),
        ))
    }
}
