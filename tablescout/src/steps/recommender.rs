use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tablescout_core::{
    ChatModel, ChatRequest, Console, Message, NewOrder, OrderHistory, PromptTemplate, Value,
};
use tablescout_graph::{GraphNode, GraphState, NodeError, StateUpdate};

use crate::prompts;
use crate::routing::is_all_digits;
use crate::state::{default_address, DinerState, DinerUpdate};

/// Writes the final pitch and persists the order.
///
/// Persisting happens before the model call, and only when the diner actually
/// picked a row (a numeric answer with a recorded snapshot). With a page
/// excerpt in hand the pitch is grounded in the restaurant's own site;
/// without one it falls back to the search data and is sold as a safe bet.
pub struct Recommender {
    chat: Arc<dyn ChatModel>,
    console: Arc<dyn Console>,
    history: Arc<dyn OrderHistory>,
}

impl Recommender {
    pub fn new(
        chat: Arc<dyn ChatModel>,
        console: Arc<dyn Console>,
        history: Arc<dyn OrderHistory>,
    ) -> Self {
        Self {
            chat,
            console,
            history,
        }
    }
}

#[async_trait]
impl GraphNode<DinerState> for Recommender {
    async fn invoke(
        &self,
        state: GraphState<DinerState>,
    ) -> Result<StateUpdate<DinerState>, NodeError> {
        let diner = &state.data;
        self.console.say("Writing your recommendation...");

        let decision = diner.decision.as_deref().unwrap_or("").trim();
        if is_all_digits(decision) {
            if let Some(chosen) = &diner.chosen {
                self.history
                    .record_order(NewOrder {
                        user_id: diner.user_id.clone(),
                        name: diner.name.clone(),
                        tax_id: diner.tax_id.clone(),
                        restaurant: chosen.name.clone(),
                        category: chosen.category.clone(),
                    })
                    .await?;
                self.console
                    .say(&format!("Noted: {} ({})", chosen.name, chosen.category));
            }
        }

        let profile = diner.taste_profile.clone().unwrap_or_default();
        let (name, address) = match &diner.chosen {
            Some(chosen) => (chosen.name.clone(), lookup_address(diner, &chosen.name)),
            None => ("a place from the list".to_string(), default_address()),
        };

        let prompt = if diner.fetch_failed || diner.page_excerpt.is_none() {
            PromptTemplate::new(prompts::SAFE_BET).render(&HashMap::from([
                ("profile".to_string(), Value::from(profile)),
                ("name".to_string(), Value::from(name)),
                ("address".to_string(), Value::from(address)),
            ]))?
        } else {
            let page = diner.page_excerpt.clone().unwrap_or_default();
            PromptTemplate::new(prompts::SOMMELIER).render(&HashMap::from([
                ("page".to_string(), Value::from(page)),
                ("profile".to_string(), Value::from(profile)),
                ("address".to_string(), Value::from(address)),
            ]))?
        };

        let recommendation = self
            .chat
            .complete(ChatRequest::new(vec![Message::user(prompt)]))
            .await?
            .content;

        self.console.say("");
        self.console.say("FINAL RECOMMENDATION:");
        self.console.say(&recommendation);

        Ok(StateUpdate::new(
            DinerUpdate::default().recommendation(recommendation),
        ))
    }
}

/// Address of the chosen restaurant, taken from the candidate list the diner
/// picked from. The snapshot itself does not carry one.
fn lookup_address(diner: &DinerState, name: &str) -> String {
    diner
        .candidates
        .iter()
        .find(|candidate| candidate.name == name)
        .map(|candidate| candidate.address.clone())
        .unwrap_or_else(default_address)
}
