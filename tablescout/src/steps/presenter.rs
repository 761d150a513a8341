use std::sync::Arc;

use async_trait::async_trait;
use tablescout_core::Console;
use tablescout_graph::{GraphNode, GraphState, NodeError, StateUpdate};

use crate::routing::chosen_index;
use crate::state::{ChosenRestaurant, DinerState, DinerUpdate};

/// Prints the numbered menu and records the diner's pick.
///
/// The raw answer is always stored for the router; a valid row number also
/// snapshots the chosen restaurant so it can be persisted later, while any
/// other answer clears the url and leaves routing to decide what happens.
pub struct Presenter {
    console: Arc<dyn Console>,
}

impl Presenter {
    pub fn new(console: Arc<dyn Console>) -> Self {
        Self { console }
    }
}

#[async_trait]
impl GraphNode<DinerState> for Presenter {
    async fn invoke(
        &self,
        state: GraphState<DinerState>,
    ) -> Result<StateUpdate<DinerState>, NodeError> {
        let diner = &state.data;
        let options = &diner.candidates;

        self.console.say("");
        self.console.say(&"=".repeat(30));
        self.console.say("TODAY'S MENU");
        self.console.say(&"=".repeat(30));
        for (row, option) in options.iter().enumerate() {
            self.console.say(&format!("[{}] {}", row + 1, option.name));
            self.console.say(&format!("    Address: {}", option.address));
            self.console.say(&format!("    Hours: {}", option.hours));
        }
        self.console.say("[0] None of these (back to the interview)");

        let choice = self.console.ask("Type the number of your pick: ").await?;
        let choice = choice.trim().to_string();

        let update = DinerUpdate::default().decision(choice.clone());
        let update = match chosen_index(&choice, options.len()) {
            Some(index) => {
                let picked = &options[index];
                tracing::debug!(restaurant = %picked.name, "diner picked a restaurant");
                update.chosen_url(picked.url.clone()).chosen(ChosenRestaurant {
                    name: picked.name.clone(),
                    category: diner
                        .taste_profile
                        .clone()
                        .unwrap_or_else(|| "General".to_string()),
                })
            }
            None => update.chosen_url(None),
        };

        Ok(StateUpdate::new(update))
    }
}
