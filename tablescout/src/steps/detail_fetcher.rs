use std::sync::Arc;

use async_trait::async_trait;
use tablescout_core::{Console, FetchError, PageFetcher};
use tablescout_graph::{GraphNode, GraphState, NodeError, StateUpdate};

use crate::state::{DinerState, DinerUpdate};

/// Largest slice of page text kept for the recommendation prompt.
const EXCERPT_LIMIT: usize = 4000;

/// Pages shorter than this are usually error shells, not menus.
const MIN_TEXT_LENGTH: usize = 200;

/// Phrases that mean a bot wall answered instead of the restaurant.
const BLOCK_PHRASES: [&str; 6] = [
    "enable javascript",
    "access denied",
    "verify you are human",
    "captcha",
    "ad blocker",
    "pardon our interruption",
];

/// Reads the chosen restaurant's page and keeps a usable excerpt.
///
/// Every failure here is soft: blocked pages, thin pages, network errors and
/// a missing url all set `fetch_failed` and let the recommendation fall back
/// to the search data.
pub struct DetailFetcher {
    fetcher: Arc<dyn PageFetcher>,
    console: Arc<dyn Console>,
}

impl DetailFetcher {
    pub fn new(fetcher: Arc<dyn PageFetcher>, console: Arc<dyn Console>) -> Self {
        Self { fetcher, console }
    }
}

#[async_trait]
impl GraphNode<DinerState> for DetailFetcher {
    async fn invoke(
        &self,
        state: GraphState<DinerState>,
    ) -> Result<StateUpdate<DinerState>, NodeError> {
        let outcome = match state.data.chosen_url.as_deref() {
            Some(url) => self.fetcher.fetch(url).await.and_then(|text| {
                let cut = excerpt(&text);
                screen_excerpt(&cut)?;
                Ok(cut)
            }),
            None => Err(FetchError::Network(
                "no url recorded for the chosen restaurant".to_string(),
            )),
        };

        match outcome {
            Ok(text) => {
                tracing::debug!(chars = text.chars().count(), "page text captured");
                Ok(StateUpdate::new(
                    DinerUpdate::default()
                        .page_excerpt(Some(text))
                        .fetch_failed(false),
                ))
            }
            Err(err) => {
                tracing::warn!(error = %err, "page fetch failed");
                self.console.say(
                    "The restaurant's site did not cooperate, going with what the search found.",
                );
                Ok(StateUpdate::new(
                    DinerUpdate::default().page_excerpt(None).fetch_failed(true),
                ))
            }
        }
    }
}

/// First [`EXCERPT_LIMIT`] characters of the page text.
fn excerpt(text: &str) -> String {
    text.chars().take(EXCERPT_LIMIT).collect()
}

/// Rejects excerpts that are bot walls or too thin to describe a restaurant.
fn screen_excerpt(text: &str) -> Result<(), FetchError> {
    let lowered = text.to_lowercase();
    for phrase in BLOCK_PHRASES {
        if lowered.contains(phrase) {
            return Err(FetchError::Blocked {
                phrase: phrase.to_string(),
            });
        }
    }
    let length = text.chars().count();
    if length < MIN_TEXT_LENGTH {
        return Err(FetchError::TooShort { length });
    }
    Ok(())
}
