use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tablescout_core::{
    from_json_text, ChatModel, ChatRequest, Message, PromptTemplate, ScoutError, SearchHit, Value,
};
use tablescout_graph::{GraphNode, GraphState, NodeError, StateUpdate};

use crate::prompts;
use crate::state::{
    default_address, default_hours, Candidate, CandidateSource, DinerState, DinerUpdate, Verdict,
};

/// How many times a rejected search may be retried before the results are
/// accepted as-is.
pub const MAX_SEARCH_RETRIES: u32 = 3;

/// Judges the raw search results and shapes them into menu candidates.
///
/// A rejected search widens the query and loops back, at most
/// [`MAX_SEARCH_RETRIES`] times. Once accepted, the results go through model
/// extraction; if the model's output does not parse, the raw hits are
/// normalized instead so the diner always gets a menu.
pub struct Validator {
    chat: Arc<dyn ChatModel>,
}

impl Validator {
    pub fn new(chat: Arc<dyn ChatModel>) -> Self {
        Self { chat }
    }
}

#[async_trait]
impl GraphNode<DinerState> for Validator {
    async fn invoke(
        &self,
        state: GraphState<DinerState>,
    ) -> Result<StateUpdate<DinerState>, NodeError> {
        let diner = &state.data;
        let query = diner.search_query.clone().unwrap_or_default();
        let attempts = diner.search_attempts;
        let results_text =
            serde_json::to_string(&diner.raw_results).map_err(ScoutError::from)?;

        let prompt = PromptTemplate::new(prompts::VALIDATION).render(&HashMap::from([
            ("query".to_string(), Value::from(query.clone())),
            ("results".to_string(), Value::from(results_text.clone())),
        ]))?;
        let verdict = self
            .chat
            .complete(ChatRequest::new(vec![Message::user(prompt)]))
            .await?
            .content;

        if verdict.contains("REJECTED") {
            if attempts < MAX_SEARCH_RETRIES {
                tracing::debug!(pass = attempts + 1, "results rejected, widening the query");
                return Ok(StateUpdate::new(
                    DinerUpdate::default()
                        .validation(Verdict::Rejected)
                        .search_attempts(attempts + 1)
                        .search_query(format!("{} address hours", query)),
                ));
            }
            tracing::warn!("retry budget exhausted, keeping the rejected results");
        }

        let prompt = PromptTemplate::new(prompts::EXTRACTION).render(&HashMap::from([(
            "results".to_string(),
            Value::from(results_text),
        )]))?;
        let output = self
            .chat
            .complete(ChatRequest::new(vec![Message::user(prompt)]))
            .await?
            .content;

        let update = match from_json_text::<Vec<Candidate>>(&output) {
            Ok(candidates) => DinerUpdate::default()
                .validation(Verdict::Approved)
                .candidates(candidates)
                .candidate_source(CandidateSource::Structured),
            Err(err) => {
                tracing::warn!(error = %err, "extraction did not parse, using raw hits");
                DinerUpdate::default()
                    .validation(Verdict::Approved)
                    .candidates(diner.raw_results.iter().map(raw_candidate).collect())
                    .candidate_source(CandidateSource::RawFallback)
            }
        };

        Ok(StateUpdate::new(update))
    }
}

/// Menu row built straight from a raw hit when extraction fails. The name is
/// a prefix of the hit's text so the menu stays readable.
fn raw_candidate(hit: &SearchHit) -> Candidate {
    let name = if hit.content.is_empty() {
        hit.title.clone()
    } else {
        hit.content.chars().take(30).collect()
    };
    Candidate {
        name,
        address: default_address(),
        hours: default_hours(),
        url: if hit.url.is_empty() {
            None
        } else {
            Some(hit.url.clone())
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_candidate_prefers_content_prefix() {
        let hit = SearchHit {
            title: "Result page".to_string(),
            url: "https://maps.example/abc".to_string(),
            content: "Trattoria Bella, the best pasta in the old town, open daily"
                .to_string(),
            score: None,
        };
        let candidate = raw_candidate(&hit);
        assert_eq!(candidate.name, "Trattoria Bella, the best past");
        assert_eq!(candidate.address, "address not provided");
        assert_eq!(candidate.hours, "see website");
        assert_eq!(candidate.url.as_deref(), Some("https://maps.example/abc"));
    }

    #[test]
    fn raw_candidate_falls_back_to_title() {
        let hit = SearchHit {
            title: "Sushi do Bairro".to_string(),
            url: String::new(),
            content: String::new(),
            score: None,
        };
        let candidate = raw_candidate(&hit);
        assert_eq!(candidate.name, "Sushi do Bairro");
        assert!(candidate.url.is_none());
    }
}
