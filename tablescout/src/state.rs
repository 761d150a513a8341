//! Session state threaded through the decision graph.
//!
//! `DinerState` is the full record; nodes return a [`DinerUpdate`] that only
//! names the fields they touched. [`StateSchema::apply`] overwrites exactly
//! the populated slots and leaves everything else as it was, so a node can
//! never clobber another node's work by accident.

use serde::{Deserialize, Serialize};
use tablescout_core::{PastOrder, SearchHit};
use tablescout_graph::StateSchema;

/// Keys for the workflow steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Interviewer,
    HistoryAnalyst,
    Search,
    Validator,
    Presenter,
    DetailFetcher,
    Recommender,
}

/// Where the current candidate list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CandidateSource {
    /// Model extraction produced clean records.
    Structured,
    /// Extraction failed and the raw search hits were normalized instead.
    RawFallback,
}

/// Outcome of the search-quality check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Approved,
    Rejected,
}

pub(crate) fn default_address() -> String {
    "address not provided".to_string()
}

pub(crate) fn default_hours() -> String {
    "see website".to_string()
}

/// One restaurant the diner can pick from the menu.
///
/// The serde defaults let model extraction omit fields it could not find
/// without breaking the parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub name: String,
    #[serde(default = "default_address")]
    pub address: String,
    #[serde(default = "default_hours")]
    pub hours: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// Snapshot taken the moment the diner picks a restaurant, so the order can
/// be persisted even after later steps rewrite the candidate list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChosenRestaurant {
    pub name: String,
    pub category: String,
}

/// Everything the workflow knows about the current session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DinerState {
    // Identity, seeded before the run and never written by nodes.
    pub user_id: String,
    pub name: String,
    pub tax_id: String,
    pub location: String,
    pub order_history: Vec<PastOrder>,

    // Session fields owned by the steps.
    pub taste_profile: Option<String>,
    pub search_query: Option<String>,
    pub search_attempts: u32,
    pub raw_results: Vec<SearchHit>,
    pub candidates: Vec<Candidate>,
    pub candidate_source: Option<CandidateSource>,
    pub validation: Option<Verdict>,
    pub decision: Option<String>,
    pub chosen_url: Option<String>,
    pub chosen: Option<ChosenRestaurant>,
    pub page_excerpt: Option<String>,
    pub fetch_failed: bool,
    pub recommendation: Option<String>,
}

/// Partial update produced by a single step.
///
/// `None` means "leave the field alone". The two `Option<Option<_>>` slots
/// exist because `chosen_url` and `page_excerpt` must sometimes be cleared
/// explicitly, which is different from not touching them.
#[derive(Debug, Clone, Default)]
pub struct DinerUpdate {
    pub taste_profile: Option<String>,
    pub search_query: Option<String>,
    pub search_attempts: Option<u32>,
    pub raw_results: Option<Vec<SearchHit>>,
    pub candidates: Option<Vec<Candidate>>,
    pub candidate_source: Option<CandidateSource>,
    pub validation: Option<Verdict>,
    pub decision: Option<String>,
    pub chosen_url: Option<Option<String>>,
    pub chosen: Option<ChosenRestaurant>,
    pub page_excerpt: Option<Option<String>>,
    pub fetch_failed: Option<bool>,
    pub recommendation: Option<String>,
}

impl DinerUpdate {
    pub fn taste_profile(mut self, value: impl Into<String>) -> Self {
        self.taste_profile = Some(value.into());
        self
    }

    pub fn search_query(mut self, value: impl Into<String>) -> Self {
        self.search_query = Some(value.into());
        self
    }

    pub fn search_attempts(mut self, value: u32) -> Self {
        self.search_attempts = Some(value);
        self
    }

    pub fn raw_results(mut self, value: Vec<SearchHit>) -> Self {
        self.raw_results = Some(value);
        self
    }

    pub fn candidates(mut self, value: Vec<Candidate>) -> Self {
        self.candidates = Some(value);
        self
    }

    pub fn candidate_source(mut self, value: CandidateSource) -> Self {
        self.candidate_source = Some(value);
        self
    }

    pub fn validation(mut self, value: Verdict) -> Self {
        self.validation = Some(value);
        self
    }

    pub fn decision(mut self, value: impl Into<String>) -> Self {
        self.decision = Some(value.into());
        self
    }

    pub fn chosen_url(mut self, value: Option<String>) -> Self {
        self.chosen_url = Some(value);
        self
    }

    pub fn chosen(mut self, value: ChosenRestaurant) -> Self {
        self.chosen = Some(value);
        self
    }

    pub fn page_excerpt(mut self, value: Option<String>) -> Self {
        self.page_excerpt = Some(value);
        self
    }

    pub fn fetch_failed(mut self, value: bool) -> Self {
        self.fetch_failed = Some(value);
        self
    }

    pub fn recommendation(mut self, value: impl Into<String>) -> Self {
        self.recommendation = Some(value.into());
        self
    }
}

impl StateSchema for DinerState {
    type Update = DinerUpdate;

    fn apply(current: &Self, update: DinerUpdate) -> Self {
        let mut next = current.clone();
        if let Some(taste_profile) = update.taste_profile {
            next.taste_profile = Some(taste_profile);
        }
        if let Some(search_query) = update.search_query {
            next.search_query = Some(search_query);
        }
        if let Some(search_attempts) = update.search_attempts {
            next.search_attempts = search_attempts;
        }
        if let Some(raw_results) = update.raw_results {
            next.raw_results = raw_results;
        }
        if let Some(candidates) = update.candidates {
            next.candidates = candidates;
        }
        if let Some(candidate_source) = update.candidate_source {
            next.candidate_source = Some(candidate_source);
        }
        if let Some(validation) = update.validation {
            next.validation = Some(validation);
        }
        if let Some(decision) = update.decision {
            next.decision = Some(decision);
        }
        if let Some(chosen_url) = update.chosen_url {
            next.chosen_url = chosen_url;
        }
        if let Some(chosen) = update.chosen {
            next.chosen = Some(chosen);
        }
        if let Some(page_excerpt) = update.page_excerpt {
            next.page_excerpt = page_excerpt;
        }
        if let Some(fetch_failed) = update.fetch_failed {
            next.fetch_failed = fetch_failed;
        }
        if let Some(recommendation) = update.recommendation {
            next.recommendation = Some(recommendation);
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_touches_only_populated_slots() {
        let mut current = DinerState::default();
        current.name = "Ana".to_string();
        current.search_attempts = 2;
        current.taste_profile = Some("pizza lover".to_string());

        let next = DinerState::apply(
            &current,
            DinerUpdate::default().search_query("best pizza downtown"),
        );

        assert_eq!(next.search_query.as_deref(), Some("best pizza downtown"));
        assert_eq!(next.search_attempts, 2);
        assert_eq!(next.taste_profile.as_deref(), Some("pizza lover"));
        assert_eq!(next.name, "Ana");
    }

    #[test]
    fn apply_clears_double_option_slots() {
        let mut current = DinerState::default();
        current.chosen_url = Some("https://old.example".to_string());
        current.page_excerpt = Some("stale page".to_string());

        let next = DinerState::apply(
            &current,
            DinerUpdate::default().chosen_url(None).page_excerpt(None),
        );

        assert!(next.chosen_url.is_none());
        assert!(next.page_excerpt.is_none());
    }

    #[test]
    fn apply_resets_collections_to_empty() {
        let mut current = DinerState::default();
        current.candidates = vec![Candidate {
            name: "Old Spot".to_string(),
            address: "Main St 1".to_string(),
            hours: "10-22".to_string(),
            url: None,
        }];
        current.search_attempts = 3;

        let next = DinerState::apply(
            &current,
            DinerUpdate::default().candidates(Vec::new()).search_attempts(0),
        );

        assert!(next.candidates.is_empty());
        assert_eq!(next.search_attempts, 0);
    }

    #[test]
    fn candidate_parse_fills_missing_fields() {
        let parsed: Candidate =
            serde_json::from_str(r#"{"name": "Cantina da Praca"}"#).unwrap();
        assert_eq!(parsed.address, "address not provided");
        assert_eq!(parsed.hours, "see website");
        assert!(parsed.url.is_none());
    }
}
