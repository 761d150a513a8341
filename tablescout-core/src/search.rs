use serde::{Deserialize, Serialize};

use crate::ScoutError;

/// One raw result from the search provider. Stored in state exactly as
/// returned so later steps can fall back on it.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct SearchHit {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub score: Option<f32>,
}

#[async_trait::async_trait]
pub trait SearchProvider: Send + Sync + 'static {
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, ScoutError>;
}
