use std::time::Duration;

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tablescout_core::{ScoutError, SearchHit, SearchProvider};

const DEFAULT_BASE_URL: &str = "https://api.tavily.com";
const DEFAULT_MAX_RESULTS: usize = 5;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Web search via the Tavily HTTP API.
pub struct TavilySearch {
    api_key: SecretString,
    base_url: String,
    max_results: usize,
    http: Client,
}

impl TavilySearch {
    pub fn new(api_key: impl Into<String>) -> Result<Self, ScoutError> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, ScoutError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| ScoutError::SearchProvider(err.to_string()))?;
        Ok(Self {
            api_key: SecretString::new(api_key.into()),
            base_url: base_url.into(),
            max_results: DEFAULT_MAX_RESULTS,
            http,
        })
    }

    pub fn max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }
}

#[derive(Serialize)]
struct TavilyRequest<'a> {
    api_key: &'a str,
    query: &'a str,
    max_results: usize,
}

#[derive(Deserialize)]
struct TavilyResponse {
    #[serde(default)]
    results: Vec<SearchHit>,
}

#[async_trait::async_trait]
impl SearchProvider for TavilySearch {
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, ScoutError> {
        let url = format!("{}/search", self.base_url.trim_end_matches('/'));
        let request = TavilyRequest {
            api_key: self.api_key.expose_secret(),
            query,
            max_results: self.max_results,
        };

        let response: TavilyResponse = self
            .http
            .post(url)
            .json(&request)
            .send()
            .await
            .map_err(|err| ScoutError::SearchProvider(err.to_string()))?
            .error_for_status()
            .map_err(|err| ScoutError::SearchProvider(err.to_string()))?
            .json()
            .await
            .map_err(|err| ScoutError::SearchProvider(err.to_string()))?;

        // The provider treats max_results as a hint; the cap is hard here.
        let mut hits = response.results;
        hits.truncate(self.max_results);
        Ok(hits)
    }
}
