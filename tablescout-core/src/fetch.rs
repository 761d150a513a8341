use thiserror::Error;

/// Why a page yielded nothing usable. Every variant is recoverable; the
/// workflow downgrades to a safe-bet recommendation instead of aborting.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("page blocked automated access (matched '{phrase}')")]
    Blocked { phrase: String },
    #[error("page text too short to trust ({length} chars)")]
    TooShort { length: usize },
    #[error("fetch failed: {0}")]
    Network(String),
}

/// Retrieves the visible text of a web page.
#[async_trait::async_trait]
pub trait PageFetcher: Send + Sync + 'static {
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}
