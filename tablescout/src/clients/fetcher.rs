use std::time::Duration;

use reqwest::Client;
use scraper::Html;
use tablescout_core::{FetchError, PageFetcher, ScoutError};

/// Restaurant sites often gate plain HTTP clients, so requests carry a
/// desktop browser identity.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Downloads a page and reduces it to its visible text.
pub struct HttpPageFetcher {
    http: Client,
}

impl HttpPageFetcher {
    pub fn new() -> Result<Self, ScoutError> {
        let http = Client::builder()
            .user_agent(BROWSER_USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| ScoutError::InvalidConfig(err.to_string()))?;
        Ok(Self { http })
    }
}

#[async_trait::async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|err| FetchError::Network(err.to_string()))?
            .error_for_status()
            .map_err(|err| FetchError::Network(err.to_string()))?;
        let html = response
            .text()
            .await
            .map_err(|err| FetchError::Network(err.to_string()))?;
        Ok(page_text(&html))
    }
}

/// Visible text of an HTML document: script, style and noscript content is
/// dropped and whitespace collapsed.
pub(crate) fn page_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut parts: Vec<&str> = Vec::new();
    for node in document.tree.nodes() {
        if let scraper::Node::Text(text) = node.value() {
            let hidden = node
                .parent()
                .and_then(|parent| parent.value().as_element())
                .map(|element| matches!(element.name(), "script" | "style" | "noscript"))
                .unwrap_or(false);
            if !hidden {
                parts.push(&**text);
            }
        }
    }
    parts
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_text_keeps_visible_content_only() {
        let html = r#"
            <html>
              <head>
                <title>Trattoria Bella</title>
                <style>.menu { color: red; }</style>
                <script>window.tracker = "beacon";</script>
              </head>
              <body>
                <h1>Trattoria   Bella</h1>
                <p>Homemade pasta since 1987.</p>
                <noscript>Please enable JavaScript</noscript>
              </body>
            </html>
        "#;
        let text = page_text(html);
        assert!(text.contains("Trattoria Bella"));
        assert!(text.contains("Homemade pasta since 1987."));
        assert!(!text.contains("beacon"));
        assert!(!text.contains("color: red"));
        assert!(!text.contains("enable JavaScript"));
    }

    #[test]
    fn page_text_collapses_whitespace() {
        let html = "<p>open\n\n   daily</p>";
        assert_eq!(page_text(html), "open daily");
    }
}
