use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tablescout_core::{LocationResolver, ScoutError};

const DEFAULT_BASE_URL: &str = "http://ip-api.com";

/// The lookup is best-effort; a slow answer is treated as no answer.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// IP-based location lookup against ip-api.com.
pub struct IpApiLocator {
    base_url: String,
    http: Client,
}

impl IpApiLocator {
    pub fn new() -> Result<Self, ScoutError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ScoutError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| ScoutError::Location(err.to_string()))?;
        Ok(Self {
            base_url: base_url.into(),
            http,
        })
    }
}

#[derive(Deserialize)]
struct IpApiResponse {
    city: String,
    region: String,
    #[serde(rename = "countryCode")]
    country_code: String,
}

#[async_trait::async_trait]
impl LocationResolver for IpApiLocator {
    async fn resolve(&self) -> Result<String, ScoutError> {
        let url = format!("{}/json/", self.base_url.trim_end_matches('/'));
        let place: IpApiResponse = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|err| ScoutError::Location(err.to_string()))?
            .error_for_status()
            .map_err(|err| ScoutError::Location(err.to_string()))?
            .json()
            .await
            .map_err(|err| ScoutError::Location(err.to_string()))?;

        Ok(format!(
            "{}, {} ({})",
            place.city, place.region, place.country_code
        ))
    }
}
