use std::env;

use tablescout_core::ScoutError;

/// Settings pulled from the environment. The binary loads `.env` through
/// dotenvy before reading these.
#[derive(Clone)]
pub struct AppConfig {
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub chat_model: String,
    pub tavily_api_key: String,
    pub database_url: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ScoutError> {
        Ok(Self {
            openai_api_key: required("OPENAI_API_KEY")?,
            openai_base_url: optional("OPENAI_BASE_URL", "https://api.openai.com"),
            chat_model: optional("TABLESCOUT_MODEL", "gpt-4o-mini"),
            tavily_api_key: required("TAVILY_API_KEY")?,
            database_url: optional("TABLESCOUT_DATABASE_URL", "sqlite://tablescout.db?mode=rwc"),
        })
    }
}

fn required(name: &str) -> Result<String, ScoutError> {
    env::var(name).map_err(|_| ScoutError::InvalidConfig(format!("{} is not set", name)))
}

fn optional(name: &str, fallback: &str) -> String {
    env::var(name).unwrap_or_else(|_| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_falls_back() {
        assert_eq!(
            optional("TABLESCOUT_SURELY_UNSET_VAR", "fallback"),
            "fallback"
        );
    }

    #[test]
    fn required_reports_the_missing_name() {
        let err = required("TABLESCOUT_SURELY_UNSET_VAR").unwrap_err();
        assert!(err.to_string().contains("TABLESCOUT_SURELY_UNSET_VAR"));
    }
}
