use serde::de::DeserializeOwned;

use crate::ScoutError;

/// Strips a markdown code fence when the model wrapped its JSON in one.
pub fn clean_json_block(text: &str) -> &str {
    let cleaned = text.trim();
    if cleaned.starts_with("```json") {
        cleaned
            .trim_start_matches("```json")
            .trim_end_matches("```")
            .trim()
    } else if cleaned.starts_with("```") {
        cleaned
            .trim_start_matches("```")
            .trim_end_matches("```")
            .trim()
    } else {
        cleaned
    }
}

/// Parses model output as JSON after fence cleanup. The error carries the
/// raw output so callers can fall back on it.
pub fn from_json_text<T: DeserializeOwned>(text: &str) -> Result<T, ScoutError> {
    serde_json::from_str(clean_json_block(text)).map_err(|err| ScoutError::ParseFailed {
        output: text.to_string(),
        reason: err.to_string(),
    })
}
