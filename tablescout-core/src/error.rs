use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoutError {
    #[error("Chat model failed: {0}")]
    ChatModel(String),
    #[error("Search provider failed: {0}")]
    SearchProvider(String),
    #[error("Order store failed: {0}")]
    Store(String),
    #[error("Console I/O failed: {0}")]
    Console(String),
    #[error("Location lookup failed: {0}")]
    Location(String),
    #[error("Parsing failed on output '{output}': {reason}")]
    ParseFailed { output: String, reason: String },
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Serialization/deserialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("{0}")]
    Custom(String),
}
