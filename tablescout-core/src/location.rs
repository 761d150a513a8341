use crate::ScoutError;

/// Resolves a human-readable location ("City, Region") for the current user.
#[async_trait::async_trait]
pub trait LocationResolver: Send + Sync + 'static {
    async fn resolve(&self) -> Result<String, ScoutError>;
}
