use crate::ScoutError;

/// The diner-facing conversation channel. Everything the user reads or types
/// flows through here; diagnostics go to the logger instead.
#[async_trait::async_trait]
pub trait Console: Send + Sync + 'static {
    fn say(&self, line: &str);

    async fn ask(&self, prompt: &str) -> Result<String, ScoutError>;
}
