use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to connect to order store: {0}")]
    Connection(#[source] sqlx::Error),
    #[error("order store migration failed: {0}")]
    Migration(#[source] sqlx::Error),
    #[error("order store query failed: {0}")]
    Query(#[source] sqlx::Error),
}
