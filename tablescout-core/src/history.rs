use serde::{Deserialize, Serialize};

use crate::ScoutError;

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct PastOrder {
    pub restaurant: String,
    pub category: String,
    pub dish: String,
    pub ordered_at: String,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct NewOrder {
    pub user_id: String,
    pub name: String,
    pub tax_id: String,
    pub restaurant: String,
    pub category: String,
}

/// Identity plus past orders for one diner, keyed by tax id.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct DinerProfile {
    pub user_id: String,
    pub orders: Vec<PastOrder>,
}

#[async_trait::async_trait]
pub trait OrderHistory: Send + Sync + 'static {
    async fn record_order(&self, order: NewOrder) -> Result<(), ScoutError>;

    /// Returns the stored profile for `tax_id`, or a fresh user id with an
    /// empty order list when the diner has never been seen.
    async fn lookup_history(&self, tax_id: &str) -> Result<DinerProfile, ScoutError>;
}
