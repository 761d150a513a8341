mod error;
mod schema;

pub use error::StoreError;

use chrono::Utc;
use sqlx::Row;
use tablescout_core::{DinerProfile, NewOrder, OrderHistory, PastOrder, ScoutError};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct SqliteOrderHistory {
    pool: sqlx::SqlitePool,
}

#[derive(Debug, Clone)]
pub struct SqliteOrderHistoryBuilder {
    database_url: String,
    max_connections: u32,
}

impl SqliteOrderHistory {
    pub fn builder(database_url: impl Into<String>) -> SqliteOrderHistoryBuilder {
        SqliteOrderHistoryBuilder {
            database_url: database_url.into(),
            max_connections: 1,
        }
    }
}

impl SqliteOrderHistoryBuilder {
    pub fn max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections;
        self
    }

    pub async fn build(self) -> Result<SqliteOrderHistory, StoreError> {
        let pool = sqlx::sqlite::SqlitePoolOptions::new()
            .max_connections(self.max_connections)
            .connect(&self.database_url)
            .await
            .map_err(StoreError::Connection)?;

        run_migrations(&pool).await?;

        Ok(SqliteOrderHistory { pool })
    }
}

async fn run_migrations(pool: &sqlx::SqlitePool) -> Result<(), StoreError> {
    for statement in schema::MIGRATION_STATEMENTS_SQL {
        sqlx::query(statement)
            .execute(pool)
            .await
            .map_err(StoreError::Migration)?;
    }

    Ok(())
}

fn map_store_error(error: StoreError) -> ScoutError {
    ScoutError::Store(error.to_string())
}

#[async_trait::async_trait]
impl OrderHistory for SqliteOrderHistory {
    async fn record_order(&self, order: NewOrder) -> Result<(), ScoutError> {
        let ordered_at = Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();

        sqlx::query(
            "INSERT INTO orders (user_id, user_name, tax_id, restaurant, category, ordered_at) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&order.user_id)
        .bind(&order.name)
        .bind(&order.tax_id)
        .bind(&order.restaurant)
        .bind(&order.category)
        .bind(&ordered_at)
        .execute(&self.pool)
        .await
        .map_err(StoreError::Query)
        .map_err(map_store_error)?;

        tracing::debug!(restaurant = %order.restaurant, "order recorded");
        Ok(())
    }

    async fn lookup_history(&self, tax_id: &str) -> Result<DinerProfile, ScoutError> {
        let rows = sqlx::query(
            "SELECT user_id, restaurant, category, ordered_at FROM orders \
             WHERE tax_id = ? ORDER BY id ASC",
        )
        .bind(tax_id)
        .fetch_all(&self.pool)
        .await
        .map_err(StoreError::Query)
        .map_err(map_store_error)?;

        let Some(first) = rows.first() else {
            return Ok(DinerProfile {
                user_id: Uuid::new_v4().to_string(),
                orders: Vec::new(),
            });
        };

        let user_id: String = first.get("user_id");
        let orders = rows
            .iter()
            .map(|row| PastOrder {
                restaurant: row.get("restaurant"),
                category: row.get("category"),
                dish: "unknown".to_string(),
                ordered_at: row.get("ordered_at"),
            })
            .collect();

        Ok(DinerProfile { user_id, orders })
    }
}
