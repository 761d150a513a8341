pub const CREATE_ORDERS_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS orders (\
    id INTEGER PRIMARY KEY AUTOINCREMENT,\
    user_id TEXT NOT NULL,\
    user_name TEXT NOT NULL,\
    tax_id TEXT NOT NULL,\
    restaurant TEXT NOT NULL,\
    category TEXT NOT NULL,\
    ordered_at TEXT NOT NULL\
)";

pub const CREATE_ORDERS_TAX_ID_INDEX_SQL: &str =
    "CREATE INDEX IF NOT EXISTS idx_orders_tax_id ON orders (tax_id)";

pub const MIGRATION_STATEMENTS_SQL: [&str; 2] =
    [CREATE_ORDERS_TABLE_SQL, CREATE_ORDERS_TAX_ID_INDEX_SQL];
