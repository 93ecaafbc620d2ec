//! Database connection management and schema bootstrap

use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};

const CREATE_WALLETS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS wallets_tb (
    id          BIGSERIAL PRIMARY KEY,
    full_name   VARCHAR(120)  NOT NULL,
    document    VARCHAR(32)   NOT NULL UNIQUE,
    email       VARCHAR(120)  NOT NULL UNIQUE,
    balance     NUMERIC(19,2) NOT NULL DEFAULT 0 CHECK (balance >= 0),
    version     BIGINT        NOT NULL DEFAULT 0,
    created_at  TIMESTAMPTZ   NOT NULL DEFAULT NOW()
)
"#;

const CREATE_TRANSFERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS transfers_tb (
    id          UUID PRIMARY KEY,
    sender_id   BIGINT        NOT NULL REFERENCES wallets_tb(id),
    receiver_id BIGINT        NOT NULL REFERENCES wallets_tb(id),
    amount      NUMERIC(19,2) NOT NULL CHECK (amount > 0),
    created_at  TIMESTAMPTZ   NOT NULL DEFAULT NOW()
)
"#;

const CREATE_TRANSFER_INDEXES: [&str; 2] = [
    "CREATE INDEX IF NOT EXISTS idx_transfers_sender ON transfers_tb (sender_id)",
    "CREATE INDEX IF NOT EXISTS idx_transfers_receiver ON transfers_tb (receiver_id)",
];

/// PostgreSQL database connection pool
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Create a new database connection pool
    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .acquire_timeout(Duration::from_secs(5))
            .connect(database_url)
            .await?;

        tracing::info!("PostgreSQL connection pool established");
        Ok(Self { pool })
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Create the wallet and transfer tables if they do not exist
    pub async fn init_schema(&self) -> Result<(), sqlx::Error> {
        sqlx::query(CREATE_WALLETS_TABLE).execute(&self.pool).await?;
        sqlx::query(CREATE_TRANSFERS_TABLE).execute(&self.pool).await?;
        for ddl in CREATE_TRANSFER_INDEXES {
            sqlx::query(ddl).execute(&self.pool).await?;
        }

        tracing::info!("Database schema initialized");
        Ok(())
    }

    /// Check database health
    pub async fn health_check(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
