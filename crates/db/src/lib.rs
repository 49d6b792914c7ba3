//! `inventory-db` -- MySQL access for the import pipeline.
//!
//! Two halves: read-only models and queries against the legacy `mwnf3`
//! schema, and target-table repositories used by the SQL write strategy.

pub mod legacy;
pub mod models;
pub mod repositories;

use sqlx::mysql::MySqlPoolOptions;

pub type DbPool = sqlx::MySqlPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    MySqlPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await
}
