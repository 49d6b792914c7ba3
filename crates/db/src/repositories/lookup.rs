//! Backward-compatibility lookups against target tables.
//!
//! Used as the fallback source of truth when the in-memory tracker has no
//! entry (e.g. an earlier phase was skipped via `--start-at`). The table
//! name always comes from [`inventory_core::entity::EntityType::table`],
//! never from user input.

use sqlx::MySqlPool;

/// Whether any row in `table` carries this backward-compatibility key.
pub async fn exists(
    pool: &MySqlPool,
    table: &str,
    backward_compatibility: &str,
) -> Result<bool, sqlx::Error> {
    let sql = format!("SELECT COUNT(*) FROM {table} WHERE backward_compatibility = ?");
    let count: i64 = sqlx::query_scalar(&sql)
        .bind(backward_compatibility)
        .fetch_one(pool)
        .await?;
    Ok(count > 0)
}

/// Find the id of the row in `table` carrying this key, if any.
pub async fn find_by_backward_compatibility(
    pool: &MySqlPool,
    table: &str,
    backward_compatibility: &str,
) -> Result<Option<String>, sqlx::Error> {
    let sql = format!("SELECT id FROM {table} WHERE backward_compatibility = ? LIMIT 1");
    sqlx::query_scalar(&sql)
        .bind(backward_compatibility)
        .fetch_optional(pool)
        .await
}
