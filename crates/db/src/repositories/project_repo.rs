//! Repository for the `projects` and `project_translations` tables.

use chrono::{DateTime, Utc};
use inventory_core::record::{ProjectRecord, ProjectTranslationRecord};
use sqlx::MySqlPool;

/// Insert operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    pub async fn insert(
        pool: &MySqlPool,
        id: &str,
        record: &ProjectRecord,
        now: DateTime<Utc>,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO projects \
                (id, context_id, language_id, internal_name, backward_compatibility, \
                 launch_date, is_launched, is_enabled, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(id)
        .bind(&record.context_id)
        .bind(&record.language_id)
        .bind(&record.internal_name)
        .bind(&record.backward_compatibility)
        .bind(&record.launch_date)
        .bind(record.is_launched)
        .bind(record.is_enabled)
        .bind(now)
        .bind(now)
        .execute(pool)
        .await?;
        Ok(())
    }

    pub async fn insert_translation(
        pool: &MySqlPool,
        id: &str,
        record: &ProjectTranslationRecord,
        now: DateTime<Utc>,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO project_translations \
                (id, project_id, language_id, context_id, name, description, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(id)
        .bind(&record.project_id)
        .bind(&record.language_id)
        .bind(&record.context_id)
        .bind(&record.name)
        .bind(&record.description)
        .bind(now)
        .bind(now)
        .execute(pool)
        .await?;
        Ok(())
    }
}
