//! Repository for the `settings` table.

use printforge_core::types::DbId;
use sqlx::PgPool;

use crate::models::setting::{CreateSetting, Setting, UpdateSetting};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, key, value";

/// Provides CRUD operations for settings.
pub struct SettingRepo;

impl SettingRepo {
    /// Insert a new setting, returning the created row.
    ///
    /// The `uq_settings_key` constraint rejects duplicate keys.
    pub async fn create(pool: &PgPool, input: &CreateSetting) -> Result<Setting, sqlx::Error> {
        let query = format!(
            "INSERT INTO settings (key, value)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Setting>(&query)
            .bind(&input.key)
            .bind(&input.value)
            .fetch_one(pool)
            .await
    }

    /// Find a setting by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Setting>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM settings WHERE id = $1");
        sqlx::query_as::<_, Setting>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a setting by its unique key.
    pub async fn find_by_key(pool: &PgPool, key: &str) -> Result<Option<Setting>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM settings WHERE key = $1");
        sqlx::query_as::<_, Setting>(&query)
            .bind(key)
            .fetch_optional(pool)
            .await
    }

    /// List all settings in key order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Setting>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM settings ORDER BY key");
        sqlx::query_as::<_, Setting>(&query).fetch_all(pool).await
    }

    /// Apply a partial update to a setting.
    ///
    /// Returns `None` if no row with the given `id` exists. Renaming a key
    /// onto an existing one violates `uq_settings_key`.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSetting,
    ) -> Result<Option<Setting>, sqlx::Error> {
        let Some(mut setting) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        input.apply(&mut setting);

        let query = format!(
            "UPDATE settings SET key = $2, value = $3
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Setting>(&query)
            .bind(id)
            .bind(&setting.key)
            .bind(&setting.value)
            .fetch_optional(pool)
            .await
    }

    /// Delete a setting. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM settings WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
