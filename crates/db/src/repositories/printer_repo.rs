//! Repository for the `printers` table.

use printforge_core::types::DbId;
use sqlx::PgPool;

use crate::models::printer::{CreatePrinter, Printer, UpdatePrinter, STATUS_OFFLINE};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, moonraker_url, status, created_at";

/// Provides CRUD operations for printers.
pub struct PrinterRepo;

impl PrinterRepo {
    /// Insert a new printer, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreatePrinter) -> Result<Printer, sqlx::Error> {
        let query = format!(
            "INSERT INTO printers (name, moonraker_url, status)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Printer>(&query)
            .bind(&input.name)
            .bind(&input.moonraker_url)
            .bind(input.status.as_deref().unwrap_or(STATUS_OFFLINE))
            .fetch_one(pool)
            .await
    }

    /// Find a printer by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Printer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM printers WHERE id = $1");
        sqlx::query_as::<_, Printer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all printers in ascending ID order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Printer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM printers ORDER BY id");
        sqlx::query_as::<_, Printer>(&query).fetch_all(pool).await
    }

    /// Apply a partial update to a printer.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePrinter,
    ) -> Result<Option<Printer>, sqlx::Error> {
        let Some(mut printer) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        input.apply(&mut printer);

        let query = format!(
            "UPDATE printers SET name = $2, moonraker_url = $3, status = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Printer>(&query)
            .bind(id)
            .bind(&printer.name)
            .bind(&printer.moonraker_url)
            .bind(&printer.status)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite only the status field (used by the status poller).
    ///
    /// Returns `true` if the row was updated.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE printers SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(status)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a printer (jobs cascade). Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM printers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
