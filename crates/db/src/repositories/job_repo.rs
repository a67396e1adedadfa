//! Repository for the `jobs` table.

use printforge_core::types::DbId;
use sqlx::PgPool;

use crate::models::job::{CreateJob, Job, UpdateJob, ACTIVE_STATUSES};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, printer_id, filename, material, duration_estimated, \
                        duration_slicer, start_time, end_time, status";

/// Jobs are returned newest-first by start time; jobs that have not started
/// sort last. The id tiebreak keeps repeated reads byte-identical.
const ORDERING: &str = "start_time DESC NULLS LAST, id";

/// Provides CRUD operations for print jobs.
pub struct JobRepo;

impl JobRepo {
    /// Insert a new job, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateJob) -> Result<Job, sqlx::Error> {
        let query = format!(
            "INSERT INTO jobs (printer_id, filename, material, duration_estimated,
                               duration_slicer, start_time, end_time, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Job>(&query)
            .bind(input.printer_id)
            .bind(&input.filename)
            .bind(&input.material)
            .bind(input.duration_estimated)
            .bind(input.duration_slicer)
            .bind(input.start_time)
            .bind(input.end_time)
            .bind(&input.status)
            .fetch_one(pool)
            .await
    }

    /// Find a job by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Job>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM jobs WHERE id = $1");
        sqlx::query_as::<_, Job>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all jobs, newest start time first, never-started jobs last.
    pub async fn list(pool: &PgPool) -> Result<Vec<Job>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM jobs ORDER BY {ORDERING}");
        sqlx::query_as::<_, Job>(&query).fetch_all(pool).await
    }

    /// List jobs whose status is one of [`ACTIVE_STATUSES`].
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Job>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM jobs WHERE status = ANY($1) ORDER BY {ORDERING}");
        sqlx::query_as::<_, Job>(&query)
            .bind(active_statuses())
            .fetch_all(pool)
            .await
    }

    /// List finished jobs (status not in [`ACTIVE_STATUSES`]).
    pub async fn list_history(pool: &PgPool) -> Result<Vec<Job>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM jobs WHERE status <> ALL($1) ORDER BY {ORDERING}");
        sqlx::query_as::<_, Job>(&query)
            .bind(active_statuses())
            .fetch_all(pool)
            .await
    }

    /// Apply a partial update to a job.
    ///
    /// Returns `None` if no row with the given `id` exists. Referential
    /// checks on a changed `printer_id` are the caller's responsibility.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateJob,
    ) -> Result<Option<Job>, sqlx::Error> {
        let Some(mut job) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        input.apply(&mut job);

        let query = format!(
            "UPDATE jobs SET printer_id = $2, filename = $3, material = $4,
                             duration_estimated = $5, duration_slicer = $6,
                             start_time = $7, end_time = $8, status = $9
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Job>(&query)
            .bind(id)
            .bind(job.printer_id)
            .bind(&job.filename)
            .bind(&job.material)
            .bind(job.duration_estimated)
            .bind(job.duration_slicer)
            .bind(job.start_time)
            .bind(job.end_time)
            .bind(&job.status)
            .fetch_optional(pool)
            .await
    }

    /// Delete a job. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Owned copy of [`ACTIVE_STATUSES`] for array binding.
fn active_statuses() -> Vec<String> {
    ACTIVE_STATUSES.iter().map(|s| s.to_string()).collect()
}
