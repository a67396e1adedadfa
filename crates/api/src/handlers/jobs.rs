//! Handlers for the `/jobs` resource.
//!
//! All endpoints require authentication via [`AuthUser`]. Jobs reference a
//! printer; creation and reassignment verify the printer exists first.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use printforge_core::error::CoreError;
use printforge_core::types::DbId;
use printforge_db::models::job::{CreateJob, UpdateJob};
use printforge_db::repositories::{JobRepo, PrinterRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Ensure the referenced printer exists, or fail with 404.
async fn ensure_printer_exists(pool: &sqlx::PgPool, printer_id: DbId) -> AppResult<()> {
    PrinterRepo::find_by_id(pool, printer_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Printer",
            id: printer_id,
        }))?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/jobs
///
/// List all jobs, newest start time first, never-started jobs last.
pub async fn list_jobs(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let jobs = JobRepo::list(&state.pool).await?;

    Ok(Json(DataResponse { data: jobs }))
}

/// GET /api/v1/jobs/current
///
/// List jobs that are queued or printing.
pub async fn current_jobs(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let jobs = JobRepo::list_active(&state.pool).await?;

    Ok(Json(DataResponse { data: jobs }))
}

/// GET /api/v1/jobs/history
///
/// List finished jobs (everything that is no longer queued or printing).
pub async fn job_history(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let jobs = JobRepo::list_history(&state.pool).await?;

    Ok(Json(DataResponse { data: jobs }))
}

/// POST /api/v1/jobs
///
/// Create a job for an existing printer. Returns 201 with the created row.
pub async fn create_job(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateJob>,
) -> AppResult<impl IntoResponse> {
    ensure_printer_exists(&state.pool, input.printer_id).await?;

    let job = JobRepo::create(&state.pool, &input).await?;

    tracing::info!(
        job_id = job.id,
        printer_id = job.printer_id,
        user_id = auth.user_id,
        "Job created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: job })))
}

/// PUT /api/v1/jobs/{id}
///
/// Partially update a job. If `printer_id` is present it must reference an
/// existing printer.
pub async fn update_job(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(job_id): Path<DbId>,
    Json(input): Json<UpdateJob>,
) -> AppResult<impl IntoResponse> {
    if let Some(printer_id) = input.printer_id {
        ensure_printer_exists(&state.pool, printer_id).await?;
    }

    let job = JobRepo::update(&state.pool, job_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Job",
            id: job_id,
        }))?;

    tracing::info!(job_id, user_id = auth.user_id, "Job updated");

    Ok(Json(DataResponse { data: job }))
}

/// DELETE /api/v1/jobs/{id}
///
/// Remove a job. Returns 204.
pub async fn delete_job(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(job_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = JobRepo::delete(&state.pool, job_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Job",
            id: job_id,
        }));
    }

    tracing::info!(job_id, user_id = auth.user_id, "Job deleted");

    Ok(StatusCode::NO_CONTENT)
}
