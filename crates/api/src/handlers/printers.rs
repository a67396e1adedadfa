//! Handlers for the `/printers` resource.
//!
//! All endpoints require authentication via [`AuthUser`].

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use printforge_core::error::CoreError;
use printforge_core::types::DbId;
use printforge_db::models::printer::{CreatePrinter, UpdatePrinter};
use printforge_db::repositories::PrinterRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/printers
///
/// List all printers in ascending ID order.
pub async fn list_printers(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let printers = PrinterRepo::list(&state.pool).await?;

    Ok(Json(DataResponse { data: printers }))
}

/// POST /api/v1/printers
///
/// Register a new printer. Returns 201 with the created row.
pub async fn create_printer(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreatePrinter>,
) -> AppResult<impl IntoResponse> {
    let printer = PrinterRepo::create(&state.pool, &input).await?;

    tracing::info!(printer_id = printer.id, user_id = auth.user_id, "Printer created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: printer })))
}

/// PUT /api/v1/printers/{id}
///
/// Partially update a printer. Omitted fields keep their stored values;
/// an explicit `null` clears the endpoint URL.
pub async fn update_printer(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(printer_id): Path<DbId>,
    Json(input): Json<UpdatePrinter>,
) -> AppResult<impl IntoResponse> {
    let printer = PrinterRepo::update(&state.pool, printer_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Printer",
            id: printer_id,
        }))?;

    tracing::info!(printer_id, user_id = auth.user_id, "Printer updated");

    Ok(Json(DataResponse { data: printer }))
}

/// DELETE /api/v1/printers/{id}
///
/// Remove a printer and (by cascade) its jobs. Returns 204.
pub async fn delete_printer(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(printer_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = PrinterRepo::delete(&state.pool, printer_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Printer",
            id: printer_id,
        }));
    }

    tracing::info!(printer_id, user_id = auth.user_id, "Printer deleted");

    Ok(StatusCode::NO_CONTENT)
}
