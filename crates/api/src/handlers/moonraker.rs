//! Handlers for the `/moonraker` resource: on-demand status polling.
//!
//! All endpoints require authentication via [`AuthUser`].

use axum::extract::{Path, State};
use axum::Json;
use printforge_core::error::CoreError;
use printforge_core::types::{DbId, Timestamp};
use printforge_db::repositories::PrinterRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Snapshot returned by a sync: the normalized device status plus the
/// printer name and the server-side poll timestamp.
#[derive(Debug, Serialize)]
pub struct SyncSnapshot {
    pub printer: String,
    pub state: String,
    pub filename: Option<String>,
    pub progress: Option<f64>,
    pub current_layer: Option<i64>,
    pub total_layer: Option<i64>,
    pub print_duration: Option<f64>,
    pub timestamp: Timestamp,
}

/// GET /api/v1/moonraker/sync/{printer_id}
///
/// Poll the printer's configured status endpoint once and persist the
/// reported machine state onto the printer row. The stored status is only
/// written after a successful fetch, so an upstream failure (timeout,
/// non-2xx, undecodable body) leaves the last-known status intact and maps
/// to 502. No retries are attempted here.
pub async fn sync_printer(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(printer_id): Path<DbId>,
) -> AppResult<Json<SyncSnapshot>> {
    let printer = PrinterRepo::find_by_id(&state.pool, printer_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Printer",
            id: printer_id,
        }))?;

    let base_url = printer
        .moonraker_url
        .as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .ok_or_else(|| {
            AppError::Core(CoreError::Validation(
                "Printer has no status endpoint configured".into(),
            ))
        })?;

    let status = state.moonraker.query_status(base_url).await?;

    PrinterRepo::update_status(&state.pool, printer.id, &status.state).await?;

    tracing::info!(
        printer_id,
        state = %status.state,
        user_id = auth.user_id,
        "Printer status synced",
    );

    Ok(Json(SyncSnapshot {
        printer: printer.name,
        state: status.state,
        filename: status.filename,
        progress: status.progress,
        current_layer: status.current_layer,
        total_layer: status.total_layer,
        print_duration: status.print_duration,
        timestamp: chrono::Utc::now(),
    }))
}
