//! Handlers for the `/filaments` resource.
//!
//! All endpoints require authentication via [`AuthUser`].

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use printforge_core::error::CoreError;
use printforge_core::types::DbId;
use printforge_db::models::filament::{CreateFilament, UpdateFilament};
use printforge_db::repositories::FilamentRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/filaments
///
/// List all filaments in ascending ID order.
pub async fn list_filaments(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let filaments = FilamentRepo::list(&state.pool).await?;

    Ok(Json(DataResponse { data: filaments }))
}

/// POST /api/v1/filaments
///
/// Add a filament to the inventory. Returns 201 with the created row.
pub async fn create_filament(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateFilament>,
) -> AppResult<impl IntoResponse> {
    let filament = FilamentRepo::create(&state.pool, &input).await?;

    tracing::info!(filament_id = filament.id, user_id = auth.user_id, "Filament created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: filament })))
}

/// PUT /api/v1/filaments/{id}
///
/// Partially update a filament; explicit `null` clears optional fields.
pub async fn update_filament(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(filament_id): Path<DbId>,
    Json(input): Json<UpdateFilament>,
) -> AppResult<impl IntoResponse> {
    let filament = FilamentRepo::update(&state.pool, filament_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Filament",
            id: filament_id,
        }))?;

    tracing::info!(filament_id, user_id = auth.user_id, "Filament updated");

    Ok(Json(DataResponse { data: filament }))
}

/// DELETE /api/v1/filaments/{id}
///
/// Remove a filament. Returns 204.
pub async fn delete_filament(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(filament_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = FilamentRepo::delete(&state.pool, filament_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Filament",
            id: filament_id,
        }));
    }

    tracing::info!(filament_id, user_id = auth.user_id, "Filament deleted");

    Ok(StatusCode::NO_CONTENT)
}
