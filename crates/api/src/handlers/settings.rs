//! Handlers for the `/settings` resource (free-form key/value pairs).
//!
//! All endpoints require authentication via [`AuthUser`]. Keys are unique;
//! creating a duplicate is a conflict and leaves the existing row untouched.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use printforge_core::error::CoreError;
use printforge_core::types::DbId;
use printforge_db::models::setting::{CreateSetting, UpdateSetting};
use printforge_db::repositories::SettingRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/settings
///
/// List all settings in key order.
pub async fn list_settings(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let settings = SettingRepo::list(&state.pool).await?;

    Ok(Json(DataResponse { data: settings }))
}

/// POST /api/v1/settings
///
/// Create a setting. Returns 201 with the created row, or 409 if the key
/// already exists. (The `uq_settings_key` constraint backs this up against
/// concurrent creates.)
pub async fn create_setting(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateSetting>,
) -> AppResult<impl IntoResponse> {
    if SettingRepo::find_by_key(&state.pool, &input.key)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Setting key '{}' already exists",
            input.key
        ))));
    }

    let setting = SettingRepo::create(&state.pool, &input).await?;

    tracing::info!(setting_id = setting.id, key = %setting.key, user_id = auth.user_id, "Setting created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: setting })))
}

/// PUT /api/v1/settings/{id}
///
/// Partially update a setting; explicit `null` clears the value.
pub async fn update_setting(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(setting_id): Path<DbId>,
    Json(input): Json<UpdateSetting>,
) -> AppResult<impl IntoResponse> {
    let setting = SettingRepo::update(&state.pool, setting_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Setting",
            id: setting_id,
        }))?;

    tracing::info!(setting_id, user_id = auth.user_id, "Setting updated");

    Ok(Json(DataResponse { data: setting }))
}

/// DELETE /api/v1/settings/{id}
///
/// Remove a setting. Returns 204.
pub async fn delete_setting(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(setting_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = SettingRepo::delete(&state.pool, setting_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Setting",
            id: setting_id,
        }));
    }

    tracing::info!(setting_id, user_id = auth.user_id, "Setting deleted");

    Ok(StatusCode::NO_CONTENT)
}
