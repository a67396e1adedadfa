//! Route definitions for the `/settings` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::settings;
use crate::state::AppState;

/// Routes mounted at `/settings`.
///
/// ```text
/// GET    /        -> list_settings
/// POST   /        -> create_setting
/// PUT    /{id}    -> update_setting
/// DELETE /{id}    -> delete_setting
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(settings::list_settings).post(settings::create_setting),
        )
        .route(
            "/{id}",
            put(settings::update_setting).delete(settings::delete_setting),
        )
}
