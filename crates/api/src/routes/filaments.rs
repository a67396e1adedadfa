//! Route definitions for the `/filaments` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::filaments;
use crate::state::AppState;

/// Routes mounted at `/filaments`.
///
/// ```text
/// GET    /        -> list_filaments
/// POST   /        -> create_filament
/// PUT    /{id}    -> update_filament
/// DELETE /{id}    -> delete_filament
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(filaments::list_filaments).post(filaments::create_filament),
        )
        .route(
            "/{id}",
            put(filaments::update_filament).delete(filaments::delete_filament),
        )
}
