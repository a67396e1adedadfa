//! Route definitions for the `/printers` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::printers;
use crate::state::AppState;

/// Routes mounted at `/printers`.
///
/// ```text
/// GET    /        -> list_printers
/// POST   /        -> create_printer
/// PUT    /{id}    -> update_printer
/// DELETE /{id}    -> delete_printer
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(printers::list_printers).post(printers::create_printer),
        )
        .route(
            "/{id}",
            put(printers::update_printer).delete(printers::delete_printer),
        )
}
