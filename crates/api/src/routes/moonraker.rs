//! Route definitions for the `/moonraker` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::moonraker;
use crate::state::AppState;

/// Routes mounted at `/moonraker`.
///
/// ```text
/// GET /sync/{printer_id}    -> sync_printer
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/sync/{printer_id}", get(moonraker::sync_printer))
}
