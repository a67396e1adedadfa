pub mod auth;
pub mod filaments;
pub mod health;
pub mod jobs;
pub mod moonraker;
pub mod printers;
pub mod settings;
pub mod timeline;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                     login (public)
///
/// /printers                       list, create
/// /printers/{id}                  update, delete
///
/// /filaments                      list, create
/// /filaments/{id}                 update, delete
///
/// /jobs                           list, create
/// /jobs/current                   queued + printing jobs
/// /jobs/history                   finished jobs
/// /jobs/{id}                      update, delete
///
/// /settings                       list, create
/// /settings/{id}                  update, delete
///
/// /moonraker/sync/{printer_id}    poll printer status endpoint
///
/// /timeline                       aggregated per-printer view
/// /ws/timeline                    live feed (WebSocket)
/// ```
///
/// Everything except `/auth/login` and the WebSocket upgrade requires a
/// bearer token.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/printers", printers::router())
        .nest("/filaments", filaments::router())
        .nest("/jobs", jobs::router())
        .nest("/settings", settings::router())
        .nest("/moonraker", moonraker::router())
        .merge(timeline::router())
}
