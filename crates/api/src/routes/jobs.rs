//! Route definitions for the `/jobs` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::jobs;
use crate::state::AppState;

/// Routes mounted at `/jobs`.
///
/// ```text
/// GET    /           -> list_jobs
/// POST   /           -> create_job
/// GET    /current    -> current_jobs
/// GET    /history    -> job_history
/// PUT    /{id}       -> update_job
/// DELETE /{id}       -> delete_job
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(jobs::list_jobs).post(jobs::create_job))
        .route("/current", get(jobs::current_jobs))
        .route("/history", get(jobs::job_history))
        .route("/{id}", put(jobs::update_job).delete(jobs::delete_job))
}
