//! Route definitions for the timeline view and its live feed.

use axum::routing::get;
use axum::Router;

use crate::handlers::timeline;
use crate::state::AppState;
use crate::ws;

/// Timeline routes (mounted directly under `/api/v1`).
///
/// ```text
/// GET /timeline       -> get_timeline
/// GET /ws/timeline    -> live feed (WebSocket upgrade)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/timeline", get(timeline::get_timeline))
        .route("/ws/timeline", get(ws::timeline_feed))
}
