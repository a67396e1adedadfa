//! Handler for the timeline read endpoint.
//!
//! The live-feed WebSocket counterpart lives in [`crate::ws::handler`].

use axum::extract::State;
use axum::Json;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::timeline::{build_timeline, TimelineSnapshot};

/// GET /api/v1/timeline
///
/// Recompute and return the full timeline: `{ "items": [...] }`, one entry
/// per printer in ascending ID order.
pub async fn get_timeline(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<TimelineSnapshot>> {
    let items = build_timeline(&state.pool).await?;

    Ok(Json(TimelineSnapshot { items, ts: None }))
}
