use std::sync::Arc;

use printforge_moonraker::MoonrakerClient;

use crate::config::ServerConfig;
use crate::middleware::rate_limit::RateLimiter;
use crate::ws::WsManager;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: printforge_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Live-feed WebSocket connection manager.
    pub ws_manager: Arc<WsManager>,
    /// Shared HTTP client for printer status endpoints.
    pub moonraker: Arc<MoonrakerClient>,
    /// Per-client fixed-window rate limiter.
    pub rate_limiter: Arc<RateLimiter>,
}
