//! Per-client fixed-window rate limiting.
//!
//! Each client address gets a queue of request timestamps; a request is
//! rejected once the queue holds `max_requests` entries younger than the
//! window. A background sweeper drops queues that have gone idle so the map
//! stays bounded.

use std::collections::{HashMap, VecDeque};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::extract::{ConnectInfo, Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tokio::sync::Mutex;

use crate::error::AppError;
use crate::state::AppState;

/// Key used when the client address cannot be determined.
const GLOBAL_KEY: &str = "global";

/// Fixed-window request counter keyed by client address.
///
/// Thread-safe via interior `Mutex`; designed to be wrapped in `Arc` and
/// shared across the application.
pub struct RateLimiter {
    max_requests: usize,
    window: Duration,
    windows: Mutex<HashMap<String, VecDeque<Instant>>>,
}

impl RateLimiter {
    /// Create a limiter allowing `max_requests` per `window` per key.
    pub fn new(max_requests: usize, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            windows: Mutex::new(HashMap::new()),
        }
    }

    /// Record a request for `key` and report whether it is allowed.
    ///
    /// Timestamps older than the window are dropped first, so the counter
    /// slides forward as the window elapses.
    pub async fn check(&self, key: &str) -> bool {
        self.check_at(key, Instant::now()).await
    }

    async fn check_at(&self, key: &str, now: Instant) -> bool {
        let mut windows = self.windows.lock().await;
        let window = windows.entry(key.to_string()).or_default();

        while window
            .front()
            .is_some_and(|&t| now.duration_since(t) > self.window)
        {
            window.pop_front();
        }

        if window.len() >= self.max_requests {
            return false;
        }

        window.push_back(now);
        true
    }

    /// Drop all keys whose newest request has left the window.
    ///
    /// Called periodically by the sweeper task so one-off clients do not
    /// accumulate in the map forever.
    pub async fn prune_stale(&self) {
        let now = Instant::now();
        let mut windows = self.windows.lock().await;
        windows.retain(|_, w| {
            w.back()
                .is_some_and(|&t| now.duration_since(t) <= self.window)
        });
    }

    /// Number of keys currently tracked.
    pub async fn tracked_keys(&self) -> usize {
        self.windows.lock().await.len()
    }
}

/// Spawn a background task that periodically prunes idle clients.
///
/// The sweep interval equals the window length; anything swept is by
/// definition no longer rate-limited.
pub fn start_sweeper(limiter: Arc<RateLimiter>) -> tokio::task::JoinHandle<()> {
    let period = limiter.window;
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);

        loop {
            interval.tick().await;
            limiter.prune_stale().await;
            let tracked = limiter.tracked_keys().await;
            tracing::trace!(tracked, "Rate limiter swept");
        }
    })
}

/// Axum middleware enforcing the limiter on every request.
pub async fn enforce(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let key = client_key(&request);

    if !state.rate_limiter.check(&key).await {
        tracing::warn!(client = %key, "Rate limit exceeded");
        return AppError::RateLimited.into_response();
    }

    next.run(request).await
}

/// Resolve the limiter key for a request: the peer IP when the server was
/// started with connect-info, otherwise a single shared key.
fn client_key(request: &Request) -> String {
    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| GLOBAL_KEY.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn allows_up_to_the_ceiling() {
        let limiter = RateLimiter::new(3, Duration::from_secs(60));
        let now = Instant::now();

        assert!(limiter.check_at("10.0.0.1", now).await);
        assert!(limiter.check_at("10.0.0.1", now).await);
        assert!(limiter.check_at("10.0.0.1", now).await);
    }

    #[tokio::test]
    async fn rejects_the_request_over_the_ceiling() {
        let limiter = RateLimiter::new(3, Duration::from_secs(60));
        let now = Instant::now();

        for _ in 0..3 {
            assert!(limiter.check_at("10.0.0.1", now).await);
        }
        assert!(
            !limiter.check_at("10.0.0.1", now).await,
            "4th request within the window must be rejected"
        );
    }

    #[tokio::test]
    async fn allows_again_after_the_window_elapses() {
        let window = Duration::from_secs(60);
        let limiter = RateLimiter::new(3, window);
        let start = Instant::now();

        for _ in 0..3 {
            assert!(limiter.check_at("10.0.0.1", start).await);
        }
        assert!(!limiter.check_at("10.0.0.1", start).await);

        // One second past the window boundary the old entries expire.
        let later = start + window + Duration::from_secs(1);
        assert!(limiter.check_at("10.0.0.1", later).await);
    }

    #[tokio::test]
    async fn keys_are_counted_independently() {
        let limiter = RateLimiter::new(1, Duration::from_secs(60));
        let now = Instant::now();

        assert!(limiter.check_at("10.0.0.1", now).await);
        assert!(
            limiter.check_at("10.0.0.2", now).await,
            "a different client must not share the first client's window"
        );
        assert!(!limiter.check_at("10.0.0.1", now).await);
    }

    #[tokio::test]
    async fn prune_drops_idle_keys_only() {
        let window = Duration::from_millis(10);
        let limiter = RateLimiter::new(3, window);

        limiter.check("10.0.0.1").await;
        assert_eq!(limiter.tracked_keys().await, 1);

        // Let the entry age out of the window, then sweep.
        tokio::time::sleep(window + Duration::from_millis(20)).await;
        limiter.check("10.0.0.2").await;
        limiter.prune_stale().await;

        assert_eq!(
            limiter.tracked_keys().await,
            1,
            "idle key swept, active key kept"
        );
    }
}
