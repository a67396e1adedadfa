//! The live feed session: one WebSocket per viewer, one snapshot on connect,
//! one refreshed snapshot per inbound client message.

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::IntoResponse;
use futures::{SinkExt, StreamExt};
use printforge_core::types::Timestamp;

use crate::state::AppState;
use crate::timeline::{build_timeline, TimelineSnapshot};

/// HTTP handler that upgrades the connection to WebSocket.
pub async fn timeline_feed(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Manage a single live-feed connection after upgrade.
///
/// Splits the socket into a sink (outbound) and stream (inbound), then:
///   1. Registers the connection with `WsManager`.
///   2. Spawns a sender task that forwards messages from the manager channel.
///   3. Pushes the connect-time snapshot (no generation timestamp).
///   4. Treats every inbound data frame as a refresh signal: recompute the
///      timeline and push it with a generation timestamp. A storage failure
///      skips the tick; the initial snapshot failing closes the session.
///   5. Cleans up unconditionally on disconnect.
pub(crate) async fn handle_socket(socket: WebSocket, state: AppState) {
    let conn_id = uuid::Uuid::new_v4().to_string();
    tracing::info!(conn_id = %conn_id, "Live feed connected");

    // Register and get the receiver for outbound messages.
    let mut rx = state.ws_manager.add(conn_id.clone()).await;

    let (mut sink, mut stream) = socket.split();

    // Sender task: forward channel messages to the WebSocket sink. A send
    // error means the client went away; the write error is discarded.
    let sender_conn_id = conn_id.clone();
    let send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sink.send(msg).await.is_err() {
                tracing::debug!(conn_id = %sender_conn_id, "Live feed sink closed");
                break;
            }
        }
    });

    // Connect-time snapshot, guaranteed before any client message is read.
    let connected = push_snapshot(&state, &conn_id, None).await;
    if let Err(e) = &connected {
        tracing::warn!(conn_id = %conn_id, error = %e, "Initial snapshot failed, closing");
    }

    if connected.is_ok() {
        // Session loop: await the next inbound event until disconnect.
        while let Some(result) = stream.next().await {
            match result {
                Ok(Message::Close(_)) => break,
                Ok(Message::Ping(_) | Message::Pong(_)) => {
                    tracing::trace!(conn_id = %conn_id, "Heartbeat frame");
                }
                Ok(_) => {
                    // Any data frame is a refresh signal; content is ignored.
                    let ts = Some(chrono::Utc::now());
                    if let Err(e) = push_snapshot(&state, &conn_id, ts).await {
                        tracing::warn!(conn_id = %conn_id, error = %e, "Refresh push failed, skipping tick");
                    }
                }
                Err(e) => {
                    tracing::debug!(conn_id = %conn_id, error = %e, "Live feed receive error");
                    break;
                }
            }
        }
    }

    // Clean up: remove connection and abort sender task.
    state.ws_manager.remove(&conn_id).await;
    send_task.abort();
    tracing::info!(conn_id = %conn_id, "Live feed disconnected");
}

/// Recompute the timeline and enqueue it on the connection's channel.
async fn push_snapshot(
    state: &AppState,
    conn_id: &str,
    ts: Option<Timestamp>,
) -> Result<(), PushError> {
    let items = build_timeline(&state.pool).await?;
    let snapshot = TimelineSnapshot { items, ts };
    let text = serde_json::to_string(&snapshot)?;

    // A closed channel just means the session is tearing down.
    state
        .ws_manager
        .send_to(conn_id, Message::Text(text.into()))
        .await;
    Ok(())
}

/// Failure modes of a single snapshot push.
#[derive(Debug, thiserror::Error)]
enum PushError {
    #[error("storage query failed: {0}")]
    Storage(#[from] sqlx::Error),

    #[error("snapshot serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
