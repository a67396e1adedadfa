//! HTTP client for the Moonraker status API.

use std::time::Duration;

use crate::status::{ObjectsQueryResponse, PrinterStatus};

/// Per-request deadline. A hung device must never block a caller longer
/// than this.
const STATUS_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors from the Moonraker REST layer.
#[derive(Debug, thiserror::Error)]
pub enum MoonrakerError {
    /// The HTTP request itself failed (network, DNS, timeout, bad JSON).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Moonraker returned a non-2xx status code.
    #[error("Moonraker API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

/// HTTP client for querying printer status endpoints.
///
/// One instance is shared across all printers; the base URL is supplied per
/// call since every printer carries its own endpoint.
pub struct MoonrakerClient {
    client: reqwest::Client,
}

impl MoonrakerClient {
    /// Create a client with its own connection pool.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Query print-statistics and display-status objects from the device.
    ///
    /// Issues a single `GET {base}/printer/objects/query?print_stats&display_status`
    /// bounded by a 10-second deadline. Missing nested fields are tolerated
    /// and surface as defaults in the returned snapshot; a non-2xx response
    /// or undecodable body is an error.
    pub async fn query_status(&self, base_url: &str) -> Result<PrinterStatus, MoonrakerError> {
        let url = format!(
            "{}/printer/objects/query?print_stats&display_status",
            base_url.trim_end_matches('/')
        );

        let response = self
            .client
            .get(&url)
            .timeout(STATUS_TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(MoonrakerError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed = response.json::<ObjectsQueryResponse>().await?;
        let snapshot = PrinterStatus::from(parsed);

        tracing::debug!(url = %url, state = %snapshot.state, "Printer status fetched");

        Ok(snapshot)
    }
}

impl Default for MoonrakerClient {
    fn default() -> Self {
        Self::new()
    }
}
