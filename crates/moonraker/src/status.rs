//! Wire types for the object-query endpoint and the normalized snapshot.
//!
//! Moonraker nests everything under `result.status`; firmware variants
//! routinely omit objects or individual fields, so every level is defaulted
//! and absence is never an error.

use serde::Deserialize;

/// State token reported when the device does not report one.
const STATE_OFFLINE: &str = "offline";

/// Normalized printer status extracted from an object query.
#[derive(Debug, Clone, PartialEq)]
pub struct PrinterStatus {
    /// Overall machine state (e.g. `"standby"`, `"printing"`, `"error"`).
    /// Falls back to `"offline"` when the device omits it.
    pub state: String,
    /// Filename of the active print, if any.
    pub filename: Option<String>,
    /// Print progress as a fraction in `[0, 1]`.
    pub progress: Option<f64>,
    pub current_layer: Option<i64>,
    pub total_layer: Option<i64>,
    /// Elapsed print time, in seconds.
    pub print_duration: Option<f64>,
}

/// Body of `GET /printer/objects/query?print_stats&display_status`.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ObjectsQueryResponse {
    #[serde(default)]
    pub result: QueryResult,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct QueryResult {
    #[serde(default)]
    pub status: ObjectStatus,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ObjectStatus {
    #[serde(default)]
    pub print_stats: PrintStats,
    #[serde(default)]
    pub display_status: DisplayStatus,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PrintStats {
    pub state: Option<String>,
    pub filename: Option<String>,
    pub print_duration: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct DisplayStatus {
    pub progress: Option<f64>,
    pub current_layer: Option<i64>,
    pub total_layer: Option<i64>,
}

impl From<ObjectsQueryResponse> for PrinterStatus {
    fn from(response: ObjectsQueryResponse) -> Self {
        let ObjectStatus {
            print_stats,
            display_status,
        } = response.result.status;

        Self {
            state: print_stats
                .state
                .unwrap_or_else(|| STATE_OFFLINE.to_string()),
            filename: print_stats.filename,
            progress: display_status.progress,
            current_layer: display_status.current_layer,
            total_layer: display_status.total_layer,
            print_duration: print_stats.print_duration,
        }
    }
}
