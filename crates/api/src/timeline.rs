//! Timeline aggregation: the derived per-printer projection joining each
//! printer with its ordered job history.
//!
//! [`build_timeline`] is a pure read-and-shape pass over current storage
//! state: two read-only queries, no side effects, no caching. Repeated calls
//! with unchanged storage return identical output; the generation timestamp
//! on pushed snapshots is attached at the push boundary, never here.

use printforge_core::types::{DbId, Timestamp};
use printforge_db::models::job::Job;
use printforge_db::models::printer::{Printer, STATUS_OFFLINE};
use printforge_db::repositories::{JobRepo, PrinterRepo};
use printforge_db::DbPool;
use serde::Serialize;

/// One job within a printer's timeline, newest start time first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineJob {
    pub id: DbId,
    pub filename: String,
    pub status: String,
    /// RFC 3339 or `null` when the job never started.
    pub start_time: Option<Timestamp>,
    pub end_time: Option<Timestamp>,
}

/// One printer with its ordered job history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineEntry {
    pub id: DbId,
    pub name: String,
    /// Lowercased status token; empty stored status degrades to `"offline"`.
    pub status: String,
    pub moonraker_url: Option<String>,
    pub jobs: Vec<TimelineJob>,
}

/// Payload for the timeline read endpoint and the live feed:
/// `{ "items": [...] }`, with a generation timestamp on refresh pushes.
#[derive(Debug, Serialize)]
pub struct TimelineSnapshot {
    pub items: Vec<TimelineEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ts: Option<Timestamp>,
}

/// Recompute the timeline from the latest committed storage state.
///
/// Printers ascend by id; each printer's jobs descend by start time with
/// never-started jobs last (ordering applied by the repository queries).
pub async fn build_timeline(pool: &DbPool) -> Result<Vec<TimelineEntry>, sqlx::Error> {
    let printers = PrinterRepo::list(pool).await?;
    let jobs = JobRepo::list(pool).await?;
    Ok(assemble(printers, jobs))
}

/// Group pre-ordered jobs under their printers, preserving both orders.
///
/// Printers without jobs get an entry with an empty job list.
pub fn assemble(printers: Vec<Printer>, jobs: Vec<Job>) -> Vec<TimelineEntry> {
    printers
        .into_iter()
        .map(|printer| {
            let printer_jobs = jobs
                .iter()
                .filter(|job| job.printer_id == printer.id)
                .map(|job| TimelineJob {
                    id: job.id,
                    filename: job.filename.clone(),
                    status: job.status.clone(),
                    start_time: job.start_time,
                    end_time: job.end_time,
                })
                .collect();

            let status = if printer.status.is_empty() {
                STATUS_OFFLINE.to_string()
            } else {
                printer.status.to_lowercase()
            };

            TimelineEntry {
                id: printer.id,
                name: printer.name,
                status,
                moonraker_url: printer.moonraker_url,
                jobs: printer_jobs,
            }
        })
        .collect()
}
