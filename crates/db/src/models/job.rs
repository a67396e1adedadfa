//! Print job entity model and DTOs.

use printforge_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::patch::double_option;

/// Status tokens considered "active" by the current/history job views.
pub const ACTIVE_STATUSES: &[&str] = &["queued", "printing"];

/// A row from the `jobs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Job {
    pub id: DbId,
    pub printer_id: DbId,
    pub filename: String,
    pub material: Option<String>,
    /// Operator's duration estimate, in seconds.
    pub duration_estimated: Option<f64>,
    /// Slicer-computed duration, in seconds.
    pub duration_slicer: Option<f64>,
    pub start_time: Option<Timestamp>,
    pub end_time: Option<Timestamp>,
    /// Free-text lifecycle token, e.g. `"queued"`, `"printing"`, `"done"`.
    pub status: String,
}

/// DTO for creating a new job.
#[derive(Debug, Deserialize)]
pub struct CreateJob {
    pub printer_id: DbId,
    pub filename: String,
    pub material: Option<String>,
    pub duration_estimated: Option<f64>,
    pub duration_slicer: Option<f64>,
    pub start_time: Option<Timestamp>,
    pub end_time: Option<Timestamp>,
    pub status: String,
}

/// DTO for partially updating a job.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateJob {
    pub printer_id: Option<DbId>,
    pub filename: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub material: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub duration_estimated: Option<Option<f64>>,
    #[serde(default, deserialize_with = "double_option")]
    pub duration_slicer: Option<Option<f64>>,
    #[serde(default, deserialize_with = "double_option")]
    pub start_time: Option<Option<Timestamp>>,
    #[serde(default, deserialize_with = "double_option")]
    pub end_time: Option<Option<Timestamp>>,
    pub status: Option<String>,
}

impl UpdateJob {
    /// Copy every present field onto `job`; omitted fields are untouched.
    pub fn apply(&self, job: &mut Job) {
        if let Some(printer_id) = self.printer_id {
            job.printer_id = printer_id;
        }
        if let Some(filename) = &self.filename {
            job.filename = filename.clone();
        }
        if let Some(material) = &self.material {
            job.material = material.clone();
        }
        if let Some(duration) = self.duration_estimated {
            job.duration_estimated = duration;
        }
        if let Some(duration) = self.duration_slicer {
            job.duration_slicer = duration;
        }
        if let Some(start_time) = self.start_time {
            job.start_time = start_time;
        }
        if let Some(end_time) = self.end_time {
            job.end_time = end_time;
        }
        if let Some(status) = &self.status {
            job.status = status.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn job() -> Job {
        Job {
            id: 7,
            printer_id: 1,
            filename: "benchy.gcode".to_string(),
            material: Some("PLA".to_string()),
            duration_estimated: Some(3600.0),
            duration_slicer: None,
            start_time: Some(Utc::now()),
            end_time: None,
            status: "printing".to_string(),
        }
    }

    #[test]
    fn apply_empty_update_changes_nothing() {
        let mut j = job();
        let before = format!("{j:?}");
        UpdateJob::default().apply(&mut j);
        assert_eq!(format!("{j:?}"), before);
    }

    #[test]
    fn apply_clears_timestamps_on_explicit_null() {
        let mut j = job();
        let update = UpdateJob {
            start_time: Some(None),
            material: Some(None),
            ..Default::default()
        };
        update.apply(&mut j);

        assert!(j.start_time.is_none());
        assert!(j.material.is_none());
        assert_eq!(j.status, "printing");
    }

    #[test]
    fn update_deserializes_presence_states() {
        let update: UpdateJob =
            serde_json::from_str(r#"{"status": "done", "end_time": null}"#).unwrap();

        assert_eq!(update.status.as_deref(), Some("done"));
        assert_eq!(update.end_time, Some(None));
        assert!(update.start_time.is_none());
        assert!(update.printer_id.is_none());
    }
}
