//! Printer entity model and DTOs.

use printforge_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::patch::double_option;

/// Status token reported for printers that have never been reached.
pub const STATUS_OFFLINE: &str = "offline";

/// A row from the `printers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Printer {
    pub id: DbId,
    pub name: String,
    /// Base URL of the printer's companion control service, if configured.
    pub moonraker_url: Option<String>,
    /// Free-text state token, e.g. `"offline"`, `"printing"`, `"standby"`.
    pub status: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new printer.
#[derive(Debug, Deserialize)]
pub struct CreatePrinter {
    pub name: String,
    pub moonraker_url: Option<String>,
    /// Initial status token; defaults to `"offline"` when omitted.
    pub status: Option<String>,
}

/// DTO for partially updating a printer.
#[derive(Debug, Default, Deserialize)]
pub struct UpdatePrinter {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub moonraker_url: Option<Option<String>>,
    pub status: Option<String>,
}

impl UpdatePrinter {
    /// Copy every present field onto `printer`; omitted fields are untouched.
    pub fn apply(&self, printer: &mut Printer) {
        if let Some(name) = &self.name {
            printer.name = name.clone();
        }
        if let Some(url) = &self.moonraker_url {
            printer.moonraker_url = url.clone();
        }
        if let Some(status) = &self.status {
            printer.status = status.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn printer() -> Printer {
        Printer {
            id: 1,
            name: "Voron".to_string(),
            moonraker_url: Some("http://voron.local:7125".to_string()),
            status: STATUS_OFFLINE.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn apply_keeps_omitted_fields() {
        let mut p = printer();
        UpdatePrinter::default().apply(&mut p);

        assert_eq!(p.name, "Voron");
        assert_eq!(p.moonraker_url.as_deref(), Some("http://voron.local:7125"));
    }

    #[test]
    fn apply_clears_nullable_field_on_explicit_null() {
        let mut p = printer();
        let update = UpdatePrinter {
            moonraker_url: Some(None),
            ..Default::default()
        };
        update.apply(&mut p);

        assert!(p.moonraker_url.is_none());
        // Other fields untouched.
        assert_eq!(p.name, "Voron");
    }

    #[test]
    fn apply_replaces_present_fields() {
        let mut p = printer();
        let update = UpdatePrinter {
            name: Some("Voron 2.4".to_string()),
            status: Some("printing".to_string()),
            ..Default::default()
        };
        update.apply(&mut p);

        assert_eq!(p.name, "Voron 2.4");
        assert_eq!(p.status, "printing");
    }
}
