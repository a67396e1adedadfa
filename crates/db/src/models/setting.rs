//! Free-form key/value setting entity model and DTOs.

use printforge_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::patch::double_option;

/// A row from the `settings` table. Keys are unique.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Setting {
    pub id: DbId,
    pub key: String,
    pub value: Option<String>,
}

/// DTO for creating a new setting.
#[derive(Debug, Deserialize)]
pub struct CreateSetting {
    pub key: String,
    pub value: Option<String>,
}

/// DTO for partially updating a setting.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateSetting {
    pub key: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub value: Option<Option<String>>,
}

impl UpdateSetting {
    /// Copy every present field onto `setting`; omitted fields are untouched.
    pub fn apply(&self, setting: &mut Setting) {
        if let Some(key) = &self.key {
            setting.key = key.clone();
        }
        if let Some(value) = &self.value {
            setting.value = value.clone();
        }
    }
}
