//! Filament inventory entity model and DTOs.

use printforge_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::patch::double_option;

/// A row from the `filaments` table. Independent entity, no relationships.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Filament {
    pub id: DbId,
    pub name: String,
    pub color: Option<String>,
    pub material: Option<String>,
    pub price_per_kg: Option<f64>,
    /// Remaining stock, in grams.
    pub stock_grams: Option<f64>,
    pub brand: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a new filament.
#[derive(Debug, Deserialize)]
pub struct CreateFilament {
    pub name: String,
    pub color: Option<String>,
    pub material: Option<String>,
    pub price_per_kg: Option<f64>,
    pub stock_grams: Option<f64>,
    pub brand: Option<String>,
}

/// DTO for partially updating a filament.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateFilament {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub color: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub material: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub price_per_kg: Option<Option<f64>>,
    #[serde(default, deserialize_with = "double_option")]
    pub stock_grams: Option<Option<f64>>,
    #[serde(default, deserialize_with = "double_option")]
    pub brand: Option<Option<String>>,
}

impl UpdateFilament {
    /// Copy every present field onto `filament`; omitted fields are untouched.
    pub fn apply(&self, filament: &mut Filament) {
        if let Some(name) = &self.name {
            filament.name = name.clone();
        }
        if let Some(color) = &self.color {
            filament.color = color.clone();
        }
        if let Some(material) = &self.material {
            filament.material = material.clone();
        }
        if let Some(price) = self.price_per_kg {
            filament.price_per_kg = price;
        }
        if let Some(stock) = self.stock_grams {
            filament.stock_grams = stock;
        }
        if let Some(brand) = &self.brand {
            filament.brand = brand.clone();
        }
    }
}
