//! Repository for the `filaments` table.

use printforge_core::types::DbId;
use sqlx::PgPool;

use crate::models::filament::{CreateFilament, Filament, UpdateFilament};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, color, material, price_per_kg, stock_grams, brand, created_at";

/// Provides CRUD operations for filament inventory.
pub struct FilamentRepo;

impl FilamentRepo {
    /// Insert a new filament, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateFilament) -> Result<Filament, sqlx::Error> {
        let query = format!(
            "INSERT INTO filaments (name, color, material, price_per_kg, stock_grams, brand)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Filament>(&query)
            .bind(&input.name)
            .bind(&input.color)
            .bind(&input.material)
            .bind(input.price_per_kg)
            .bind(input.stock_grams)
            .bind(&input.brand)
            .fetch_one(pool)
            .await
    }

    /// Find a filament by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Filament>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM filaments WHERE id = $1");
        sqlx::query_as::<_, Filament>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all filaments in ascending ID order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Filament>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM filaments ORDER BY id");
        sqlx::query_as::<_, Filament>(&query).fetch_all(pool).await
    }

    /// Apply a partial update to a filament.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFilament,
    ) -> Result<Option<Filament>, sqlx::Error> {
        let Some(mut filament) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        input.apply(&mut filament);

        let query = format!(
            "UPDATE filaments SET name = $2, color = $3, material = $4,
                                  price_per_kg = $5, stock_grams = $6, brand = $7
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Filament>(&query)
            .bind(id)
            .bind(&filament.name)
            .bind(&filament.color)
            .bind(&filament.material)
            .bind(filament.price_per_kg)
            .bind(filament.stock_grams)
            .bind(&filament.brand)
            .fetch_optional(pool)
            .await
    }

    /// Delete a filament. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM filaments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
