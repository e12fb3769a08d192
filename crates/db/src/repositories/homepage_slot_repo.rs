//! Repository for the `homepage_category_slots` table.

use merch_core::types::{DbId, Order};
use sqlx::PgPool;

use crate::models::homepage_slot::{HomepageCategorySlot, HomepageSlotDraft};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, category_id, slot_index, created_at, updated_at";

/// Provides CRUD operations for homepage category slots.
pub struct HomepageSlotRepo;

impl HomepageSlotRepo {
    /// Assign a category to `slot_index`.
    pub async fn create(
        pool: &PgPool,
        slot_index: Order,
        input: &HomepageSlotDraft,
    ) -> Result<HomepageCategorySlot, sqlx::Error> {
        let query = format!(
            "INSERT INTO homepage_category_slots (category_id, slot_index) \
             VALUES ($1, $2) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, HomepageCategorySlot>(&query)
            .bind(input.category_id)
            .bind(slot_index)
            .fetch_one(pool)
            .await
    }

    /// List the grid ordered by slot index.
    pub async fn list(pool: &PgPool) -> Result<Vec<HomepageCategorySlot>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM homepage_category_slots ORDER BY slot_index, id");
        sqlx::query_as::<_, HomepageCategorySlot>(&query)
            .fetch_all(pool)
            .await
    }

    /// Move a slot and/or point it at another category.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        slot_index: Option<Order>,
        input: Option<&HomepageSlotDraft>,
    ) -> Result<Option<HomepageCategorySlot>, sqlx::Error> {
        let query = format!(
            "UPDATE homepage_category_slots SET \
                slot_index = COALESCE($2, slot_index), \
                category_id = COALESCE($3, category_id), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, HomepageCategorySlot>(&query)
            .bind(id)
            .bind(slot_index)
            .bind(input.map(|d| d.category_id))
            .fetch_optional(pool)
            .await
    }

    /// Delete a slot assignment. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM homepage_category_slots WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
