//! Repository for the `menu_sections` table.

use merch_core::types::{DbId, Order};
use sqlx::PgPool;

use crate::models::menu::{MenuSection, MenuSectionDraft};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, sort_order, created_at, updated_at";

/// Provides CRUD operations for menu sections.
pub struct MenuSectionRepo;

impl MenuSectionRepo {
    pub async fn create(
        pool: &PgPool,
        sort_order: Order,
        input: &MenuSectionDraft,
    ) -> Result<MenuSection, sqlx::Error> {
        let query = format!(
            "INSERT INTO menu_sections (title, sort_order) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MenuSection>(&query)
            .bind(&input.title)
            .bind(sort_order)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<MenuSection>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM menu_sections WHERE id = $1");
        sqlx::query_as::<_, MenuSection>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List sections ordered by sort_order, then id.
    pub async fn list(pool: &PgPool) -> Result<Vec<MenuSection>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM menu_sections ORDER BY sort_order, id");
        sqlx::query_as::<_, MenuSection>(&query)
            .fetch_all(pool)
            .await
    }

    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        sort_order: Option<Order>,
        input: Option<&MenuSectionDraft>,
    ) -> Result<Option<MenuSection>, sqlx::Error> {
        let query = format!(
            "UPDATE menu_sections SET \
                sort_order = COALESCE($2, sort_order), \
                title = COALESCE($3, title), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MenuSection>(&query)
            .bind(id)
            .bind(sort_order)
            .bind(input.map(|d| d.title.as_str()))
            .fetch_optional(pool)
            .await
    }

    /// Delete a section and, by cascade, its links.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM menu_sections WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
