//! Repository for the `featured_items` table.

use merch_core::types::{DbId, Order};
use sqlx::PgPool;

use crate::models::featured_item::{FeaturedItem, FeaturedItemDraft};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, variant, title, image_url, link_url, sort_order, created_at, updated_at";

/// Provides CRUD operations for featured showcase entries.
pub struct FeaturedItemRepo;

impl FeaturedItemRepo {
    /// Insert a new entry in `variant` at `sort_order`.
    pub async fn create(
        pool: &PgPool,
        variant: &str,
        sort_order: Order,
        input: &FeaturedItemDraft,
    ) -> Result<FeaturedItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO featured_items (variant, title, image_url, link_url, sort_order) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FeaturedItem>(&query)
            .bind(variant)
            .bind(&input.title)
            .bind(&input.image_url)
            .bind(&input.link_url)
            .bind(sort_order)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<FeaturedItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM featured_items WHERE id = $1");
        sqlx::query_as::<_, FeaturedItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List entries of one variant ordered by sort_order, then id.
    pub async fn list_by_variant(
        pool: &PgPool,
        variant: &str,
    ) -> Result<Vec<FeaturedItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM featured_items WHERE variant = $1 ORDER BY sort_order, id"
        );
        sqlx::query_as::<_, FeaturedItem>(&query)
            .bind(variant)
            .fetch_all(pool)
            .await
    }

    /// Move an entry and/or replace its content. The variant is immutable.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        sort_order: Option<Order>,
        input: Option<&FeaturedItemDraft>,
    ) -> Result<Option<FeaturedItem>, sqlx::Error> {
        let query = format!(
            "UPDATE featured_items SET \
                sort_order = COALESCE($2, sort_order), \
                title = CASE WHEN $3 THEN $4 ELSE title END, \
                image_url = CASE WHEN $3 THEN $5 ELSE image_url END, \
                link_url = CASE WHEN $3 THEN $6 ELSE link_url END, \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FeaturedItem>(&query)
            .bind(id)
            .bind(sort_order)
            .bind(input.is_some())
            .bind(input.map(|d| d.title.as_str()))
            .bind(input.map(|d| d.image_url.as_str()))
            .bind(input.and_then(|d| d.link_url.as_deref()))
            .fetch_optional(pool)
            .await
    }

    /// Delete an entry. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM featured_items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
