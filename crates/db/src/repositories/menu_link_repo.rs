//! Repository for the `menu_links` table.

use merch_core::types::{DbId, Order};
use sqlx::PgPool;

use crate::models::menu::{MenuLink, MenuLinkDraft};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, section_id, label, url, sort_order, created_at, updated_at";

/// Provides CRUD operations for menu links.
pub struct MenuLinkRepo;

impl MenuLinkRepo {
    /// Insert a link into `section_id` at `sort_order`.
    pub async fn create(
        pool: &PgPool,
        section_id: DbId,
        sort_order: Order,
        input: &MenuLinkDraft,
    ) -> Result<MenuLink, sqlx::Error> {
        let query = format!(
            "INSERT INTO menu_links (section_id, label, url, sort_order) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MenuLink>(&query)
            .bind(section_id)
            .bind(&input.label)
            .bind(&input.url)
            .bind(sort_order)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<MenuLink>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM menu_links WHERE id = $1");
        sqlx::query_as::<_, MenuLink>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the links of one section ordered by sort_order, then id.
    pub async fn list_by_section(
        pool: &PgPool,
        section_id: DbId,
    ) -> Result<Vec<MenuLink>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM menu_links WHERE section_id = $1 ORDER BY sort_order, id"
        );
        sqlx::query_as::<_, MenuLink>(&query)
            .bind(section_id)
            .fetch_all(pool)
            .await
    }

    /// Move a link and/or replace its content. The section is immutable.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        sort_order: Option<Order>,
        input: Option<&MenuLinkDraft>,
    ) -> Result<Option<MenuLink>, sqlx::Error> {
        let query = format!(
            "UPDATE menu_links SET \
                sort_order = COALESCE($2, sort_order), \
                label = COALESCE($3, label), \
                url = COALESCE($4, url), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MenuLink>(&query)
            .bind(id)
            .bind(sort_order)
            .bind(input.map(|d| d.label.as_str()))
            .bind(input.map(|d| d.url.as_str()))
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM menu_links WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
