//! Repository for the `hero_slides` table.

use merch_core::types::{DbId, Order};
use sqlx::PgPool;

use crate::models::hero_slide::{HeroSlide, HeroSlideDraft};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, subtitle, image_url, link_url, sort_order, is_active, \
                       created_at, updated_at";

/// Provides CRUD operations for hero slides.
pub struct HeroSlideRepo;

impl HeroSlideRepo {
    /// Insert a new slide at `sort_order`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        sort_order: Order,
        input: &HeroSlideDraft,
    ) -> Result<HeroSlide, sqlx::Error> {
        let query = format!(
            "INSERT INTO hero_slides (title, subtitle, image_url, link_url, sort_order, is_active) \
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, true)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, HeroSlide>(&query)
            .bind(&input.title)
            .bind(&input.subtitle)
            .bind(&input.image_url)
            .bind(&input.link_url)
            .bind(sort_order)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// List slides, optionally including inactive ones.
    ///
    /// Ordered by sort_order, then id.
    pub async fn list(pool: &PgPool, include_inactive: bool) -> Result<Vec<HeroSlide>, sqlx::Error> {
        let query = if include_inactive {
            format!("SELECT {COLUMNS} FROM hero_slides ORDER BY sort_order, id")
        } else {
            format!(
                "SELECT {COLUMNS} FROM hero_slides WHERE is_active = true ORDER BY sort_order, id"
            )
        };
        sqlx::query_as::<_, HeroSlide>(&query).fetch_all(pool).await
    }

    /// Move a slide and/or replace its content.
    ///
    /// `None` leaves the corresponding part untouched. Returns `None` if no
    /// row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        sort_order: Option<Order>,
        input: Option<&HeroSlideDraft>,
    ) -> Result<Option<HeroSlide>, sqlx::Error> {
        let query = format!(
            "UPDATE hero_slides SET \
                sort_order = COALESCE($2, sort_order), \
                title = CASE WHEN $3 THEN $4 ELSE title END, \
                subtitle = CASE WHEN $3 THEN $5 ELSE subtitle END, \
                image_url = CASE WHEN $3 THEN $6 ELSE image_url END, \
                link_url = CASE WHEN $3 THEN $7 ELSE link_url END, \
                is_active = CASE WHEN $3 THEN COALESCE($8, is_active) ELSE is_active END, \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, HeroSlide>(&query)
            .bind(id)
            .bind(sort_order)
            .bind(input.is_some())
            .bind(input.map(|d| d.title.as_str()))
            .bind(input.and_then(|d| d.subtitle.as_deref()))
            .bind(input.map(|d| d.image_url.as_str()))
            .bind(input.and_then(|d| d.link_url.as_deref()))
            .bind(input.and_then(|d| d.is_active))
            .fetch_optional(pool)
            .await
    }

    /// Delete a slide. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM hero_slides WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
