//! Hero carousel slide model and DTOs.

use merch_core::placement::Slotted;
use merch_core::types::{DbId, Order, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `hero_slides` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct HeroSlide {
    pub id: DbId,
    pub title: String,
    pub subtitle: Option<String>,
    pub image_url: String,
    pub link_url: Option<String>,
    pub sort_order: Order,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Operator-supplied slide content. Position is handled separately.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct HeroSlideDraft {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(max = 400))]
    pub subtitle: Option<String>,
    #[validate(length(min = 1, max = 2048))]
    pub image_url: String,
    #[validate(length(min = 1, max = 2048))]
    pub link_url: Option<String>,
    pub is_active: Option<bool>,
}

impl Slotted for HeroSlide {
    fn id(&self) -> DbId {
        self.id
    }

    fn order(&self) -> Order {
        self.sort_order
    }

    fn label(&self) -> String {
        self.title.clone()
    }
}
