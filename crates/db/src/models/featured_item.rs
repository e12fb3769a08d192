//! Featured showcase entry model and DTOs.
//!
//! Entries are split into two independent orderings by `variant`
//! (`feature` for large cards, `tile` for small ones).

use merch_core::placement::{PlacementError, Scope, Slotted, Variant};
use merch_core::types::{DbId, Order, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `featured_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FeaturedItem {
    pub id: DbId,
    pub variant: String,
    pub title: String,
    pub image_url: String,
    pub link_url: Option<String>,
    pub sort_order: Order,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Operator-supplied featured entry content. The variant comes from the
/// scope, not the draft, so an entry cannot hop between orderings.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct FeaturedItemDraft {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1, max = 2048))]
    pub image_url: String,
    #[validate(length(min = 1, max = 2048))]
    pub link_url: Option<String>,
}

impl FeaturedItem {
    /// The ordering this entry belongs to.
    pub fn scope(&self) -> Result<Scope, PlacementError> {
        Scope::featured(Variant::parse_featured(&self.variant)?)
    }
}

impl Slotted for FeaturedItem {
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
