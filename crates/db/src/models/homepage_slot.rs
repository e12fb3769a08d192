//! Homepage category grid slot model and DTOs.

use merch_core::placement::{CategoryRef, Slotted};
use merch_core::types::{DbId, Order, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `homepage_category_slots` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct HomepageCategorySlot {
    pub id: DbId,
    pub category_id: DbId,
    pub slot_index: Order,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Category to show in a grid slot.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct HomepageSlotDraft {
    #[validate(range(min = 1))]
    pub category_id: DbId,
}

impl Slotted for HomepageCategorySlot {
    fn id(&self) -> DbId {
        self.id
    }

    fn order(&self) -> Order {
        self.slot_index
    }

    fn label(&self) -> String {
        format!("category #{}", self.category_id)
    }
}

impl CategoryRef for HomepageCategorySlot {
    fn category_id(&self) -> DbId {
        self.category_id
    }
}
