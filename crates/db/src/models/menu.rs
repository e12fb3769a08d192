//! Navigation menu section and link models and DTOs.
//!
//! Sections are ordered globally; links are ordered within their section
//! and capped at three per section.

use merch_core::placement::{Scope, Slotted};
use merch_core::types::{DbId, Order, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `menu_sections` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MenuSection {
    pub id: DbId,
    pub title: String,
    pub sort_order: Order,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MenuSectionDraft {
    #[validate(length(min = 1, max = 80))]
    pub title: String,
}

/// A row from the `menu_links` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MenuLink {
    pub id: DbId,
    pub section_id: DbId,
    pub label: String,
    pub url: String,
    pub sort_order: Order,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MenuLinkDraft {
    #[validate(length(min = 1, max = 80))]
    pub label: String,
    #[validate(length(min = 1, max = 2048))]
    pub url: String,
}

impl Slotted for MenuSection {
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

impl MenuLink {
    /// The ordering this link belongs to.
    pub fn scope(&self) -> Scope {
        Scope::menu_links(self.section_id)
    }
}

impl Slotted for MenuLink {
    fn id(&self) -> DbId {
        self.id
    }

    fn order(&self) -> Order {
        self.sort_order
    }

    fn label(&self) -> String {
        self.label.clone()
    }
}
