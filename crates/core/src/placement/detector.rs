//! Conflict detection: who, if anyone, already holds an order value.

use serde::Serialize;

use crate::types::{DbId, Order};

use super::{Scope, Slotted};

/// Everything a caller needs to ask the operator whether to displace an
/// occupant. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConflictDescriptor {
    pub scope: Scope,
    pub desired_order: Order,
    pub occupant_id: DbId,
    pub occupant_label: String,
}

impl ConflictDescriptor {
    pub fn new<E: Slotted>(scope: Scope, desired_order: Order, occupant: &E) -> Self {
        Self {
            scope,
            desired_order,
            occupant_id: occupant.id(),
            occupant_label: occupant.label(),
        }
    }
}

/// First entity in `existing` at `desired_order`, skipping `exclude_id`.
///
/// `exclude_id` is the entity being edited, so re-saving an entity at its
/// own order is not a conflict.
pub fn find_conflict<E: Slotted>(
    existing: &[E],
    desired_order: Order,
    exclude_id: Option<DbId>,
) -> Option<&E> {
    existing
        .iter()
        .find(|e| e.order() == desired_order && Some(e.id()) != exclude_id)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
