//! Ordered-slot placement engine.
//!
//! Hero slides, featured items, homepage category slots, menu sections and
//! menu links all share one problem: each entity holds a unique positive
//! order within its scope. This module assigns orders, detects collisions,
//! displaces occupants on confirmation and prunes slot assignments whose
//! category disappeared.
//!
//! Storage is reached only through [`PlacementGateway`].

pub mod assigner;
pub mod detector;
pub mod error;
pub mod gateway;
pub mod pruner;
pub mod resolver;
pub mod scope;

#[cfg(test)]
pub(crate) mod memory;

pub use assigner::{assign_order, first_free_order, next_order};
pub use detector::{find_conflict, ConflictDescriptor};
pub use error::{PlacementError, PlacementStep, ResumePoint};
pub use gateway::{CategoryRef, GatewayError, PlacementGateway, PlacementPatch, Slotted};
pub use pruner::{plan_prune, prune, PrunePlan, SlotAssignment, SlotMove};
pub use resolver::{Displacement, PlaceOutcome, PlacementRequest, Placer};
pub use scope::{
    describe, Scope, ScopeDescriptor, ScopeKind, Variant, HOMEPAGE_CATEGORY_SLOTS,
    MENU_LINK_LIMIT,
};
