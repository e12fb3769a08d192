//! Request handlers for the administrative merchandising surface.
//!
//! Each submodule provides async handler functions for one resource.
//! Placement writes go through [`merch_core::placement::Placer`] via the
//! helpers in [`placement`]; plain reads go straight to the repositories.

pub mod category;
pub mod featured_item;
pub mod hero_slide;
pub mod homepage_slot;
pub mod menu;
pub mod placement;
pub mod placements;
