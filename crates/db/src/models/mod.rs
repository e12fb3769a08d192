pub mod category;
pub mod featured_item;
pub mod hero_slide;
pub mod homepage_slot;
pub mod menu;
