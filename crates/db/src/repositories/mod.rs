//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod category_repo;
pub mod featured_item_repo;
pub mod hero_slide_repo;
pub mod homepage_slot_repo;
pub mod menu_link_repo;
pub mod menu_section_repo;

pub use category_repo::CategoryRepo;
pub use featured_item_repo::FeaturedItemRepo;
pub use hero_slide_repo::HeroSlideRepo;
pub use homepage_slot_repo::HomepageSlotRepo;
pub use menu_link_repo::MenuLinkRepo;
pub use menu_section_repo::MenuSectionRepo;
