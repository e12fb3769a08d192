pub mod category;
pub mod featured_item;
pub mod health;
pub mod hero_slide;
pub mod homepage_slot;
pub mod menu;
pub mod placements;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /admin/hero-slides                               list, create
/// /admin/hero-slides/{id}                          update, delete
///
/// /admin/featured-items?variant=                   list, create
/// /admin/featured-items/{id}                       update, delete
///
/// /admin/homepage-slots                            list, create
/// /admin/homepage-slots/{id}                       update, delete
/// /admin/homepage-slots/prune                      prune stale slots (POST)
///
/// /admin/menu-sections                             list, create
/// /admin/menu-sections/{id}                        update, delete
/// /admin/menu-sections/{id}/links                  list, create links
/// /admin/menu-links/{id}                           update, delete
///
/// /admin/categories                                list, create
/// /admin/categories/{id}                           delete (prunes homepage slots)
///
/// /admin/placements/{kind}/next-order              default order (GET)
/// /admin/placements/{kind}/resume                  finish a displacement (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/admin", admin_routes())
}

fn admin_routes() -> Router<AppState> {
    Router::new()
        .nest("/hero-slides", hero_slide::router())
        .nest("/featured-items", featured_item::router())
        .nest("/homepage-slots", homepage_slot::router())
        .nest("/menu-sections", menu::section_router())
        .nest("/menu-links", menu::link_router())
        .nest("/categories", category::router())
        .nest("/placements", placements::router())
}
