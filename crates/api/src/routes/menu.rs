//! Route definitions for menu sections and links.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::menu;
use crate::state::AppState;

/// Routes mounted at `/admin/menu-sections`.
///
/// ```text
/// GET    /              -> list_sections
/// POST   /              -> create_section
/// PUT    /{id}          -> update_section
/// DELETE /{id}          -> delete_section
/// GET    /{id}/links    -> list_links
/// POST   /{id}/links    -> create_link
/// ```
pub fn section_router() -> Router<AppState> {
    Router::new()
        .route("/", get(menu::list_sections).post(menu::create_section))
        .route(
            "/{id}",
            put(menu::update_section).delete(menu::delete_section),
        )
        .route("/{id}/links", get(menu::list_links).post(menu::create_link))
}

/// Routes mounted at `/admin/menu-links`.
///
/// ```text
/// PUT    /{id}   -> update_link
/// DELETE /{id}   -> delete_link
/// ```
pub fn link_router() -> Router<AppState> {
    Router::new().route("/{id}", put(menu::update_link).delete(menu::delete_link))
}
