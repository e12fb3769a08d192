//! Route definitions for featured items.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::featured_item;
use crate::state::AppState;

/// Routes mounted at `/admin/featured-items`.
///
/// ```text
/// GET    /?variant=   -> list
/// POST   /            -> create
/// PUT    /{id}        -> update
/// DELETE /{id}        -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(featured_item::list).post(featured_item::create))
        .route(
            "/{id}",
            put(featured_item::update).delete(featured_item::delete),
        )
}
