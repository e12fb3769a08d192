use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::homepage_slot;
use crate::state::AppState;

/// Routes mounted at `/admin/homepage-slots`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// POST   /prune   -> prune
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(homepage_slot::list).post(homepage_slot::create))
        .route("/prune", post(homepage_slot::prune))
        .route(
            "/{id}",
            put(homepage_slot::update).delete(homepage_slot::delete),
        )
}
