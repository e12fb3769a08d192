//! Route definitions for scope-generic placement operations.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::placements;
use crate::state::AppState;

/// Routes mounted at `/admin/placements`.
///
/// ```text
/// GET  /{kind}/next-order   -> next_order
/// POST /{kind}/resume       -> resume
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{kind}/next-order", get(placements::next_order))
        .route("/{kind}/resume", post(placements::resume))
}
