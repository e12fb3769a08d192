//! Handlers for the `/admin/hero-slides` resource.
//!
//! Inactive slides keep their position in the ordering, so placement always
//! sees the full set even though storefront reads filter them out.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use merch_core::placement::{Placer, Scope};
use merch_core::types::DbId;
use merch_db::gateways::HeroSlideGateway;
use merch_db::models::hero_slide::HeroSlideDraft;
use merch_db::repositories::HeroSlideRepo;

use crate::error::AppResult;
use crate::handlers::placement::{place, PlaceBody};
use crate::query::{ConfirmParams, IncludeInactiveParams};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/admin/hero-slides?include_inactive=false
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<IncludeInactiveParams>,
) -> AppResult<impl IntoResponse> {
    let slides = HeroSlideRepo::list(&state.pool, params.include_inactive).await?;
    Ok(Json(DataResponse { data: slides }))
}

/// POST /api/v1/admin/hero-slides?confirm=false
///
/// Create a slide. Without `order` it lands at the end of the carousel.
pub async fn create(
    State(state): State<AppState>,
    Query(params): Query<ConfirmParams>,
    Json(body): Json<PlaceBody<HeroSlideDraft>>,
) -> AppResult<impl IntoResponse> {
    let gateway = HeroSlideGateway::new(state.pool.clone());
    place(&gateway, Scope::hero_slides(), None, body, params.confirm).await
}

/// PUT /api/v1/admin/hero-slides/{id}?confirm=false
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<ConfirmParams>,
    Json(body): Json<PlaceBody<HeroSlideDraft>>,
) -> AppResult<impl IntoResponse> {
    let gateway = HeroSlideGateway::new(state.pool.clone());
    place(&gateway, Scope::hero_slides(), Some(id), body, params.confirm).await
}

/// DELETE /api/v1/admin/hero-slides/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let gateway = HeroSlideGateway::new(state.pool.clone());
    Placer::new(&gateway)
        .remove(&Scope::hero_slides(), id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
