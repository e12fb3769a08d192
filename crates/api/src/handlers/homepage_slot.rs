//! Handlers for the `/admin/homepage-slots` resource.
//!
//! The homepage shows a fixed grid of category slots. Slots reference
//! categories by id. Writes reject unknown categories; references that go
//! stale later are cleared by the prune endpoint and by category writes.

use std::collections::HashSet;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use merch_core::placement::{prune as prune_slots, PlacementError, Placer, PrunePlan, Scope};
use merch_core::types::DbId;
use merch_db::gateways::HomepageSlotGateway;
use merch_db::models::homepage_slot::HomepageSlotDraft;
use merch_db::repositories::CategoryRepo;
use merch_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::handlers::placement::{place, PlaceBody};
use crate::query::ConfirmParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/admin/homepage-slots
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let gateway = HomepageSlotGateway::new(state.pool.clone());
    let slots = Placer::new(&gateway)
        .list(&Scope::homepage_slots())
        .await?;
    Ok(Json(DataResponse { data: slots }))
}

/// POST /api/v1/admin/homepage-slots?confirm=false
pub async fn create(
    State(state): State<AppState>,
    Query(params): Query<ConfirmParams>,
    Json(body): Json<PlaceBody<HomepageSlotDraft>>,
) -> AppResult<impl IntoResponse> {
    ensure_category(&state.pool, body.draft.category_id).await?;
    let gateway = HomepageSlotGateway::new(state.pool.clone());
    place(&gateway, Scope::homepage_slots(), None, body, params.confirm).await
}

/// PUT /api/v1/admin/homepage-slots/{id}?confirm=false
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<ConfirmParams>,
    Json(body): Json<PlaceBody<HomepageSlotDraft>>,
) -> AppResult<impl IntoResponse> {
    ensure_category(&state.pool, body.draft.category_id).await?;
    let gateway = HomepageSlotGateway::new(state.pool.clone());
    place(
        &gateway,
        Scope::homepage_slots(),
        Some(id),
        body,
        params.confirm,
    )
    .await
}

/// DELETE /api/v1/admin/homepage-slots/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let gateway = HomepageSlotGateway::new(state.pool.clone());
    Placer::new(&gateway)
        .remove(&Scope::homepage_slots(), id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/admin/homepage-slots/prune
///
/// Drop slots whose category no longer exists and compact the rest.
/// Returns the applied [`PrunePlan`].
pub async fn prune(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let plan = prune_stale_slots(&state.pool).await?;
    Ok(Json(DataResponse { data: plan }))
}

/// Prune homepage slots against the current category table.
pub async fn prune_stale_slots(pool: &DbPool) -> AppResult<PrunePlan> {
    let valid: HashSet<DbId> = CategoryRepo::list_ids(pool).await?.into_iter().collect();
    let gateway = HomepageSlotGateway::new(pool.clone());
    Ok(prune_slots(&gateway, &Scope::homepage_slots(), &valid).await?)
}

/// A slot may only point at an existing category.
async fn ensure_category(pool: &DbPool, category_id: DbId) -> AppResult<()> {
    if CategoryRepo::find_by_id(pool, category_id).await?.is_none() {
        return Err(AppError::Placement(PlacementError::Validation(format!(
            "category {category_id} does not exist"
        ))));
    }
    Ok(())
}
