//! Handlers for the `/admin/featured-items` resource.
//!
//! `feature` and `tile` entries are ordered independently. The variant is
//! chosen at creation and fixed afterwards; updates resolve it from the row.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use merch_core::error::CoreError;
use merch_core::placement::{Placer, Scope, Variant};
use merch_core::types::{DbId, Order};
use merch_db::gateways::FeaturedItemGateway;
use merch_db::models::featured_item::FeaturedItemDraft;
use merch_db::repositories::FeaturedItemRepo;
use merch_db::DbPool;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::handlers::placement::{place, PlaceBody};
use crate::query::ConfirmParams;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct VariantParams {
    pub variant: String,
}

/// Create body: the target variant plus the usual placement fields.
#[derive(Debug, Deserialize)]
pub struct CreateFeaturedItem {
    pub variant: String,
    pub order: Option<Order>,
    #[serde(flatten)]
    pub draft: FeaturedItemDraft,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/featured-items?variant=feature
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<VariantParams>,
) -> AppResult<impl IntoResponse> {
    let scope = Scope::featured(Variant::parse_featured(&params.variant)?)?;
    let gateway = FeaturedItemGateway::new(state.pool.clone());
    let items = Placer::new(&gateway).list(&scope).await?;
    Ok(Json(DataResponse { data: items }))
}

/// POST /api/v1/admin/featured-items?confirm=false
pub async fn create(
    State(state): State<AppState>,
    Query(params): Query<ConfirmParams>,
    Json(input): Json<CreateFeaturedItem>,
) -> AppResult<impl IntoResponse> {
    let scope = Scope::featured(Variant::parse_featured(&input.variant)?)?;
    let gateway = FeaturedItemGateway::new(state.pool.clone());
    let body = PlaceBody {
        order: input.order,
        draft: input.draft,
    };
    place(&gateway, scope, None, body, params.confirm).await
}

/// PUT /api/v1/admin/featured-items/{id}?confirm=false
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<ConfirmParams>,
    Json(body): Json<PlaceBody<FeaturedItemDraft>>,
) -> AppResult<impl IntoResponse> {
    let scope = scope_of(&state.pool, id).await?;
    let gateway = FeaturedItemGateway::new(state.pool.clone());
    place(&gateway, scope, Some(id), body, params.confirm).await
}

/// DELETE /api/v1/admin/featured-items/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let scope = scope_of(&state.pool, id).await?;
    let gateway = FeaturedItemGateway::new(state.pool.clone());
    Placer::new(&gateway).remove(&scope, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn scope_of(pool: &DbPool, id: DbId) -> AppResult<Scope> {
    let item = FeaturedItemRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "FeaturedItem",
            id,
        }))?;
    Ok(item.scope()?)
}
