//! Scope-generic placement endpoints under `/admin/placements/{kind}`.
//!
//! `kind` is one of `hero-slide`, `featured-item`, `homepage-category-slot`,
//! `menu-section` or `menu-link`. Partitioned kinds take their partition
//! from `?variant=` or `?section_id=`.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use merch_core::placement::{Displacement, PlacementGateway, Placer, Scope, ScopeKind};
use merch_core::types::{DbId, Order};
use merch_db::gateways::{
    FeaturedItemGateway, HeroSlideGateway, HomepageSlotGateway, MenuLinkGateway,
    MenuSectionGateway,
};
use merch_db::DbPool;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::handlers::placement::resolve_scope;
use crate::query::ScopeParams;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct NextOrderResponse {
    pub scope: Scope,
    pub next_order: Order,
}

/// Body of a resume request.
#[derive(Debug, Deserialize)]
pub struct ResumeInput {
    pub occupant_id: DbId,
}

#[derive(Debug, Serialize)]
pub struct ResumeResponse {
    pub scope: Scope,
    /// `None` when the occupant already had a unique order.
    pub displaced: Option<Displacement>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/placements/{kind}/next-order?variant=|section_id=
///
/// The order a new entity would get by default: one past the current
/// maximum, or `1` for an empty scope.
pub async fn next_order(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Query(params): Query<ScopeParams>,
) -> AppResult<impl IntoResponse> {
    let kind: ScopeKind = kind.parse()?;
    let scope = resolve_scope(kind, &params)?;

    let next_order = match kind {
        ScopeKind::HeroSlide => {
            next_in(&HeroSlideGateway::new(state.pool.clone()), &scope).await?
        }
        ScopeKind::FeaturedItem => {
            next_in(&FeaturedItemGateway::new(state.pool.clone()), &scope).await?
        }
        ScopeKind::HomepageCategorySlot => {
            next_in(&HomepageSlotGateway::new(state.pool.clone()), &scope).await?
        }
        ScopeKind::MenuSection => {
            next_in(&MenuSectionGateway::new(state.pool.clone()), &scope).await?
        }
        ScopeKind::MenuLink => {
            next_in(&MenuLinkGateway::new(state.pool.clone()), &scope).await?
        }
    };

    Ok(Json(DataResponse {
        data: NextOrderResponse { scope, next_order },
    }))
}

/// POST /api/v1/admin/placements/{kind}/resume?variant=|section_id=
///
/// Finish a displacement whose relocation step failed. Safe to repeat.
pub async fn resume(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Query(params): Query<ScopeParams>,
    Json(input): Json<ResumeInput>,
) -> AppResult<impl IntoResponse> {
    let kind: ScopeKind = kind.parse()?;
    let scope = resolve_scope(kind, &params)?;
    let displaced = resume_in(&state.pool, &scope, input.occupant_id).await?;

    Ok(Json(DataResponse {
        data: ResumeResponse { scope, displaced },
    }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn next_in<G: PlacementGateway>(gateway: &G, scope: &Scope) -> AppResult<Order> {
    Ok(Placer::new(gateway).next_order(scope).await?)
}

async fn resume_in(
    pool: &DbPool,
    scope: &Scope,
    occupant_id: DbId,
) -> AppResult<Option<Displacement>> {
    let pool = pool.clone();
    let displaced = match scope.kind() {
        ScopeKind::HeroSlide => {
            Placer::new(&HeroSlideGateway::new(pool))
                .resume_displacement(scope, occupant_id)
                .await?
        }
        ScopeKind::FeaturedItem => {
            Placer::new(&FeaturedItemGateway::new(pool))
                .resume_displacement(scope, occupant_id)
                .await?
        }
        ScopeKind::HomepageCategorySlot => {
            Placer::new(&HomepageSlotGateway::new(pool))
                .resume_displacement(scope, occupant_id)
                .await?
        }
        ScopeKind::MenuSection => {
            Placer::new(&MenuSectionGateway::new(pool))
                .resume_displacement(scope, occupant_id)
                .await?
        }
        ScopeKind::MenuLink => {
            Placer::new(&MenuLinkGateway::new(pool))
                .resume_displacement(scope, occupant_id)
                .await?
        }
    };
    Ok(displaced)
}
