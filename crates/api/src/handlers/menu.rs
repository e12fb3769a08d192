//! Handlers for navigation menu sections and their links.
//!
//! Sections share one ordering. Links are ordered per section and capped
//! at three; deleting a section removes its links with it.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use merch_core::error::CoreError;
use merch_core::placement::{Placer, Scope};
use merch_core::types::DbId;
use merch_db::gateways::{MenuLinkGateway, MenuSectionGateway};
use merch_db::models::menu::{MenuLinkDraft, MenuSectionDraft};
use merch_db::repositories::{MenuLinkRepo, MenuSectionRepo};
use merch_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::handlers::placement::{place, PlaceBody};
use crate::query::ConfirmParams;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/menu-sections
pub async fn list_sections(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let sections = MenuSectionRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: sections }))
}

/// POST /api/v1/admin/menu-sections?confirm=false
pub async fn create_section(
    State(state): State<AppState>,
    Query(params): Query<ConfirmParams>,
    Json(body): Json<PlaceBody<MenuSectionDraft>>,
) -> AppResult<impl IntoResponse> {
    let gateway = MenuSectionGateway::new(state.pool.clone());
    place(&gateway, Scope::menu_sections(), None, body, params.confirm).await
}

/// PUT /api/v1/admin/menu-sections/{id}?confirm=false
pub async fn update_section(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<ConfirmParams>,
    Json(body): Json<PlaceBody<MenuSectionDraft>>,
) -> AppResult<impl IntoResponse> {
    let gateway = MenuSectionGateway::new(state.pool.clone());
    place(
        &gateway,
        Scope::menu_sections(),
        Some(id),
        body,
        params.confirm,
    )
    .await
}

/// DELETE /api/v1/admin/menu-sections/{id}
pub async fn delete_section(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let gateway = MenuSectionGateway::new(state.pool.clone());
    Placer::new(&gateway)
        .remove(&Scope::menu_sections(), id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Links
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/menu-sections/{id}/links
pub async fn list_links(
    State(state): State<AppState>,
    Path(section_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_section(&state.pool, section_id).await?;
    let gateway = MenuLinkGateway::new(state.pool.clone());
    let links = Placer::new(&gateway)
        .list(&Scope::menu_links(section_id))
        .await?;
    Ok(Json(DataResponse { data: links }))
}

/// POST /api/v1/admin/menu-sections/{id}/links?confirm=false
///
/// A fourth link in a section is rejected with `422 OUT_OF_BOUNDS`.
pub async fn create_link(
    State(state): State<AppState>,
    Path(section_id): Path<DbId>,
    Query(params): Query<ConfirmParams>,
    Json(body): Json<PlaceBody<MenuLinkDraft>>,
) -> AppResult<impl IntoResponse> {
    ensure_section(&state.pool, section_id).await?;
    let gateway = MenuLinkGateway::new(state.pool.clone());
    place(
        &gateway,
        Scope::menu_links(section_id),
        None,
        body,
        params.confirm,
    )
    .await
}

/// PUT /api/v1/admin/menu-links/{id}?confirm=false
///
/// Links cannot change section; the order applies within the current one.
pub async fn update_link(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<ConfirmParams>,
    Json(body): Json<PlaceBody<MenuLinkDraft>>,
) -> AppResult<impl IntoResponse> {
    let scope = link_scope(&state.pool, id).await?;
    let gateway = MenuLinkGateway::new(state.pool.clone());
    place(&gateway, scope, Some(id), body, params.confirm).await
}

/// DELETE /api/v1/admin/menu-links/{id}
pub async fn delete_link(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let scope = link_scope(&state.pool, id).await?;
    let gateway = MenuLinkGateway::new(state.pool.clone());
    Placer::new(&gateway).remove(&scope, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn ensure_section(pool: &DbPool, id: DbId) -> AppResult<()> {
    MenuSectionRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "MenuSection",
            id,
        }))?;
    Ok(())
}

async fn link_scope(pool: &DbPool, id: DbId) -> AppResult<Scope> {
    let link = MenuLinkRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "MenuLink",
            id,
        }))?;
    Ok(link.scope())
}
