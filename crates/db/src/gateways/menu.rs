use merch_core::placement::{
    GatewayError, PlacementGateway, PlacementPatch, Scope, ScopeKind, Variant,
};
use merch_core::types::{DbId, Order};
use sqlx::PgPool;

use crate::models::menu::{MenuLink, MenuLinkDraft, MenuSection, MenuSectionDraft};
use crate::repositories::{MenuLinkRepo, MenuSectionRepo};

use super::{backend, deleted, expect_kind, found};

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub struct MenuSectionGateway {
    pool: PgPool,
}

impl MenuSectionGateway {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl PlacementGateway for MenuSectionGateway {
    type Entity = MenuSection;
    type Draft = MenuSectionDraft;

    async fn list(&self, scope: &Scope) -> Result<Vec<MenuSection>, GatewayError> {
        expect_kind(scope, ScopeKind::MenuSection)?;
        MenuSectionRepo::list(&self.pool)
            .await
            .map_err(backend)
    }

    async fn create(
        &self,
        scope: &Scope,
        order: Order,
        draft: &MenuSectionDraft,
    ) -> Result<MenuSection, GatewayError> {
        expect_kind(scope, ScopeKind::MenuSection)?;
        MenuSectionRepo::create(&self.pool, order, draft)
            .await
            .map_err(backend)
    }

    async fn update(
        &self,
        id: DbId,
        patch: PlacementPatch<'_, MenuSectionDraft>,
    ) -> Result<MenuSection, GatewayError> {
        let row = MenuSectionRepo::update(&self.pool, id, patch.order, patch.draft)
            .await
            .map_err(backend)?;
        found(row, "MenuSection", id)
    }

    async fn delete(&self, id: DbId) -> Result<(), GatewayError> {
        let removed = MenuSectionRepo::delete(&self.pool, id)
            .await
            .map_err(backend)?;
        deleted(removed, "MenuSection", id)
    }
}

// ---------------------------------------------------------------------------
// Links
// ---------------------------------------------------------------------------

/// Menu links, one ordering per parent section.
#[derive(Clone)]
pub struct MenuLinkGateway {
    pool: PgPool,
}

impl MenuLinkGateway {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn section_of(scope: &Scope) -> Result<DbId, GatewayError> {
    match (scope.kind(), scope.variant()) {
        (ScopeKind::MenuLink, Some(Variant::Section(id))) => Ok(id),
        _ => Err(GatewayError::UnsupportedScope(*scope)),
    }
}

impl PlacementGateway for MenuLinkGateway {
    type Entity = MenuLink;
    type Draft = MenuLinkDraft;

    async fn list(&self, scope: &Scope) -> Result<Vec<MenuLink>, GatewayError> {
        let section_id = section_of(scope)?;
        MenuLinkRepo::list_by_section(&self.pool, section_id)
            .await
            .map_err(backend)
    }

    async fn create(
        &self,
        scope: &Scope,
        order: Order,
        draft: &MenuLinkDraft,
    ) -> Result<MenuLink, GatewayError> {
        let section_id = section_of(scope)?;
        MenuLinkRepo::create(&self.pool, section_id, order, draft)
            .await
            .map_err(backend)
    }

    async fn update(
        &self,
        id: DbId,
        patch: PlacementPatch<'_, MenuLinkDraft>,
    ) -> Result<MenuLink, GatewayError> {
        let row = MenuLinkRepo::update(&self.pool, id, patch.order, patch.draft)
            .await
            .map_err(backend)?;
        found(row, "MenuLink", id)
    }

    async fn delete(&self, id: DbId) -> Result<(), GatewayError> {
        let removed = MenuLinkRepo::delete(&self.pool, id)
            .await
            .map_err(backend)?;
        deleted(removed, "MenuLink", id)
    }
}
