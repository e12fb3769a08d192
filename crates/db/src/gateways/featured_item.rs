use merch_core::placement::{
    GatewayError, PlacementGateway, PlacementPatch, Scope, ScopeKind, Variant,
};
use merch_core::types::{DbId, Order};
use sqlx::PgPool;

use crate::models::featured_item::{FeaturedItem, FeaturedItemDraft};
use crate::repositories::FeaturedItemRepo;

use super::{backend, deleted, found};

/// Featured showcase entries, one ordering per variant.
#[derive(Clone)]
pub struct FeaturedItemGateway {
    pool: PgPool,
}

impl FeaturedItemGateway {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Value of the `variant` column for a featured-item scope.
fn variant_column(scope: &Scope) -> Result<&'static str, GatewayError> {
    match (scope.kind(), scope.variant()) {
        (ScopeKind::FeaturedItem, Some(Variant::Feature)) => Ok("feature"),
        (ScopeKind::FeaturedItem, Some(Variant::Tile)) => Ok("tile"),
        _ => Err(GatewayError::UnsupportedScope(*scope)),
    }
}

impl PlacementGateway for FeaturedItemGateway {
    type Entity = FeaturedItem;
    type Draft = FeaturedItemDraft;

    async fn list(&self, scope: &Scope) -> Result<Vec<FeaturedItem>, GatewayError> {
        let variant = variant_column(scope)?;
        FeaturedItemRepo::list_by_variant(&self.pool, variant)
            .await
            .map_err(backend)
    }

    async fn create(
        &self,
        scope: &Scope,
        order: Order,
        draft: &FeaturedItemDraft,
    ) -> Result<FeaturedItem, GatewayError> {
        let variant = variant_column(scope)?;
        FeaturedItemRepo::create(&self.pool, variant, order, draft)
            .await
            .map_err(backend)
    }

    async fn update(
        &self,
        id: DbId,
        patch: PlacementPatch<'_, FeaturedItemDraft>,
    ) -> Result<FeaturedItem, GatewayError> {
        let row = FeaturedItemRepo::update(&self.pool, id, patch.order, patch.draft)
            .await
            .map_err(backend)?;
        found(row, "FeaturedItem", id)
    }

    async fn delete(&self, id: DbId) -> Result<(), GatewayError> {
        let removed = FeaturedItemRepo::delete(&self.pool, id)
            .await
            .map_err(backend)?;
        deleted(removed, "FeaturedItem", id)
    }
}
