use merch_core::placement::{GatewayError, PlacementGateway, PlacementPatch, Scope, ScopeKind};
use merch_core::types::{DbId, Order};
use sqlx::PgPool;

use crate::models::homepage_slot::{HomepageCategorySlot, HomepageSlotDraft};
use crate::repositories::HomepageSlotRepo;

use super::{backend, deleted, expect_kind, found};

/// The fixed-size homepage category grid. `order` is the slot index.
#[derive(Clone)]
pub struct HomepageSlotGateway {
    pool: PgPool,
}

impl HomepageSlotGateway {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl PlacementGateway for HomepageSlotGateway {
    type Entity = HomepageCategorySlot;
    type Draft = HomepageSlotDraft;

    async fn list(&self, scope: &Scope) -> Result<Vec<HomepageCategorySlot>, GatewayError> {
        expect_kind(scope, ScopeKind::HomepageCategorySlot)?;
        HomepageSlotRepo::list(&self.pool)
            .await
            .map_err(backend)
    }

    async fn create(
        &self,
        scope: &Scope,
        order: Order,
        draft: &HomepageSlotDraft,
    ) -> Result<HomepageCategorySlot, GatewayError> {
        expect_kind(scope, ScopeKind::HomepageCategorySlot)?;
        HomepageSlotRepo::create(&self.pool, order, draft)
            .await
            .map_err(backend)
    }

    async fn update(
        &self,
        id: DbId,
        patch: PlacementPatch<'_, HomepageSlotDraft>,
    ) -> Result<HomepageCategorySlot, GatewayError> {
        let row = HomepageSlotRepo::update(&self.pool, id, patch.order, patch.draft)
            .await
            .map_err(backend)?;
        found(row, "HomepageCategorySlot", id)
    }

    async fn delete(&self, id: DbId) -> Result<(), GatewayError> {
        let removed = HomepageSlotRepo::delete(&self.pool, id)
            .await
            .map_err(backend)?;
        deleted(removed, "HomepageCategorySlot", id)
    }
}
