use merch_core::placement::{GatewayError, PlacementGateway, PlacementPatch, Scope, ScopeKind};
use merch_core::types::{DbId, Order};
use sqlx::PgPool;

use crate::models::hero_slide::{HeroSlide, HeroSlideDraft};
use crate::repositories::HeroSlideRepo;

use super::{backend, deleted, expect_kind, found};

/// Hero slides, a single unbounded ordering that includes inactive slides.
#[derive(Clone)]
pub struct HeroSlideGateway {
    pool: PgPool,
}

impl HeroSlideGateway {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl PlacementGateway for HeroSlideGateway {
    type Entity = HeroSlide;
    type Draft = HeroSlideDraft;

    async fn list(&self, scope: &Scope) -> Result<Vec<HeroSlide>, GatewayError> {
        expect_kind(scope, ScopeKind::HeroSlide)?;
        HeroSlideRepo::list(&self.pool, true)
            .await
            .map_err(backend)
    }

    async fn create(
        &self,
        scope: &Scope,
        order: Order,
        draft: &HeroSlideDraft,
    ) -> Result<HeroSlide, GatewayError> {
        expect_kind(scope, ScopeKind::HeroSlide)?;
        HeroSlideRepo::create(&self.pool, order, draft)
            .await
            .map_err(backend)
    }

    async fn update(
        &self,
        id: DbId,
        patch: PlacementPatch<'_, HeroSlideDraft>,
    ) -> Result<HeroSlide, GatewayError> {
        let row = HeroSlideRepo::update(&self.pool, id, patch.order, patch.draft)
            .await
            .map_err(backend)?;
        found(row, "HeroSlide", id)
    }

    async fn delete(&self, id: DbId) -> Result<(), GatewayError> {
        let removed = HeroSlideRepo::delete(&self.pool, id)
            .await
            .map_err(backend)?;
        deleted(removed, "HeroSlide", id)
    }
}
