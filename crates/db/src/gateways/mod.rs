//! PostgreSQL implementations of [`PlacementGateway`] for every placed kind.
//!
//! Each gateway owns a pool handle and checks that the scope it is asked
//! about belongs to its table before touching the database.
//!
//! [`PlacementGateway`]: merch_core::placement::PlacementGateway

pub mod featured_item;
pub mod hero_slide;
pub mod homepage_slot;
pub mod menu;

pub use featured_item::FeaturedItemGateway;
pub use hero_slide::HeroSlideGateway;
pub use homepage_slot::HomepageSlotGateway;
pub use menu::{MenuLinkGateway, MenuSectionGateway};

use merch_core::placement::{GatewayError, Scope, ScopeKind};
use merch_core::types::DbId;

fn expect_kind(scope: &Scope, kind: ScopeKind) -> Result<(), GatewayError> {
    if scope.kind() == kind {
        Ok(())
    } else {
        Err(GatewayError::UnsupportedScope(*scope))
    }
}

fn backend(err: sqlx::Error) -> GatewayError {
    tracing::debug!(error = %err, "Placement gateway query failed");
    GatewayError::backend(err)
}

fn found<T>(row: Option<T>, entity: &'static str, id: DbId) -> Result<T, GatewayError> {
    row.ok_or(GatewayError::NotFound { entity, id })
}

fn deleted(removed: bool, entity: &'static str, id: DbId) -> Result<(), GatewayError> {
    if removed {
        Ok(())
    } else {
        Err(GatewayError::NotFound { entity, id })
    }
}
