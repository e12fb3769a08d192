//! Persistence seam between the placement engine and storage.
//!
//! The engine never touches a database directly. Each entity kind supplies a
//! [`PlacementGateway`] whose `list` returns exactly the entities of one
//! scope; the engine re-derives ordering from [`Slotted::order`].

use std::future::Future;

use validator::Validate;

use crate::types::{DbId, Order};

use super::Scope;

/// An entity that occupies a display position.
pub trait Slotted {
    fn id(&self) -> DbId;

    fn order(&self) -> Order;

    /// Short human-readable name used in conflict prompts.
    fn label(&self) -> String;
}

/// A slotted entity that points at a category.
pub trait CategoryRef: Slotted {
    fn category_id(&self) -> DbId;
}

/// Partial update applied by [`PlacementGateway::update`].
///
/// `None` fields are left untouched by the gateway.
#[derive(Debug)]
pub struct PlacementPatch<'a, D> {
    pub order: Option<Order>,
    pub draft: Option<&'a D>,
}

impl<D> PlacementPatch<'_, D> {
    /// A patch that only moves the entity.
    pub fn order_only(order: Order) -> Self {
        Self {
            order: Some(order),
            draft: None,
        }
    }
}

// Manual impls: derive would require `D: Clone`.
impl<D> Clone for PlacementPatch<'_, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for PlacementPatch<'_, D> {}

/// Failure reported by a gateway.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    #[error("gateway cannot serve scope {0}")]
    UnsupportedScope(Scope),

    #[error("storage backend failure: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl GatewayError {
    pub fn backend<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Backend(Box::new(err))
    }
}

/// Per-kind CRUD used by the placement engine.
pub trait PlacementGateway: Send + Sync {
    /// Persisted entity as returned by storage.
    type Entity: Slotted + Clone + Send + Sync;

    /// Kind-specific payload supplied by the operator (title, link, ...).
    type Draft: Validate + Send + Sync;

    /// All entities in `scope`, in no particular order.
    fn list(
        &self,
        scope: &Scope,
    ) -> impl Future<Output = Result<Vec<Self::Entity>, GatewayError>> + Send;

    /// Insert a new entity at `order`.
    fn create(
        &self,
        scope: &Scope,
        order: Order,
        draft: &Self::Draft,
    ) -> impl Future<Output = Result<Self::Entity, GatewayError>> + Send;

    /// Apply `patch` to an existing entity.
    fn update(
        &self,
        id: DbId,
        patch: PlacementPatch<'_, Self::Draft>,
    ) -> impl Future<Output = Result<Self::Entity, GatewayError>> + Send;

    fn delete(&self, id: DbId) -> impl Future<Output = Result<(), GatewayError>> + Send;
}
