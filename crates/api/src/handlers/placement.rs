//! Shared plumbing between HTTP handlers and the placement engine.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use merch_core::placement::{
    ConflictDescriptor, Displacement, PlaceOutcome, PlacementError, PlacementGateway,
    PlacementRequest, Placer, Scope, ScopeKind, Variant,
};
use merch_core::types::{DbId, Order};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::query::ScopeParams;
use crate::response::DataResponse;

/// Request body for create/update endpoints: an optional explicit order plus
/// the kind-specific draft fields at the top level.
#[derive(Debug, Deserialize)]
pub struct PlaceBody<D> {
    pub order: Option<Order>,
    #[serde(flatten)]
    pub draft: D,
}

/// `data` payload of a successful placement.
#[derive(Debug, Serialize)]
pub struct PlacedResponse<E: Serialize> {
    pub entity: E,
    pub displaced: Option<Displacement>,
}

/// `data` payload of a `409` placement conflict.
#[derive(Debug, Serialize)]
pub struct ConflictResponse {
    pub conflict: ConflictDescriptor,
}

/// Run a placement and turn the outcome into a response.
///
/// Success is `201` for creates and `200` for updates; an unconfirmed
/// conflict is `409` carrying the [`ConflictDescriptor`].
pub async fn place<G>(
    gateway: &G,
    scope: Scope,
    id: Option<DbId>,
    body: PlaceBody<G::Draft>,
    confirm: bool,
) -> AppResult<Response>
where
    G: PlacementGateway,
    G::Entity: Serialize,
{
    let request = match id {
        Some(id) => PlacementRequest::update(id, body.order, body.draft),
        None => PlacementRequest::create(body.order, body.draft),
    };
    let outcome = Placer::new(gateway).place(&scope, &request, confirm).await?;

    let success = if id.is_some() {
        StatusCode::OK
    } else {
        StatusCode::CREATED
    };
    Ok(outcome_response(outcome, success))
}

pub fn outcome_response<E: Serialize>(outcome: PlaceOutcome<E>, success: StatusCode) -> Response {
    match outcome {
        PlaceOutcome::Placed { entity, displaced } => (
            success,
            Json(DataResponse {
                data: PlacedResponse { entity, displaced },
            }),
        )
            .into_response(),
        PlaceOutcome::Conflict(conflict) => (
            StatusCode::CONFLICT,
            Json(DataResponse {
                data: ConflictResponse { conflict },
            }),
        )
            .into_response(),
    }
}

/// Build a scope from a kind and optional partition query parameters.
pub fn resolve_scope(kind: ScopeKind, params: &ScopeParams) -> Result<Scope, PlacementError> {
    let variant = match (params.variant.as_deref(), params.section_id) {
        (None, None) => None,
        (Some(v), None) => Some(Variant::parse_featured(v)?),
        (None, Some(section_id)) => Some(Variant::Section(section_id)),
        (Some(_), Some(_)) => {
            return Err(PlacementError::Validation(
                "pass either variant or section_id, not both".to_string(),
            ))
        }
    };
    Scope::new(kind, variant)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
