use std::fmt;

use serde::Serialize;

use crate::types::DbId;

use super::{GatewayError, Scope};

/// Stage of a placement at which a gateway call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementStep {
    LoadScope,
    WriteIncoming,
    ReloadScope,
    RelocateOccupant,
    Remove,
    Prune,
}

impl fmt::Display for PlacementStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PlacementStep::LoadScope => "load_scope",
            PlacementStep::WriteIncoming => "write_incoming",
            PlacementStep::ReloadScope => "reload_scope",
            PlacementStep::RelocateOccupant => "relocate_occupant",
            PlacementStep::Remove => "remove",
            PlacementStep::Prune => "prune",
        };
        f.write_str(s)
    }
}

/// Where to pick up after the incoming entity was written but the displaced
/// occupant was not moved. Feed it to
/// [`Placer::resume_displacement`](super::Placer::resume_displacement).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResumePoint {
    pub scope: Scope,
    pub placed_id: DbId,
    pub occupant_id: DbId,
}

/// Placement-domain error type.
#[derive(Debug, thiserror::Error)]
pub enum PlacementError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("{scope} is out of bounds: {reason}")]
    OutOfBounds { scope: Scope, reason: String },

    #[error("Entity {id} not found in {scope}")]
    NotFound { scope: Scope, id: DbId },

    #[error("Persistence failed during {step}: {source}")]
    Io {
        step: PlacementStep,
        resume: Option<ResumePoint>,
        source: GatewayError,
    },
}

impl PlacementError {
    pub(crate) fn io(step: PlacementStep) -> impl FnOnce(GatewayError) -> Self {
        move |source| Self::Io {
            step,
            resume: None,
            source,
        }
    }
}

impl From<validator::ValidationErrors> for PlacementError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}
