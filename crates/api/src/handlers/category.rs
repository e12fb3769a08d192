//! Handlers for the `/admin/categories` resource.
//!
//! Categories are not placed themselves, but homepage slots point at them.
//! Creating or deleting a category prunes the homepage grid in the same
//! request.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use merch_core::error::CoreError;
use merch_core::placement::PrunePlan;
use merch_core::types::DbId;
use merch_db::models::category::CreateCategory;
use merch_db::repositories::CategoryRepo;
use serde::Serialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::handlers::homepage_slot::prune_stale_slots;
use crate::response::DataResponse;
use crate::state::AppState;

/// Result of a category delete: the homepage slots it released.
#[derive(Debug, Serialize)]
pub struct CategoryDeleted {
    pub id: DbId,
    pub pruned: PrunePlan,
}

/// GET /api/v1/admin/categories
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let categories = CategoryRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: categories }))
}

/// POST /api/v1/admin/categories
///
/// Inserts the category, then prunes homepage slots left pointing at
/// categories that no longer exist.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCategory>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let category = CategoryRepo::create(&state.pool, &input).await?;
    tracing::info!(category_id = category.id, "Created category");

    prune_stale_slots(&state.pool).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: category })))
}

/// DELETE /api/v1/admin/categories/{id}
///
/// Deletes the category, then prunes homepage slots that referenced it.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let removed = CategoryRepo::delete(&state.pool, id).await?;
    if !removed {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }));
    }
    tracing::info!(category_id = id, "Deleted category");

    let pruned = prune_stale_slots(&state.pool).await?;
    Ok(Json(DataResponse {
        data: CategoryDeleted { id, pruned },
    }))
}
