use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use merch_core::error::CoreError;
use merch_core::placement::{GatewayError, PlacementError, PlacementStep, ResumePoint};
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`], [`PlacementError`] and database errors. Implements
/// [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `merch_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A placement-engine error.
    #[error(transparent)]
    Placement(#[from] PlacementError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Core(CoreError::Validation(errors.to_string()))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
            },

            // --- Placement errors ---
            AppError::Placement(placement) => match placement {
                PlacementError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                PlacementError::OutOfBounds { scope, reason } => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "OUT_OF_BOUNDS",
                    format!("{scope}: {reason}"),
                ),
                PlacementError::NotFound { scope, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{scope} entry with id {id} not found"),
                ),
                PlacementError::Io {
                    step,
                    resume,
                    source,
                } => return persistence_failure(*step, resume.as_ref(), source),
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

/// A gateway call failed mid-placement.
///
/// The body names the failed step and, when the incoming entity was already
/// written, the ids needed to finish via the resume endpoint.
fn persistence_failure(
    step: PlacementStep,
    resume: Option<&ResumePoint>,
    source: &GatewayError,
) -> Response {
    tracing::error!(%step, error = %source, "Placement persistence failure");

    let (status, code, message) = match source {
        GatewayError::NotFound { entity, id } => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            format!("{entity} with id {id} not found"),
        ),
        GatewayError::UnsupportedScope(_) | GatewayError::Backend(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "PERSISTENCE_ERROR",
            format!("Persistence failed during {step}"),
        ),
    };

    let body = json!({
        "error": message,
        "code": code,
        "step": step,
        "resume": resume,
    });

    (status, axum::Json(body)).into_response()
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique constraint violations (constraint name starting with `uq_`) map to 409.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            // PostgreSQL unique constraint violation: error code 23505
            if db_err.code().as_deref() == Some("23505") {
                let constraint = db_err.constraint().unwrap_or("unknown");
                if constraint.starts_with("uq_") {
                    return (
                        StatusCode::CONFLICT,
                        "CONFLICT",
                        format!("Duplicate value violates unique constraint: {constraint}"),
                    );
                }
            }
            tracing::error!(error = %db_err, "Database error");
            internal()
        }
        other => {
            tracing::error!(error = %other, "Database error");
            internal()
        }
    }
}
