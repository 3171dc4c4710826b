//! Status classification lookup.

use axum::{extract::Path, response::Json, routing::get, Router};
use serde::Serialize;
use utoipa::ToSchema;

use common::{AppError, AppResult};
use domain::{classify, DomainError, ErrorCode, ExceptionKind, StatusCode};

use crate::state::AppState;

/// Exception kind raised for an error status.
#[derive(Debug, Serialize, ToSchema)]
pub struct StatusClassification {
    #[schema(example = 404)]
    pub status: u16,
    pub kind: ExceptionKind,
    #[schema(example = "NOT_FOUND")]
    pub code: &'static str,
    #[schema(example = "Not Found")]
    pub reason: &'static str,
}

impl From<ExceptionKind> for StatusClassification {
    fn from(kind: ExceptionKind) -> Self {
        Self {
            status: kind.status().as_u16(),
            kind,
            code: kind.code(),
            reason: kind.reason(),
        }
    }
}

/// Create status routes
pub fn status_routes() -> Router<AppState> {
    Router::new().route("/:code", get(classify_status))
}

/// Look up the exception kind for a status code
#[utoipa::path(
    get,
    path = "/status-codes/{code}",
    tag = "Errors",
    params(
        ("code" = u16, Path, description = "Numeric status code")
    ),
    responses(
        (status = 200, description = "Exception kind for the status", body = StatusClassification),
        (status = 404, description = "Unknown or non-error status code")
    )
)]
pub async fn classify_status(Path(code): Path<u16>) -> AppResult<Json<StatusClassification>> {
    let kind = StatusCode::try_from(code)
        .ok()
        .and_then(classify)
        .ok_or_else(|| not_classified(code))?;

    Ok(Json(StatusClassification::from(kind)))
}

fn not_classified(code: u16) -> AppError {
    DomainError::not_found(format!("Status code {} has no exception kind", code))
        .with_code(ErrorCode::ResourceNotFound)
        .into()
}
