//! Authentication input handlers.

use axum::{response::Json, routing::post, Router};

use common::AppResult;
use domain::SignUpInput;

use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/signup/validate", post(validate_signup))
}

/// Validate a sign-up payload
#[utoipa::path(
    post,
    path = "/auth/signup/validate",
    tag = "Authentication",
    request_body = SignUpInput,
    responses(
        (status = 200, description = "Normalized sign-up input (password omitted)", body = SignUpInput),
        (status = 400, description = "Validation error")
    )
)]
pub async fn validate_signup(
    ValidatedJson(payload): ValidatedJson<SignUpInput>,
) -> AppResult<Json<SignUpInput>> {
    tracing::debug!(with_password = payload.password.is_some(), "Sign-up input accepted");
    Ok(Json(payload))
}
