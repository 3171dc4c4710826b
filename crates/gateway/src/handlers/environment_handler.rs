//! Environment input handlers.

use axum::{response::Json, routing::post, Router};

use common::AppResult;
use domain::{AuthSettingsUpdateInput, EnvironmentCreateInput, GeneralSettingsUpdateInput};

use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// Create environment routes
pub fn environment_routes() -> Router<AppState> {
    Router::new()
        .route("/validate", post(validate_create))
        .route("/auth-settings/validate", post(validate_auth_settings))
        .route("/general-settings/validate", post(validate_general_settings))
}

/// Validate an environment creation payload
#[utoipa::path(
    post,
    path = "/environments/validate",
    tag = "Environments",
    request_body = EnvironmentCreateInput,
    responses(
        (status = 200, description = "Normalized environment input", body = EnvironmentCreateInput),
        (status = 400, description = "Validation error")
    )
)]
pub async fn validate_create(
    ValidatedJson(payload): ValidatedJson<EnvironmentCreateInput>,
) -> AppResult<Json<EnvironmentCreateInput>> {
    Ok(Json(payload))
}

/// Validate an auth settings update
#[utoipa::path(
    post,
    path = "/environments/auth-settings/validate",
    tag = "Environments",
    request_body = AuthSettingsUpdateInput,
    responses(
        (status = 200, description = "Normalized auth settings", body = AuthSettingsUpdateInput),
        (status = 400, description = "Validation error")
    )
)]
pub async fn validate_auth_settings(
    ValidatedJson(payload): ValidatedJson<AuthSettingsUpdateInput>,
) -> AppResult<Json<AuthSettingsUpdateInput>> {
    tracing::debug!(provider = %payload.auth_provider, "Auth settings accepted");
    Ok(Json(payload))
}

/// Validate a general settings update
#[utoipa::path(
    post,
    path = "/environments/general-settings/validate",
    tag = "Environments",
    request_body = GeneralSettingsUpdateInput,
    responses(
        (status = 200, description = "Normalized general settings", body = GeneralSettingsUpdateInput),
        (status = 400, description = "Validation error")
    )
)]
pub async fn validate_general_settings(
    ValidatedJson(payload): ValidatedJson<GeneralSettingsUpdateInput>,
) -> AppResult<Json<GeneralSettingsUpdateInput>> {
    Ok(Json(payload))
}
