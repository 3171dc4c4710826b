//! Route configuration.

use axum::{extract::DefaultBodyLimit, Router};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers::{auth_routes, environment_routes, health_routes, status_routes};
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    let body_limit = state.config.body_limit_bytes;

    Router::new()
        .nest("/health", health_routes())
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/auth", auth_routes())
        .nest("/environments", environment_routes())
        .nest("/status-codes", status_routes())
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
