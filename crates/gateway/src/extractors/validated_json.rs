//! Validated JSON extractor.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde_json::Value;

use common::AppError;
use domain::Schema;

/// JSON extractor that parses the payload against a [`Schema`].
///
/// The body is first read as untyped JSON, so a well-formed body with wrong
/// or missing fields is reported as field violations rather than a
/// deserialization error.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: Schema + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|e| AppError::malformed_body(e.body_text()))?;

        let parsed = T::parse(&value).map_err(|violations| {
            // Field names only; values may be secrets.
            tracing::debug!(fields = ?violations.fields(), "Rejected payload");
            AppError::Validation(violations)
        })?;

        Ok(ValidatedJson(parsed))
    }
}
