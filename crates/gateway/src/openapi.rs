//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::handlers::status_handler::StatusClassification;
use domain::{
    AuthProvider, AuthSettingsUpdateInput, EnvironmentCreateInput, ErrorCode, ExceptionKind,
    GeneralSettingsUpdateInput, SignUpInput, Violation, ViolationKind, Violations,
};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::auth_handler::validate_signup,
        crate::handlers::environment_handler::validate_create,
        crate::handlers::environment_handler::validate_auth_settings,
        crate::handlers::environment_handler::validate_general_settings,
        crate::handlers::status_handler::classify_status,
    ),
    components(
        schemas(
            SignUpInput,
            EnvironmentCreateInput,
            AuthSettingsUpdateInput,
            GeneralSettingsUpdateInput,
            AuthProvider,
            Violation,
            ViolationKind,
            Violations,
            ErrorCode,
            ExceptionKind,
            StatusClassification,
        )
    ),
    tags(
        (name = "Authentication", description = "Sign-up input validation"),
        (name = "Environments", description = "Environment input validation"),
        (name = "Errors", description = "Status code classification"),
    )
)]
pub struct ApiDoc;
