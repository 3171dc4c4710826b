//! Environment inputs: creation and settings updates.

use std::fmt;

use serde::Serialize;
use validator::Validate;

use crate::validation::{ClosedEnum, Field, Record, Schema};

/// Authentication providers an environment can be configured with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthProvider {
    #[default]
    EmailAndPassword,
    MagicLink,
    Google,
    Github,
}

impl ClosedEnum for AuthProvider {
    const VARIANTS: &'static [Self] = &[
        AuthProvider::EmailAndPassword,
        AuthProvider::MagicLink,
        AuthProvider::Google,
        AuthProvider::Github,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            AuthProvider::EmailAndPassword => "EMAIL_AND_PASSWORD",
            AuthProvider::MagicLink => "MAGIC_LINK",
            AuthProvider::Google => "GOOGLE",
            AuthProvider::Github => "GITHUB",
        }
    }
}

impl fmt::Display for AuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// New environment within a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentCreateInput {
    /// Environment name (max 25 characters)
    #[validate(custom(function = "crate::validation::rules::name_length"))]
    #[cfg_attr(feature = "openapi", schema(example = "production", max_length = 25))]
    pub name: String,
    /// Public URL of the application using this environment
    #[serde(rename = "appURL")]
    #[validate(custom(function = "crate::validation::rules::app_url"))]
    #[cfg_attr(feature = "openapi", schema(example = "https://app.example.com"))]
    pub app_url: String,
    /// Owning project
    pub project_id: String,
}

impl Schema for EnvironmentCreateInput {
    const FIELDS: &'static [Field] = &[
        Field::new("name", "name"),
        Field::new("appURL", "app_url"),
        Field::new("projectId", "project_id"),
    ];

    fn extract(record: &mut Record<'_>) -> Self {
        Self {
            name: record.required_string("name"),
            app_url: record.required_string("appURL"),
            project_id: record.required_string("projectId"),
        }
    }
}

/// Token lifetime and provider settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct AuthSettingsUpdateInput {
    #[cfg_attr(feature = "openapi", schema(example = "1h"))]
    pub token_expiration: String,
    #[cfg_attr(feature = "openapi", schema(example = "7d"))]
    pub refresh_token_expiration: Option<String>,
    pub auth_provider: AuthProvider,
}

impl Schema for AuthSettingsUpdateInput {
    const FIELDS: &'static [Field] = &[
        Field::new("tokenExpiration", "token_expiration"),
        Field::new("refreshTokenExpiration", "refresh_token_expiration"),
        Field::new("authProvider", "auth_provider"),
    ];

    fn extract(record: &mut Record<'_>) -> Self {
        Self {
            token_expiration: record.required_string("tokenExpiration"),
            refresh_token_expiration: record.nullable_string("refreshTokenExpiration"),
            auth_provider: record.required_enum("authProvider"),
        }
    }
}

/// General environment settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct GeneralSettingsUpdateInput {
    #[validate(custom(function = "crate::validation::rules::name_length"))]
    #[cfg_attr(feature = "openapi", schema(example = "staging", max_length = 25))]
    pub name: String,
}

impl Schema for GeneralSettingsUpdateInput {
    const FIELDS: &'static [Field] = &[Field::new("name", "name")];

    fn extract(record: &mut Record<'_>) -> Self {
        Self {
            name: record.required_string("name"),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::constants::MAX_NAME_LENGTH;
    use crate::validation::ViolationKind;

    fn name_of(len: usize) -> String {
        "n".repeat(len)
    }

    #[test]
    fn test_create_environment() {
        let input = EnvironmentCreateInput::parse(&json!({
            "name": "production",
            "appURL": "https://app.example.com",
            "projectId": "proj_123",
        }))
        .unwrap();

        assert_eq!(input.name, "production");
        assert_eq!(input.app_url, "https://app.example.com");
        assert_eq!(input.project_id, "proj_123");
    }

    #[test]
    fn test_create_environment_serializes_wire_names() {
        let input = EnvironmentCreateInput::parse(&json!({
            "name": "dev",
            "appURL": "http://localhost:3000",
            "projectId": "p",
        }))
        .unwrap();
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            json!({ "name": "dev", "appURL": "http://localhost:3000", "projectId": "p" })
        );
    }

    #[test]
    fn test_name_length_boundary() {
        let ok = json!({ "name": name_of(MAX_NAME_LENGTH) });
        assert!(GeneralSettingsUpdateInput::parse(&ok).is_ok());

        let too_long = json!({ "name": name_of(MAX_NAME_LENGTH + 1) });
        let err = GeneralSettingsUpdateInput::parse(&too_long).unwrap_err();
        assert_eq!(err.first().field, "name");
        assert_eq!(err.first().kind, ViolationKind::MaxLength);
        assert_eq!(err.first().message, "Max length exceeded");
    }

    #[test]
    fn test_name_length_counts_utf16_units() {
        // 13 emoji are 26 code units
        let value = json!({ "name": "😀".repeat(13) });
        let err = GeneralSettingsUpdateInput::parse(&value).unwrap_err();
        assert_eq!(err.first().kind, ViolationKind::MaxLength);

        // 12 emoji and one letter are exactly 25
        let value = json!({ "name": format!("{}a", "😀".repeat(12)) });
        assert!(GeneralSettingsUpdateInput::parse(&value).is_ok());

        let value = json!({ "name": "é".repeat(MAX_NAME_LENGTH) });
        assert!(GeneralSettingsUpdateInput::parse(&value).is_ok());
    }

    #[test]
    fn test_create_environment_name_counts_utf16_units() {
        let err = EnvironmentCreateInput::parse(&json!({
            "name": "😀".repeat(13),
            "appURL": "https://app.example.com",
            "projectId": "p",
        }))
        .unwrap_err();
        assert_eq!(err.fields(), vec!["name"]);
        assert_eq!(err.first().kind, ViolationKind::MaxLength);
    }

    #[test]
    fn test_create_environment_reports_every_field() {
        let err = EnvironmentCreateInput::parse(&json!({
            "name": name_of(MAX_NAME_LENGTH + 1),
            "appURL": "not a url",
        }))
        .unwrap_err();

        let kinds: Vec<_> = err.iter().map(|v| (v.field.as_str(), v.kind)).collect();
        assert_eq!(
            kinds,
            vec![
                ("name", ViolationKind::MaxLength),
                ("appURL", ViolationKind::InvalidUrl),
                ("projectId", ViolationKind::Required),
            ]
        );
    }

    #[test]
    fn test_missing_name_is_required_not_max_length() {
        let err = GeneralSettingsUpdateInput::parse(&json!({})).unwrap_err();
        assert_eq!(err.len(), 1);
        assert_eq!(err.first().kind, ViolationKind::Required);
    }

    #[test]
    fn test_empty_project_id_accepted() {
        // Only presence is checked.
        let input = EnvironmentCreateInput::parse(&json!({
            "name": "dev",
            "appURL": "https://dev.example.com",
            "projectId": "",
        }));
        assert!(input.is_ok());
    }

    #[test]
    fn test_auth_settings() {
        let input = AuthSettingsUpdateInput::parse(&json!({
            "tokenExpiration": "1h",
            "refreshTokenExpiration": null,
            "authProvider": "MAGIC_LINK",
        }))
        .unwrap();

        assert_eq!(input.token_expiration, "1h");
        assert_eq!(input.refresh_token_expiration, None);
        assert_eq!(input.auth_provider, AuthProvider::MagicLink);
    }

    #[test]
    fn test_auth_settings_unknown_provider() {
        let err = AuthSettingsUpdateInput::parse(&json!({
            "tokenExpiration": "1h",
            "authProvider": "SAML",
        }))
        .unwrap_err();

        assert_eq!(err.first().field, "authProvider");
        assert_eq!(err.first().kind, ViolationKind::InvalidEnumValue);
        assert_eq!(
            err.first().message,
            "Invalid enum value. Expected 'EMAIL_AND_PASSWORD' | 'MAGIC_LINK' | 'GOOGLE' | 'GITHUB', received 'SAML'"
        );
    }

    #[test]
    fn test_auth_settings_required_fields() {
        let err = AuthSettingsUpdateInput::parse(&json!({})).unwrap_err();
        assert_eq!(err.fields(), vec!["tokenExpiration", "authProvider"]);
        assert!(err.iter().all(|v| v.kind == ViolationKind::Required));
    }

    #[test]
    fn test_provider_wire_names_match_serde() {
        for provider in AuthProvider::VARIANTS {
            assert_eq!(serde_json::to_value(provider).unwrap(), provider.as_str());
            assert_eq!(AuthProvider::from_wire(provider.as_str()), Some(*provider));
        }
    }

    #[test]
    fn test_non_object_input() {
        let err = GeneralSettingsUpdateInput::parse(&json!("staging")).unwrap_err();
        assert_eq!(err.first().kind, ViolationKind::InvalidType);
        assert_eq!(err.first().message, "Expected object, received string");
    }
}
