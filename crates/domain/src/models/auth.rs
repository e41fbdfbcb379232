//! Login, signup and token refresh payloads

use serde::{Deserialize, Serialize};

/// Email/password credentials for login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Account email.
    pub email: String,
    /// Plain-text password, sent only over the login call.
    pub password: String,
}

impl Credentials {
    /// Creates credentials.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Minimal account summary returned alongside a token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    /// Account identifier.
    #[serde(default)]
    pub id: Option<String>,
    /// Account email.
    #[serde(default)]
    pub email: Option<String>,
    /// Display name.
    #[serde(default)]
    pub full_name: Option<String>,
    /// Granted roles.
    #[serde(default)]
    pub roles: Vec<String>,
}

/// Response of the login and signup endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Bearer token to persist.
    pub token: String,
    /// Account summary, when the server includes one.
    #[serde(default)]
    pub user: Option<UserSummary>,
}

/// Body of the refresh call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshRequest {
    /// The token being replaced.
    pub token: String,
}

/// Response of the refresh call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshResponse {
    /// Replacement token.
    pub token: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_auth_response_without_user() {
        let response: AuthResponse = serde_json::from_str(r#"{"token":"abc.def.ghi"}"#).unwrap();
        assert_eq!(response.token, "abc.def.ghi");
        assert!(response.user.is_none());
    }

    #[test]
    fn test_user_summary_camel_case() {
        let user: UserSummary =
            serde_json::from_str(r#"{"id":"u1","fullName":"Ada","roles":["student"]}"#).unwrap();
        assert_eq!(user.full_name.as_deref(), Some("Ada"));
        assert_eq!(user.roles, vec!["student".to_string()]);
    }
}
