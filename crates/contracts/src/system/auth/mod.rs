use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// Sign-in answer. The token is optional: cookie-based sessions return none.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInResponse {
    #[serde(default, alias = "accessToken")]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<UserInfo>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(default, alias = "_id")]
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl UserInfo {
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.email)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthCheckResponse {
    #[serde(default, alias = "isAuthenticated")]
    pub authenticated: bool,
    #[serde(default)]
    pub user: Option<UserInfo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_in_response_variants() {
        let with_token: SignInResponse = serde_json::from_str(
            r#"{"accessToken":"abc","user":{"_id":"u1","email":"a@b.io","name":"Ann"}}"#,
        )
        .unwrap();
        assert_eq!(with_token.token.as_deref(), Some("abc"));
        assert_eq!(with_token.user.unwrap().display_name(), "Ann");

        let cookie_only: SignInResponse =
            serde_json::from_str(r#"{"message":"Signed in"}"#).unwrap();
        assert!(cookie_only.token.is_none());
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let user = UserInfo {
            id: "u1".into(),
            email: "ops@farm.io".into(),
            name: Some("  ".into()),
        };
        assert_eq!(user.display_name(), "ops@farm.io");
    }

    #[test]
    fn test_auth_check_alias() {
        let check: AuthCheckResponse =
            serde_json::from_str(r#"{"isAuthenticated":true}"#).unwrap();
        assert!(check.authenticated);
        assert!(check.user.is_none());
    }
}
