use contracts::shared::api::HealthStatus;
use contracts::system::auth::{AuthCheckResponse, SignInRequest, SignInResponse};

use crate::shared::http::{self, Access, ApiError};

/// Sign in with email and password
pub async fn sign_in(email: String, password: String) -> Result<SignInResponse, ApiError> {
    let request = SignInRequest { email, password };
    match http::post_json("/signin", &request, Access::Public).await {
        Err(ApiError::Unauthorized) => Err(ApiError::Rejected(
            "Invalid email or password".to_string(),
        )),
        other => other,
    }
}

/// End the server session; local tokens are cleared by the caller regardless
pub async fn sign_out() -> Result<(), ApiError> {
    http::post_json::<_, serde_json::Value>("/signout", &serde_json::json!({}), Access::Public)
        .await
        .map(|_| ())
}

/// Whether the cookie or stored token still identifies a user
pub async fn check() -> Result<AuthCheckResponse, ApiError> {
    match http::get_json::<AuthCheckResponse>("/auth/check", Access::Public).await {
        Err(ApiError::Unauthorized) => Ok(AuthCheckResponse::default()),
        other => other,
    }
}

/// API liveness probe
pub async fn health() -> Result<HealthStatus, ApiError> {
    http::get_json("/health", Access::Public).await
}
