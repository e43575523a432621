//! HTTP client for the inventory REST API.
//!
//! Every request carries cookies and, when one is stored, a bearer token.
//! Session requests treat 401 as an expired session: tokens are cleared and
//! the browser goes to the sign-in page. Public requests only report it.

use crate::shared::api_utils::{current_path, redirect_to};
use crate::shared::config::app_config;
use crate::system::auth::storage;
use contracts::shared::api::{message_from_body, ApiEnvelope};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use web_sys::{FormData, RequestCredentials};

pub const SIGN_IN_PATH: &str = "/signin";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Your session has expired, please sign in again")]
    Unauthorized,
    /// 4xx other than 401, with the server's message
    #[error("{0}")]
    Rejected(String),
    #[error("{0}")]
    Server(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Unexpected response from server: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify a non-success status using the response body for the message
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = message_from_body(body);
        match status {
            401 => ApiError::Unauthorized,
            400..=499 => ApiError::Rejected(
                message.unwrap_or_else(|| format!("Request was rejected ({})", status)),
            ),
            500..=599 => ApiError::Server(
                message.unwrap_or_else(|| "Server error, please try again later".to_string()),
            ),
            _ => ApiError::Server(format!("Unexpected response status {}", status)),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

/// How a 401 answer is handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Session,
    Public,
}

fn authorized(builder: RequestBuilder) -> RequestBuilder {
    let builder = builder.credentials(RequestCredentials::Include);
    match storage::get_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

fn on_unauthorized(access: Access) {
    if access == Access::Session {
        storage::clear_tokens();
        if current_path() != SIGN_IN_PATH {
            redirect_to(SIGN_IN_PATH);
        }
    }
}

/// Turn a response into a typed value, accepting bare and `{data}` bodies
pub(crate) async fn read_json<T: DeserializeOwned>(
    response: Response,
    access: Access,
) -> Result<T, ApiError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !response.ok() {
        return Err(fail(status, &body, response.url(), access));
    }
    let body = if body.trim().is_empty() { "null" } else { body.as_str() };
    serde_json::from_str::<ApiEnvelope<T>>(body)
        .map(ApiEnvelope::into_inner)
        .map_err(|e| {
            log::error!("decode {} failed: {}", response.url(), e);
            ApiError::Decode(e.to_string())
        })
}

/// Check a response whose body is irrelevant on success
pub(crate) async fn read_empty(response: Response, access: Access) -> Result<(), ApiError> {
    if response.ok() {
        return Ok(());
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(fail(status, &body, response.url(), access))
}

pub(crate) fn fail(status: u16, body: &str, url: String, access: Access) -> ApiError {
    let error = ApiError::from_status(status, body);
    log::warn!("{} -> {}: {}", url, status, error);
    if error.is_unauthorized() {
        on_unauthorized(access);
    }
    error
}

pub(crate) async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
    builder.send().await.map_err(|e| {
        log::warn!("request failed: {}", e);
        ApiError::Network(e.to_string())
    })
}

pub(crate) async fn send_request(request: Result<Request, gloo_net::Error>) -> Result<Response, ApiError> {
    let request = request.map_err(|e| ApiError::Network(e.to_string()))?;
    request.send().await.map_err(|e| {
        log::warn!("request failed: {}", e);
        ApiError::Network(e.to_string())
    })
}

pub async fn get_json<T: DeserializeOwned>(path: &str, access: Access) -> Result<T, ApiError> {
    let url = app_config().api_url(path);
    log::debug!("GET {}", url);
    let response = send(authorized(Request::get(&url))).await?;
    read_json(response, access).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
    access: Access,
) -> Result<T, ApiError> {
    let url = app_config().api_url(path);
    log::debug!("POST {}", url);
    let response = send_request(authorized(Request::post(&url)).json(body)).await?;
    read_json(response, access).await
}

pub async fn put_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    let url = app_config().api_url(path);
    log::debug!("PUT {}", url);
    let response = send_request(authorized(Request::put(&url)).json(body)).await?;
    read_json(response, Access::Session).await
}

pub async fn delete(path: &str) -> Result<(), ApiError> {
    let url = app_config().api_url(path);
    log::debug!("DELETE {}", url);
    let response = send(authorized(Request::delete(&url))).await?;
    read_empty(response, Access::Session).await
}

/// Multipart POST; the browser sets the boundary header
pub async fn post_form<T: DeserializeOwned>(path: &str, form: &FormData) -> Result<T, ApiError> {
    let url = app_config().api_url(path);
    log::debug!("POST {} (multipart)", url);
    let response = send_request(authorized(Request::post(&url)).body(form.clone())).await?;
    read_json(response, Access::Session).await
}

pub async fn put_form<T: DeserializeOwned>(path: &str, form: &FormData) -> Result<T, ApiError> {
    let url = app_config().api_url(path);
    log::debug!("PUT {} (multipart)", url);
    let response = send_request(authorized(Request::put(&url)).body(form.clone())).await?;
    read_json(response, Access::Session).await
}

/// GET returning the raw response, for binary downloads
pub async fn get_raw(url: &str) -> Result<Response, ApiError> {
    log::debug!("GET {}", url);
    let response = send(authorized(Request::get(url))).await?;
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(fail(status, &body, url.to_string(), Access::Public))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert_eq!(ApiError::from_status(401, ""), ApiError::Unauthorized);
        assert_eq!(
            ApiError::from_status(409, r#"{"message":"Product ID already exists"}"#),
            ApiError::Rejected("Product ID already exists".into())
        );
        assert_eq!(
            ApiError::from_status(400, r#"{"error":"Invalid batch"}"#),
            ApiError::Rejected("Invalid batch".into())
        );
        assert_eq!(
            ApiError::from_status(404, "<html>not found</html>"),
            ApiError::Rejected("Request was rejected (404)".into())
        );
        assert_eq!(
            ApiError::from_status(503, ""),
            ApiError::Server("Server error, please try again later".into())
        );
        assert_eq!(
            ApiError::from_status(500, r#"{"message":"Database unavailable"}"#),
            ApiError::Server("Database unavailable".into())
        );
    }

    #[test]
    fn test_messages_shown_to_users() {
        assert_eq!(
            ApiError::Rejected("Batch number already used".into()).to_string(),
            "Batch number already used"
        );
        assert!(ApiError::Network("timeout".into())
            .to_string()
            .starts_with("Network error"));
        assert!(ApiError::Unauthorized.is_unauthorized());
        assert!(!ApiError::Server("x".into()).is_unauthorized());
    }
}
