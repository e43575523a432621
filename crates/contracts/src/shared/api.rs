//! Wire envelopes of the REST API.

use serde::Deserialize;

/// Response body that is either the payload itself or `{ "data": payload }`
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ApiEnvelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> ApiEnvelope<T> {
    pub fn into_inner(self) -> T {
        match self {
            ApiEnvelope::Wrapped { data } => data,
            ApiEnvelope::Bare(data) => data,
        }
    }
}

/// Message-bearing body used by the API for errors and acknowledgements
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiMessage {
    /// First non-empty of `message` and `error`
    pub fn text(&self) -> Option<&str> {
        [self.message.as_deref(), self.error.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|s| !s.is_empty())
    }
}

/// Extract a human-readable message from an error response body
pub fn message_from_body(body: &str) -> Option<String> {
    serde_json::from_str::<ApiMessage>(body)
        .ok()
        .and_then(|m| m.text().map(str::to_string))
}

/// `GET /health` response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub status: String,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status.is_empty() || self.status.eq_ignore_ascii_case("ok")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        id: String,
    }

    #[test]
    fn test_envelope_accepts_both_shapes() {
        let wrapped: ApiEnvelope<Vec<Item>> =
            serde_json::from_str(r#"{"success":true,"data":[{"id":"a"}]}"#).unwrap();
        let bare: ApiEnvelope<Vec<Item>> = serde_json::from_str(r#"[{"id":"a"}]"#).unwrap();
        assert_eq!(wrapped.into_inner(), bare.into_inner());
    }

    #[test]
    fn test_message_extraction() {
        assert_eq!(
            message_from_body(r#"{"message":"Batch already exists"}"#).as_deref(),
            Some("Batch already exists")
        );
        assert_eq!(
            message_from_body(r#"{"message":"  ","error":"Duplicate key"}"#).as_deref(),
            Some("Duplicate key")
        );
        assert_eq!(message_from_body("<html>502</html>"), None);
    }
}
