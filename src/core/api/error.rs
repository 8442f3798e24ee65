//! Canonical API error shape.
//!
//! The backend has grown three historical error envelopes:
//! `{"error": {"code", "message"}}`, DRF's `{"detail": "..."}`, and
//! field-keyed validation maps (`{"email": ["required"]}`). All of them are
//! reconciled here into one `ApiError`, so pages never inspect raw bodies.

use serde_json::Value;

/// Result of every request executor call. `Result` makes the
/// one-of-data-or-error invariant structural.
pub type ApiResult<T> = Result<T, ApiError>;

/// Uniform client-side error for all API calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The call never reached the server or was aborted. Not retried.
    #[error("{0}")]
    Network(String),

    /// Session invalid and unrecoverable after one refresh attempt. Local
    /// session state is cleared before this is returned.
    #[error("Session expired")]
    Unauthorized,

    /// Structured or validation error from the backend.
    #[error("{message}")]
    Api { code: String, message: String },
}

impl ApiError {
    /// Stable machine-readable code, mirroring the wire-level taxonomy.
    pub fn code(&self) -> &str {
        match self {
            ApiError::Network(_) => "NETWORK_ERROR",
            ApiError::Unauthorized => "UNAUTHORIZED",
            ApiError::Api { code, .. } => code,
        }
    }

    pub fn api(code: impl Into<String>, message: impl Into<String>) -> Self {
        ApiError::Api {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Build an `ApiError` from a non-2xx response body.
///
/// Preference order: server-supplied `error` object, then `detail`, then
/// concatenated field validation errors, then the HTTP status text.
pub fn shape_error(status: u16, status_text: &str, body: &Value) -> ApiError {
    if let Some(envelope) = body.get("error") {
        let code = envelope
            .get("code")
            .and_then(Value::as_str)
            .unwrap_or("API_ERROR")
            .to_string();
        let message = envelope
            .get("message")
            .map(join_messages)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| fallback_status(status, status_text));
        return ApiError::Api { code, message };
    }

    let mut message = body
        .get("detail")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    if message.is_empty() {
        if let Some(map) = body.as_object() {
            message = map
                .iter()
                .filter(|(key, _)| key.as_str() != "error")
                .map(|(key, val)| format!("{}: {}", key, join_messages(val)))
                .collect::<Vec<_>>()
                .join("; ");
        }
    }

    if message.is_empty() {
        message = fallback_status(status, status_text);
    }

    ApiError::api("API_ERROR", message)
}

/// The wire allows `message` to be a string or an array of strings; arrays
/// are joined with ", " for display.
pub fn join_messages(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}

fn fallback_status(status: u16, status_text: &str) -> String {
    if status_text.is_empty() {
        format!("HTTP {}", status)
    } else {
        status_text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_codes() {
        assert_eq!(ApiError::Network("down".into()).code(), "NETWORK_ERROR");
        assert_eq!(ApiError::Unauthorized.code(), "UNAUTHORIZED");
        assert_eq!(ApiError::api("THROTTLED", "slow down").code(), "THROTTLED");
    }

    #[test]
    fn test_shape_error_prefers_server_envelope() {
        let body = json!({
            "error": { "code": "INVALID_CREDENTIALS", "message": "Bad login" },
            "detail": "ignored"
        });
        let err = shape_error(400, "Bad Request", &body);
        assert_eq!(err.code(), "INVALID_CREDENTIALS");
        assert_eq!(err.to_string(), "Bad login");
    }

    #[test]
    fn test_shape_error_joins_array_messages() {
        let body = json!({
            "error": { "code": "VALIDATION", "message": ["too short", "too simple"] }
        });
        let err = shape_error(400, "Bad Request", &body);
        assert_eq!(err.to_string(), "too short, too simple");
    }

    #[test]
    fn test_shape_error_falls_back_to_detail() {
        let body = json!({ "detail": "Not found." });
        let err = shape_error(404, "Not Found", &body);
        assert_eq!(err.code(), "API_ERROR");
        assert_eq!(err.to_string(), "Not found.");
    }

    #[test]
    fn test_shape_error_concatenates_field_errors() {
        let body = json!({
            "email": ["This field is required."],
            "password": ["Too short.", "Too common."]
        });
        let err = shape_error(400, "Bad Request", &body);
        let message = err.to_string();
        assert!(message.contains("email: This field is required."));
        assert!(message.contains("password: Too short., Too common."));
        assert!(message.contains("; "));
    }

    #[test]
    fn test_shape_error_skips_empty_bodies() {
        let err = shape_error(502, "Bad Gateway", &json!({}));
        assert_eq!(err.to_string(), "Bad Gateway");

        // Malformed bodies degrade to null upstream; status text still wins.
        let err = shape_error(500, "", &Value::Null);
        assert_eq!(err.to_string(), "HTTP 500");
    }

    #[test]
    fn test_shape_error_envelope_without_message() {
        let body = json!({ "error": { "code": "ODD" } });
        let err = shape_error(418, "I'm a teapot", &body);
        assert_eq!(err.code(), "ODD");
        assert_eq!(err.to_string(), "I'm a teapot");
    }

    #[test]
    fn test_join_messages_non_string_values() {
        assert_eq!(join_messages(&json!(42)), "42");
        assert_eq!(join_messages(&json!(["a", 1])), "a, 1");
    }
}
