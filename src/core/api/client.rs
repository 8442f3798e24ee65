//! Request executor.
//!
//! One logical API call: bearer header injection, cookies always included,
//! defensive JSON decoding, canonical error shaping, and the 401 →
//! refresh → single replay protocol. The replay is an explicit bounded
//! loop over `Attempt` rather than recursion with a flag, so the
//! at-most-one-retry property is visible in the control flow.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::{ApiError, ApiResult, shape_error};
use super::refresh::refresh_access_token;
use super::token_store;

/// HTTP methods used by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Method {
    #[display("GET")]
    Get,
    #[display("POST")]
    Post,
    #[display("PATCH")]
    Patch,
    #[display("DELETE")]
    Delete,
}

/// Replay state of one logical call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Attempt {
    Initial,
    Retried,
}

/// Status line and decoded body of one HTTP exchange.
pub(crate) struct RawResponse {
    pub status: u16,
    pub status_text: String,
    pub body: Value,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub async fn get<T: DeserializeOwned>(path: &str) -> ApiResult<T> {
    execute(Method::Get, path, None).await
}

pub async fn post<T: DeserializeOwned>(path: &str, body: &impl Serialize) -> ApiResult<T> {
    execute(Method::Post, path, Some(to_body(body)?)).await
}

pub async fn patch<T: DeserializeOwned>(path: &str, body: &impl Serialize) -> ApiResult<T> {
    execute(Method::Patch, path, Some(to_body(body)?)).await
}

pub async fn delete(path: &str) -> ApiResult<()> {
    // 204s have no body and some endpoints echo the deleted record; either
    // way the caller only cares that the call succeeded.
    let _: Value = execute(Method::Delete, path, None).await?;
    Ok(())
}

fn to_body(body: &impl Serialize) -> ApiResult<Value> {
    serde_json::to_value(body)
        .map_err(|e| ApiError::api("API_ERROR", format!("Unserializable request body: {e}")))
}

/// Perform one logical API call.
///
/// A 401 on the initial attempt hands control to the refresh coordinator;
/// on refresh success the call is replayed exactly once. A 401 on the
/// replay, or a failed refresh, tears the session down: the token store is
/// cleared and the browser is sent to the login route.
pub async fn execute<T: DeserializeOwned>(
    method: Method,
    path: &str,
    body: Option<Value>,
) -> ApiResult<T> {
    let mut attempt = Attempt::Initial;
    loop {
        // Network failures surface immediately; they are never retried here.
        let response = send(method, path, body.as_ref()).await?;

        if response.status == 401 {
            if attempt == Attempt::Initial && refresh_access_token().await {
                attempt = Attempt::Retried;
                continue;
            }
            token_store::clear();
            redirect_to_login();
            return Err(ApiError::Unauthorized);
        }

        if !response.is_success() {
            return Err(shape_error(
                response.status,
                &response.status_text,
                &response.body,
            ));
        }

        return decode(response.body);
    }
}

fn decode<T: DeserializeOwned>(body: Value) -> ApiResult<T> {
    serde_json::from_value(body)
        .map_err(|e| ApiError::api("API_ERROR", format!("Unexpected response body: {e}")))
}

/// Malformed or empty bodies must never crash a caller: empty text decodes
/// to `null`, unparseable text to an empty object, and the error message
/// then falls back to the HTTP status text.
pub(crate) fn parse_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::Object(Default::default()))
}

/// One HTTP exchange, no retry logic. Crate-visible so the logout call can
/// bypass the 401 protocol (a 401 there just means "already logged out").
#[cfg(not(feature = "ssr"))]
pub(crate) async fn send(
    method: Method,
    path: &str,
    body: Option<&Value>,
) -> Result<RawResponse, ApiError> {
    use gloo_net::http::Request;

    let url = crate::core::config::endpoint_url(path);
    let mut builder = match method {
        Method::Get => Request::get(&url),
        Method::Post => Request::post(&url),
        Method::Patch => Request::patch(&url),
        Method::Delete => Request::delete(&url),
    }
    // The backend also keeps refresh state in an HttpOnly cookie, so
    // credentials ride along with every call.
    .credentials(web_sys::RequestCredentials::Include);

    if let Some(token) = token_store::access_token() {
        builder = builder.header("Authorization", &format!("Bearer {token}"));
    }

    let request = match body {
        Some(json) => builder.json(json),
        None => builder.header("Content-Type", "application/json").build(),
    }
    .map_err(|e| ApiError::Network(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let status = response.status();
    let status_text = response.status_text();
    let text = response.text().await.unwrap_or_default();

    Ok(RawResponse {
        status,
        status_text,
        body: parse_body(&text),
    })
}

#[cfg(feature = "ssr")]
pub(crate) async fn send(
    method: Method,
    path: &str,
    body: Option<&Value>,
) -> Result<RawResponse, ApiError> {
    let _ = (method, path, body);
    Err(ApiError::Network(
        "API client is only available in the browser".to_string(),
    ))
}

/// One-time redirect to the login route once a session is irrecoverable.
#[cfg(not(feature = "ssr"))]
pub(crate) fn redirect_to_login() {
    if let Some(window) = web_sys::window() {
        let location = window.location();
        let on_login = location.pathname().map(|p| p == "/login").unwrap_or(false);
        if !on_login {
            let _ = location.replace("/login");
        }
    }
}

#[cfg(feature = "ssr")]
pub(crate) fn redirect_to_login() {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_method_display() {
        assert_eq!(Method::Get.to_string(), "GET");
        assert_eq!(Method::Patch.to_string(), "PATCH");
    }

    #[test]
    fn test_parse_body_valid_json() {
        assert_eq!(parse_body(r#"{"a": 1}"#), json!({ "a": 1 }));
        assert_eq!(parse_body("[1, 2]"), json!([1, 2]));
    }

    #[test]
    fn test_parse_body_empty_is_null() {
        assert_eq!(parse_body(""), Value::Null);
        assert_eq!(parse_body("   \n"), Value::Null);
    }

    #[test]
    fn test_parse_body_malformed_degrades_to_empty_object() {
        assert_eq!(parse_body("<html>502</html>"), json!({}));
    }

    #[test]
    fn test_decode_unit_from_empty_body() {
        // DELETE returns 204 with no body; `()` must decode from null.
        let decoded: ApiResult<()> = decode(Value::Null);
        assert!(decoded.is_ok());
    }

    #[test]
    fn test_decode_mismatch_is_api_error() {
        let decoded: ApiResult<Vec<String>> = decode(json!({ "not": "a list" }));
        let err = decoded.unwrap_err();
        assert_eq!(err.code(), "API_ERROR");
    }

    #[test]
    fn test_raw_response_success_range() {
        let ok = RawResponse {
            status: 204,
            status_text: String::new(),
            body: Value::Null,
        };
        assert!(ok.is_success());
        let not_ok = RawResponse {
            status: 302,
            status_text: String::new(),
            body: Value::Null,
        };
        assert!(!not_ok.is_success());
    }
}
