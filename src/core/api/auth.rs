//! Authentication endpoints.
//!
//! Login persists the credential pair through the token store; `me()` rides
//! the normal executor (including the refresh protocol); logout bypasses the
//! 401 handling entirely, because a 401 on logout only means the session was
//! already gone.

use serde::{Deserialize, Serialize};

use super::client::{self, Method};
use super::error::{ApiResult, shape_error};
use super::token_store;

/// Staff user as served by `GET /api/v1/auth/me`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub role: UserRole,
}

impl User {
    /// Display name: first/last name when present, email otherwise.
    pub fn display_name(&self) -> String {
        let name = format!("{} {}", self.first_name, self.last_name);
        let name = name.trim();
        if name.is_empty() {
            self.email.clone()
        } else {
            name.to_string()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[display("Admin")]
    Admin,
    #[display("Viewer")]
    Viewer,
}

/// Token pair returned by a successful login.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access: String,
    pub refresh: String,
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Outcome of a logout attempt. Local session state is cleared regardless;
/// `error` reports why the backend call itself did not succeed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoutResult {
    pub success: bool,
    pub error: Option<String>,
}

/// `POST /api/v1/auth/login`; on success the credential pair is persisted
/// before the response is handed back.
pub async fn login(email: &str, password: &str) -> ApiResult<LoginResponse> {
    let response: ApiResult<LoginResponse> =
        client::post("/api/v1/auth/login", &LoginRequest { email, password }).await;
    if let Ok(tokens) = &response {
        token_store::persist(&tokens.access, &tokens.refresh);
    }
    response
}

/// `GET /api/v1/auth/me`.
pub async fn me() -> ApiResult<User> {
    client::get("/api/v1/auth/me").await
}

/// `POST /api/v1/auth/logout`, best effort. The token store is cleared on
/// every path, network failure included, so the browser session always ends.
pub async fn logout() -> LogoutResult {
    let outcome = client::send(Method::Post, "/api/v1/auth/logout", None).await;

    let result = match outcome {
        Ok(response) if response.status == 401 || response.is_success() => LogoutResult {
            success: true,
            error: None,
        },
        Ok(response) => LogoutResult {
            success: false,
            error: Some(
                shape_error(response.status, &response.status_text, &response.body).to_string(),
            ),
        },
        Err(err) => LogoutResult {
            success: false,
            error: Some(err.to_string()),
        },
    };

    token_store::clear();
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_deserializes_wire_shape() {
        let json = r#"{
            "id": "7f1c",
            "email": "admin@crm.ttpu.uz",
            "first_name": "Aziza",
            "last_name": "Karimova",
            "role": "admin"
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.role, UserRole::Admin);
        assert_eq!(user.display_name(), "Aziza Karimova");
    }

    #[test]
    fn test_user_display_name_falls_back_to_email() {
        let json = r#"{"id": "1", "email": "viewer@x.uz", "role": "viewer"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.display_name(), "viewer@x.uz");
    }

    #[test]
    fn test_role_labels() {
        assert_eq!(UserRole::Admin.to_string(), "Admin");
        assert_eq!(UserRole::Viewer.to_string(), "Viewer");
    }

    #[test]
    fn test_login_response_decodes() {
        let tokens: LoginResponse =
            serde_json::from_str(r#"{"access": "A1", "refresh": "R1"}"#).unwrap();
        assert_eq!(tokens.access, "A1");
        assert_eq!(tokens.refresh, "R1");
    }
}
