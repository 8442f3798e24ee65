//! Application configuration.
//!
//! The browser bundle needs the backend base URL at compile time (the WASM
//! binary cannot read server environment variables), so `api_base()` is
//! resolved from `TTPU_CRM_API_URL` via `option_env!`. The server binary
//! loads its own settings with `Config::from_env()` after `dotenvy::dotenv()`.

/// Default backend origin used when `TTPU_CRM_API_URL` is not set at build
/// time. Matches the local Django dev server.
const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Base URL of the CRM REST API, without a trailing slash.
pub fn api_base() -> &'static str {
    option_env!("TTPU_CRM_API_URL").unwrap_or(DEFAULT_API_BASE)
}

/// Build a full request URL from a relative endpoint path.
pub fn endpoint_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Server-side configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Backend origin the server logs at startup so misconfigured
    /// deployments are visible immediately. The browser bundle carries its
    /// own compiled-in copy; the two must match.
    pub api_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            api_url: std::env::var("TTPU_CRM_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_BASE.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_base_has_no_trailing_slash() {
        assert!(!api_base().ends_with('/'));
    }

    #[test]
    fn test_endpoint_url_joins_path() {
        let url = endpoint_url("/api/v1/auth/me");
        assert!(url.starts_with(api_base()));
        assert!(url.ends_with("/api/v1/auth/me"));
    }

    #[test]
    fn test_config_from_env_returns_config() {
        // Values depend on the environment; just verify the defaults kick in
        // when nothing is set and the struct is usable.
        let config = Config::from_env();
        assert!(!config.api_url.is_empty());
    }

    #[test]
    fn test_config_clone() {
        let config = Config {
            api_url: "http://api.example".to_string(),
        };
        let cloned = config.clone();
        assert_eq!(config.api_url, cloned.api_url);
    }
}
