//! Credential pair storage.
//!
//! Single owner of the access/refresh tokens in `localStorage` and of the
//! advisory `dashboard_auth` marker cookie the route guard reads. Every
//! write path goes through this module so the cookie and storage can never
//! disagree. Storage operations are local and treated as infallible;
//! absence reads as `None`.

/// localStorage key for the short-lived bearer token.
const ACCESS_TOKEN_KEY: &str = "access_token";
/// localStorage key for the refresh token.
const REFRESH_TOKEN_KEY: &str = "refresh_token";

/// Marker cookie checked by the server-side route guard. Presence only; it
/// carries no secret and is not a security boundary.
pub const AUTH_MARKER_COOKIE: &str = "dashboard_auth";

/// Marker lifetime: 7 days, independent of real token expiry. The marker is
/// advisory; the 401 path is what actually decides session validity.
const AUTH_MARKER_MAX_AGE_SECONDS: u64 = 60 * 60 * 24 * 7;

/// Cookie string that sets or clears the session marker.
fn marker_cookie(enabled: bool) -> String {
    if enabled {
        format!(
            "{}=1; path=/; max-age={}; samesite=lax",
            AUTH_MARKER_COOKIE, AUTH_MARKER_MAX_AGE_SECONDS
        )
    } else {
        format!("{}=; path=/; max-age=0; samesite=lax", AUTH_MARKER_COOKIE)
    }
}

/// Store both tokens and raise the session marker.
#[cfg(not(feature = "ssr"))]
pub fn persist(access_token: &str, refresh_token: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(ACCESS_TOKEN_KEY, access_token);
        let _ = storage.set_item(REFRESH_TOKEN_KEY, refresh_token);
    }
    set_marker(true);
}

/// Current access token, if any. Non-blocking, no network access.
#[cfg(not(feature = "ssr"))]
pub fn access_token() -> Option<String> {
    local_storage()?.get_item(ACCESS_TOKEN_KEY).ok()?
}

/// Current refresh token, if any.
#[cfg(not(feature = "ssr"))]
pub fn refresh_token() -> Option<String> {
    local_storage()?.get_item(REFRESH_TOKEN_KEY).ok()?
}

/// Erase both tokens and drop the session marker. Called on logout and on
/// a 401 that survives a refresh attempt.
#[cfg(not(feature = "ssr"))]
pub fn clear() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
        let _ = storage.remove_item(REFRESH_TOKEN_KEY);
    }
    set_marker(false);
}

#[cfg(not(feature = "ssr"))]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

#[cfg(not(feature = "ssr"))]
fn set_marker(enabled: bool) {
    use leptos::wasm_bindgen::JsCast;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(html_document) = document.dyn_ref::<web_sys::HtmlDocument>() {
        let _ = html_document.set_cookie(&marker_cookie(enabled));
    }
}

// Server-side stubs: there is no browser storage during SSR, and the server
// never authenticates against the API itself.

#[cfg(feature = "ssr")]
pub fn persist(_access_token: &str, _refresh_token: &str) {}

#[cfg(feature = "ssr")]
pub fn access_token() -> Option<String> {
    None
}

#[cfg(feature = "ssr")]
pub fn refresh_token() -> Option<String> {
    None
}

#[cfg(feature = "ssr")]
pub fn clear() {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_cookie_set() {
        let cookie = marker_cookie(true);
        assert!(cookie.starts_with("dashboard_auth=1;"));
        assert!(cookie.contains("max-age=604800"));
        assert!(cookie.contains("path=/"));
        assert!(cookie.contains("samesite=lax"));
    }

    #[test]
    fn test_marker_cookie_clear() {
        let cookie = marker_cookie(false);
        assert!(cookie.starts_with("dashboard_auth=;"));
        assert!(cookie.contains("max-age=0"));
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_server_stubs_read_empty() {
        persist("a", "r");
        assert_eq!(access_token(), None);
        assert_eq!(refresh_token(), None);
        clear();
    }
}
