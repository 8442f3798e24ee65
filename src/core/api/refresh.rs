//! Refresh coordinator.
//!
//! Exchanges the refresh token for a new access token, with the guarantee
//! that at most one refresh is in flight no matter how many requests fault
//! with 401 at the same moment. All waiters observe the one outcome.

use std::rc::Rc;

use serde_json::Value;

use super::client::{self, Method};
use super::single_flight::SingleFlight;
use super::token_store;

thread_local! {
    static REFRESH_FLIGHT: Rc<SingleFlight<bool>> = Rc::new(SingleFlight::new());
}

/// Obtain a new access token. Returns `true` when the token store holds a
/// fresh, usable pair afterwards. Concurrent callers are collapsed onto the
/// same underlying attempt.
pub async fn refresh_access_token() -> bool {
    let flight = REFRESH_FLIGHT.with(Rc::clone);
    flight.run(perform_refresh).await
}

async fn perform_refresh() -> bool {
    // No refresh token, no network call.
    if token_store::refresh_token().is_none() {
        return false;
    }

    // The backend accepts the refresh token from its HttpOnly cookie; the
    // request body stays empty.
    let Ok(response) = client::send(Method::Post, "/api/v1/auth/refresh", None).await else {
        return false;
    };

    if !response.is_success() {
        token_store::clear();
        return false;
    }

    let access = response.body.get("access").and_then(Value::as_str);

    // Re-read at completion: a concurrent logout may have dropped the pair
    // while the refresh was on the wire.
    let current_refresh = token_store::refresh_token();

    match (access, current_refresh) {
        (Some(access), Some(refresh)) => {
            token_store::persist(access, &refresh);
            true
        }
        _ => {
            token_store::clear();
            false
        }
    }
}
