//! Session context.
//!
//! Reactive `{user, loading}` state plus login/logout, provided once at the
//! application root and consumed by the layout and every page. Hydration
//! ("who am I") runs at most once per context instance: the guard flips
//! before the first await, so re-entrant effects cannot issue a second
//! `me()` call.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::api::auth::{self, LogoutResult, User};
use crate::core::api::{ApiError, ApiResult};

#[derive(Clone, Copy)]
pub struct SessionContext {
    /// Current staff user; `None` until hydration succeeds.
    pub user: RwSignal<Option<User>>,
    /// True while hydrate/login/logout is on the wire.
    pub loading: RwSignal<bool>,
    hydrated: RwSignal<bool>,
}

impl SessionContext {
    /// Fetch the current user once per application load. Safe to call from
    /// re-running effects; only the first call reaches the network.
    pub fn hydrate(self) {
        if self.hydrated.get_untracked() {
            return;
        }
        self.hydrated.set(true);

        self.loading.set(true);
        spawn_local(async move {
            match auth::me().await {
                Ok(user) => self.user.set(Some(user)),
                // On UNAUTHORIZED the executor has already cleared the
                // session and redirected to /login; nothing more to do here.
                Err(_) => self.user.set(None),
            }
            self.loading.set(false);
        });
    }

    /// Authenticate and populate the user. Expected failures come back as a
    /// display message, never as a panic.
    pub async fn login(self, email: &str, password: &str) -> Result<(), String> {
        self.loading.set(true);
        let outcome = self.login_inner(email, password).await;
        self.loading.set(false);
        outcome
    }

    async fn login_inner(self, email: &str, password: &str) -> Result<(), String> {
        // Token persistence happens inside the login call itself.
        if let Err(err) = auth::login(email, password).await {
            return Err(login_error_message(&err));
        }

        let me: ApiResult<User> = auth::me().await;
        match me {
            Ok(user) => {
                self.user.set(Some(user));
                Ok(())
            }
            Err(err) => Err(err.to_string()),
        }
    }

    /// End the session. Best effort against the backend; local state is
    /// always cleared and the browser returns to the login route.
    pub async fn logout(self) -> LogoutResult {
        self.loading.set(true);
        let result = auth::logout().await;
        self.user.set(None);
        self.loading.set(false);
        redirect_to_login();
        result
    }
}

fn login_error_message(err: &ApiError) -> String {
    match err {
        // Wrong credentials surface as 401 on the login endpoint itself.
        ApiError::Unauthorized => "Login yoki parol noto'g'ri".to_string(),
        other => other.to_string(),
    }
}

#[cfg(not(feature = "ssr"))]
fn redirect_to_login() {
    if let Some(window) = leptos::web_sys::window() {
        let _ = window.location().replace("/login");
    }
}

#[cfg(feature = "ssr")]
fn redirect_to_login() {}

/// Provide the session context and start hydration on the client.
pub fn provide_session_context() -> SessionContext {
    let ctx = SessionContext {
        user: RwSignal::new(None),
        loading: RwSignal::new(true),
        hydrated: RwSignal::new(false),
    };

    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| {
        ctx.hydrate();
    });

    provide_context(ctx);
    ctx
}

pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}
