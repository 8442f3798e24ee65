#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use axum::extract::Request;
    use axum::middleware::{self, Next};
    use axum::response::{IntoResponse, Redirect, Response};
    use axum_extra::extract::CookieJar;
    use leptos::logging::log;
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use tower_http::compression::{CompressionLayer, CompressionLevel};
    use tower_http::services::ServeDir;
    use ttpu_crm_dashboard::app::{App, shell};
    use ttpu_crm_dashboard::core::api::token_store::AUTH_MARKER_COOKIE;
    use ttpu_crm_dashboard::core::config::Config;

    /// Coarse session guard, mirroring the marker cookie the browser sets on
    /// login. Presence only; the API's 401 path is the real authority.
    async fn session_guard(jar: CookieJar, request: Request, next: Next) -> Response {
        let has_session = jar.get(AUTH_MARKER_COOKIE).is_some();
        let path = request.uri().path();

        if has_session && path == "/login" {
            return Redirect::to("/dashboard").into_response();
        }
        if !has_session && (path == "/dashboard" || path.starts_with("/dashboard/")) {
            return Redirect::to("/login").into_response();
        }

        next.run(request).await
    }

    // Load .env file (if exists)
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = Config::from_env();
    tracing::info!("Backend API: {}", config.api_url);

    // Load configuration from Cargo.toml [package.metadata.leptos]
    // Can be overridden via LEPTOS_SITE_ADDR env var for Docker/K8s
    let conf = get_configuration(None).unwrap();
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    // Generate the list of routes in the Leptos App
    let routes = generate_route_list(App);

    // Serve pre-compressed .br/.gz bundles from /pkg when present
    let pkg_service = ServeDir::new(format!("{}/pkg", leptos_options.site_root))
        .precompressed_br()
        .precompressed_gzip();

    let app = Router::new()
        .nest_service("/pkg", pkg_service)
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(middleware::from_fn(session_guard))
        .layer(
            CompressionLayer::new()
                .br(true)
                .gzip(true)
                .quality(CompressionLevel::Best),
        )
        .with_state(leptos_options);

    log!("listening on http://{}", &addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app.into_make_service())
        .await
        .unwrap();
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for the hydrate() entry point instead
}
