//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Leptos SSR renders the dashboard and login pages; the compiled WASM/CSS
//! bundle is served from the site root's `pkg` directory. Extension-less
//! paths redirect to the `.html` routes the client navigates between.
//!
//! Leptos options come from the `LEPTOS_*` environment (`LEPTOS_OUTPUT_NAME`,
//! `LEPTOS_SITE_ROOT`, `LEPTOS_SITE_PKG_DIR`, `LEPTOS_SITE_ADDR`). `cargo
//! leptos` exports them from the workspace's `[package.metadata.leptos]`;
//! when running the binary directly, set them in `.env`.


use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Plain HTTP routes that sit beside the Leptos pages.
fn base_routes() -> Router {
    Router::new()
        .route("/login", get(redirect_login))
        .route("/dashboard", get(redirect_dashboard))
        .route("/healthz", get(healthz))
}

async fn redirect_login() -> Redirect {
    Redirect::permanent("/login.html")
}

async fn redirect_dashboard() -> Redirect {
    Redirect::permanent("/dashboard.html")
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Full application router: base routes, Leptos SSR pages, static bundle.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing
/// `LEPTOS_*` environment and no `[package.metadata.leptos]` section).
pub fn app() -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(dashboard::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || dashboard::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(base_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(TraceLayer::new_for_http()))
}
