//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Serves the Leptos app with SSR, its compiled `/pkg` assets and a health
//! probe. Any path the app does not know is redirected to `/`; a known
//! route spelled with a trailing slash goes to its canonical path.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::{StatusCode, Uri};
use axum::response::Redirect;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use taste_client::routes::AppRoute;
use taste_client::util::auth::RedirectTarget;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ConfigError;

/// Leptos SSR routes + static assets + health probe.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app() -> Result<Router, ConfigError> {
    let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(taste_client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || taste_client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(Router::new()
        .route("/healthz", get(healthz))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .fallback(redirect_unmatched)
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

async fn redirect_unmatched(uri: Uri) -> Redirect {
    let target = redirect_target(uri.path());
    tracing::debug!(path = %uri.path(), to = %target, "redirecting unmatched path");
    Redirect::temporary(&target)
}

/// Canonical path for a known route, `/` for anything else.
pub(crate) fn redirect_target(path: &str) -> String {
    AppRoute::parse(path).map_or_else(|| RedirectTarget::Root.path().to_owned(), |route| route.path())
}
