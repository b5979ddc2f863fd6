use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::pages;
use crate::middleware::guard_middleware;

/// Builds the portal router. Every request passes the guard before any page
/// logic runs; paths are free-form (locale and tenant prefixes vary), so one
/// fallback handler dispatches whatever the guard allows.
pub fn app() -> Router {
    Router::new()
        .fallback(pages::dispatch)
        .layer(axum::middleware::from_fn(guard_middleware))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
