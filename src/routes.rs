//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `{prefix}/*`   - Link API, see [`crate::api::routes::routes`]
//! - `GET /health`  - Health check
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Any origin
//! - **Rate limiting** - Per-IP token bucket on link creation (optional)
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `api_prefix` - path the link API is mounted under (`/api/v1`); an empty
///   string or `/` mounts it at the root
/// - `rate_limit_enabled` - limit `POST /shorten` per client IP; the server
///   must then provide `ConnectInfo<SocketAddr>`
pub fn app_router(
    state: AppState,
    api_prefix: &str,
    rate_limit_enabled: bool,
) -> NormalizePath<Router> {
    let api_router = api::routes::routes(rate_limit_enabled);

    let prefix = api_prefix.trim_end_matches('/');
    let router = if prefix.is_empty() {
        Router::new().merge(api_router)
    } else {
        Router::new().nest(prefix, api_router)
    };

    let router = router
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(cors::layer())
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
