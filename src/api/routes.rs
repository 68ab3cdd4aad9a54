//! API route configuration.
//!
//! These routes are mounted under the configured API prefix by
//! [`crate::routes::app_router`].

use crate::api::handlers::{
    delete_link_handler, list_links_handler, redirect_handler, shorten_handler, stats_handler,
};
use crate::api::middleware::rate_limit;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All link routes.
///
/// # Endpoints
///
/// - `POST   /shorten`        - Create (or fetch) the short link for a long URL
/// - `GET    /stats/{code}`   - Link view with click count
/// - `GET    /urls/all`       - Every link, newest first
/// - `GET    /{code}`         - 302 redirect to the long URL, counts a click
/// - `DELETE /{code}`         - Delete a link
///
/// When `rate_limit_enabled` is set, `POST /shorten` is limited per client IP.
pub fn routes(rate_limit_enabled: bool) -> Router<AppState> {
    let mut shorten = Router::new().route("/shorten", post(shorten_handler));
    if rate_limit_enabled {
        shorten = shorten.layer(rate_limit::layer());
    }

    Router::new()
        .merge(shorten)
        .route("/stats/{code}", get(stats_handler))
        .route("/urls/all", get(list_links_handler))
        .route(
            "/{code}",
            get(redirect_handler).delete(delete_link_handler),
        )
}
