//! Cross-origin resource sharing.

use tower_http::cors::{Any, CorsLayer};

/// Permissive CORS: any origin may call any endpoint.
///
/// The API carries no credentials.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
