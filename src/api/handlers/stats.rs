//! Handler for link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::link::LinkResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns a link with its click count.
///
/// # Endpoint
///
/// `GET {prefix}/stats/{code}`
///
/// Reading stats does not count as a click.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<LinkResponse>, AppError> {
    let link = state.link_service.stats(&code).await?;
    let short_url = state.link_service.short_url(&link.short_code);

    Ok(Json(LinkResponse::new(link, short_url)))
}
