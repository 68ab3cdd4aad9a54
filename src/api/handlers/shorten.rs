//! Handler for link shortening endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode};
use validator::Validate;

use crate::api::dto::link::LinkResponse;
use crate::api::dto::shorten::ShortenRequest;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for a long URL, or returns the existing one.
///
/// # Endpoint
///
/// `POST {prefix}/shorten`
///
/// # Request Body
///
/// ```json
/// { "longUrl": "https://example.com" }
/// ```
///
/// # Response
///
/// `201 Created` with the link view. Submitting a URL that was already
/// shortened returns the stored link, click count included.
///
/// # Errors
///
/// Returns 400 Bad Request if the body is malformed, has unknown fields, or
/// the URL is not a well-formed absolute URL.
/// Returns 500 if no free short code could be allocated.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<LinkResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let link = state.link_service.shorten(payload.long_url).await?;
    let short_url = state.link_service.short_url(&link.short_code);

    Ok((StatusCode::CREATED, Json(LinkResponse::new(link, short_url))))
}
