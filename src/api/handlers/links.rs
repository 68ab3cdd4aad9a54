//! Handlers for link listing and deletion.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::link::{DeleteResponse, LinkResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists every link, most recently created first.
///
/// # Endpoint
///
/// `GET {prefix}/urls/all`
///
/// The result is not paginated.
pub async fn list_links_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<LinkResponse>>, AppError> {
    let links = state.link_service.list_all().await?;

    let items = links
        .into_iter()
        .map(|link| {
            let short_url = state.link_service.short_url(&link.short_code);
            LinkResponse::new(link, short_url)
        })
        .collect();

    Ok(Json(items))
}

/// Deletes a short link.
///
/// # Endpoint
///
/// `DELETE {prefix}/{code}`
///
/// # Response
///
/// ```json
/// { "deleted": true }
/// ```
///
/// Deleting an unknown code answers `200` with `"deleted": false`.
pub async fn delete_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<DeleteResponse>, AppError> {
    let deleted = state.link_service.delete(&code).await?;

    Ok(Json(DeleteResponse { deleted }))
}
