use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;

use crate::error::AppResult;
use crate::services::RSS_FILE_KEY;
use crate::state::AppState;

/// Return the published RSS feed
#[utoipa::path(
    get,
    path = "/rss",
    tag = "feed",
    responses(
        (status = 200, description = "RSS feed document", content_type = "application/rss+xml"),
        (status = 404, description = "No feed has been published yet"),
        (status = 500, description = "Feed could not be read from storage")
    )
)]
pub async fn get_rss(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let body = state.store.get(RSS_FILE_KEY).await?;
    Ok(([(header::CONTENT_TYPE, "application/rss+xml")], body))
}
