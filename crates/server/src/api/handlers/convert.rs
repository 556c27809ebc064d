use axum::{Json, extract::State};

use crate::error::{AppError, AppResult};
use crate::models::{ConversionJob, ConvertRequest, ConvertResponse};
use crate::state::AppState;

/// Submit a webpage for conversion to audio
#[utoipa::path(
    post,
    path = "/convert",
    tag = "convert",
    request_body = ConvertRequest,
    responses(
        (status = 200, description = "Conversion queued", body = ConvertResponse),
        (status = 400, description = "URL scheme is not http(s)"),
        (status = 500, description = "Conversion queue is full")
    )
)]
pub async fn convert_webpage(
    State(state): State<AppState>,
    Json(payload): Json<ConvertRequest>,
) -> AppResult<Json<ConvertResponse>> {
    if !matches!(payload.url.scheme(), "http" | "https") {
        return Err(AppError::bad_request(format!(
            "unsupported URL scheme: {}",
            payload.url.scheme()
        )));
    }

    let job = ConversionJob::from_request(payload);
    let job_id = job.job_id.clone();
    tracing::info!("[{}] Queueing conversion of {}", job_id, job.source_url);

    state
        .conversions
        .enqueue(job)
        .map_err(|e| AppError::internal(e.to_string()))?;

    Ok(Json(ConvertResponse {
        status: "conversion queued".to_string(),
        job_id,
    }))
}
