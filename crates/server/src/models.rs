use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;
use utoipa::ToSchema;

use crate::utils;

/// Request body for `POST /convert`
#[derive(Debug, Deserialize, ToSchema)]
pub struct ConvertRequest {
    /// Webpage to convert
    pub url: Url,
    /// Episode title; derived from the URL's last path segment when omitted
    #[serde(default)]
    pub title: Option<String>,
}

/// Response body for `POST /convert`
#[derive(Debug, Serialize, ToSchema)]
pub struct ConvertResponse {
    pub status: String,
    pub job_id: String,
}

/// One webpage-to-audio conversion.
///
/// Ephemeral: the job exists only for the lifetime of the background task
/// that processes it, with no durable record of success or failure.
#[derive(Debug, Clone)]
pub struct ConversionJob {
    pub job_id: String,
    pub source_url: Url,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

impl ConversionJob {
    pub fn from_request(request: ConvertRequest) -> Self {
        let title = request
            .title
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| utils::derive_title(&request.url));

        Self {
            job_id: utils::generate_job_id(&request.url),
            source_url: request.url,
            title,
            created_at: Utc::now(),
        }
    }

    /// Object key of the audio artifact
    pub fn audio_key(&self) -> String {
        format!("{}.mp3", self.job_id)
    }
}
