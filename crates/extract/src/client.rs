use crate::{ExtractError, Result, models::ExtractResponse};

/// Full-text extraction API client (RapidAPI full-text-rss).
///
/// Extraction is fully delegated to the hosted service; this client only
/// carries the fixed request shape and the API-key headers.
pub struct ExtractClient {
    client: reqwest::Client,
    base_url: String,
    api_host: String,
    api_key: String,
}

impl ExtractClient {
    pub fn new(
        client: reqwest::Client,
        api_host: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        let api_host = api_host.into();
        Self {
            base_url: format!("https://{}", api_host),
            client,
            api_host,
            api_key: api_key.into(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Extract the readable plain text of a webpage.
    ///
    /// The fixed form parameters request sanitized output (`xss=1`), plain
    /// text (`content=text0`) and stripped links (`links=remove`).
    pub async fn extract(&self, url: &str) -> Result<String> {
        let endpoint = format!("{}/extract.php", self.base_url);
        tracing::debug!("Extracting text from {} via {}", url, endpoint);

        let response = self
            .client
            .post(&endpoint)
            .header("x-rapidapi-key", &self.api_key)
            .header("x-rapidapi-host", &self.api_host)
            .form(&[
                ("url", url),
                ("xss", "1"),
                ("lang", "2"),
                ("links", "remove"),
                ("content", "text0"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExtractError::Status(status.as_u16()));
        }

        let payload: ExtractResponse = response.json().await?;
        if payload.content.trim().is_empty() {
            return Err(ExtractError::EmptyContent(url.to_string()));
        }

        Ok(payload.content)
    }
}
