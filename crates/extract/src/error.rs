#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("extraction API returned HTTP {0}")]
    Status(u16),

    #[error("extraction API returned no content for {0}")]
    EmptyContent(String),
}
