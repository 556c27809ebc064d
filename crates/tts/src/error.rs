#[derive(Debug, thiserror::Error)]
pub enum TtsError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("TTS endpoint returned HTTP {0}")]
    Status(u16),

    #[error("no text to synthesize")]
    EmptyText,
}
