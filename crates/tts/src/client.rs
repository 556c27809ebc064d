use crate::{Result, TtsError, chunk::split_text};

const BASE_URL: &str = "https://translate.google.com";

/// Maximum characters the endpoint accepts per request
const MAX_CHARS: usize = 100;

/// Speech synthesis client backed by the Google Translate TTS endpoint.
///
/// Long text is split into chunks and synthesized request by request; the
/// resulting MP3 payloads are concatenated, which is valid for MPEG frames.
pub struct TtsClient {
    client: reqwest::Client,
    base_url: String,
    lang: String,
}

impl TtsClient {
    pub fn new(client: reqwest::Client, lang: impl Into<String>) -> Self {
        Self {
            client,
            base_url: BASE_URL.to_string(),
            lang: lang.into(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Synthesize speech for the given text, returning MP3 bytes.
    pub async fn synthesize(&self, text: &str) -> Result<Vec<u8>> {
        let chunks = split_text(text, MAX_CHARS);
        if chunks.is_empty() {
            return Err(TtsError::EmptyText);
        }

        tracing::debug!("Synthesizing {} chunk(s) of speech", chunks.len());

        let mut audio = Vec::new();
        let total = chunks.len();
        for (idx, chunk) in chunks.iter().enumerate() {
            let bytes = self.fetch_chunk(chunk, idx, total).await?;
            audio.extend_from_slice(&bytes);
        }

        Ok(audio)
    }

    async fn fetch_chunk(&self, chunk: &str, idx: usize, total: usize) -> Result<Vec<u8>> {
        let endpoint = format!("{}/translate_tts", self.base_url);
        let total = total.to_string();
        let idx = idx.to_string();
        let textlen = chunk.chars().count().to_string();

        let response = self
            .client
            .get(&endpoint)
            .query(&[
                ("ie", "UTF-8"),
                ("q", chunk),
                ("tl", self.lang.as_str()),
                ("client", "tw-ob"),
                ("total", total.as_str()),
                ("idx", idx.as_str()),
                ("textlen", textlen.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TtsError::Status(status.as_u16()));
        }

        Ok(response.bytes().await?.to_vec())
    }
}
