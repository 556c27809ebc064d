use std::io::Write;
use std::sync::Arc;

use async_trait::async_trait;
use extract::{ExtractClient, ExtractError};
use objstore::{ObjectStore, StoreError};
use tts::{TtsClient, TtsError};

use super::feed::{FeedError, FeedService};
use crate::models::ConversionJob;

/// Source of readable article text
#[async_trait]
pub trait TextSource: Send + Sync {
    async fn extract(&self, url: &str) -> Result<String, ExtractError>;
}

#[async_trait]
impl TextSource for ExtractClient {
    async fn extract(&self, url: &str) -> Result<String, ExtractError> {
        ExtractClient::extract(self, url).await
    }
}

/// Text-to-speech engine
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, TtsError>;
}

#[async_trait]
impl SpeechSynthesizer for TtsClient {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, TtsError> {
        TtsClient::synthesize(self, text).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("text extraction failed: {0}")]
    Extract(#[from] ExtractError),

    #[error("speech synthesis failed: {0}")]
    Synthesis(#[from] TtsError),

    #[error("audio spooling failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("audio upload failed: {0}")]
    Store(#[from] StoreError),

    #[error("feed update failed: {0}")]
    Feed(#[from] FeedError),
}

/// The webpage-to-audio conversion pipeline.
///
/// Strictly sequential with a single attempt per step; an error aborts the
/// remaining steps and fails the job. Nothing written by earlier steps is
/// rolled back.
pub struct ConversionPipeline {
    source: Box<dyn TextSource>,
    synthesizer: Box<dyn SpeechSynthesizer>,
    store: Arc<dyn ObjectStore>,
    feed: FeedService,
}

impl ConversionPipeline {
    pub fn new(
        source: Box<dyn TextSource>,
        synthesizer: Box<dyn SpeechSynthesizer>,
        store: Arc<dyn ObjectStore>,
    ) -> Self {
        let feed = FeedService::new(Arc::clone(&store));
        Self {
            source,
            synthesizer,
            store,
            feed,
        }
    }

    pub async fn process(&self, job: &ConversionJob) -> Result<(), PipelineError> {
        tracing::info!("[{}] Converting {} to text", job.job_id, job.source_url);
        let text = self.source.extract(job.source_url.as_str()).await?;

        tracing::info!("[{}] Converting text to speech", job.job_id);
        let audio = self.synthesizer.synthesize(&text).await?;

        // Spool the audio through a scoped temp file; it is removed when the
        // guard drops, on the error path included.
        let mut spool = tempfile::NamedTempFile::new()?;
        spool.write_all(&audio)?;

        tracing::info!("[{}] Uploading audio to object storage", job.job_id);
        let bytes = std::fs::read(spool.path())?;
        self.store.put(&job.audio_key(), bytes, "audio/mpeg").await?;

        tracing::info!("[{}] Updating RSS feed", job.job_id);
        self.feed.publish(job).await?;

        tracing::info!("[{}] Conversion complete", job.job_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ConvertRequest;
    use crate::services::feed::RSS_FILE_KEY;
    use objstore::MemoryStore;
    use rss::Channel;
    use url::Url;

    struct StaticSource(&'static str);

    #[async_trait]
    impl TextSource for StaticSource {
        async fn extract(&self, _url: &str) -> Result<String, ExtractError> {
            Ok(self.0.to_string())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl TextSource for FailingSource {
        async fn extract(&self, _url: &str) -> Result<String, ExtractError> {
            Err(ExtractError::Status(503))
        }
    }

    struct StaticSynth(Vec<u8>);

    #[async_trait]
    impl SpeechSynthesizer for StaticSynth {
        async fn synthesize(&self, _text: &str) -> Result<Vec<u8>, TtsError> {
            Ok(self.0.clone())
        }
    }

    fn job_for(url: &str) -> ConversionJob {
        ConversionJob::from_request(ConvertRequest {
            url: Url::parse(url).unwrap(),
            title: None,
        })
    }

    #[tokio::test]
    async fn test_successful_conversion_uploads_audio_and_feed_item() {
        let store = Arc::new(MemoryStore::new("http://minio.local/audio-files"));
        let pipeline = ConversionPipeline::new(
            Box::new(StaticSource("Hello world")),
            Box::new(StaticSynth(vec![1, 2, 3])),
            store.clone(),
        );

        let job = job_for("https://example.com/my-article");
        pipeline.process(&job).await.unwrap();

        // Audio artifact stored under {job_id}.mp3 with the synthesizer's bytes
        assert_eq!(store.get(&job.audio_key()).await.unwrap(), vec![1, 2, 3]);
        assert_eq!(
            store.content_type(&job.audio_key()).await.as_deref(),
            Some("audio/mpeg")
        );

        // Feed carries the matching item
        let bytes = store.get(RSS_FILE_KEY).await.unwrap();
        let channel = Channel::read_from(&bytes[..]).unwrap();
        assert_eq!(channel.items().len(), 1);

        let item = &channel.items()[0];
        assert_eq!(item.title(), Some("My Article"));
        assert_eq!(
            item.description(),
            Some("Audio version of https://example.com/my-article")
        );
        assert_eq!(
            item.enclosure().unwrap().url(),
            format!("http://minio.local/audio-files/{}", job.audio_key())
        );
    }

    #[tokio::test]
    async fn test_extraction_failure_leaves_store_untouched() {
        let store = Arc::new(MemoryStore::new("http://minio.local/audio-files"));
        let pipeline = ConversionPipeline::new(
            Box::new(FailingSource),
            Box::new(StaticSynth(vec![1, 2, 3])),
            store.clone(),
        );

        let job = job_for("https://example.com/my-article");
        let err = pipeline.process(&job).await.unwrap_err();
        assert!(matches!(err, PipelineError::Extract(_)));

        // No audio uploaded, no feed written
        assert!(store.get(&job.audio_key()).await.is_err());
        assert!(store.get(RSS_FILE_KEY).await.is_err());
    }
}
