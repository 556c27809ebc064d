use std::sync::Arc;

use chrono::Utc;
use objstore::{ObjectStore, StoreError};
use rss::{Channel, ChannelBuilder, EnclosureBuilder, Item, ItemBuilder};

use crate::models::ConversionJob;

/// Object key of the feed document within the bucket
pub const RSS_FILE_KEY: &str = "rss.xml";

const FEED_TITLE: &str = "Web Articles Audio Feed";
const FEED_DESCRIPTION: &str = "Text-to-speech versions of web articles";
const FEED_LANGUAGE: &str = "en";

#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}

/// Builds and republishes the podcast feed.
///
/// The stored document is parsed back in on every update, so prior items
/// survive; new items are prepended (most recent first). All updates run on
/// the single conversion worker, which serializes the read-modify-write
/// cycle on the shared document.
pub struct FeedService {
    store: Arc<dyn ObjectStore>,
}

impl FeedService {
    pub fn new(store: Arc<dyn ObjectStore>) -> Self {
        Self { store }
    }

    /// Append a feed item for a converted job and persist the document.
    pub async fn publish(&self, job: &ConversionJob) -> Result<(), FeedError> {
        let mut channel = self.load().await?;
        let audio_url = self.store.public_url(&job.audio_key());

        let enclosure = EnclosureBuilder::default()
            .url(audio_url.clone())
            // Actual byte length is not tracked
            .length("0".to_string())
            .mime_type("audio/mpeg".to_string())
            .build();

        let item = ItemBuilder::default()
            .title(Some(job.title.clone()))
            .link(Some(audio_url))
            .description(Some(format!("Audio version of {}", job.source_url)))
            .pub_date(Some(Utc::now().to_rfc2822()))
            .enclosure(Some(enclosure))
            .build();

        let mut items: Vec<Item> = channel.items().to_vec();
        items.insert(0, item);
        channel.set_items(items);

        self.store
            .put(
                RSS_FILE_KEY,
                channel.to_string().into_bytes(),
                "application/rss+xml",
            )
            .await?;

        tracing::info!("RSS feed updated ({} items)", channel.items().len());
        Ok(())
    }

    /// Load the stored feed, or start a fresh channel when none exists yet.
    async fn load(&self) -> Result<Channel, FeedError> {
        match self.store.get(RSS_FILE_KEY).await {
            Ok(bytes) => match Channel::read_from(&bytes[..]) {
                Ok(channel) => Ok(channel),
                Err(e) => {
                    tracing::warn!("Stored feed is unreadable, starting fresh: {}", e);
                    Ok(self.empty_channel())
                }
            },
            Err(StoreError::NotFound(_)) => Ok(self.empty_channel()),
            Err(e) => Err(e.into()),
        }
    }

    fn empty_channel(&self) -> Channel {
        ChannelBuilder::default()
            .title(FEED_TITLE)
            .link(self.store.base_url())
            .description(FEED_DESCRIPTION)
            .language(Some(FEED_LANGUAGE.to_string()))
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ConversionJob, ConvertRequest};
    use objstore::MemoryStore;
    use url::Url;

    fn job_for(url: &str) -> ConversionJob {
        ConversionJob::from_request(ConvertRequest {
            url: Url::parse(url).unwrap(),
            title: None,
        })
    }

    fn store() -> Arc<MemoryStore> {
        Arc::new(MemoryStore::new("http://minio.local/audio-files"))
    }

    #[tokio::test]
    async fn test_publish_writes_item_with_enclosure() {
        let store = store();
        let service = FeedService::new(store.clone());
        let job = job_for("https://example.com/my-article");

        service.publish(&job).await.unwrap();

        let bytes = store.get(RSS_FILE_KEY).await.unwrap();
        let channel = Channel::read_from(&bytes[..]).unwrap();
        assert_eq!(channel.title(), FEED_TITLE);
        assert_eq!(channel.items().len(), 1);

        let item = &channel.items()[0];
        assert_eq!(item.title(), Some("My Article"));
        assert_eq!(
            item.description(),
            Some("Audio version of https://example.com/my-article")
        );

        let enclosure = item.enclosure().expect("item should carry an enclosure");
        assert_eq!(
            enclosure.url(),
            format!("http://minio.local/audio-files/{}.mp3", job.job_id)
        );
        assert_eq!(enclosure.mime_type(), "audio/mpeg");
        assert_eq!(enclosure.length(), "0");

        assert_eq!(
            store.content_type(RSS_FILE_KEY).await.as_deref(),
            Some("application/rss+xml")
        );
    }

    #[tokio::test]
    async fn test_publish_accumulates_items_newest_first() {
        let store = store();
        let service = FeedService::new(store.clone());

        service
            .publish(&job_for("https://example.com/first-post"))
            .await
            .unwrap();
        service
            .publish(&job_for("https://example.com/second-post"))
            .await
            .unwrap();

        let bytes = store.get(RSS_FILE_KEY).await.unwrap();
        let channel = Channel::read_from(&bytes[..]).unwrap();

        // Both items preserved, most recent first
        assert_eq!(channel.items().len(), 2);
        assert_eq!(channel.items()[0].title(), Some("Second Post"));
        assert_eq!(channel.items()[1].title(), Some("First Post"));
    }

    #[tokio::test]
    async fn test_unreadable_stored_feed_starts_fresh() {
        let store = store();
        store
            .put(RSS_FILE_KEY, b"not xml at all".to_vec(), "application/rss+xml")
            .await
            .unwrap();

        let service = FeedService::new(store.clone());
        service
            .publish(&job_for("https://example.com/my-article"))
            .await
            .unwrap();

        let bytes = store.get(RSS_FILE_KEY).await.unwrap();
        let channel = Channel::read_from(&bytes[..]).unwrap();
        assert_eq!(channel.items().len(), 1);
    }
}
