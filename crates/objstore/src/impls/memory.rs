use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::{ObjectStore, Result, StoreError};

/// In-memory object store for tests and local development.
#[derive(Default)]
pub struct MemoryStore {
    base_url: String,
    objects: Mutex<HashMap<String, StoredObject>>,
}

struct StoredObject {
    content_type: String,
    bytes: Vec<u8>,
}

impl MemoryStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            objects: Mutex::new(HashMap::new()),
        }
    }

    /// Content type recorded for a key, if it exists.
    pub async fn content_type(&self, key: &str) -> Option<String> {
        self.objects
            .lock()
            .await
            .get(key)
            .map(|o| o.content_type.clone())
    }
}

#[async_trait]
impl ObjectStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Vec<u8>> {
        self.objects
            .lock()
            .await
            .get(key)
            .map(|o| o.bytes.clone())
            .ok_or_else(|| StoreError::NotFound(key.to_string()))
    }

    async fn put(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> Result<()> {
        self.objects.lock().await.insert(
            key.to_string(),
            StoredObject {
                content_type: content_type.to_string(),
                bytes,
            },
        );
        Ok(())
    }

    fn base_url(&self) -> String {
        self.base_url.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_missing_key_is_not_found() {
        let store = MemoryStore::new("http://minio.local/audio-files");
        let err = store.get("missing.mp3").await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_put_then_get_round_trip() {
        let store = MemoryStore::new("http://minio.local/audio-files");
        store
            .put("a.mp3", vec![1, 2, 3], "audio/mpeg")
            .await
            .unwrap();

        assert_eq!(store.get("a.mp3").await.unwrap(), vec![1, 2, 3]);
        assert_eq!(
            store.content_type("a.mp3").await.as_deref(),
            Some("audio/mpeg")
        );
    }

    #[tokio::test]
    async fn test_public_url_joins_base_and_key() {
        let store = MemoryStore::new("http://minio.local/audio-files");
        assert_eq!(
            store.public_url("123-4.mp3"),
            "http://minio.local/audio-files/123-4.mp3"
        );
    }
}
