use async_trait::async_trait;

use crate::Result;

/// Unified object storage interface.
///
/// Implementations own a single bucket; keys are addressed relative to it.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Fetch an object's bytes.
    ///
    /// Returns [`StoreError::NotFound`](crate::StoreError::NotFound) when the
    /// key does not exist, so callers can distinguish a missing object from
    /// a backend failure.
    async fn get(&self, key: &str) -> Result<Vec<u8>>;

    /// Store an object with the given content type, overwriting any
    /// existing object under the same key.
    async fn put(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> Result<()>;

    /// Publicly reachable base URL of the bucket (`{endpoint}/{bucket}`).
    fn base_url(&self) -> String;

    /// Publicly reachable URL for a key within the bucket.
    fn public_url(&self, key: &str) -> String {
        format!("{}/{}", self.base_url(), key)
    }
}
