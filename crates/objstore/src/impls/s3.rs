use async_trait::async_trait;
use s3::creds::Credentials;
use s3::error::S3Error;
use s3::{Bucket, Region};

use crate::{ObjectStore, Result, StoreError};

/// S3-compatible object store (MinIO, AWS S3, and friends).
///
/// Uses path-style addressing so `{endpoint}/{bucket}/{key}` is both the API
/// path and the public retrieval URL.
pub struct S3Store {
    bucket: Box<Bucket>,
    endpoint: String,
    bucket_name: String,
}

impl S3Store {
    pub fn new(
        endpoint: impl Into<String>,
        access_key: &str,
        secret_key: &str,
        bucket_name: impl Into<String>,
        region: impl Into<String>,
    ) -> Result<Self> {
        let endpoint = endpoint.into();
        let bucket_name = bucket_name.into();

        let region = Region::Custom {
            region: region.into(),
            endpoint: endpoint.clone(),
        };
        let credentials = Credentials::new(Some(access_key), Some(secret_key), None, None, None)?;
        let bucket = Bucket::new(&bucket_name, region, credentials)?.with_path_style();

        Ok(Self {
            bucket,
            endpoint,
            bucket_name,
        })
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn get(&self, key: &str) -> Result<Vec<u8>> {
        match self.bucket.get_object(key).await {
            Ok(data) => Ok(data.bytes().to_vec()),
            Err(S3Error::HttpFailWithBody(404, _)) => Err(StoreError::NotFound(key.to_string())),
            Err(e) => Err(e.into()),
        }
    }

    async fn put(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> Result<()> {
        tracing::debug!(
            "Uploading {} bytes to {}/{}",
            bytes.len(),
            self.bucket_name,
            key
        );
        self.bucket
            .put_object_with_content_type(key, &bytes, content_type)
            .await?;
        Ok(())
    }

    fn base_url(&self) -> String {
        format!("{}/{}", self.endpoint, self.bucket_name)
    }
}
