#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The requested key does not exist in the bucket
    #[error("object not found: {0}")]
    NotFound(String),

    #[error("invalid storage credentials: {0}")]
    Credentials(#[from] s3::creds::error::CredentialsError),

    #[error("storage backend error: {0}")]
    Backend(#[from] s3::error::S3Error),
}
