use std::env;

const DEFAULT_PORT: u16 = 9393;

/// Runtime configuration, environment-supplied.
///
/// Extraction API credentials are required; object storage settings default
/// to a local MinIO-style deployment.
#[derive(Debug, Clone)]
pub struct Config {
    pub rapid_api_host: String,
    pub rapid_api_key: String,
    pub minio_endpoint: String,
    pub minio_access_key: String,
    pub minio_secret_key: String,
    pub minio_bucket: String,
    pub minio_region: String,
    pub port: u16,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),

    #[error("invalid PORT value: {0}")]
    InvalidPort(String),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port_raw = env::var("PORT").unwrap_or_else(|_| DEFAULT_PORT.to_string());
        let port = port_raw
            .parse()
            .map_err(|_| ConfigError::InvalidPort(port_raw))?;

        Ok(Self {
            rapid_api_host: require("RAPID_API_HOST")?,
            rapid_api_key: require("RAPID_API_KEY")?,
            minio_endpoint: var_or("MINIO_ENDPOINT", "minio.local"),
            minio_access_key: var_or("MINIO_ACCESS_KEY", "minioadmin"),
            minio_secret_key: var_or("MINIO_SECRET_KEY", "minioadmin"),
            minio_bucket: var_or("MINIO_BUCKET", "audio-files"),
            minio_region: var_or("MINIO_REGION", "us-east-1"),
            port,
        })
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::MissingVar(name))
}

fn var_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}
