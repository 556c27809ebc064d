use std::sync::Arc;

use extract::ExtractClient;
use objstore::{ObjectStore, S3Store};
use tts::TtsClient;

use crate::config::Config;
use crate::error::AppResult;
use crate::services::{ConversionHandle, ConversionPipeline, spawn_conversion_worker};

/// Speech language is fixed; the feed declares the same
const TTS_LANGUAGE: &str = "en";

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Arc<dyn ObjectStore>,
    pub conversions: ConversionHandle,
}

impl AppState {
    /// Wire up clients, the object store and the conversion worker.
    ///
    /// Everything is constructed here and injected; services never reach
    /// for process-wide singletons, so tests can substitute the store and
    /// the pipeline's collaborators.
    pub fn new(config: Config) -> AppResult<Self> {
        let http = reqwest::Client::new();

        let extractor = ExtractClient::new(
            http.clone(),
            config.rapid_api_host.clone(),
            config.rapid_api_key.clone(),
        );
        let synthesizer = TtsClient::new(http, TTS_LANGUAGE);

        let store: Arc<dyn ObjectStore> = Arc::new(S3Store::new(
            config.minio_endpoint.clone(),
            &config.minio_access_key,
            &config.minio_secret_key,
            config.minio_bucket.clone(),
            config.minio_region.clone(),
        )?);

        let pipeline = ConversionPipeline::new(
            Box::new(extractor),
            Box::new(synthesizer),
            Arc::clone(&store),
        );
        let conversions = spawn_conversion_worker(pipeline);

        Ok(Self {
            config: Arc::new(config),
            store,
            conversions,
        })
    }
}
