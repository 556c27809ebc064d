use tokio::sync::mpsc;

use super::messages::ConversionMessage;
use crate::models::ConversionJob;
use crate::services::pipeline::ConversionPipeline;

/// Conversion actor main loop
pub(super) struct ConversionActor {
    pipeline: ConversionPipeline,
    receiver: mpsc::Receiver<ConversionMessage>,
}

impl ConversionActor {
    pub(super) fn new(
        pipeline: ConversionPipeline,
        receiver: mpsc::Receiver<ConversionMessage>,
    ) -> Self {
        Self { pipeline, receiver }
    }

    pub(super) async fn run(mut self) {
        tracing::info!("Conversion worker started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ConversionMessage::Convert(job) => self.handle_convert(job).await,
                ConversionMessage::Shutdown => break,
            }
        }

        tracing::info!("Conversion worker stopped");
    }

    async fn handle_convert(&self, job: ConversionJob) {
        // A failure ends the job here: the HTTP response went out at enqueue
        // time, so there is no caller left to surface it to.
        if let Err(e) = self.pipeline.process(&job).await {
            tracing::error!(
                "[{}] Conversion of {} failed: {}",
                job.job_id,
                job.source_url,
                e
            );
        }
    }
}
